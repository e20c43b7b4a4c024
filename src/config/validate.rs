//! Configuration validation.

use crate::config::Config;
use crate::constants::confidence;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_threshold(config.defaults.threshold)?;
    validate_models(config)?;
    validate_download(config)?;
    Ok(())
}

/// Check a threshold lies within `[0, 1]`.
pub fn validate_threshold(threshold: f32) -> Result<()> {
    if !(confidence::MIN..=confidence::MAX).contains(&threshold) {
        return Err(Error::ConfigValidation {
            message: format!(
                "threshold must be between {} and {}, got {}",
                confidence::MIN,
                confidence::MAX,
                threshold
            ),
        });
    }
    Ok(())
}

fn validate_models(config: &Config) -> Result<()> {
    if config.models.is_empty() {
        return Err(Error::ConfigValidation {
            message: "at least one model must be configured".to_string(),
        });
    }

    let mut names = HashSet::new();
    for model in &config.models {
        if model.name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "model name must not be empty".to_string(),
            });
        }
        if !names.insert(model.name.as_str()) {
            return Err(Error::ConfigValidation {
                message: format!("duplicate model name '{}'", model.name),
            });
        }
        model.source()?;
    }

    Ok(())
}

fn validate_download(config: &Config) -> Result<()> {
    let download = &config.download;
    if download.connect_timeout_secs == 0 || download.timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            message: "download timeouts must be at least 1 second".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ModelEntry;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_threshold_range() {
        let mut config = Config::default();
        config.defaults.threshold = 1.5;
        assert!(validate_config(&config).is_err());

        config.defaults.threshold = -0.1;
        assert!(validate_config(&config).is_err());

        config.defaults.threshold = f32::NAN;
        assert!(validate_config(&config).is_err());

        config.defaults.threshold = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_requires_models() {
        let mut config = Config::default();
        config.models.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_names() {
        let mut config = Config::default();
        config
            .models
            .push(ModelEntry::remote("MobileNetV2", "https://example.com/other.onnx"));
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_model_without_location() {
        let mut config = Config::default();
        config.models[0].url = None;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.download.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
