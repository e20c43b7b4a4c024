//! Configuration type definitions.

use crate::constants::download::{CONNECT_TIMEOUT_SECS, TIMEOUT_SECS};
use crate::constants::models::{MOBILENETV2_NAME, MOBILENETV2_URL, RESNET50V2_NAME, RESNET50V2_URL};
use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_THRESHOLD};
use crate::error::{Error, Result};
use crate::model::{DownloadSettings, ModelSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classifiers, in display order.
    pub models: Vec<ModelEntry>,

    /// Default classification settings.
    pub defaults: DefaultsConfig,

    /// Download client settings.
    pub download: DownloadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: vec![
                ModelEntry::remote(MOBILENETV2_NAME, MOBILENETV2_URL),
                ModelEntry::remote(RESNET50V2_NAME, RESNET50V2_URL),
            ],
            defaults: DefaultsConfig::default(),
            download: DownloadConfig::default(),
        }
    }
}

impl Config {
    /// Model sources for every configured entry.
    pub fn model_sources(&self) -> Result<Vec<ModelSource>> {
        self.models.iter().map(ModelEntry::source).collect()
    }
}

/// Configuration for a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Display name.
    pub name: String,

    /// Remote artifact URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Local artifact path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Expected SHA-256 of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl ModelEntry {
    /// Entry for a remote model.
    pub fn remote(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: Some(url.to_string()),
            path: None,
            sha256: None,
        }
    }

    /// Resolve the entry to a model source.
    ///
    /// Exactly one of `url` and `path` must be set.
    pub fn source(&self) -> Result<ModelSource> {
        let mut source = match (&self.url, &self.path) {
            (Some(url), None) => ModelSource::url(&self.name, url),
            (None, Some(path)) => ModelSource::path(&self.name, path.clone()),
            (Some(_), Some(_)) => {
                return Err(Error::ConfigValidation {
                    message: format!("model '{}' sets both url and path", self.name),
                });
            }
            (None, None) => {
                return Err(Error::ConfigValidation {
                    message: format!("model '{}' needs a url or a path", self.name),
                });
            }
        };
        source.sha256.clone_from(&self.sha256);
        Ok(source)
    }
}

/// Default classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Minimum raw score for a recognized prediction.
    pub threshold: f32,

    /// Directory reference images are resolved against.
    pub assets_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

/// Download client settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

impl DownloadConfig {
    /// Client settings, with or without a progress bar.
    pub const fn settings(&self, progress: bool) -> DownloadSettings {
        DownloadSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            progress,
        }
    }
}
