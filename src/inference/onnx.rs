//! ONNX Runtime session wrapper.

use super::LeafModel;
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use crate::input::ImageTensor;
use crate::taxonomy;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Tensor;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Initialize the ONNX Runtime environment.
///
/// Must be called once before any model is loaded.
pub fn init_runtime() -> Result<()> {
    ort::init()
        .with_name(APP_NAME)
        .commit()
        .map_err(|e| Error::RuntimeInitialization {
            reason: e.to_string(),
        })?;
    Ok(())
}

/// A classifier backed by an ONNX Runtime session.
#[derive(Debug)]
pub struct OnnxModel {
    name: String,
    // Session::run needs exclusive access.
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxModel {
    /// Build a session from a model file and check its output width.
    ///
    /// A probe inference on a zero tensor verifies that the model emits one
    /// score per taxonomy label. A model that fails the probe is rejected.
    pub fn load(path: &Path, name: &str) -> Result<Self> {
        debug!("Building session for {} from {}", name, path.display());

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| Error::ModelBuild {
                reason: e.to_string(),
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| Error::ModelBuild {
                reason: "model has no inputs".to_string(),
            })?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| Error::ModelBuild {
                reason: "model has no outputs".to_string(),
            })?;

        let model = Self {
            name: name.to_string(),
            session: Mutex::new(session),
            input_name,
            output_name,
        };

        let probe = model.infer(&ImageTensor::zeros())?;
        taxonomy::verify_label_table(probe.len())?;

        info!(
            "Loaded {} (input '{}', output '{}', {} classes)",
            model.name,
            model.input_name,
            model.output_name,
            probe.len()
        );

        Ok(model)
    }
}

impl LeafModel for OnnxModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn infer(&self, tensor: &ImageTensor) -> Result<Vec<f32>> {
        let input = Tensor::from_array(tensor.to_array()).map_err(|e| Error::Inference {
            reason: e.to_string(),
        })?;

        let mut session = self.session.lock().map_err(|_| Error::Inference {
            reason: format!("session lock for {} is poisoned", self.name),
        })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let (_, scores) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        Ok(scores.to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_non_onnx_file() {
        let file = tempfile::Builder::new().suffix(".onnx").tempfile().unwrap();
        std::fs::write(file.path(), b"<html>Not Found</html>").unwrap();

        let result = OnnxModel::load(file.path(), "MobileNetV2");
        assert!(matches!(result, Err(Error::ModelBuild { .. })));
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let result = OnnxModel::load(Path::new("/nonexistent/model.onnx"), "ResNet50V2");
        assert!(matches!(result, Err(Error::ModelBuild { .. })));
    }
}
