//! Inference for leaf classification.

mod onnx;
mod predictor;

pub use onnx::{OnnxModel, init_runtime};
pub use predictor::{Outcome, Prediction, classify};

use crate::error::Result;
use crate::input::ImageTensor;

/// A loaded classifier that maps an image tensor to per-class scores.
///
/// Implementations must be safe to share across threads; a single model is
/// reused for every request.
pub trait LeafModel: Send + Sync {
    /// Display name, e.g. `MobileNetV2`.
    fn name(&self) -> &str;

    /// Run the model on one preprocessed image.
    ///
    /// Returns one score per class in model output order.
    fn infer(&self, tensor: &ImageTensor) -> Result<Vec<f32>>;
}

/// Model that returns the same scores for every input.
#[cfg(test)]
pub(crate) struct FixedScores {
    name: String,
    scores: Vec<f32>,
}

#[cfg(test)]
impl FixedScores {
    pub(crate) fn new(name: &str, scores: Vec<f32>) -> Self {
        Self {
            name: name.to_string(),
            scores,
        }
    }
}

#[cfg(test)]
impl LeafModel for FixedScores {
    fn name(&self) -> &str {
        &self.name
    }

    fn infer(&self, _tensor: &ImageTensor) -> Result<Vec<f32>> {
        Ok(self.scores.clone())
    }
}
