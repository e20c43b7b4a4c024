//! Single-image classification request.

use crate::error::{Error, Result};
use crate::inference::{LeafModel, Outcome, Prediction, classify};
use crate::input::preprocess;
use crate::taxonomy::{self, PlantRecord, ReferenceImage};
use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One model's verdict on an image.
#[derive(Debug, Clone)]
pub struct ModelResult {
    /// Display name of the model.
    pub model: String,
    /// Raw prediction.
    pub prediction: Prediction,
    /// Taxonomy record, if the prediction was recognized.
    pub record: Option<&'static PlantRecord>,
    /// Reference image lookup, if the prediction was recognized.
    pub reference_image: Option<ReferenceImage>,
}

/// Result of classifying one image with every loaded model.
#[derive(Debug, Clone)]
pub struct Report {
    /// Name of the classified file.
    pub file_name: String,
    /// Threshold the predictions were judged against.
    pub threshold: f32,
    /// One entry per model, in model order.
    pub results: Vec<ModelResult>,
}

/// Chains preprocess, inference and lookup for a single decoded image.
pub struct ClassificationService {
    models: Vec<Arc<dyn LeafModel>>,
    threshold: f32,
    assets_dir: PathBuf,
}

impl ClassificationService {
    /// Build a service over already-loaded models.
    pub fn new(
        models: Vec<Arc<dyn LeafModel>>,
        threshold: f32,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if models.is_empty() {
            return Err(Error::ModelsUnavailable { models: Vec::new() });
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::ConfigValidation {
                message: format!("threshold must be between 0 and 1, got {threshold}"),
            });
        }

        Ok(Self {
            models,
            threshold,
            assets_dir: assets_dir.into(),
        })
    }

    /// Classify an already-decoded image with every model, in order.
    pub fn classify_image(&self, file_name: &str, image: &RgbImage) -> Result<Report> {
        let tensor = preprocess(image);
        debug!("Preprocessed {} to {:?}", file_name, tensor.shape());

        let mut results = Vec::with_capacity(self.models.len());
        for model in &self.models {
            let prediction = classify(model.as_ref(), &tensor, self.threshold)?;

            let (record, reference_image) = match prediction.outcome {
                Outcome::Recognized(record) => {
                    let reference = taxonomy::reference_image(record, &self.assets_dir);
                    if let ReferenceImage::Missing(path) = &reference {
                        warn!("Reference image not found: {}", path.display());
                    }
                    (Some(record), Some(reference))
                }
                Outcome::Unrecognized => (None, None),
            };

            info!(
                "{}: {} ({:.2}%) in {:.3}s",
                model.name(),
                prediction.label(),
                prediction.confidence_percent(),
                prediction.elapsed_secs()
            );

            results.push(ModelResult {
                model: model.name().to_string(),
                prediction,
                record,
                reference_image,
            });
        }

        Ok(Report {
            file_name: file_name.to_string(),
            threshold: self.threshold,
            results,
        })
    }
}
