//! Thresholded classification of a preprocessed image.

use super::LeafModel;
use crate::constants::UNRECOGNIZED_LABEL;
use crate::error::{Error, Result};
use crate::input::ImageTensor;
use crate::taxonomy::{self, PlantRecord};
use std::time::{Duration, Instant};
use tracing::debug;

/// What a single model concluded about an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Best class cleared the threshold.
    Recognized(&'static PlantRecord),
    /// Best class fell below the threshold.
    Unrecognized,
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Thresholded outcome.
    pub outcome: Outcome,
    /// Index of the highest-scoring class, regardless of threshold.
    pub index: usize,
    /// Highest raw score, in `[0, 1]`.
    pub confidence: f32,
    /// Wall-clock time of the inference call.
    pub elapsed: Duration,
}

impl Prediction {
    /// Label to display: the plant label or the unrecognized sentinel.
    pub fn label(&self) -> &'static str {
        match self.outcome {
            Outcome::Recognized(record) => record.label,
            Outcome::Unrecognized => UNRECOGNIZED_LABEL,
        }
    }

    /// Confidence scaled to a percentage.
    pub fn confidence_percent(&self) -> f64 {
        f64::from(self.confidence) * 100.0
    }

    /// Inference time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether the prediction cleared the threshold.
    pub const fn is_recognized(&self) -> bool {
        matches!(self.outcome, Outcome::Recognized(_))
    }
}

/// Run `model` on `tensor` and apply the confidence threshold.
///
/// The threshold is compared against the raw score in `[0, 1]`: a score
/// strictly below it yields [`Outcome::Unrecognized`].
pub fn classify<M: LeafModel + ?Sized>(
    model: &M,
    tensor: &ImageTensor,
    threshold: f32,
) -> Result<Prediction> {
    let start = Instant::now();
    let scores = model.infer(tensor)?;
    let elapsed = start.elapsed();

    if scores.len() != taxonomy::label_count() {
        return Err(Error::LabelTableMismatch {
            expected: taxonomy::label_count(),
            actual: scores.len(),
        });
    }

    let (index, confidence) = argmax(&scores).ok_or_else(|| Error::Inference {
        reason: format!("model {} produced no usable scores", model.name()),
    })?;

    let outcome = if confidence < threshold {
        Outcome::Unrecognized
    } else {
        let record = taxonomy::by_index(index).ok_or(Error::LabelTableMismatch {
            expected: taxonomy::label_count(),
            actual: index + 1,
        })?;
        Outcome::Recognized(record)
    };

    debug!(
        "{}: best index {} ({:.4}) in {:.3}s -> {}",
        model.name(),
        index,
        confidence,
        elapsed.as_secs_f64(),
        match outcome {
            Outcome::Recognized(record) => record.label,
            Outcome::Unrecognized => UNRECOGNIZED_LABEL,
        }
    );

    Ok(Prediction {
        outcome,
        index,
        confidence,
        elapsed,
    })
}

/// Index and value of the largest score; the first index wins ties.
///
/// NaN scores are skipped. Returns `None` if nothing comparable remains.
fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if v <= b => best,
            _ => Some((i, v)),
        })
}
