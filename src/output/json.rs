//! JSON report output.

use crate::error::{Error, ErrorKind, Result};
use crate::pipeline::{ModelResult, Report};
use crate::taxonomy::{PlantRecord, ReferenceImage};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON result document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Classified file name.
    pub source_file: &'a str,
    /// Classification timestamp.
    pub classified_at: DateTime<Utc>,
    /// Threshold applied to the raw scores.
    pub threshold: f32,
    /// One entry per model.
    pub results: Vec<JsonModelResult<'a>>,
}

/// One model's result in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonModelResult<'a> {
    /// Model display name.
    pub model: &'a str,
    /// Predicted label or the unrecognized sentinel.
    pub label: &'static str,
    /// Whether the prediction cleared the threshold.
    pub recognized: bool,
    /// Confidence percentage, rounded to two decimals.
    pub confidence_percent: f64,
    /// Inference time in seconds.
    pub elapsed_seconds: f64,
    /// Taxonomy record, when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<&'static PlantRecord>,
    /// Resolved reference image path, when present on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
}

/// JSON error document.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Request-level error kind.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl<'a> JsonReport<'a> {
    /// Build the JSON view of a report, stamped with the current time.
    pub fn from_report(report: &'a Report) -> Self {
        Self {
            source_file: &report.file_name,
            classified_at: Utc::now(),
            threshold: report.threshold,
            results: report.results.iter().map(JsonModelResult::from_result).collect(),
        }
    }
}

impl<'a> JsonModelResult<'a> {
    fn from_result(result: &'a ModelResult) -> Self {
        let prediction = &result.prediction;
        Self {
            model: &result.model,
            label: prediction.label(),
            recognized: prediction.is_recognized(),
            confidence_percent: (prediction.confidence_percent() * 100.0).round() / 100.0,
            elapsed_seconds: prediction.elapsed_secs(),
            plant: result.record,
            reference_image: match &result.reference_image {
                Some(ReferenceImage::Found(path)) => Some(path.display().to_string()),
                Some(ReferenceImage::Missing(_)) | None => None,
            },
        }
    }
}

/// Serialize a report as pretty-printed JSON.
pub fn render_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_report(report))
        .map_err(|e| Error::ReportSerialize { source: e })
}

/// Serialize an error as JSON.
pub fn render_error(error: &Error) -> Result<String> {
    let document = JsonError {
        kind: error.kind(),
        message: error.to_string(),
    };
    serde_json::to_string_pretty(&document).map_err(|e| Error::ReportSerialize { source: e })
}
