//! Human-readable result panels.

use crate::constants::confidence::DECIMAL_PLACES;
use crate::pipeline::{ModelResult, Report};
use crate::taxonomy::{PLANTS, PlantRecord, ReferenceImage};
use std::fmt::Write;

/// Message shown in a panel whose prediction fell below the threshold.
pub const UNRECOGNIZED_MESSAGE: &str = "Sorry, the system cannot recognize this plant.";

/// Render one panel per model.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Classification of {}", report.file_name);

    for result in &report.results {
        out.push('\n');
        render_panel(&mut out, result);
    }

    out
}

fn render_panel(out: &mut String, result: &ModelResult) {
    let prediction = &result.prediction;
    let _ = writeln!(out, "=== {} ===", result.model);

    match result.record {
        Some(record) => {
            render_record(out, record);
            let _ = writeln!(
                out,
                "Confidence: {:.prec$}%",
                prediction.confidence_percent(),
                prec = DECIMAL_PLACES
            );
            match &result.reference_image {
                Some(ReferenceImage::Found(path)) => {
                    let _ = writeln!(out, "Reference image: {}", path.display());
                }
                Some(ReferenceImage::Missing(_)) | None => {
                    let _ = writeln!(out, "Tree image for {} not found.", record.label);
                }
            }
        }
        None => {
            let _ = writeln!(out, "{UNRECOGNIZED_MESSAGE}");
            let _ = writeln!(
                out,
                "Best guess confidence: {:.prec$}%",
                prediction.confidence_percent(),
                prec = DECIMAL_PLACES
            );
        }
    }

    let _ = writeln!(out, "Inference time: {:.3} s", prediction.elapsed_secs());
}

/// Write the taxonomy block shared by result panels and `species`.
fn render_record(out: &mut String, record: &PlantRecord) {
    let taxonomy = &record.taxonomy;
    let _ = writeln!(out, "Name: {}", record.display_names());
    let _ = writeln!(out, "Scientific name: {}", record.scientific_name);
    let _ = writeln!(out, "Kingdom: {}", taxonomy.kingdom);
    let _ = writeln!(out, "Clade: {}", taxonomy.clades.join(", "));
    let _ = writeln!(out, "Order: {}", taxonomy.order);
    let _ = writeln!(out, "Family: {}", taxonomy.family);
    let _ = writeln!(out, "Genus: {}", taxonomy.genus);
    let _ = writeln!(out, "Species: {}", taxonomy.species);
}

/// Full taxonomy record for one label.
pub fn render_species(record: &PlantRecord) -> String {
    let mut out = String::new();
    render_record(&mut out, record);
    let _ = writeln!(out, "Reference image: {}", record.image_path);
    out
}

/// One line per known label, in model output order.
pub fn render_species_list() -> String {
    let width = PLANTS.iter().map(|p| p.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for plant in &PLANTS {
        let _ = writeln!(out, "{:<width$}  {}", plant.label, plant.scientific_name);
    }
    out
}
