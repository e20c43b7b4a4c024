//! Herbal-plant taxonomy lookup.
//!
//! The table is static and immutable. [`verify_label_table`] is the startup
//! check that a model's output width lines up with it.

mod table;

pub use table::PLANTS;

use crate::constants::UNRECOGNIZED_LABEL;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Taxonomic ranks of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    /// Kingdom.
    pub kingdom: &'static str,
    /// Clades, outermost first.
    pub clades: &'static [&'static str],
    /// Order (ordo).
    pub order: &'static str,
    /// Family (famili).
    pub family: &'static str,
    /// Genus.
    pub genus: &'static str,
    /// Species (spesies).
    pub species: &'static str,
}

/// Descriptive metadata for one classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlantRecord {
    /// Classifier label (upper case).
    pub label: &'static str,
    /// Scientific (Latin) name.
    pub scientific_name: &'static str,
    /// Regional names.
    pub synonyms: &'static [&'static str],
    /// Taxonomic ranks.
    pub taxonomy: Taxonomy,
    /// Reference tree image, relative to the assets directory.
    pub image_path: &'static str,
}

impl PlantRecord {
    /// Label followed by every synonym, comma separated.
    pub fn display_names(&self) -> String {
        std::iter::once(self.label)
            .chain(self.synonyms.iter().copied())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Look up the taxonomy record for a label.
///
/// Total over the known labels; anything else, including the unrecognized
/// sentinel, is [`Error::SpeciesNotFound`].
pub fn lookup(label: &str) -> Result<&'static PlantRecord> {
    PLANTS
        .iter()
        .find(|p| p.label == label)
        .ok_or_else(|| Error::SpeciesNotFound {
            label: label.to_string(),
        })
}

/// Record for a model output index, if the index is in range.
pub fn by_index(index: usize) -> Option<&'static PlantRecord> {
    PLANTS.get(index)
}

/// Number of labels the classifiers distinguish.
pub const fn label_count() -> usize {
    PLANTS.len()
}

/// Check that every model output index maps to exactly one table entry.
///
/// Fails if the output width differs from the table size, or if the table
/// itself has duplicate or reserved labels.
pub fn verify_label_table(output_width: usize) -> Result<()> {
    if output_width != PLANTS.len() {
        return Err(Error::LabelTableMismatch {
            expected: PLANTS.len(),
            actual: output_width,
        });
    }

    let mut seen = HashSet::with_capacity(PLANTS.len());
    for plant in &PLANTS {
        if plant.label == UNRECOGNIZED_LABEL {
            return Err(Error::Internal {
                message: format!("label table uses the reserved label '{UNRECOGNIZED_LABEL}'"),
            });
        }
        if !seen.insert(plant.label) {
            return Err(Error::Internal {
                message: format!("duplicate label '{}' in taxonomy table", plant.label),
            });
        }
    }

    Ok(())
}

/// Whether a reference image is available locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImage {
    /// Image exists at this path.
    Found(PathBuf),
    /// Image is missing; display a notice instead.
    Missing(PathBuf),
}

impl ReferenceImage {
    /// Path that was checked.
    pub fn path(&self) -> &Path {
        match self {
            Self::Found(path) | Self::Missing(path) => path,
        }
    }
}

/// Resolve a record's reference image against the assets directory.
pub fn reference_image(record: &PlantRecord, assets_dir: &Path) -> ReferenceImage {
    let path = assets_dir.join(record.image_path);
    if path.is_file() {
        ReferenceImage::Found(path)
    } else {
        ReferenceImage::Missing(path)
    }
}
