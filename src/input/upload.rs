//! Upload validation and decoding.

use crate::constants::input::ALLOWED_EXTENSIONS;
use crate::error::{Error, Result};
use image::RgbImage;
use std::path::Path;
use tracing::debug;

/// An uploaded file: its name and raw contents.
#[derive(Debug, Clone)]
pub struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

impl Upload {
    /// Wrap raw bytes received under `file_name`.
    ///
    /// The extension is checked here, before anything else looks at the bytes.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        validate_extension(&file_name)?;
        Ok(Self { file_name, bytes })
    }

    /// Read an upload from disk.
    ///
    /// The extension is validated before the file is opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |n| n.to_string_lossy().into_owned(),
        );
        validate_extension(&file_name)?;

        let bytes = std::fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self { file_name, bytes })
    }

    /// Name the file was uploaded under.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Decode the upload and convert it to 3-channel RGB.
    ///
    /// The container format is sniffed from the content, not the extension.
    /// Alpha is dropped without compositing.
    pub fn decode(&self) -> Result<RgbImage> {
        let image = image::load_from_memory(&self.bytes).map_err(|e| Error::UnreadableImage {
            file_name: self.file_name.clone(),
            source: Box::new(e),
        })?;

        if image.width() == 0 || image.height() == 0 {
            return Err(Error::UnreadableImage {
                file_name: self.file_name.clone(),
                source: "image has zero width or height".into(),
            });
        }

        debug!(
            "Decoded {} ({}x{}, {:?})",
            self.file_name,
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image.to_rgb8())
    }
}

/// Reject any file whose extension is not `.jpg`, `.jpeg` or `.png`.
///
/// Comparison is case-insensitive.
pub fn validate_extension(file_name: &str) -> Result<()> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(Error::InvalidFileFormat {
            file_name: file_name.to_string(),
        }),
    }
}
