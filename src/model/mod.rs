//! Model provider: where classifier artifacts come from and how they are loaded.

mod cache;
mod download;
mod provider;

pub use cache::ModelCache;
pub use download::{
    DownloadSettings, build_client, download_file, download_to_temp, file_sha256, verify_checksum,
};
pub use provider::ModelProvider;

use std::fmt;
use std::path::PathBuf;

/// Where a model artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelLocation {
    /// Remote artifact, downloaded on first use.
    Url(String),
    /// Local ONNX file.
    Path(PathBuf),
}

impl fmt::Display for ModelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named model and its artifact location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    /// Display name, used in result panels and error messages.
    pub name: String,
    /// Artifact location.
    pub location: ModelLocation,
    /// Expected SHA-256 of the artifact, hex encoded.
    pub sha256: Option<String>,
}

impl ModelSource {
    /// Remote model without a checksum.
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ModelLocation::Url(url.into()),
            sha256: None,
        }
    }

    /// Local model without a checksum.
    pub fn path(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            location: ModelLocation::Path(path),
            sha256: None,
        }
    }
}
