//! Error types for leafix.

/// Result type alias for leafix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for leafix.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Uploaded file extension is not one of the accepted image formats.
    #[error("invalid file format '{file_name}': only .jpg, .jpeg and .png files are accepted")]
    InvalidFileFormat {
        /// Name of the rejected file.
        file_name: String,
    },

    /// Uploaded file could not be decoded as an image.
    #[error(
        "file '{file_name}' cannot be read as an image; make sure it is not corrupt and really is an image"
    )]
    UnreadableImage {
        /// Name of the unreadable file.
        file_name: String,
        /// Underlying decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Download failed.
    #[error("failed to download from '{url}'")]
    DownloadFailed {
        /// URL that failed.
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Downloaded artifact does not match the configured checksum.
    #[error("checksum mismatch for '{url}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Source URL or path of the artifact.
        url: String,
        /// Configured SHA-256 digest.
        expected: String,
        /// Computed SHA-256 digest.
        actual: String,
    },

    /// The runtime could not build a session from the model artifact.
    #[error("failed to build model session: {reason}")]
    ModelBuild {
        /// Description of the build failure.
        reason: String,
    },

    /// A single model could not be loaded.
    #[error("failed to load model {model}: {source}")]
    ModelLoad {
        /// Display name of the model.
        model: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// One or more required models are missing; the application refuses to run.
    #[error(
        "the application cannot run without its models (failed: {}); please contact the administrator",
        .models.join(", ")
    )]
    ModelsUnavailable {
        /// Display names of every model that failed to load.
        models: Vec<String>,
    },

    /// Failed to initialize ONNX runtime.
    #[error("failed to initialize ONNX runtime: {reason}")]
    RuntimeInitialization {
        /// Description of the initialization failure.
        reason: String,
    },

    /// Inference failed.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// Model output does not line up with the taxonomy table.
    #[error("model output has {actual} classes but the label table has {expected}")]
    LabelTableMismatch {
        /// Number of labels in the table.
        expected: usize,
        /// Width of the model output.
        actual: usize,
    },

    /// Label has no taxonomy record.
    #[error("no taxonomy record for label '{label}'")]
    SpeciesNotFound {
        /// The label that was looked up.
        label: String,
    },

    /// Failed to serialize a report.
    #[error("failed to serialize report")]
    ReportSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

/// Request-level classification of an [`Error`].
///
/// Every failure surfaced to the user falls into exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A model could not be fetched or loaded.
    ModelLoadFailure,
    /// The uploaded file has an unsupported extension.
    InvalidFileFormat,
    /// The uploaded file could not be decoded as an image.
    UnreadableImage,
    /// Anything else that went wrong while processing a request.
    UnexpectedProcessing,
    /// Configuration could not be read, parsed or validated.
    Configuration,
    /// A taxonomy lookup missed.
    NotFound,
}

impl Error {
    /// Classify this error into its request-level kind.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ModelLoad { .. }
            | Self::ModelsUnavailable { .. }
            | Self::DownloadFailed { .. }
            | Self::ChecksumMismatch { .. }
            | Self::ModelBuild { .. }
            | Self::RuntimeInitialization { .. } => ErrorKind::ModelLoadFailure,
            Self::InvalidFileFormat { .. } => ErrorKind::InvalidFileFormat,
            Self::UnreadableImage { .. } => ErrorKind::UnreadableImage,
            Self::ConfigDirNotFound
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigValidation { .. }
            | Self::ConfigWrite { .. }
            | Self::ConfigSerialize { .. } => ErrorKind::Configuration,
            Self::SpeciesNotFound { .. } => ErrorKind::NotFound,
            Self::Io(_)
            | Self::Inference { .. }
            | Self::LabelTableMismatch { .. }
            | Self::ReportSerialize { .. }
            | Self::Internal { .. } => ErrorKind::UnexpectedProcessing,
        }
    }
}
