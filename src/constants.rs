//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "leafix";

/// Default confidence threshold below which a prediction is unrecognized.
///
/// Compared against the raw model output in `[0, 1]`, never the percentage.
pub const DEFAULT_THRESHOLD: f32 = 0.65;

/// Label reported when the best prediction falls below the threshold.
pub const UNRECOGNIZED_LABEL: &str = "unrecognized class";

/// Default directory that reference images are resolved against.
pub const DEFAULT_ASSETS_DIR: &str = ".";

/// Built-in model sources.
pub mod models {
    /// Display name of the MobileNetV2 classifier.
    pub const MOBILENETV2_NAME: &str = "MobileNetV2";

    /// Release URL of the MobileNetV2 classifier (ONNX export).
    pub const MOBILENETV2_URL: &str =
        "https://github.com/sitiayuni/Model-Skripsi/releases/download/V.1.0.0/mobilenetv2_model45_2.onnx";

    /// Display name of the ResNet50V2 classifier.
    pub const RESNET50V2_NAME: &str = "ResNet50V2";

    /// Release URL of the ResNet50V2 classifier (ONNX export).
    pub const RESNET50V2_URL: &str =
        "https://github.com/sitiayuni/Model-Skripsi/releases/download/V.1.0.0/resnet50v2_2.onnx";
}

/// Model input geometry.
pub mod input {
    /// Input image width in pixels.
    pub const WIDTH: u32 = 224;

    /// Input image height in pixels.
    pub const HEIGHT: u32 = 224;

    /// Colour channels (RGB).
    pub const CHANNELS: usize = 3;

    /// Divisor of the affine pixel transform `v / SCALE - OFFSET`.
    pub const SCALE: f32 = 127.5;

    /// Offset of the affine pixel transform `v / SCALE - OFFSET`.
    pub const OFFSET: f32 = 1.0;

    /// Accepted upload extensions (lowercase, without the dot).
    pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
}

/// Download client settings.
pub mod download {
    /// Default connection timeout in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;

    /// Default overall request timeout in seconds.
    pub const TIMEOUT_SECS: u64 = 300;

    /// Suffix of the temporary file a model is downloaded into.
    pub const TEMP_SUFFIX: &str = ".onnx";
}

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f32 = 1.0;
    /// Decimal places for percentage formatting.
    pub const DECIMAL_PLACES: usize = 2;
}
