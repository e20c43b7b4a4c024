//! Image preprocessing for model input.

use crate::constants::input::{CHANNELS, HEIGHT, OFFSET, SCALE, WIDTH};
use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::{Array4, ArrayView4};

/// A preprocessed image: shape `(1, 224, 224, 3)`, NHWC, values in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor(Array4<f32>);

impl ImageTensor {
    /// Shape of the underlying array.
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    /// Borrow the tensor data.
    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.0.view()
    }

    /// Owned copy of the tensor data, as the runtime consumes it.
    pub fn to_array(&self) -> Array4<f32> {
        self.0.clone()
    }

    /// Tensor of the right shape filled with zeros.
    ///
    /// Used to probe a freshly loaded model's output width.
    pub fn zeros() -> Self {
        Self(Array4::zeros((1, HEIGHT as usize, WIDTH as usize, CHANNELS)))
    }
}

/// Resize an RGB image to 224x224 and scale bytes into `[-1, 1]`.
///
/// Resampling is bicubic (Catmull-Rom), matching the resize the models were
/// trained behind. Each channel value `v` maps to `v / 127.5 - 1.0`.
pub fn preprocess(image: &RgbImage) -> ImageTensor {
    let resized = imageops::resize(image, WIDTH, HEIGHT, FilterType::CatmullRom);

    let mut tensor = Array4::zeros((1, HEIGHT as usize, WIDTH as usize, CHANNELS));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for (c, &value) in pixel.0.iter().enumerate() {
            tensor[[0, y as usize, x as usize, c]] = f32::from(value) / SCALE - OFFSET;
        }
    }

    ImageTensor(tensor)
}
