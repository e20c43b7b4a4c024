//! Input handling: upload validation, decoding and tensor preprocessing.

mod preprocess;
mod upload;

pub use preprocess::{ImageTensor, preprocess};
pub use upload::{Upload, validate_extension};
