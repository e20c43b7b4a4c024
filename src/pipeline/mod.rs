//! Classification request pipeline.

mod service;

pub use service::{ClassificationService, ModelResult, Report};
