//! CLI argument parsing and command handling.

mod args;
pub mod help;
mod validators;

pub use args::{Cli, ClassifyArgs, Command, ConfigAction, GlobalArgs, ModelsAction};
pub use validators::parse_threshold;
