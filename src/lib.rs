pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::MergeEngine, pipeline::MergePipeline};
pub use utils::error::{MergeError, Result};
