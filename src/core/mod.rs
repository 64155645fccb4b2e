pub mod engine;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod rules;
pub mod writer;

pub use crate::domain::model::{CleanRecord, DirtyRecord, LinePair, MergeReport, Verdict};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
