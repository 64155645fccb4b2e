use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One aligned line from each input. `index` is 1-based and only used for
/// diagnostics (reporting which line was dropped or failed to decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    pub index: usize,
    pub source: String,
    pub target: String,
}

/// Classification of a line pair. The reason borrows the triggering rule's
/// name from the rule set that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    Clean,
    Dirty(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtyRecord {
    pub source: String,
    pub target: String,
    pub reason: String,
}

/// Counts produced by one merge run.
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub total_pairs: usize,
    pub clean_pairs: usize,
    pub dirty_pairs: usize,
    pub reason_counts: BTreeMap<String, usize>,
    pub output_path: String,
    pub dirty_output_path: Option<String>,
}
