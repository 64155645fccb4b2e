use crate::core::normalize::ScriptNormalizer;
use crate::core::reader::PairReader;
use crate::core::rules::RuleSet;
use crate::core::writer::CsvSink;
use crate::domain::model::{CleanRecord, DirtyRecord, MergeReport, Verdict};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Single-pass merge: read aligned pairs, classify each against the rule
/// set, route dirty pairs to the dirty sink and clean pairs (optionally
/// script-normalized) to the clean sink, preserving input order.
#[derive(Debug)]
pub struct MergePipeline<C: ConfigProvider> {
    config: C,
    rules: RuleSet,
    normalizer: ScriptNormalizer,
}

impl<C: ConfigProvider> MergePipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let rules = RuleSet::from_config(&config)?;
        let normalizer = ScriptNormalizer::from_config(&config)?;

        tracing::debug!("Active rules: {}", rules.rule_names().join(", "));
        if normalizer.is_enabled() {
            tracing::debug!("Script conversion enabled");
        }

        Ok(Self {
            config,
            rules,
            normalizer,
        })
    }
}

impl<C: ConfigProvider> Pipeline for MergePipeline<C> {
    fn run(&self) -> Result<MergeReport> {
        let reader = PairReader::open(self.config.st_path(), self.config.tt_path())?;

        // Alignment is checked before any output file is created, so a
        // misaligned corpus writes nothing.
        let total_pairs = reader.ensure_aligned()?;
        tracing::info!("Inputs aligned: {} line pairs", total_pairs);

        let mut sink = CsvSink::create(self.config.output_path(), self.config.dirty_path())?;
        let mut clean_pairs = 0usize;
        let mut dirty_pairs = 0usize;
        let mut reason_counts: BTreeMap<String, usize> = BTreeMap::new();

        for pair in reader.pairs()? {
            let mut pair = pair?;
            let index = pair.index;

            match self.rules.classify(&pair) {
                Verdict::Dirty(reason) => {
                    dirty_pairs += 1;
                    *reason_counts.entry(reason.to_string()).or_insert(0) += 1;
                    tracing::debug!("line {}: dirty ({})", index, reason);
                    sink.write_dirty(&DirtyRecord {
                        source: pair.source,
                        target: pair.target,
                        reason: reason.to_string(),
                    })?;
                }
                Verdict::Clean => {
                    self.normalizer.apply(&mut pair);
                    clean_pairs += 1;
                    sink.write_clean(&CleanRecord {
                        source: pair.source,
                        target: pair.target,
                    })?;
                }
            }

            if index % 100_000 == 0 {
                tracing::debug!("processed {} / {} pairs", index, total_pairs);
            }
        }

        if sink.dropped_dirty() > 0 {
            tracing::info!(
                "{} dirty pairs dropped (no --dirty path given)",
                sink.dropped_dirty()
            );
        }
        sink.finish()?;

        Ok(MergeReport {
            total_pairs,
            clean_pairs,
            dirty_pairs,
            reason_counts,
            output_path: self.config.output_path().to_string(),
            dirty_output_path: self.config.dirty_path().map(|p| p.to_string()),
        })
    }
}
