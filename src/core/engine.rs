use crate::domain::model::MergeReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct MergeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MergeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<MergeReport> {
        println!("Starting merge process...");

        let report = self.pipeline.run()?;

        println!(
            "Merged {} pairs ({} clean, {} dirty)",
            report.total_pairs, report.clean_pairs, report.dirty_pairs
        );
        for (reason, count) in &report.reason_counts {
            tracing::info!("filtered {}: {} pairs", reason, count);
        }

        Ok(report)
    }
}
