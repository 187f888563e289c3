use crate::core::matcher::MatchSummary;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct BatchRunner<P: Pipeline> {
    pipeline: P,
    monitoring: bool,
}

impl<P: Pipeline> BatchRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitoring,
        }
    }

    /// Extract, match and write. Returns the output location.
    pub fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitoring);

        let catalog = self.pipeline.extract()?;
        monitor.log_stats("Extract");

        let results = self.pipeline.transform(&catalog)?;
        log_summary(&MatchSummary::from_results(&results));
        monitor.log_stats("Match");

        let output_path = self.pipeline.load(&results)?;
        monitor.log_stats("Load");
        monitor.log_final_stats();

        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }

    /// Extract and match without writing anything.
    pub fn dry_run(&self) -> Result<MatchSummary> {
        let mut monitor = SystemMonitor::new(self.monitoring);

        let catalog = self.pipeline.extract()?;
        monitor.log_stats("Extract");

        let results = self.pipeline.transform(&catalog)?;
        let summary = MatchSummary::from_results(&results);
        log_summary(&summary);
        monitor.log_stats("Match");
        monitor.log_final_stats();

        Ok(summary)
    }
}

fn log_summary(summary: &MatchSummary) {
    tracing::info!(
        "Matched {} of {} products ({} matches over {} distinct listings)",
        summary.products_with_matches,
        summary.products,
        summary.matched_pairs,
        summary.distinct_listings
    );
}
