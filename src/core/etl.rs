use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_path;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_written: usize,
    pub columns_written: usize,
    pub destination: String,
    pub written: bool,
}

/// Runs extract → transform → load once per call. This is the only place
/// stage errors are caught.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs the pipeline and returns `true` only if every stage succeeded.
    /// Failures are logged, never propagated.
    pub fn run<C: ConfigProvider>(&self, config: &C) -> bool {
        match self.execute(config) {
            Ok(summary) => summary.written,
            Err(e) => {
                tracing::error!(
                    "❌ Pipeline failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                false
            }
        }
    }

    pub fn execute<C: ConfigProvider>(&self, config: &C) -> Result<RunSummary> {
        validate_paths(config)?;
        tracing::info!("Starting pipeline run");

        let raw_data = self.pipeline.extract(config.source_path())?;
        tracing::info!(
            "Extracted {} rows x {} columns from {}",
            raw_data.row_count(),
            raw_data.column_count(),
            config.source_path()
        );
        self.monitor.log_stats("Extract");

        let transformed = self.pipeline.transform(&raw_data)?;
        tracing::info!(
            "Transformed {} rows into {} rows",
            raw_data.row_count(),
            transformed.row_count()
        );
        self.monitor.log_stats("Transform");

        let written = self
            .pipeline
            .load(&transformed, config.destination_path())?;
        tracing::info!(
            "Loaded {} rows into {}",
            transformed.row_count(),
            config.destination_path()
        );
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            rows_read: raw_data.row_count(),
            rows_written: transformed.row_count(),
            columns_written: transformed.column_count(),
            destination: config.destination_path().to_string(),
            written,
        })
    }
}

fn validate_paths<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("source_path", config.source_path())?;
    validate_path("destination_path", config.destination_path())
}
