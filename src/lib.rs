pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::PipelineConfig;
pub use self::core::{etl::EtlEngine, etl::RunSummary, pipeline::CsvPipeline};
pub use domain::model::{Row, Table, Value};
pub use domain::ports::{ConfigProvider, Pipeline, Storage};
pub use utils::error::{EtlError, Result};

/// Runs the CSV pipeline against the local filesystem and reports success as a
/// boolean. Paths are taken as given (absolute or relative to the working
/// directory).
pub fn run<C: ConfigProvider>(config: &C) -> bool {
    EtlEngine::new(CsvPipeline::new(LocalStorage::default())).run(config)
}
