use basic_pipeline::utils::error::ErrorSeverity;
use basic_pipeline::utils::{logger, validation::Validate};
use basic_pipeline::{CliConfig, CsvPipeline, EtlEngine, EtlError, LocalStorage};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting basic-pipeline CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = CsvPipeline::new(LocalStorage::default());
    let engine = EtlEngine::new_with_monitoring(pipeline, cli.monitor);

    match engine.execute(&config) {
        Ok(summary) => {
            tracing::info!("✅ Pipeline completed successfully!");
            println!("✅ Pipeline completed successfully!");
            println!(
                "📁 Wrote {} of {} rows to: {}",
                summary.rows_written, summary.rows_read, summary.destination
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }
}

fn exit_code(e: &EtlError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
