use clap::Parser;
use listing_matcher::core::ConfigProvider;
use listing_matcher::utils::error::ErrorSeverity;
use listing_matcher::utils::logger::{init_logger, LogFormat};
use listing_matcher::utils::validation::Validate;
use listing_matcher::{BatchRunner, CliConfig, LocalStorage, MatchError, MatchPipeline};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_logger(format, cli.verbose);

    tracing::info!("Starting listing-matcher");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Matching failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> Result<(), MatchError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let monitoring = config.monitoring_enabled();
    if monitoring {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = MatchPipeline::new(LocalStorage::default(), config);
    let runner = BatchRunner::new_with_monitoring(pipeline, monitoring);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no output will be written");
        runner.dry_run()?;
        return Ok(());
    }

    let output_path = runner.run()?;
    println!("✅ Matching completed successfully!");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}
