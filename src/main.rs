use clap::Parser;
use merge_bilingual::utils::error::ErrorSeverity;
use merge_bilingual::utils::{logger, validation::Validate};
use merge_bilingual::{CliConfig, MergeEngine, MergeError, MergePipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting merge-bilingual CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 規則與轉換器在啟動時建立一次，整個批次重用
    let pipeline = match MergePipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    let engine = MergeEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Merge completed successfully!");
            tracing::info!("📁 Clean output saved to: {}", report.output_path);

            println!("✅ Merge completed successfully!");
            println!(
                "📄 {} pairs in: {} clean, {} dirty",
                report.total_pairs, report.clean_pairs, report.dirty_pairs
            );
            for (reason, count) in &report.reason_counts {
                println!("   {}: {}", reason, count);
            }
            println!("📁 Clean output: {}", report.output_path);
            match &report.dirty_output_path {
                Some(path) => println!("📁 Dirty output: {}", path),
                None if report.dirty_pairs > 0 => {
                    println!("🗑️  {} dirty pairs dropped (no --dirty path)", report.dirty_pairs)
                }
                None => {}
            }
        }
        Err(e) => fail(e),
    }
}

fn fail(e: MergeError) -> ! {
    tracing::error!(
        "❌ Merge failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
