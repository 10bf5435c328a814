use clap::Parser;
use price_scrape::utils::logger;
use price_scrape::{CliArgs, LocalStorage, ScrapeEngine, ScrapeError, ScrapePipeline};

fn report_failure(stage: &str, e: &ScrapeError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, exit code {})",
        stage,
        e,
        e.category(),
        e.exit_code()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting price-scrape");
    tracing::debug!("CLI args: {:?}", args);

    let options = match args.into_options() {
        Ok(options) => options,
        Err(e) => report_failure("Configuration", &e),
    };
    tracing::debug!("Resolved options: {:?}", options);

    let storage = LocalStorage::new(options.out_dir.clone());
    let pipeline = ScrapePipeline::new(storage, options);
    let engine = ScrapeEngine::new(pipeline);

    match engine.run().await {
        Ok(_) => tracing::info!("✅ Scrape completed successfully!"),
        Err(e) => report_failure("Scrape", &e),
    }
}
