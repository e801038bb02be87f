//! File Harvester - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use file_harvester::{
    cli::Args,
    config::{config_warnings, validate_config, Config},
    download::Pipeline,
    error::{exit_codes, Error, Result},
    fetch::Fetcher,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(Error::MissingConfig(what)) => {
            // Nothing to do is not a failure
            print_warning(&format!("Missing required configuration: {}", what));
            print_info("Nothing to download. Exiting.");
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::Json(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load and validate configuration
    print_info(&format!(
        "Loading configuration from {}",
        args.config.display()
    ));
    let config = Config::load(&args.config)?;
    validate_config(&config)?;

    for warning in config_warnings(&config) {
        print_warning(&warning);
    }

    print_config_summary(
        &config.target_urls,
        &config.allowed_extensions,
        &config.organization_rule.to_string(),
        &config.download_base_folder.display().to_string(),
        args.force_download,
    );

    let fetcher = Fetcher::new(&config.user_agent)?.with_progress(!args.quiet);

    let report = Pipeline::new(&config, fetcher)
        .force_download(args.force_download)
        .run()
        .await;

    print_run_stats(&report);

    Ok(())
}
