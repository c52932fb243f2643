use anyhow::Context;
use clap::Parser;
use folio::cli::Cli;
use folio::commands;
use folio::config::{self, ConfigLoadResult};
use folio::error::ErrorReporter;
use folio::logger::setup_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let reporter = ErrorReporter::stderr();

    let app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            reporter.report_config_error("file", &e);
            anyhow::bail!("configuration could not be loaded");
        }
        ConfigLoadResult::DeserializeError(e) => {
            reporter.report_config_error("values", &e);
            anyhow::bail!("configuration is invalid");
        }
    };

    setup_logger(app_config.logging(), cli.verbose).context("Failed to set up logging")?;
    log::info!("Starting folio {}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout();
    if let Err(e) = commands::run(cli.command, &app_config, &mut stdout).await {
        reporter.report_error(e);
        std::process::exit(1);
    }

    Ok(())
}
