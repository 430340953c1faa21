// src/main.rs — secret-santa entry point

use clap::Parser;

use secret_santa::cli::Cli;
use secret_santa::infra::config::Config;
use secret_santa::infra::errors::SantaError;
use secret_santa::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging (respects RUST_LOG)
    logger::init_logging(logger::level_for(cli.verbose));

    if let Err(e) = run(&cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<(), SantaError> {
    // Load config (falls back to defaults if no config.toml)
    let config = match cli.config {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| SantaError::Config(format!("{e:#}")))?;

    secret_santa::cli::run::run_draw(cli, &config).await?;
    Ok(())
}
