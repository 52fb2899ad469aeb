use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dispensa::infrastructure::{
    AppConfig, CliArgs, StorageManager, TerminalPrompt, build_token_storage,
};
use dispensa::presentation::{App, render};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app(args: &CliArgs) -> Result<App> {
    let storage_manager = StorageManager::new()?;
    let mut config = storage_manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = dispensa::VERSION, api_url = %config.api_url, "Starting Dispensa");

    let token_storage = build_token_storage(config.token_store, storage_manager.config_dir());
    App::new(config, token_storage, TerminalPrompt::new(args.yes))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = CliArgs::parse();
    let app = create_app(&args)?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app.run(args.command, &mut stdout).await {
        error!(error = ?e, "Command failed");
        eprintln!("Error: {}", render::error(&e));
        std::process::exit(1);
    }
    Ok(())
}
