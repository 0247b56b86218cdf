use clap::Parser;
use relnotes::config::{resolve_debug, Cli, ConfigFile, Settings};
use relnotes::core::path::find_config_file;
use relnotes::di::{ProcessEnv, ServiceContainer};
use relnotes::fetcher::ReleaseFetcher;
use relnotes::format_error_with_help;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let env = ProcessEnv;

    let config_path = find_config_file(Path::new("."), cli.config.as_deref());
    let (config_file, load_error) = match config_path.as_deref().map(ConfigFile::load) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    // Logging depends on the debug flag, which may come from the config file
    let debug = resolve_debug(&env, &cli, config_file.as_ref());
    init_tracing(debug);

    if let Some(path) = cli.config.as_deref().filter(|_| config_path.is_none()) {
        warn!("Config file {} not found, ignoring it", path.display());
    }
    if let (Some(path), Some(e)) = (config_path.as_deref(), load_error) {
        warn!("Could not read config file {}: {}", path.display(), e);
    } else if let Some(path) = config_path.as_deref() {
        debug!("Loaded config file {}", path.display());
    }

    let settings = match Settings::resolve(&env, &cli, config_file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            return ExitCode::FAILURE;
        }
    };
    debug!("Using artifacts path: {}", settings.artifacts_root.display());

    let container = match ServiceContainer::new(settings) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            return ExitCode::FAILURE;
        }
    };

    ReleaseFetcher::new(&container).run().await;
    ExitCode::SUCCESS
}

/// `RUST_LOG` wins when set; otherwise the debug flag picks the level.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug { "info,relnotes=debug" } else { "info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
