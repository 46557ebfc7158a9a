//! CLI for argocd-appgen.
//!
//! Generates an Argo CD Application manifest for one Helm chart in the
//! current repository.

use argocd_appgen::{
    load_settings, resolve_workdir, AppArgs, GeneratedManifest, LayoutError, Runner, RunnerConfig,
    RunnerError,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Generate an Argo CD Application manifest from a template.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Application name; also the output file name.
    app_name: String,

    /// Chart folder name under the charts directory.
    chart_name: String,

    /// Destination namespace.
    namespace: String,

    /// Directory to run in (defaults to the current directory).
    #[arg(short = 'C', long)]
    workdir: Option<PathBuf>,

    /// Path to a layout config file (defaults to appgen.toml if present).
    #[arg(short, long, env = "ARGOCD_APPGEN_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    // Wrong argument counts exit here with a usage message.
    let args = Args::parse();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
fn run(args: Args) -> Result<GeneratedManifest, RunnerError> {
    let app = AppArgs::new(args.app_name, args.chart_name, args.namespace)?;

    let workdir = match args.workdir {
        Some(dir) => resolve_workdir(&dir)?,
        None => std::env::current_dir().map_err(|source| LayoutError::WorkingDir { source })?,
    };

    let settings = load_settings(&workdir, args.config.as_deref())?;
    let runner = Runner::new(RunnerConfig::new(workdir).with_settings(settings));
    runner.run(&app)
}
