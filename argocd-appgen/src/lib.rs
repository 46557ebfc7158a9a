#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod args;
pub mod config;
pub mod layout;
pub mod remote;
pub mod runner;
pub mod templates;

pub use args::{AppArgs, ArgsError};
pub use config::{load_settings, ConfigError, Settings, DEFAULT_CONFIG_FILE};
pub use layout::{
    detect_project_root, resolve_chart_path, resolve_workdir, LayoutError, ProjectLayout,
};
pub use remote::{normalize_repo_url, resolve_remote_url, GitCli, RemoteError, RemoteUrlSource};
pub use runner::{GeneratedManifest, Runner, RunnerConfig, RunnerError};
pub use templates::{
    write_manifest, AppData, HandlebarsRenderer, ManifestRenderer, TemplateError, LATEST_REVISION,
};
