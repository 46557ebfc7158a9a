//! Orchestrates a single manifest generation.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::args::AppArgs;
use crate::layout::{detect_project_root, resolve_chart_path, resolve_workdir, ProjectLayout};
use crate::remote::{normalize_repo_url, resolve_remote_url, GitCli, RemoteUrlSource};
use crate::templates::{write_manifest, AppData, HandlebarsRenderer, ManifestRenderer};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    /// Where the manifest was written.
    pub output_path: PathBuf,
    /// The record it was rendered from.
    pub data: AppData,
}

/// Runs the generation pipeline against one working directory.
pub struct Runner {
    config: RunnerConfig,
    remote: Box<dyn RemoteUrlSource>,
    renderer: Option<Box<dyn ManifestRenderer>>,
}

impl Runner {
    /// Builds a runner that reads the remote URL with `git` and renders the
    /// project's template file with Handlebars.
    pub fn new(config: RunnerConfig) -> Self {
        let remote = Box::new(GitCli::new(config.workdir()));
        Self {
            config,
            remote,
            renderer: None,
        }
    }

    /// Replaces the remote URL lookup.
    pub fn with_remote_source(mut self, remote: impl RemoteUrlSource + 'static) -> Self {
        self.remote = Box::new(remote);
        self
    }

    /// Renders with `renderer` instead of the project's template file.
    ///
    /// The template file is then neither required nor read.
    pub fn with_renderer(mut self, renderer: impl ManifestRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Executes the full generation flow for `args`.
    ///
    /// Steps run in order and the first failure aborts the run. An output
    /// file that was already created is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] from whichever step failed.
    pub fn run(&self, args: &AppArgs) -> Result<GeneratedManifest, RunnerError> {
        let settings = self.config.settings();

        let raw_url = resolve_remote_url(self.remote.as_ref(), &settings.remote)?;
        let repo_url = normalize_repo_url(&raw_url);
        debug!(remote = %settings.remote, %raw_url, %repo_url, "Resolved repository URL");

        let workdir = resolve_workdir(self.config.workdir())?;
        let chart_path = resolve_chart_path(&workdir, &settings.charts_dir, args.chart_name())?;

        let project_root = detect_project_root(&workdir, &settings.tool_dir);
        debug!(root = %project_root.display(), "Detected project root");
        let layout = ProjectLayout::resolve(&project_root, settings, args.app_name());

        if self.renderer.is_none() {
            layout.ensure_template_exists()?;
        }
        layout.ensure_output_dir()?;

        let data = AppData::new(args, repo_url, chart_path);

        match &self.renderer {
            Some(renderer) => write_manifest(renderer.as_ref(), &layout.output_path, &data)?,
            None => {
                let renderer = HandlebarsRenderer::from_file(&layout.template_path)?;
                write_manifest(&renderer, &layout.output_path, &data)?;
            }
        }

        info!("Generated: {}", layout.output_path.display());
        Ok(GeneratedManifest {
            output_path: layout.output_path,
            data,
        })
    }
}
