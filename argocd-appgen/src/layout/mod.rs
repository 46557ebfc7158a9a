//! Filesystem layout resolution.
//!
//! Works out where the chart lives, which directory is the project root, and
//! where the template and the generated manifest go. The generator may be
//! run either from the project root or from its tool directory, so both the
//! chart lookup and the root detection look one level up as a fallback.

mod error;

pub use error::LayoutError;

use crate::config::Settings;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turns `workdir` into an absolute path with `.` and `..` resolved.
///
/// Root detection looks at the last path segment, which a relative
/// `.` or `sub/..` does not carry.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidWorkdir`] if the path does not exist.
pub fn resolve_workdir(workdir: &Path) -> Result<PathBuf, LayoutError> {
    std::fs::canonicalize(workdir).map_err(|source| LayoutError::InvalidWorkdir {
        path: workdir.display().to_string(),
        source,
    })
}

/// Finds the chart directory for `chart`, relative to `workdir`.
///
/// Tries `<charts_dir>/<chart>` first, then `../<charts_dir>/<chart>`.
/// The returned path is relative, as it is written into the manifest.
///
/// # Errors
///
/// Returns [`LayoutError::ChartNotFound`] naming both candidates when
/// neither exists.
pub fn resolve_chart_path(
    workdir: &Path,
    charts_dir: &str,
    chart: &str,
) -> Result<String, LayoutError> {
    let primary = Path::new(charts_dir).join(chart);
    if workdir.join(&primary).exists() {
        debug!(chart_path = %primary.display(), "Found chart");
        return Ok(path_to_string(&primary));
    }

    let fallback = Path::new("..").join(&primary);
    if workdir.join(&fallback).exists() {
        debug!(chart_path = %fallback.display(), "Found chart in parent directory");
        return Ok(path_to_string(&fallback));
    }

    Err(LayoutError::ChartNotFound {
        primary: path_to_string(&primary),
        fallback: path_to_string(&fallback),
    })
}

/// Returns the project root for a run started in `workdir`.
///
/// That is `workdir` itself, unless its last segment equals `tool_dir`, in
/// which case it is the parent.
#[must_use]
pub fn detect_project_root(workdir: &Path, tool_dir: &str) -> PathBuf {
    if workdir.file_name() == Some(OsStr::new(tool_dir)) {
        if let Some(parent) = workdir.parent() {
            return parent.to_path_buf();
        }
    }
    workdir.to_path_buf()
}

/// Paths derived from the project root for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Template to render.
    pub template_path: PathBuf,
    /// Directory receiving generated manifests.
    pub output_dir: PathBuf,
    /// `<output_dir>/<app_name>.yaml`.
    pub output_path: PathBuf,
}

impl ProjectLayout {
    /// Derives the template and output paths under `project_root`.
    #[must_use]
    pub fn resolve(project_root: &Path, settings: &Settings, app_name: &str) -> Self {
        let template_path = project_root
            .join(&settings.tool_dir)
            .join(&settings.template);
        let output_dir = project_root.join(&settings.output_dir);
        let output_path = output_dir.join(format!("{app_name}.yaml"));

        Self {
            template_path,
            output_dir,
            output_path,
        }
    }

    /// Fails unless the template file exists.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TemplateNotFound`].
    pub fn ensure_template_exists(&self) -> Result<(), LayoutError> {
        if !self.template_path.exists() {
            return Err(LayoutError::TemplateNotFound {
                path: self.template_path.display().to_string(),
            });
        }
        Ok(())
    }

    /// Creates the output directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CreateOutputDir`] if creation fails.
    pub fn ensure_output_dir(&self) -> Result<(), LayoutError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            LayoutError::CreateOutputDir {
                path: self.output_dir.display().to_string(),
                source,
            }
        })
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
