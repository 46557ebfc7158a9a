//! The record exposed to manifest templates.

use crate::args::AppArgs;
use serde::Serialize;

/// Revision every generated application tracks.
pub const LATEST_REVISION: &str = "HEAD";

/// Fields available to the template as `{{AppName}}`, `{{RepoURL}}`,
/// `{{ChartPath}}`, `{{Revision}}` and `{{Namespace}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppData {
    #[serde(rename = "AppName")]
    pub app_name: String,

    #[serde(rename = "RepoURL")]
    pub repo_url: String,

    #[serde(rename = "ChartPath")]
    pub chart_path: String,

    #[serde(rename = "Revision")]
    pub revision: String,

    #[serde(rename = "Namespace")]
    pub namespace: String,
}

impl AppData {
    /// Builds the record for `args`, pinned to [`LATEST_REVISION`].
    #[must_use]
    pub fn new(args: &AppArgs, repo_url: String, chart_path: String) -> Self {
        Self {
            app_name: args.app_name().to_string(),
            repo_url,
            chart_path,
            revision: LATEST_REVISION.to_string(),
            namespace: args.namespace().to_string(),
        }
    }
}
