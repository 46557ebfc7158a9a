//! Layout configuration loading.
//!
//! The generator works without any configuration; an `appgen.toml` only
//! needs to exist when a project deviates from the default layout:
//! ```text
//! project/
//! ├── appgen.toml          (optional)
//! ├── argocd/              (output-dir, generated)
//! ├── go/                  (tool-dir)
//! │   └── templates/
//! │       └── app.yaml.tmpl
//! └── helm/                (charts-dir)
//!     └── <chart>/
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use crate::layout::detect_project_root;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "appgen.toml";

/// Loads settings from `explicit`, or from an implicit `appgen.toml`.
///
/// The implicit file is looked up in `workdir`, then in the project root
/// derived from `workdir` with the default tool directory, so a run from
/// the tool directory sees the same file as a run from the root. A missing
/// implicit file yields the defaults. A missing explicit file is an error.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is unreadable, malformed, or fails
/// validation.
pub fn load_settings(workdir: &Path, explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => workdir.join(path),
        None => match find_implicit_config(workdir) {
            Some(path) => path,
            None => {
                debug!(workdir = %workdir.display(), "No config file, using default layout");
                return Ok(Settings::default());
            }
        },
    };

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    info!(path = %path.display(), "Loading config");
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let settings: Settings = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })?;
    settings.validate(&path)?;

    Ok(settings)
}

fn find_implicit_config(workdir: &Path) -> Option<PathBuf> {
    let root = detect_project_root(workdir, &settings::default_tool_dir());
    [workdir.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_CONFIG_FILE)]
        .into_iter()
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_default_file_uses_defaults() {
        let temp = TempDir::new().unwrap();

        let settings = load_settings(temp.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();

        let result = load_settings(temp.path(), Some(Path::new("custom.toml")));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn reads_default_file_from_workdir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"
tool-dir = "tools"
output-dir = "deploy/apps"
"#,
        )
        .unwrap();

        let settings = load_settings(temp.path(), None).unwrap();

        assert_eq!(settings.tool_dir, "tools");
        assert_eq!(settings.output_dir, "deploy/apps");
        assert_eq!(settings.template, "templates/app.yaml.tmpl");
        assert_eq!(settings.charts_dir, "helm");
        assert_eq!(settings.remote, "origin");
    }

    #[test]
    fn tool_dir_run_reads_root_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("go")).unwrap();
        fs::write(root.join(DEFAULT_CONFIG_FILE), "output-dir = \"deploy\"\n").unwrap();

        let from_root = load_settings(&root, None).unwrap();
        let from_tool_dir = load_settings(&root.join("go"), None).unwrap();

        assert_eq!(from_root.output_dir, "deploy");
        assert_eq!(from_tool_dir, from_root);
    }

    #[test]
    fn workdir_config_wins_over_root_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        fs::create_dir_all(root.join("go")).unwrap();
        fs::write(root.join(DEFAULT_CONFIG_FILE), "output-dir = \"deploy\"\n").unwrap();
        fs::write(
            root.join("go").join(DEFAULT_CONFIG_FILE),
            "remote = \"upstream\"\n",
        )
        .unwrap();

        let settings = load_settings(&root.join("go"), None).unwrap();

        assert_eq!(settings.remote, "upstream");
        assert_eq!(settings.output_dir, "argocd");
    }

    #[test]
    fn reads_explicit_relative_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("conf")).unwrap();
        fs::write(temp.path().join("conf/gen.toml"), "remote = \"upstream\"\n").unwrap();

        let settings = load_settings(temp.path(), Some(Path::new("conf/gen.toml"))).unwrap();
        assert_eq!(settings.remote, "upstream");
    }

    #[test]
    fn malformed_file_names_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "tool-dir = [").unwrap();

        let err = load_settings(temp.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::TomlError { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "revision = \"main\"\n").unwrap();

        let result = load_settings(temp.path(), None);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "remote = \"\"\n").unwrap();

        let result = load_settings(temp.path(), None);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
