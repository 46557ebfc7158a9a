//! Layout settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::{Component, Path};

/// Project layout settings, read from `appgen.toml`.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Folder holding the generator's templates. When the working directory
    /// is named like this, the project root is its parent.
    #[serde(default = "default_tool_dir")]
    pub tool_dir: String,

    /// Template path, relative to `tool_dir`.
    #[serde(default = "default_template")]
    pub template: String,

    /// Output directory, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Folder holding chart directories.
    #[serde(default = "default_charts_dir")]
    pub charts_dir: String,

    /// git remote whose URL ends up in the manifest.
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool_dir: default_tool_dir(),
            template: default_template(),
            output_dir: default_output_dir(),
            charts_dir: default_charts_dir(),
            remote: default_remote(),
        }
    }
}

impl Settings {
    /// Checks that every value can be joined onto a path safely.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming `source` and the
    /// offending key.
    pub fn validate(&self, source: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: source.display().to_string(),
            message,
        };

        for (key, value) in [
            ("tool-dir", &self.tool_dir),
            ("charts-dir", &self.charts_dir),
            ("remote", &self.remote),
        ] {
            if !is_single_segment(value) {
                return Err(invalid(format!(
                    "{key} must be a single folder name, got '{value}'"
                )));
            }
        }

        for (key, value) in [
            ("template", &self.template),
            ("output-dir", &self.output_dir),
        ] {
            if !is_relative(value) {
                return Err(invalid(format!(
                    "{key} must be a non-empty relative path, got '{value}'"
                )));
            }
        }

        Ok(())
    }
}

fn is_single_segment(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_relative(value: &str) -> bool {
    !value.is_empty() && Path::new(value).is_relative()
}

pub(crate) fn default_tool_dir() -> String {
    "go".to_string()
}

pub(crate) fn default_template() -> String {
    "templates/app.yaml.tmpl".to_string()
}

pub(crate) fn default_output_dir() -> String {
    "argocd".to_string()
}

pub(crate) fn default_charts_dir() -> String {
    "helm".to_string()
}

pub(crate) fn default_remote() -> String {
    "origin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate(Path::new("defaults")).is_ok());
    }

    #[test]
    fn empty_table_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn rejects_nested_tool_dir() {
        let settings = Settings {
            tool_dir: "tools/gen".to_string(),
            ..Settings::default()
        };
        let result = settings.validate(Path::new("appgen.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { message, .. }) if message.contains("tool-dir")
        ));
    }

    #[test]
    fn rejects_parent_charts_dir() {
        let settings = Settings {
            charts_dir: "..".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate(Path::new("appgen.toml")).is_err());
    }

    #[test]
    fn rejects_absolute_output_dir() {
        let settings = Settings {
            output_dir: "/tmp/argocd".to_string(),
            ..Settings::default()
        };
        let result = settings.validate(Path::new("appgen.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { message, .. }) if message.contains("output-dir")
        ));
    }

    #[test]
    fn rejects_empty_template() {
        let settings = Settings {
            template: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate(Path::new("appgen.toml")).is_err());
    }
}
