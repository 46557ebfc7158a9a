//! Template renderer.

use crate::templates::{AppData, TemplateError};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name the manifest template is registered under.
const MANIFEST_TEMPLATE: &str = "manifest";

/// Renders an [`AppData`] record into some output.
pub trait ManifestRenderer {
    /// Writes the rendered manifest for `data` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if substitution fails.
    fn render(&self, data: &AppData, out: &mut dyn Write) -> Result<(), TemplateError>;
}

// `{{#if (eq Namespace "prod")}}`
handlebars_helper!(eq: |a: str, b: str| a == b);

/// Registry for YAML manifests: no HTML escaping, strict field access.
fn manifest_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq));
    hbs
}

/// Handlebars-backed renderer for a single template file.
///
/// The template is parsed once, when the renderer is built.
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
    source: PathBuf,
}

impl HandlebarsRenderer {
    /// Reads and parses the template at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] or [`TemplateError::Parse`], both
    /// naming `path`.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let template = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_source(path, &template)
    }

    /// Parses `template`, reporting errors against `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] on a syntax error.
    pub fn from_source(source: &Path, template: &str) -> Result<Self, TemplateError> {
        debug!(path = %source.display(), "Parsing template");
        let mut handlebars = manifest_registry();
        handlebars
            .register_template_string(MANIFEST_TEMPLATE, template)
            .map_err(|e| TemplateError::Parse {
                path: source.display().to_string(),
                source: e,
            })?;

        Ok(Self {
            handlebars,
            source: source.to_path_buf(),
        })
    }

    /// Path the template was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl ManifestRenderer for HandlebarsRenderer {
    fn render(&self, data: &AppData, out: &mut dyn Write) -> Result<(), TemplateError> {
        self.handlebars
            .render_to_write(MANIFEST_TEMPLATE, data, out)
            .map_err(|source| TemplateError::Render {
                path: self.source.display().to_string(),
                source,
            })
    }
}

/// Creates (or truncates) `output_path` and streams the rendered manifest
/// into it.
///
/// Nothing is rolled back on failure; a render error leaves whatever was
/// written so far.
///
/// # Errors
///
/// Returns [`TemplateError`] if the file can't be created or written, or if
/// rendering fails.
pub fn write_manifest(
    renderer: &dyn ManifestRenderer,
    output_path: &Path,
    data: &AppData,
) -> Result<(), TemplateError> {
    let file = std::fs::File::create(output_path).map_err(|source| TemplateError::CreateOutput {
        path: output_path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    renderer.render(data, &mut writer)?;

    writer.flush().map_err(|source| TemplateError::WriteOutput {
        path: output_path.display().to_string(),
        source,
    })
}
