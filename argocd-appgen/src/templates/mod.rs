//! Manifest rendering using Handlebars.
//!
//! Templates see the five [`AppData`] fields and can use Handlebars
//! conditionals plus an `eq` helper.

mod app_data;
mod error;
mod renderer;

pub use app_data::{AppData, LATEST_REVISION};
pub use error::TemplateError;
pub use renderer::{write_manifest, HandlebarsRenderer, ManifestRenderer};
