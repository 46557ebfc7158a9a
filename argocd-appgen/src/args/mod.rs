//! Validated inputs for a single generation run.

mod error;

pub use error::ArgsError;

/// The three caller-supplied values driving a run.
///
/// Construction goes through [`AppArgs::new`], so a value of this type
/// never holds an empty field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppArgs {
    app_name: String,
    chart_name: String,
    namespace: String,
}

impl AppArgs {
    /// Validates and wraps the app name, chart name and namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::EmptyArgument`] for the first empty value,
    /// checked in argument order, and [`ArgsError::InvalidAppName`] when the
    /// app name would escape the output directory.
    pub fn new(
        app_name: impl Into<String>,
        chart_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, ArgsError> {
        let app_name = app_name.into();
        let chart_name = chart_name.into();
        let namespace = namespace.into();

        for (field, value) in [
            ("appName", &app_name),
            ("chartName", &chart_name),
            ("namespace", &namespace),
        ] {
            if value.is_empty() {
                return Err(ArgsError::EmptyArgument { field });
            }
        }

        if app_name == "." || app_name == ".." || app_name.contains(['/', '\\']) {
            return Err(ArgsError::InvalidAppName { value: app_name });
        }

        Ok(Self {
            app_name,
            chart_name,
            namespace,
        })
    }

    /// Name of the application; also the output file's base name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn chart_name(&self) -> &str {
        &self.chart_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
