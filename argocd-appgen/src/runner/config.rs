//! Runner configuration.

use crate::config::Settings;
use std::path::{Path, PathBuf};

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory the run is started from.
    workdir: PathBuf,
    /// Layout settings.
    settings: Settings,
}

impl RunnerConfig {
    /// Creates a configuration with the default layout.
    pub fn new(workdir: PathBuf) -> Self {
        Self {
            workdir,
            settings: Settings::default(),
        }
    }

    /// Sets custom layout settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the working directory.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the layout settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
