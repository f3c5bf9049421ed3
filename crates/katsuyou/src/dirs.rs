use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Directories helper.
pub(crate) struct Dirs {
    project_dirs: ProjectDirs,
}

impl Dirs {
    /// Open directories for this project.
    pub(crate) fn open() -> Result<Dirs> {
        Ok(Dirs {
            project_dirs: ProjectDirs::from("se", "tedro", "katsuyou")
                .context("Could not figure out base directories")?,
        })
    }

    /// Get the path of the configuration file.
    pub(crate) fn config_path(&self) -> PathBuf {
        self.project_dirs.config_dir().join("config.toml")
    }
}
