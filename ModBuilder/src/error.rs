use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CulturalNames error: {0}")]
    CulturalNames(#[from] cultural_names::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read settings {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no settings file given and no config directory on this system")]
    NoSettingsPath,

    #[error("{failed} of {total} mods failed to build")]
    BuildFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
