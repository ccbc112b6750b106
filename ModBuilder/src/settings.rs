//! Settings file (settings.toml)
//!
//! ```toml
//! [input]
//! languages = "data/languages.json"
//! locations = "data/locations.json"
//!
//! [output]
//! directory = "~/mcn/out"
//!
//! [[mods]]
//! game = "CK3"
//! id = "more_cultural_names"
//! name = "More Cultural Names"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cultural_names::Game;
use cultural_names::mods::{BuildOptions, ModOptions};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_output_dir() -> String {
    "out".to_string()
}

/// The full settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub mods: Vec<ModOptions>,
    /// Directory relative paths are resolved against; the settings file's
    /// own directory after [`Settings::load`].
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Data store locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    pub languages: String,
    pub locations: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub directory: String,
    #[serde(default)]
    pub verbose_comments: bool,
    #[serde(default)]
    pub parallel_fetch: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            verbose_comments: false,
            parallel_fetch: false,
        }
    }
}

impl Settings {
    /// `<config dir>/modbuilder/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("modbuilder").join("settings.toml"))
    }

    /// Load a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings: Self = toml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        tracing::info!(
            "Loaded settings from {} ({} mods)",
            path.display(),
            settings.mods.len()
        );
        Ok(settings)
    }

    /// Load from `path`, or from [`Settings::default_path`] when `None`.
    pub fn load_or_default_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path().ok_or(Error::NoSettingsPath)?),
        }
    }

    /// Parse settings text; relative paths resolve against the working directory.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    #[must_use]
    pub fn languages_path(&self) -> PathBuf {
        self.resolve_path(&self.input.languages)
    }

    #[must_use]
    pub fn locations_path(&self) -> PathBuf {
        self.resolve_path(&self.input.locations)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.output.directory)
    }

    /// Run-wide build options, with the output directory optionally overridden.
    #[must_use]
    pub fn build_options(&self, output_override: Option<&Path>) -> BuildOptions {
        let mut options = BuildOptions::new(
            output_override.map_or_else(|| self.output_dir(), Path::to_path_buf),
        );
        options.verbose_comments = self.output.verbose_comments;
        options.parallel_fetch = self.output.parallel_fetch;
        options
    }

    /// Configured mods, limited to `games` unless it is empty.
    #[must_use]
    pub fn mods_for(&self, games: &[Game]) -> Vec<&ModOptions> {
        self.mods
            .iter()
            .filter(|m| games.is_empty() || games.contains(&m.game))
            .collect()
    }

    /// Expand `~` and anchor relative paths at [`Settings::base_dir`].
    fn resolve_path(&self, raw: &str) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
        if expanded.is_absolute() {
            expanded
        } else {
            self.base_dir.join(expanded)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SETTINGS: &str = r#"
[input]
languages = "data/languages.json"
locations = "data/locations.json"

[output]
directory = "build"
parallel_fetch = true

[[mods]]
game = "CK2HIP"
id = "mcn_ck2"
name = "More Cultural Names"

[[mods]]
game = "CK3"
id = "mcn_ck3"
name = "More Cultural Names"
version = "2.1"
game_version = "1.12.*"

[[mods]]
game = "ImperatorRome"
id = "mcn_ir"
name = "More Cultural Names"
ui_languages = ["english"]
"#;

    #[test]
    fn test_parse_settings() {
        let settings = Settings::from_toml_str(SETTINGS).unwrap();

        assert_eq!(settings.mods.len(), 3);
        assert_eq!(settings.mods[0].game, Game::Ck2Hip);
        assert_eq!(settings.mods[0].version, "1.0");
        assert_eq!(settings.mods[1].descriptor().game_version, "1.12.*");
        assert_eq!(settings.mods[2].ui_languages(), vec!["english".to_string()]);
        assert!(settings.output.parallel_fetch);
        assert!(!settings.output.verbose_comments);
    }

    #[test]
    fn test_output_defaults() {
        let settings = Settings::from_toml_str(
            "[input]\nlanguages = \"l.json\"\nlocations = \"p.json\"\n",
        )
        .unwrap();

        assert_eq!(settings.output.directory, "out");
        assert!(settings.mods.is_empty());
        assert_eq!(settings.output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_game_is_rejected() {
        let err = Settings::from_toml_str(
            "[input]\nlanguages = \"l\"\nlocations = \"p\"\n\n[[mods]]\ngame = \"EU4\"\nid = \"x\"\nname = \"x\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, SETTINGS).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.languages_path(), dir.path().join("data/languages.json"));
        assert_eq!(settings.output_dir(), dir.path().join("build"));

        let build = settings.build_options(Some(Path::new("/tmp/elsewhere")));
        assert_eq!(build.output_dir, PathBuf::from("/tmp/elsewhere"));
        assert!(build.parallel_fetch);
    }

    #[test]
    fn test_mods_for_filters_by_game() {
        let settings = Settings::from_toml_str(SETTINGS).unwrap();

        assert_eq!(settings.mods_for(&[]).len(), 3);
        let ck3: Vec<_> = settings.mods_for(&[Game::Ck3]).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ck3, vec!["mcn_ck3"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::SettingsRead { .. }));
    }
}
