//! Per-mod and per-run build options

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::formats::{DEFAULT_UI_LANGUAGES, Descriptor};
use crate::game::Game;

fn default_version() -> String {
    "1.0".to_string()
}

fn default_picture() -> String {
    "mcn.png".to_string()
}

/// One mod package to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModOptions {
    pub game: Game,
    /// Folder and descriptor name of the mod.
    pub id: String,
    /// Display name shown in the launcher.
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Supported game version; engine default when absent.
    #[serde(default)]
    pub game_version: Option<String>,
    #[serde(default = "default_picture")]
    pub picture: String,
    /// Landed-titles file name; engine default when absent.
    #[serde(default)]
    pub landed_titles_file: Option<String>,
    /// UI languages that get a province-name localisation file.
    #[serde(default)]
    pub ui_languages: Option<Vec<String>>,
}

impl ModOptions {
    pub fn new(game: Game, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            game,
            id: id.into(),
            name: name.into(),
            version: default_version(),
            game_version: None,
            picture: default_picture(),
            landed_titles_file: None,
            ui_languages: None,
        }
    }

    /// Landed-titles file name for this mod.
    #[must_use]
    pub fn landed_titles_file_name(&self) -> &str {
        self.landed_titles_file
            .as_deref()
            .unwrap_or(match self.game {
                Game::Ck2Hip => "0_HIP_MoreCulturalNames.txt",
                _ => "999_MoreCulturalNames.txt",
            })
    }

    /// UI languages for province-name localisation files.
    #[must_use]
    pub fn ui_languages(&self) -> Vec<String> {
        self.ui_languages.clone().unwrap_or_else(|| {
            DEFAULT_UI_LANGUAGES
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    /// Values for the descriptor files.
    #[must_use]
    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            mod_id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            game_version: self
                .game_version
                .clone()
                .unwrap_or_else(|| self.game.default_game_version().to_string()),
            picture: self.picture.clone(),
        }
    }
}

/// Options that apply to every mod of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Root of the output tree; each game gets a subdirectory.
    pub output_dir: PathBuf,
    /// Add `# Language=` comments where the format allows them.
    pub verbose_comments: bool,
    /// Resolve names on the rayon thread pool.
    pub parallel_fetch: bool,
}

impl BuildOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            verbose_comments: false,
            parallel_fetch: false,
        }
    }

    /// `<output>/<game key>`
    #[must_use]
    pub fn game_dir(&self, game: Game) -> PathBuf {
        self.output_dir.join(game.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_engine() {
        let ck2 = ModOptions::new(Game::Ck2Hip, "mcn_ck2", "MCN");
        let ck3 = ModOptions::new(Game::Ck3, "mcn_ck3", "MCN");
        assert_eq!(ck2.landed_titles_file_name(), "0_HIP_MoreCulturalNames.txt");
        assert_eq!(ck3.landed_titles_file_name(), "999_MoreCulturalNames.txt");
        assert_eq!(ck3.descriptor().game_version, "1.0.*");
        assert_eq!(ck3.ui_languages().len(), 4);
    }

    #[test]
    fn test_overrides() {
        let mut options = ModOptions::new(Game::ImperatorRome, "mcn_ir", "MCN");
        options.game_version = Some("2.0.*".to_string());
        options.ui_languages = Some(vec!["english".to_string()]);

        assert_eq!(options.descriptor().game_version, "2.0.*");
        assert_eq!(options.ui_languages(), vec!["english".to_string()]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: ModOptions =
            serde_json::from_str(r#"{"game": "CK3", "id": "mcn", "name": "More Cultural Names"}"#)
                .unwrap();
        assert_eq!(options.game, Game::Ck3);
        assert_eq!(options.version, "1.0");
        assert_eq!(options.picture, "mcn.png");
    }
}
