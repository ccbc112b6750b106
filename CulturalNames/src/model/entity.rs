//! On-disk record shapes of the naming database
//!
//! The data store files are JSON arrays of these records. They are converted
//! into the [`super`] model types right after loading.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{GameId, Language, Location, LocationName, ParentRef};

/// `gameIds[]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameIdEntity {
    pub game: String,
    pub id: String,
    /// Absent and `""` are different root markers; see [`ParentRef`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_id: Option<u32>,
}

/// `names[]` entry of a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEntity {
    pub language_id: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One record of `locations.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntity {
    pub id: String,
    #[serde(default)]
    pub game_ids: Vec<GameIdEntity>,
    #[serde(default)]
    pub names: Vec<NameEntity>,
}

/// One record of `languages.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntity {
    pub id: String,
    #[serde(default)]
    pub fallback_languages: Vec<String>,
    #[serde(default)]
    pub game_ids: Vec<GameIdEntity>,
}

impl From<GameIdEntity> for GameId {
    fn from(entity: GameIdEntity) -> Self {
        Self {
            parent: ParentRef::from_raw(entity.parent_id.as_deref()),
            game: entity.game,
            id: entity.id,
            order: entity.order,
            province_id: entity.province_id,
        }
    }
}

impl From<NameEntity> for LocationName {
    fn from(entity: NameEntity) -> Self {
        Self {
            language_id: entity.language_id,
            value: entity.value,
            comment: entity.comment.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl From<LocationEntity> for Location {
    fn from(entity: LocationEntity) -> Self {
        let mut names = IndexMap::with_capacity(entity.names.len());
        for name in entity.names {
            names
                .entry(name.language_id.clone())
                .or_insert_with(|| LocationName::from(name));
        }

        Self {
            id: entity.id,
            names,
            game_ids: entity.game_ids.into_iter().map(GameId::from).collect(),
        }
    }
}

impl From<LanguageEntity> for Language {
    fn from(entity: LanguageEntity) -> Self {
        Self {
            id: entity.id,
            fallback_languages: entity.fallback_languages,
            game_ids: entity.game_ids.into_iter().map(GameId::from).collect(),
        }
    }
}
