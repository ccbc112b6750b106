//! Read-only access to the naming database
//!
//! The database is two JSON files: `languages.json` and `locations.json`,
//! each an array of records (see [`crate::model::entity`]).

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::game::Game;
use crate::model::entity::{LanguageEntity, LocationEntity};
use crate::model::{Language, Location};

/// All languages and locations of one run, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct NameDatabase {
    languages: IndexMap<String, Language>,
    locations: IndexMap<String, Location>,
}

impl NameDatabase {
    /// Build a database from already-loaded records, keeping file order.
    ///
    /// A repeated id keeps its first record.
    pub fn new(languages: Vec<Language>, locations: Vec<Location>) -> Self {
        let mut db = Self::default();
        for language in languages {
            db.languages.entry(language.id.clone()).or_insert(language);
        }
        for location in locations {
            db.locations.entry(location.id.clone()).or_insert(location);
        }
        db
    }

    /// Load both data store files.
    pub fn load<P: AsRef<Path>>(languages_path: P, locations_path: P) -> Result<Self> {
        let languages: Vec<LanguageEntity> = read_json_array(languages_path.as_ref())?;
        let locations: Vec<LocationEntity> = read_json_array(locations_path.as_ref())?;

        let db = Self::new(
            languages.into_iter().map(Language::from).collect(),
            locations.into_iter().map(Location::from).collect(),
        );

        tracing::info!(
            "Loaded {} languages and {} locations",
            db.languages.len(),
            db.locations.len()
        );
        Ok(db)
    }

    /// Parse both data sets from in-memory JSON text.
    pub fn from_json_str(languages_json: &str, locations_json: &str) -> Result<Self> {
        let languages: Vec<LanguageEntity> = serde_json::from_str(languages_json)?;
        let locations: Vec<LocationEntity> = serde_json::from_str(locations_json)?;

        Ok(Self::new(
            languages.into_iter().map(Language::from).collect(),
            locations.into_iter().map(Location::from).collect(),
        ))
    }

    pub fn languages(&self) -> impl ExactSizeIterator<Item = &Language> {
        self.languages.values()
    }

    pub fn locations(&self) -> impl ExactSizeIterator<Item = &Location> {
        self.locations.values()
    }

    #[must_use]
    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.get(id)
    }

    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Languages with at least one identity in `game`.
    pub fn languages_in(&self, game: Game) -> impl Iterator<Item = &Language> {
        self.languages().filter(move |l| l.is_in_game(game))
    }

    /// Locations with at least one identity in `game`.
    pub fn locations_in(&self, game: Game) -> impl Iterator<Item = &Location> {
        self.locations().filter(move |l| l.is_in_game(game))
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::DataParse {
        path: path.to_path_buf(),
        source,
    })
}
