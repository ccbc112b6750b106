//! Localised names scoped to one game engine
//!
//! [`resolve`] finds a location's name for a language through its fallback
//! chain; [`collect`] runs it over every (location, language) pair of an
//! engine and returns the results in the order the file writers expect.

mod collector;
mod resolver;

pub use collector::{SORT_KEY_WIDTH, collect, collect_parallel, padded_sort_key};
pub use resolver::{ResolvedName, resolve};

use indexmap::IndexMap;

/// One resolved name in an engine's identifier space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localisation {
    /// Engine id of the location (title id or province number).
    pub location_id: String,
    /// Engine id of the language (culture key).
    pub language_id: String,
    /// The display name.
    pub name: String,
    /// Data store language whose name was used, after fallbacks.
    pub source_language_id: String,
    /// Comment attached to the name entry.
    pub comment: Option<String>,
}

/// Localisations grouped by engine location id.
///
/// Each group is sorted by language id. Groups keep the order in which their
/// location first appears in the input.
#[derive(Debug, Default)]
pub struct LocalisationIndex<'a> {
    by_location: IndexMap<&'a str, Vec<&'a Localisation>>,
}

impl<'a> LocalisationIndex<'a> {
    pub fn new(localisations: &'a [Localisation]) -> Self {
        let mut by_location: IndexMap<&str, Vec<&Localisation>> = IndexMap::new();
        for localisation in localisations {
            by_location
                .entry(localisation.location_id.as_str())
                .or_default()
                .push(localisation);
        }
        for group in by_location.values_mut() {
            group.sort_by(|a, b| a.language_id.cmp(&b.language_id));
        }
        Self { by_location }
    }

    /// The localisations of one engine location id, sorted by language.
    #[must_use]
    pub fn for_location(&self, location_id: &str) -> &[&'a Localisation] {
        self.by_location
            .get(location_id)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(location: &str, language: &str, name: &str) -> Localisation {
        Localisation {
            location_id: location.to_string(),
            language_id: language.to_string(),
            name: name.to_string(),
            source_language_id: language.to_string(),
            comment: None,
        }
    }

    #[test]
    fn test_index_groups_and_sorts_by_language() {
        let localisations = vec![
            loc("c_paris", "german", "Paris"),
            loc("c_lyon", "latin", "Lugdunum"),
            loc("c_paris", "french", "Paris"),
            loc("c_paris", "breton", "Pariz"),
        ];
        let index = LocalisationIndex::new(&localisations);

        let languages: Vec<_> = index
            .for_location("c_paris")
            .iter()
            .map(|l| l.language_id.as_str())
            .collect();
        assert_eq!(languages, vec!["breton", "french", "german"]);
        assert_eq!(index.for_location("c_lyon").len(), 1);
        assert!(index.for_location("c_rome").is_empty());
    }
}
