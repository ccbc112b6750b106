//! Location and language records
//!
//! These are the in-memory shapes of the naming database. They are loaded once
//! per run (see [`crate::store`]) and never mutated afterwards; every builder
//! works from shared references into them.

pub mod entity;

use indexmap::IndexMap;

use crate::game::Game;

/// Where a title sits relative to its parent.
///
/// The data store encodes two different "no parent" markers: a record without
/// a `parentId` at all, and a record whose `parentId` is the empty string. The
/// title serializers walk both as separate root groups, `NoParent` first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentRef {
    /// `parentId` absent.
    NoParent,
    /// `parentId` present but empty.
    EmptyRoot,
    /// `parentId` names another title of the same engine.
    Title(String),
}

impl ParentRef {
    /// The two root groups, in the order they are rendered.
    pub const ROOTS: [ParentRef; 2] = [ParentRef::NoParent, ParentRef::EmptyRoot];

    /// Interpret a raw `parentId` value.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::NoParent,
            Some("") => Self::EmptyRoot,
            Some(id) => Self::Title(id.to_string()),
        }
    }

    /// Whether a title with this parent is rendered at the top level.
    ///
    /// A whitespace-only parent id counts as a root for layout purposes even
    /// though it is grouped as a (dangling) title reference.
    #[must_use]
    pub fn is_root(&self) -> bool {
        match self {
            Self::NoParent | Self::EmptyRoot => true,
            Self::Title(id) => id.trim().is_empty(),
        }
    }

    /// The referenced title id, if any.
    #[must_use]
    pub fn title_id(&self) -> Option<&str> {
        match self {
            Self::Title(id) => Some(id),
            _ => None,
        }
    }
}

/// An identity of a location or language inside one engine's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameId {
    /// Engine key (see [`Game::key`]).
    pub game: String,
    /// Identifier unique within the engine, e.g. `c_paris` or `romanian`.
    pub id: String,
    /// Link to the parent title.
    pub parent: ParentRef,
    /// Sibling order; only CK3 titles carry one.
    pub order: Option<i32>,
    /// Province number of a barony.
    pub province_id: Option<u32>,
}

impl GameId {
    /// Create a root-less record (`parentId` absent) for `game`.
    pub fn new(game: Game, id: impl Into<String>) -> Self {
        Self {
            game: game.key().to_string(),
            id: id.into(),
            parent: ParentRef::NoParent,
            order: None,
            province_id: None,
        }
    }

    /// Set the parent reference.
    #[must_use]
    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent = parent;
        self
    }

    /// Set the parent to another title id.
    #[must_use]
    pub fn with_parent_id(self, parent_id: impl Into<String>) -> Self {
        self.with_parent(ParentRef::Title(parent_id.into()))
    }

    /// Set the sibling order.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the barony province number.
    #[must_use]
    pub fn with_province(mut self, province_id: u32) -> Self {
        self.province_id = Some(province_id);
        self
    }
}

/// One display name of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationName {
    /// Data store language id.
    pub language_id: String,
    /// The display string.
    pub value: String,
    /// Free-form note carried through to outputs that support comments.
    pub comment: Option<String>,
}

/// A place with names in several languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: String,
    /// Names keyed by data store language id, in file order.
    pub names: IndexMap<String, LocationName>,
    pub game_ids: Vec<GameId>,
}

impl Location {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: IndexMap::new(),
            game_ids: Vec::new(),
        }
    }

    /// Add a name. An existing name for the same language is kept.
    #[must_use]
    pub fn with_name(mut self, language_id: impl Into<String>, value: impl Into<String>) -> Self {
        let language_id = language_id.into();
        self.names
            .entry(language_id.clone())
            .or_insert_with(|| LocationName {
                language_id,
                value: value.into(),
                comment: None,
            });
        self
    }

    #[must_use]
    pub fn with_game_id(mut self, game_id: GameId) -> Self {
        self.game_ids.push(game_id);
        self
    }

    /// The name recorded for `language_id`, without fallbacks.
    #[must_use]
    pub fn name(&self, language_id: &str) -> Option<&LocationName> {
        self.names.get(language_id)
    }

    /// This location's identities in `game`.
    pub fn game_ids_for(&self, game: Game) -> impl Iterator<Item = &GameId> {
        self.game_ids.iter().filter(move |g| game.matches(&g.game))
    }

    /// Whether the location exists in `game` at all.
    #[must_use]
    pub fn is_in_game(&self, game: Game) -> bool {
        self.game_ids_for(game).next().is_some()
    }
}

/// A language (or culture) and the languages to try when it has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: String,
    /// Consulted in order after `id` itself.
    pub fallback_languages: Vec<String>,
    pub game_ids: Vec<GameId>,
}

impl Language {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fallback_languages: Vec::new(),
            game_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_languages
            .extend(fallbacks.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_game_id(mut self, game_id: GameId) -> Self {
        self.game_ids.push(game_id);
        self
    }

    /// The candidate chain: this language first, then its fallbacks.
    pub fn lookup_chain(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.fallback_languages.iter().map(String::as_str))
    }

    /// This language's identities in `game`.
    pub fn game_ids_for(&self, game: Game) -> impl Iterator<Item = &GameId> {
        self.game_ids.iter().filter(move |g| game.matches(&g.game))
    }

    #[must_use]
    pub fn is_in_game(&self, game: Game) -> bool {
        self.game_ids_for(game).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_ref_from_raw_keeps_sentinels_apart() {
        assert_eq!(ParentRef::from_raw(None), ParentRef::NoParent);
        assert_eq!(ParentRef::from_raw(Some("")), ParentRef::EmptyRoot);
        assert_eq!(
            ParentRef::from_raw(Some("k_france")),
            ParentRef::Title("k_france".to_string())
        );
    }

    #[test]
    fn test_parent_ref_is_root() {
        assert!(ParentRef::NoParent.is_root());
        assert!(ParentRef::EmptyRoot.is_root());
        assert!(ParentRef::Title("  ".to_string()).is_root());
        assert!(!ParentRef::Title("d_paris".to_string()).is_root());
    }

    #[test]
    fn test_location_first_name_per_language_wins() {
        let location = Location::new("paris")
            .with_name("French", "Paris")
            .with_name("French", "Lutèce");
        assert_eq!(location.names.len(), 1);
        assert_eq!(location.name("French").unwrap().value, "Paris");
    }

    #[test]
    fn test_lookup_chain_starts_with_own_id() {
        let language = Language::new("Aromanian").with_fallbacks(["Romanian", "Latin"]);
        let chain: Vec<_> = language.lookup_chain().collect();
        assert_eq!(chain, vec!["Aromanian", "Romanian", "Latin"]);
    }

    #[test]
    fn test_game_ids_for_filters_by_engine() {
        let location = Location::new("paris")
            .with_game_id(GameId::new(Game::Ck3, "c_paris"))
            .with_game_id(GameId::new(Game::ImperatorRome, "1734"));
        let ids: Vec<_> = location.game_ids_for(Game::Ck3).map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["c_paris"]);
        assert!(!location.is_in_game(Game::Ck2Hip));
    }
}
