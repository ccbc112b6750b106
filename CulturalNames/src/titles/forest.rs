//! Parent -> children index over an engine's title records

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::game::Game;
use crate::model::{GameId, Location, ParentRef};

/// The title hierarchy of one engine, rebuilt from `parentId` links.
///
/// Built once per render; every lookup during the tree walk is a map access
/// instead of a scan over all records. Children keep the order in which the
/// records appear in the data store.
#[derive(Debug)]
pub struct TitleForest<'a> {
    game: Game,
    children: IndexMap<ParentRef, Vec<&'a GameId>>,
    ids: HashSet<&'a str>,
    len: usize,
}

impl<'a> TitleForest<'a> {
    /// Index every `game` identity of `locations` by its parent.
    pub fn build<I>(locations: I, game: Game) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let mut children: IndexMap<ParentRef, Vec<&GameId>> = IndexMap::new();
        let mut ids = HashSet::new();
        let mut len = 0;

        for location in locations {
            for game_id in location.game_ids_for(game) {
                children
                    .entry(game_id.parent.clone())
                    .or_default()
                    .push(game_id);
                ids.insert(game_id.id.as_str());
                len += 1;
            }
        }

        Self {
            game,
            children,
            ids,
            len,
        }
    }

    #[must_use]
    pub fn game(&self) -> Game {
        self.game
    }

    /// Number of title records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a title with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Direct children of `parent`, in data store order.
    #[must_use]
    pub fn children(&self, parent: &ParentRef) -> &[&'a GameId] {
        self.children.get(parent).map_or(&[], Vec::as_slice)
    }

    /// Direct children of the title `id`.
    #[must_use]
    pub fn children_of(&self, id: &str) -> &[&'a GameId] {
        self.children(&ParentRef::Title(id.to_string()))
    }

    /// Records whose parent id names no title of this engine.
    ///
    /// These are never reached from a root and so never rendered.
    #[must_use]
    pub fn dangling(&self) -> Vec<&'a GameId> {
        self.children
            .iter()
            .filter(|(parent, _)| {
                parent
                    .title_id()
                    .is_some_and(|id| !self.contains(id))
            })
            .flat_map(|(_, children)| children.iter().copied())
            .collect()
    }
}
