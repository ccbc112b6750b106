//! Aggregation of resolved names for one engine

use rayon::prelude::*;

use crate::game::Game;
use crate::model::{Language, Location};
use crate::store::NameDatabase;

use super::{Localisation, resolve};

/// Width that location ids are left-padded to before sorting.
pub const SORT_KEY_WIDTH: usize = 64;

/// The primary sort key of a location id: the id right-aligned in
/// [`SORT_KEY_WIDTH`] columns.
///
/// Plain string comparison of these keys puts `"2"` before `"10"`, which is
/// numeric order for numeric ids of different lengths. Ids longer than the
/// width are left as they are.
#[must_use]
pub fn padded_sort_key(id: &str) -> String {
    format!("{id:>width$}", width = SORT_KEY_WIDTH)
}

/// Collect every localisation of `game`.
///
/// Only locations and languages that have an identity in `game` take part.
/// Each (location, language) pair with a resolvable name yields one record per
/// combination of the location's and the language's `game` identities.
///
/// The result is ordered by padded location id, then by language id.
pub fn collect(db: &NameDatabase, game: Game) -> Vec<Localisation> {
    let languages: Vec<&Language> = db.languages_in(game).collect();

    let mut localisations: Vec<Localisation> = db
        .locations_in(game)
        .flat_map(|location| location_localisations(location, &languages, game))
        .collect();

    sort_localisations(&mut localisations);
    tracing::debug!("Collected {} {} localisations", localisations.len(), game);
    localisations
}

/// Like [`collect`], but resolves locations on the rayon thread pool.
///
/// Per-location results are joined before sorting, so the output is identical
/// to [`collect`] for the same database.
pub fn collect_parallel(db: &NameDatabase, game: Game) -> Vec<Localisation> {
    let languages: Vec<&Language> = db.languages_in(game).collect();
    let locations: Vec<&Location> = db.locations_in(game).collect();

    let by_location: Vec<Vec<Localisation>> = locations
        .par_iter()
        .map(|location| location_localisations(location, &languages, game))
        .collect();

    let mut localisations: Vec<Localisation> = by_location.into_iter().flatten().collect();

    sort_localisations(&mut localisations);
    tracing::debug!(
        "Collected {} {} localisations from {} locations in parallel",
        localisations.len(),
        game,
        locations.len()
    );
    localisations
}

fn location_localisations(
    location: &Location,
    languages: &[&Language],
    game: Game,
) -> Vec<Localisation> {
    let mut localisations = Vec::new();

    for language in languages {
        let resolved = match resolve(location, language) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::trace!("{err}");
                continue;
            }
        };

        for location_game_id in location.game_ids_for(game) {
            for language_game_id in language.game_ids_for(game) {
                localisations.push(Localisation {
                    location_id: location_game_id.id.clone(),
                    language_id: language_game_id.id.clone(),
                    name: resolved.value().to_string(),
                    source_language_id: resolved.matched_language.to_string(),
                    comment: resolved.name.comment.clone(),
                });
            }
        }
    }

    localisations
}

fn sort_localisations(localisations: &mut [Localisation]) {
    localisations.sort_by_cached_key(|l| (padded_sort_key(&l.location_id), l.language_id.clone()));
}
