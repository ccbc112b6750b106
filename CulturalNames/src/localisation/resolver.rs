//! Name lookup through a language's fallback chain

use crate::error::{Error, Result};
use crate::model::{Language, Location, LocationName};

/// A name found for a (location, language) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedName<'a> {
    /// The matching name entry.
    pub name: &'a LocationName,
    /// The language in the chain that had the name. Equals the requested
    /// language unless a fallback was used.
    pub matched_language: &'a str,
}

impl ResolvedName<'_> {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.name.value
    }

    #[must_use]
    pub fn used_fallback(&self, language: &Language) -> bool {
        self.matched_language != language.id
    }
}

/// Resolve the display name of `location` in `language`.
///
/// Tries `language.id` first, then each of `language.fallback_languages` in
/// order, and returns the first hit.
///
/// # Errors
/// Returns [`Error::NameNotFound`] when no language in the chain has a name.
pub fn resolve<'a>(location: &'a Location, language: &'a Language) -> Result<ResolvedName<'a>> {
    language
        .lookup_chain()
        .find_map(|candidate| {
            location.name(candidate).map(|name| ResolvedName {
                name,
                matched_language: candidate,
            })
        })
        .ok_or_else(|| Error::NameNotFound {
            location: location.id.clone(),
            language: language.id.clone(),
        })
}
