//! Crusader Kings II landed titles
//!
//! ```text
//! k_france = {
//!     french = "France"
//!     german = "Frankreich"
//!
//!     d_paris = {
//!         ...
//!     }
//! }
//! ```
//!
//! A title without localisations is skipped together with everything under
//! it, even descendants that do have localisations.

use crate::localisation::Localisation;
use crate::model::GameId;
use crate::utils::LINE_ENDING;

use super::layout::{TitleLayout, step, write_names};
use super::tier::Tier;

/// Layout of the CK2 (HIP) landed-titles file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ck2Layout;

impl TitleLayout for Ck2Layout {
    fn newline(&self) -> &'static str {
        LINE_ENDING
    }

    fn keep(&self, _node: &GameId, _tier: Tier, localisations: &[&Localisation]) -> bool {
        !localisations.is_empty()
    }

    fn write_content(
        &self,
        out: &mut String,
        _node: &GameId,
        _tier: Tier,
        indent: &str,
        localisations: &[&Localisation],
    ) {
        let names_indent = format!("{indent}{}", step());
        write_names(out, &names_indent, localisations, self.newline());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::Game;
    use crate::localisation::LocalisationIndex;
    use crate::model::{Location, ParentRef};
    use crate::titles::{TitleForest, TitleWriter};

    fn loc(location: &str, language: &str, name: &str) -> Localisation {
        Localisation {
            location_id: location.to_string(),
            language_id: language.to_string(),
            name: name.to_string(),
            source_language_id: language.to_string(),
            comment: None,
        }
    }

    fn title(id: &str, parent: ParentRef) -> Location {
        Location::new(id).with_game_id(GameId::new(Game::Ck2Hip, id).with_parent(parent))
    }

    fn render(locations: &[Location], localisations: &[Localisation]) -> String {
        let forest = TitleForest::build(locations, Game::Ck2Hip);
        let index = LocalisationIndex::new(localisations);
        TitleWriter::new(Ck2Layout, &forest, &index).render().unwrap()
    }

    #[test]
    fn test_nested_titles() {
        let locations = vec![
            title("k_france", ParentRef::EmptyRoot),
            title("d_paris", ParentRef::Title("k_france".to_string())),
        ];
        let localisations = vec![
            loc("k_france", "german", "Frankreich"),
            loc("k_france", "french", "France"),
            loc("d_paris", "latin", "Lutetia"),
        ];

        let expected = [
            "k_france = {",
            "    french = \"France\"",
            "    german = \"Frankreich\"",
            "",
            "        d_paris = {",
            "            latin = \"Lutetia\"",
            "        }",
            "}",
            "",
        ]
        .join(LINE_ENDING);
        assert_eq!(render(&locations, &localisations), expected);
    }

    #[test]
    fn test_unlocalised_title_hides_its_subtree() {
        let locations = vec![
            title("c_test", ParentRef::NoParent),
            title("b_test", ParentRef::Title("c_test".to_string())),
        ];
        let localisations = vec![loc("b_test", "french", "Test")];

        assert_eq!(render(&locations, &localisations), "");
    }

    #[test]
    fn test_no_parent_group_before_empty_parent_group() {
        let locations = vec![
            title("e_rome", ParentRef::EmptyRoot),
            title("e_persia", ParentRef::NoParent),
        ];
        let localisations = vec![
            loc("e_rome", "latin", "Roma"),
            loc("e_persia", "latin", "Persia"),
        ];

        let output = render(&locations, &localisations);
        let persia = output.find("e_persia").unwrap();
        let rome = output.find("e_rome").unwrap();
        assert!(persia < rome);
    }
}
