//! Crusader Kings III landed titles
//!
//! ```text
//! c_paris = {
//!     cultural_names = {
//!         french = "Paris"
//!     }
//!
//!     b_paris = {
//!         province = 1234
//!
//!         cultural_names = {
//!             latin = "Lutetia"
//!         }
//!     }
//! }
//! ```
//!
//! Every title is written, localised or not, except baronies without
//! localisations. Siblings follow their `order` field. The file is CRLF with a
//! UTF-8 byte-order mark.

use crate::localisation::Localisation;
use crate::model::GameId;
use crate::utils::{CRLF, UTF8_BOM};

use super::layout::{TitleLayout, step, write_names};
use super::tier::Tier;

/// Layout of the CK3 landed-titles file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ck3Layout;

impl TitleLayout for Ck3Layout {
    fn newline(&self) -> &'static str {
        CRLF
    }

    fn preamble(&self) -> &'static str {
        UTF8_BOM
    }

    fn order_siblings(&self, siblings: &mut [&GameId]) {
        // Stable: records without an order come first, ties keep data store order.
        siblings.sort_by_key(|g| g.order);
    }

    fn keep(&self, _node: &GameId, tier: Tier, localisations: &[&Localisation]) -> bool {
        tier != Tier::Barony || !localisations.is_empty()
    }

    fn write_content(
        &self,
        out: &mut String,
        node: &GameId,
        tier: Tier,
        indent: &str,
        localisations: &[&Localisation],
    ) {
        let newline = self.newline();
        let inner = format!("{indent}{}", step());

        if tier == Tier::Barony {
            out.push_str(&inner);
            out.push_str("province = ");
            if let Some(province_id) = node.province_id {
                out.push_str(&province_id.to_string());
            } else {
                tracing::warn!("Barony {} has no province id", node.id);
            }
            out.push_str(newline);
            out.push_str(newline);
        }

        if !localisations.is_empty() {
            out.push_str(&inner);
            out.push_str("cultural_names = {");
            out.push_str(newline);

            write_names(out, &format!("{inner}{}", step()), localisations, newline);

            out.push_str(&inner);
            out.push('}');
            out.push_str(newline);
        }
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

    fn title(game_id: GameId) -> Location {
        Location::new(game_id.id.clone()).with_game_id(game_id)
    }

    fn render(locations: &[Location], localisations: &[Localisation]) -> String {
        let forest = TitleForest::build(locations, Game::Ck3);
        let index = LocalisationIndex::new(localisations);
        TitleWriter::new(Ck3Layout, &forest, &index).render().unwrap()
    }

    fn crlf(lines: &[&str]) -> String {
        format!("{UTF8_BOM}{}", lines.join(CRLF))
    }

    #[test]
    fn test_unlocalised_county_keeps_localised_barony() {
        let locations = vec![
            title(GameId::new(Game::Ck3, "c_test")),
            title(
                GameId::new(Game::Ck3, "b_test")
                    .with_parent_id("c_test")
                    .with_province(42),
            ),
        ];
        let localisations = vec![loc("b_test", "french", "Test")];

        let expected = crlf(&[
            "c_test = {",
            "                b_test = {",
            "                    province = 42",
            "",
            "                    cultural_names = {",
            "                        french = \"Test\"",
            "                    }",
            "                }",
            "}",
            "",
        ]);
        assert_eq!(render(&locations, &localisations), expected);
    }

    #[test]
    fn test_unlocalised_barony_is_skipped() {
        let locations = vec![
            title(GameId::new(Game::Ck3, "c_test").with_parent(ParentRef::EmptyRoot)),
            title(
                GameId::new(Game::Ck3, "b_test")
                    .with_parent_id("c_test")
                    .with_province(42),
            ),
        ];

        let expected = crlf(&["c_test = {", "}", ""]);
        assert_eq!(render(&locations, &[]), expected);
    }

    #[test]
    fn test_localised_title_separates_names_from_children() {
        let locations = vec![
            title(GameId::new(Game::Ck3, "d_paris")),
            title(GameId::new(Game::Ck3, "c_paris").with_parent_id("d_paris")),
        ];
        let localisations = vec![
            loc("d_paris", "french", "Paris"),
            loc("c_paris", "latin", "Lutetia"),
        ];

        let expected = crlf(&[
            "d_paris = {",
            "    cultural_names = {",
            "        french = \"Paris\"",
            "    }",
            "",
            "            c_paris = {",
            "                cultural_names = {",
            "                    latin = \"Lutetia\"",
            "                }",
            "            }",
            "}",
            "",
        ]);
        assert_eq!(render(&locations, &localisations), expected);
    }

    #[test]
    fn test_siblings_follow_order_field() {
        let locations = vec![
            title(GameId::new(Game::Ck3, "k_b").with_order(2)),
            title(GameId::new(Game::Ck3, "k_c")),
            title(GameId::new(Game::Ck3, "k_a").with_order(1)),
        ];

        let output = render(&locations, &[]);
        let positions: Vec<_> = ["k_c", "k_a", "k_b"]
            .iter()
            .map(|id| output.find(id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
