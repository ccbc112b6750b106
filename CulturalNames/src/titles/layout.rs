//! Per-engine rules for landed-titles files

use crate::localisation::Localisation;
use crate::model::GameId;

use super::tier::{SPACES_PER_TIER, Tier};

/// What varies between engines when a title tree is written.
///
/// The walk itself lives in [`super::TitleWriter`]; a layout only decides
/// sibling order, which nodes survive, and the lines between a node's opening
/// brace and its children.
pub trait TitleLayout {
    /// Line terminator.
    fn newline(&self) -> &'static str;

    /// Text written before the first title.
    fn preamble(&self) -> &'static str {
        ""
    }

    /// Reorder the children of one parent. Keeps data store order by default.
    fn order_siblings(&self, _siblings: &mut [&GameId]) {}

    /// Whether `node` is written. A dropped node takes its whole subtree
    /// with it.
    fn keep(&self, node: &GameId, tier: Tier, localisations: &[&Localisation]) -> bool;

    /// Write the lines that follow `<id> = {`.
    ///
    /// `indent` is the indentation of the node's own opening line.
    fn write_content(
        &self,
        out: &mut String,
        node: &GameId,
        tier: Tier,
        indent: &str,
        localisations: &[&Localisation],
    );
}

/// One indentation step.
pub(crate) fn step() -> String {
    " ".repeat(SPACES_PER_TIER)
}

/// Append `LANG = "Name"` lines at `indent`.
pub(crate) fn write_names(out: &mut String, indent: &str, localisations: &[&Localisation], newline: &str) {
    for localisation in localisations {
        out.push_str(indent);
        out.push_str(&localisation.language_id);
        out.push_str(" = \"");
        out.push_str(&localisation.name);
        out.push('"');
        out.push_str(newline);
    }
}
