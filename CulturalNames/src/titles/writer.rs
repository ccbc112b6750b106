//! Depth-first rendering of a title forest

use crate::error::{Error, Result};
use crate::localisation::LocalisationIndex;
use crate::model::{GameId, ParentRef};

use super::forest::TitleForest;
use super::layout::TitleLayout;
use super::tier::Tier;

/// Renders a [`TitleForest`] as nested `id = { ... }` blocks.
pub struct TitleWriter<'w, 'a, L> {
    layout: L,
    forest: &'w TitleForest<'a>,
    localisations: &'w LocalisationIndex<'a>,
}

impl<'w, 'a, L: TitleLayout> TitleWriter<'w, 'a, L> {
    pub fn new(
        layout: L,
        forest: &'w TitleForest<'a>,
        localisations: &'w LocalisationIndex<'a>,
    ) -> Self {
        Self {
            layout,
            forest,
            localisations,
        }
    }

    /// Render the whole file.
    ///
    /// Titles without a `parentId` come first, then titles whose `parentId`
    /// is empty.
    ///
    /// # Errors
    /// Returns [`Error::CyclicHierarchy`] if a title is reached again below
    /// itself.
    pub fn render(&self) -> Result<String> {
        let mut out = String::from(self.layout.preamble());
        let mut path = Vec::new();

        for root in &ParentRef::ROOTS {
            self.render_children(root, &mut path, &mut out)?;
        }

        Ok(out)
    }

    fn render_children(
        &self,
        parent: &ParentRef,
        path: &mut Vec<&'a str>,
        out: &mut String,
    ) -> Result<()> {
        let mut siblings: Vec<&'a GameId> = self.forest.children(parent).to_vec();
        self.layout.order_siblings(&mut siblings);

        for node in siblings {
            let tier = Tier::of(&node.id);
            let localisations = self.localisations.for_location(&node.id);

            if !self.layout.keep(node, tier, localisations) {
                continue;
            }

            if path.contains(&node.id.as_str()) {
                return Err(Error::CyclicHierarchy {
                    game: self.forest.game().to_string(),
                    id: node.id.clone(),
                });
            }

            let newline = self.layout.newline();
            let indent = indentation(node, tier);

            out.push_str(&indent);
            out.push_str(&node.id);
            out.push_str(" = {");
            out.push_str(newline);

            self.layout
                .write_content(out, node, tier, &indent, localisations);

            path.push(&node.id);
            let mut child_content = String::new();
            self.render_children(&ParentRef::Title(node.id.clone()), path, &mut child_content)?;
            path.pop();

            if !child_content.trim().is_empty() {
                if !localisations.is_empty() {
                    out.push_str(newline);
                }
                out.push_str(&child_content);
            }

            out.push_str(&indent);
            out.push('}');
            out.push_str(newline);
        }

        Ok(())
    }
}

/// Top-level titles start at column 0 whatever their tier.
fn indentation(node: &GameId, tier: Tier) -> String {
    if node.parent.is_root() {
        String::new()
    } else {
        " ".repeat(tier.indent_width())
    }
}
