//! Landed-titles files
//!
//! Title records reference their parent by id. [`TitleForest`] indexes them
//! by parent once, [`TitleWriter`] walks the result depth-first, and a
//! [`TitleLayout`] supplies the engine-specific rules:
//!
//! - [`Ck2Layout`]: platform newlines, unlocalised titles pruned with their
//!   whole subtree
//! - [`Ck3Layout`]: CRLF plus BOM, `order`-sorted siblings, `cultural_names`
//!   blocks, only unlocalised baronies pruned

pub mod ck2;
pub mod ck3;
pub mod forest;
pub mod layout;
pub mod tier;
pub mod writer;

pub use ck2::Ck2Layout;
pub use ck3::Ck3Layout;
pub use forest::TitleForest;
pub use layout::TitleLayout;
pub use tier::{SPACES_PER_TIER, Tier};
pub use writer::TitleWriter;

use crate::error::Result;
use crate::localisation::{Localisation, LocalisationIndex};

/// Render a full landed-titles file with `layout`.
pub fn render_landed_titles<L: TitleLayout>(
    layout: L,
    forest: &TitleForest<'_>,
    localisations: &[Localisation],
) -> Result<String> {
    let index = LocalisationIndex::new(localisations);
    TitleWriter::new(layout, forest, &index).render()
}
