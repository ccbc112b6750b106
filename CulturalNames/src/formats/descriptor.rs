//! Mod descriptor files
//!
//! The Paradox launcher finds a mod through `<id>.mod` next to the mod folder
//! and `descriptor.mod` inside it. Both get the same content.

use crate::game::Game;
use crate::utils::{CRLF, LINE_ENDING};

/// Values written into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub mod_id: String,
    pub name: String,
    pub version: String,
    pub game_version: String,
    pub picture: String,
}

/// Render the descriptor for `game`, or `None` for engines that take none.
#[must_use]
pub fn render_descriptor(game: Game, descriptor: &Descriptor) -> Option<String> {
    match game {
        Game::Ck2Hip => None,
        Game::Ck3 => Some(ck3_descriptor(descriptor)),
        Game::ImperatorRome => Some(imperator_descriptor(descriptor)),
    }
}

/// CK3 descriptor, CRLF, no trailing newline.
#[must_use]
pub fn ck3_descriptor(descriptor: &Descriptor) -> String {
    [
        format!("version = {}", descriptor.version),
        "tags = {".to_string(),
        "    \"Culture\"".to_string(),
        "    \"Historical\"".to_string(),
        "    \"Map\"".to_string(),
        "    \"Translation\"".to_string(),
        "}".to_string(),
        format!("name = \"{}\"", descriptor.name),
        format!("supported_version = \"{}\"", descriptor.game_version),
        format!("path = \"mod/{}\"", descriptor.mod_id),
        format!("picture = \"{}\"", descriptor.picture),
    ]
    .join(CRLF)
}

/// Imperator descriptor, platform newlines, no trailing newline.
///
/// `version` holds [`Descriptor::game_version`], not the mod version.
#[must_use]
pub fn imperator_descriptor(descriptor: &Descriptor) -> String {
    [
        format!("version=\"{}\"", descriptor.game_version),
        "tags={".to_string(),
        "    \"Historical\"".to_string(),
        "}".to_string(),
        format!("name=\"{}\"", descriptor.name),
        format!("path=\"mod/{}\"", descriptor.mod_id),
    ]
    .join(LINE_ENDING)
}
