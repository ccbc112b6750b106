//! Mod packages - one complete, loadable mod per game
//!
//! This module ties the rest of the crate together:
//! - Collect localisations for the mod's game
//! - Render landed titles or province names
//! - Write descriptors and content files under the output directory

pub mod builder;
pub mod options;
pub mod types;

pub use builder::{build_mod, build_mod_with_progress};
pub use options::{BuildOptions, ModOptions};
pub use types::{BuildPhase, BuildProgress, BuildProgressCallback, BuildReport};
