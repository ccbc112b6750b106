//! # CulturalNames
//!
//! Generates localisation mods for Paradox grand strategy games from a
//! database of place names in many languages.
//!
//! ## Supported Games
//!
//! - **Crusader Kings II (HIP)** - nested `landed_titles` file
//! - **Crusader Kings III** - `landed_titles` with `cultural_names` blocks
//! - **Imperator: Rome** - per-culture province names plus localisation files
//!
//! ## Quick Start
//!
//! ```no_run
//! use cultural_names::prelude::*;
//!
//! let db = NameDatabase::load("languages.json", "locations.json")?;
//! let options = ModOptions::new(Game::Ck3, "more_cultural_names", "More Cultural Names");
//! let report = build_mod(&db, &options, &BuildOptions::new("out"))?;
//! println!("Wrote {} files", report.files.len());
//! # Ok::<(), cultural_names::Error>(())
//! ```
//!
//! ### Resolving a Single Name
//!
//! ```
//! use cultural_names::prelude::*;
//!
//! let language = Language::new("occitan").with_fallbacks(["catalan"]);
//! let location = Location::new("paris").with_name("catalan", "París");
//!
//! let name = resolve(&location, &language)?;
//! assert_eq!(name.value(), "París");
//! # Ok::<(), cultural_names::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod game;
pub mod localisation;
pub mod model;
pub mod mods;
pub mod store;
pub mod titles;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};
pub use game::Game;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::game::Game;
    pub use crate::model::{GameId, Language, Location, LocationName, ParentRef};
    pub use crate::store::NameDatabase;

    pub use crate::localisation::{
        Localisation, LocalisationIndex, ResolvedName, collect, collect_parallel, resolve,
    };
    pub use crate::titles::{Ck2Layout, Ck3Layout, Tier, TitleForest, render_landed_titles};

    // Mods module exports
    pub use crate::mods::{
        BuildOptions, BuildPhase, BuildProgress, BuildReport, ModOptions, build_mod,
        build_mod_with_progress,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
