//! ModBuilder - settings-driven builds of the More Cultural Names mods

// Re-export cultural_names
pub use cultural_names;

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod settings;

pub use error::{Error, Result};
pub use pipeline::{ModFailure, PipelineReport, run_pipeline};
pub use settings::Settings;
