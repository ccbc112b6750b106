//! Types for mod build progress tracking and results

use std::path::PathBuf;

use crate::game::Game;

/// Progress callback type for mod builds
pub type BuildProgressCallback<'a> = &'a (dyn Fn(&BuildProgress) + Sync + Send);

/// Progress information during a mod build
#[derive(Debug, Clone)]
pub struct BuildProgress {
    /// Current build phase
    pub phase: BuildPhase,
    /// Current step number
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// File being written (if applicable)
    pub current_file: Option<String>,
}

impl BuildProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: BuildPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(phase: BuildPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a mod build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Resolving names for every location and language
    Collecting,
    /// Turning localisations into file content
    Rendering,
    /// Writing files to the output directory
    Writing,
    /// Build complete
    Complete,
}

impl BuildPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collecting => "Collecting localisations",
            Self::Rendering => "Rendering files",
            Self::Writing => "Writing files",
            Self::Complete => "Complete",
        }
    }
}

/// Summary of one finished mod build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub game: Game,
    pub mod_id: String,
    /// `<output>/<game>/<mod id>`
    pub mod_dir: PathBuf,
    /// Number of localisations collected for the engine
    pub localisation_count: usize,
    /// Title records whose parent does not exist (never written)
    pub dangling_titles: usize,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
}
