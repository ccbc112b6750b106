//! Error types for `CulturalNames`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `CulturalNames` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// A data store file could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// The file or directory that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Data Store Errors ====================
    /// A data store file is not valid JSON for its record type.
    #[error("failed to parse {path}: {source}")]
    DataParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A game key that matches none of the supported engines.
    #[error("unknown game: {0} (expected CK2HIP, CK3 or ImperatorRome)")]
    UnknownGame(String),

    // ==================== Name Resolution Errors ====================
    /// No language in the fallback chain has a name for the location.
    #[error("no name for location '{location}' in language '{language}' or its fallbacks")]
    NameNotFound {
        /// The data store location id.
        location: String,
        /// The data store language id the lookup started from.
        language: String,
    },

    // ==================== Title Hierarchy Errors ====================
    /// The parent chain of a title loops back onto itself.
    #[error("title '{id}' is its own ancestor in the {game} hierarchy")]
    CyclicHierarchy {
        /// The game key whose hierarchy is cyclic.
        game: String,
        /// The title id that was reached a second time.
        id: String,
    },

    /// A province id that does not parse as an integer.
    #[error("invalid province id: {id}")]
    InvalidProvinceId {
        /// The offending id.
        id: String,
    },
}

/// A specialized Result type for `CulturalNames` operations.
pub type Result<T> = std::result::Result<T, Error>;
