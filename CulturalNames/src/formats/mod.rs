//! Flat output formats
//!
//! Landed-titles trees live in [`crate::titles`]; this module holds the
//! outputs that need no hierarchy.

pub mod descriptor;
pub mod province_names;

pub use descriptor::{Descriptor, render_descriptor};
pub use province_names::{
    CultureFile, DEFAULT_UI_LANGUAGES, ProvinceNameOptions, build_culture_files,
    build_localisation_file, localisation_file_name,
};
