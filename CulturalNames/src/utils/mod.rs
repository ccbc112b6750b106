//! Utility functions

pub mod fs;
pub mod text;

pub use fs::{create_dir, write_text_file};
pub use text::{CRLF, LINE_ENDING, UTF8_BOM};
