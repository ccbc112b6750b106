//! Line endings and encodings of generated files

/// Newline of the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Newline of the host platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Windows newline, required by some engines on every platform.
pub const CRLF: &str = "\r\n";

/// UTF-8 byte-order mark, as the first character of a `String`.
pub const UTF8_BOM: &str = "\u{feff}";
