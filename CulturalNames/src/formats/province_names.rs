//! Imperator: Rome province names
//!
//! No hierarchy here: one flat file per culture assigning a localisation key
//! to every province, plus one localisation file per UI language that maps
//! those keys to names.
//!
//! ```text
//! roman = {
//!     1734 = PROV1734_roman # Lutetia
//! }
//! ```
//!
//! ```text
//! l_english:
//!  PROV1734_roman:0 "Lutetia"
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::localisation::Localisation;
use crate::utils::{LINE_ENDING, UTF8_BOM};

/// UI languages that get a localisation file unless settings say otherwise.
pub const DEFAULT_UI_LANGUAGES: [&str; 4] = ["english", "french", "german", "spanish"];

/// A generated `common/province_names/<culture>.txt` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureFile {
    /// Culture key as used inside the file.
    pub culture: String,
    /// File name, the culture key lowercased.
    pub file_name: String,
    pub content: String,
}

/// Options shared by both province-name outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvinceNameOptions {
    /// Append `# Language=<source language>` to every entry.
    pub verbose_comments: bool,
}

/// Build one culture file per culture that has at least one localisation.
///
/// Cultures come out sorted by key. Entries within a file are ordered by
/// province number.
///
/// # Errors
/// Returns [`Error::InvalidProvinceId`] if a location id is not an integer.
pub fn build_culture_files(
    localisations: &[Localisation],
    options: ProvinceNameOptions,
) -> Result<Vec<CultureFile>> {
    let mut by_culture: BTreeMap<&str, Vec<&Localisation>> = BTreeMap::new();
    for localisation in numeric_order(localisations)? {
        by_culture
            .entry(localisation.language_id.as_str())
            .or_default()
            .push(localisation);
    }

    let files = by_culture
        .into_iter()
        .map(|(culture, entries)| {
            let mut content = format!("{culture} = {{{LINE_ENDING}");
            for localisation in entries {
                content.push_str(&format!(
                    "    {id} = PROV{id}_{culture} # {name}",
                    id = localisation.location_id,
                    name = localisation.name,
                ));
                push_comments(&mut content, localisation, options);
                content.push_str(LINE_ENDING);
            }
            content.push('}');

            CultureFile {
                culture: culture.to_string(),
                file_name: format!("{}.txt", culture.to_lowercase()),
                content,
            }
        })
        .collect();

    Ok(files)
}

/// Build the localisation file for one UI language.
///
/// Lines are grouped by province number, then by culture. The content starts
/// with a UTF-8 byte-order mark.
///
/// # Errors
/// Returns [`Error::InvalidProvinceId`] if a location id is not an integer.
pub fn build_localisation_file(
    localisations: &[Localisation],
    ui_language: &str,
    options: ProvinceNameOptions,
) -> Result<String> {
    let mut content = format!("{UTF8_BOM}l_{ui_language}:{LINE_ENDING}");

    for localisation in numeric_order(localisations)? {
        content.push_str(&format!(
            " PROV{}_{}:0 \"{}\"",
            localisation.location_id, localisation.language_id, localisation.name
        ));
        push_comments(&mut content, localisation, options);
        content.push_str(LINE_ENDING);
    }

    Ok(content)
}

/// Localisation file name for a mod and UI language.
#[must_use]
pub fn localisation_file_name(mod_id: &str, ui_language: &str) -> String {
    format!("{mod_id}_provincenames_l_{ui_language}.yml")
}

fn push_comments(content: &mut String, localisation: &Localisation, options: ProvinceNameOptions) {
    if options.verbose_comments {
        content.push_str(" # Language=");
        content.push_str(&localisation.source_language_id);
    }
    if let Some(comment) = &localisation.comment {
        content.push_str(" # ");
        content.push_str(comment);
    }
}

/// Sort by province number, then culture key.
fn numeric_order(localisations: &[Localisation]) -> Result<Vec<&Localisation>> {
    let mut keyed = localisations
        .iter()
        .map(|l| {
            l.location_id
                .trim()
                .parse::<u64>()
                .map(|province| (province, l))
                .map_err(|_| Error::InvalidProvinceId {
                    id: l.location_id.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, la), (b, lb)| a.cmp(b).then_with(|| la.language_id.cmp(&lb.language_id)));
    Ok(keyed.into_iter().map(|(_, l)| l).collect())
}
