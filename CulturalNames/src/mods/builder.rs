//! Writing complete mod packages
//!
//! Output layout, relative to [`BuildOptions::output_dir`]:
//!
//! ```text
//! <game>/<id>.mod                                   CK3, Imperator
//! <game>/<id>/descriptor.mod                        CK3, Imperator
//! <game>/<id>/common/landed_titles/<file>           CK2, CK3
//! <game>/<id>/common/province_names/<culture>.txt   Imperator
//! <game>/<id>/localization/<id>_provincenames_l_<lang>.yml   Imperator
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::formats::{
    ProvinceNameOptions, build_culture_files, build_localisation_file, localisation_file_name,
    render_descriptor,
};
use crate::game::Game;
use crate::localisation::{Localisation, collect, collect_parallel};
use crate::store::NameDatabase;
use crate::titles::{Ck2Layout, Ck3Layout, TitleForest, TitleLayout, render_landed_titles};
use crate::utils::{create_dir, write_text_file};

use super::options::{BuildOptions, ModOptions};
use super::types::{BuildPhase, BuildProgress, BuildProgressCallback, BuildReport};

const TOTAL_STEPS: usize = 3;

/// Build one mod package.
///
/// # Errors
/// Fails on the first IO error, on a cyclic title hierarchy, and on
/// non-numeric Imperator province ids. Files written before the failure stay
/// on disk.
pub fn build_mod(db: &NameDatabase, options: &ModOptions, build: &BuildOptions) -> Result<BuildReport> {
    build_mod_with_progress(db, options, build, &|_| {})
}

/// Build one mod package with progress callback.
pub fn build_mod_with_progress(
    db: &NameDatabase,
    options: &ModOptions,
    build: &BuildOptions,
    progress: BuildProgressCallback,
) -> Result<BuildReport> {
    let game = options.game;
    tracing::info!("Building {} mod '{}'", game.display_name(), options.id);

    progress(&BuildProgress::new(BuildPhase::Collecting, 0, TOTAL_STEPS));
    let localisations = if build.parallel_fetch {
        collect_parallel(db, game)
    } else {
        collect(db, game)
    };

    progress(&BuildProgress::new(BuildPhase::Rendering, 1, TOTAL_STEPS));
    let game_dir = build.game_dir(game);
    let mod_dir = game_dir.join(&options.id);

    let mut writer = ModWriter {
        files: Vec::new(),
        progress,
    };
    let dangling_titles = match game {
        Game::Ck2Hip => {
            write_landed_titles(db, options, &mod_dir, Ck2Layout, &localisations, &mut writer)?
        }
        Game::Ck3 => {
            write_landed_titles(db, options, &mod_dir, Ck3Layout, &localisations, &mut writer)?
        }
        Game::ImperatorRome => {
            let name_options = ProvinceNameOptions {
                verbose_comments: build.verbose_comments,
            };
            write_province_names(options, &mod_dir, &localisations, name_options, &mut writer)?;
            0
        }
    };

    if let Some(content) = render_descriptor(game, &options.descriptor()) {
        writer.write(&game_dir.join(format!("{}.mod", options.id)), &content)?;
        writer.write(&mod_dir.join("descriptor.mod"), &content)?;
    }

    progress(&BuildProgress::new(BuildPhase::Complete, TOTAL_STEPS, TOTAL_STEPS));
    tracing::info!(
        "Built '{}': {} localisations, {} files",
        options.id,
        localisations.len(),
        writer.files.len()
    );

    Ok(BuildReport {
        game,
        mod_id: options.id.clone(),
        mod_dir,
        localisation_count: localisations.len(),
        dangling_titles,
        files: writer.files,
    })
}

/// Tracks written files and reports each one.
struct ModWriter<'p> {
    files: Vec<PathBuf>,
    progress: BuildProgressCallback<'p>,
}

impl ModWriter<'_> {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        (self.progress)(&BuildProgress::with_file(
            BuildPhase::Writing,
            2,
            TOTAL_STEPS,
            path.to_string_lossy(),
        ));
        write_text_file(path, content)?;
        tracing::info!("Wrote {}", path.display());
        self.files.push(path.to_path_buf());
        Ok(())
    }
}

/// Returns the number of dangling title records.
fn write_landed_titles<L: TitleLayout>(
    db: &NameDatabase,
    options: &ModOptions,
    mod_dir: &Path,
    layout: L,
    localisations: &[Localisation],
    writer: &mut ModWriter<'_>,
) -> Result<usize> {
    let forest = TitleForest::build(db.locations(), options.game);
    let dangling = forest.dangling();
    for title in &dangling {
        tracing::warn!(
            "{} title {} references missing parent {:?}; it will not be written",
            options.game,
            title.id,
            title.parent.title_id().unwrap_or_default()
        );
    }
    if forest.is_empty() {
        tracing::warn!("No {} title records; the landed titles file will be empty", options.game);
    } else {
        tracing::debug!("{} title records indexed", forest.len());
    }

    let content = render_landed_titles(layout, &forest, localisations)?;

    let path = mod_dir
        .join("common")
        .join("landed_titles")
        .join(options.landed_titles_file_name());
    writer.write(&path, &content)?;

    Ok(dangling.len())
}

fn write_province_names(
    options: &ModOptions,
    mod_dir: &Path,
    localisations: &[Localisation],
    name_options: ProvinceNameOptions,
    writer: &mut ModWriter<'_>,
) -> Result<()> {
    let province_names_dir = mod_dir.join("common").join("province_names");
    for file in build_culture_files(localisations, name_options)? {
        writer.write(&province_names_dir.join(&file.file_name), &file.content)?;
    }

    let localisation_dir = mod_dir.join("localization");
    for ui_language in options.ui_languages() {
        let content = build_localisation_file(localisations, &ui_language, name_options)?;
        let file_name = localisation_file_name(&options.id, &ui_language);
        writer.write(&localisation_dir.join(file_name), &content)?;
    }

    Ok(())
}
