//! CLI commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Subcommand;
use cultural_names::Game;
use cultural_names::localisation::resolve;
use cultural_names::store::NameDatabase;

use super::progress::{DISK, LOOKING_GLASS, PACKAGE, print_done, print_failure, print_step, spinner};
use crate::pipeline::run_pipeline;
use crate::settings::Settings;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the configured mod packages
    Build {
        /// Settings file (defaults to <config dir>/modbuilder/settings.toml)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Only build mods for this game (CK2HIP, CK3, ImperatorRome); repeatable
        #[arg(short, long = "game")]
        games: Vec<Game>,

        /// Output directory, overriding the settings file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the configured mod packages
    List {
        /// Settings file (defaults to <config dir>/modbuilder/settings.toml)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },

    /// Resolve the name of one location in one language
    Resolve {
        /// Data store location id
        #[arg(long)]
        location: String,

        /// Data store language id
        #[arg(long)]
        language: String,

        /// Settings file (defaults to <config dir>/modbuilder/settings.toml)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Commands::Build {
                settings,
                games,
                output,
            } => build(settings.as_deref(), &games, output.as_deref()),
            Commands::List { settings } => list(settings.as_deref()),
            Commands::Resolve {
                location,
                language,
                settings,
            } => resolve_name(settings.as_deref(), &location, &language),
        }
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    Settings::load_or_default_path(path).context("Could not load settings")
}

fn load_database(settings: &Settings) -> anyhow::Result<NameDatabase> {
    NameDatabase::load(settings.languages_path(), settings.locations_path())
        .context("Could not load the naming database")
}

fn build(settings_path: Option<&Path>, games: &[Game], output: Option<&Path>) -> anyhow::Result<()> {
    let started = Instant::now();
    let settings = load_settings(settings_path)?;
    let mods = settings.mods_for(games);
    if mods.is_empty() {
        println!("No mods to build");
        return Ok(());
    }

    let build_options = settings.build_options(output);
    let total_steps = mods.len() + 1;

    print_step(1, total_steps, LOOKING_GLASS, "Loading naming database...");
    let db = load_database(&settings)?;

    let pb = spinner(&format!("[2/{total_steps}]"), "Starting...");
    let report = run_pipeline(&db, &mods, &build_options, &|index, total, options, progress| {
        pb.set_prefix(format!("[{}/{total_steps}]", index + 2));
        let mut message = format!(
            "{PACKAGE}{} {} ({}/{total}): {}",
            options.game,
            options.id,
            index + 1,
            progress.phase.as_str()
        );
        if let Some(file) = &progress.current_file {
            message.push_str(" - ");
            message.push_str(file);
        }
        pb.set_message(message);
    });
    pb.finish_and_clear();

    for built in &report.built {
        println!(
            "{DISK}{} {}: {} localisations, {} files",
            built.game,
            built.mod_id,
            built.localisation_count,
            built.files.len()
        );
        for file in &built.files {
            let shown = file.strip_prefix(&build_options.output_dir).unwrap_or(file.as_path());
            println!("    {}", shown.display());
        }
        if built.dangling_titles > 0 {
            println!(
                "    {} title records reference a missing parent",
                built.dangling_titles
            );
        }
    }
    for failure in &report.failed {
        print_failure(&format!("{} {}: {}", failure.game, failure.mod_id, failure.error));
    }

    report.ensure_success()?;
    print_done(started.elapsed());
    Ok(())
}

fn list(settings_path: Option<&Path>) -> anyhow::Result<()> {
    let settings = load_settings(settings_path)?;

    if settings.mods.is_empty() {
        println!("No mods configured");
        return Ok(());
    }

    for options in &settings.mods {
        let descriptor = options.descriptor();
        println!(
            "{:<14} {:<32} {} (v{}, game {})",
            options.game.key(),
            options.id,
            options.name,
            descriptor.version,
            descriptor.game_version
        );
    }
    println!("\nOutput: {}", settings.output_dir().display());

    Ok(())
}

fn resolve_name(settings_path: Option<&Path>, location_id: &str, language_id: &str) -> anyhow::Result<()> {
    let settings = load_settings(settings_path)?;
    let db = load_database(&settings)?;

    let location = db
        .location(location_id)
        .with_context(|| format!("Unknown location '{location_id}'"))?;
    let language = db
        .language(language_id)
        .with_context(|| format!("Unknown language '{language_id}'"))?;

    let name = resolve(location, language)?;
    if name.used_fallback(language) {
        println!("{} (via {})", name.value(), name.matched_language);
    } else {
        println!("{}", name.value());
    }
    if let Some(comment) = &name.name.comment {
        println!("# {comment}");
    }

    Ok(())
}
