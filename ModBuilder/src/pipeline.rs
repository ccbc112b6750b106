//! Multi-mod build driver

use cultural_names::Game;
use cultural_names::mods::{BuildOptions, BuildProgress, BuildReport, ModOptions, build_mod_with_progress};
use cultural_names::store::NameDatabase;

use crate::error::{Error, Result};

/// Called with the mod index, the mod count, the mod, and its build progress.
pub type PipelineProgressCallback<'a> =
    &'a (dyn Fn(usize, usize, &ModOptions, &BuildProgress) + Sync + Send);

/// A mod whose build failed.
#[derive(Debug)]
pub struct ModFailure {
    pub game: Game,
    pub mod_id: String,
    pub error: cultural_names::Error,
}

/// Outcome of a pipeline run
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub built: Vec<BuildReport>,
    pub failed: Vec<ModFailure>,
}

impl PipelineReport {
    /// Number of mods attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.built.len() + self.failed.len()
    }

    /// `Err` if any mod failed.
    pub fn ensure_success(&self) -> Result<()> {
        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(Error::BuildFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Build `mods` in order.
///
/// A failing mod is logged and recorded; the remaining mods still build.
pub fn run_pipeline(
    db: &NameDatabase,
    mods: &[&ModOptions],
    build: &BuildOptions,
    progress: PipelineProgressCallback,
) -> PipelineReport {
    let total = mods.len();
    let mut report = PipelineReport::default();

    for (index, options) in mods.iter().enumerate() {
        let result = build_mod_with_progress(db, options, build, &|p| progress(index, total, options, p));

        match result {
            Ok(built) => report.built.push(built),
            Err(error) => {
                tracing::error!("Failed to build {} mod '{}': {error}", options.game, options.id);
                report.failed.push(ModFailure {
                    game: options.game,
                    mod_id: options.id.clone(),
                    error,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    const LANGUAGES: &str = r#"[
        {"id": "Latin", "gameIds": [
            {"game": "CK3", "id": "latin"},
            {"game": "ImperatorRome", "id": "roman"}
        ]}
    ]"#;

    // "rome" is not a province number, so the Imperator build fails.
    const LOCATIONS: &str = r#"[
        {"id": "rome",
         "gameIds": [
            {"game": "CK3", "id": "c_roma", "parentId": ""},
            {"game": "ImperatorRome", "id": "rome"}
         ],
         "names": [{"languageId": "Latin", "value": "Roma"}]}
    ]"#;

    #[test]
    fn test_failure_does_not_stop_later_mods() {
        let db = NameDatabase::from_json_str(LANGUAGES, LOCATIONS).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let ir = ModOptions::new(Game::ImperatorRome, "mcn_ir", "MCN");
        let ck3 = ModOptions::new(Game::Ck3, "mcn_ck3", "MCN");
        let seen = Mutex::new(Vec::new());

        let report = run_pipeline(
            &db,
            &[&ir, &ck3],
            &BuildOptions::new(dir.path()),
            &|index, total, options, _| {
                let mut seen = seen.lock().unwrap();
                if seen.last() != Some(&(index, options.id.clone())) {
                    seen.push((index, options.id.clone()));
                }
                assert_eq!(total, 2);
            },
        );

        assert_eq!(report.built.len(), 1);
        assert_eq!(report.built[0].mod_id, "mcn_ck3");
        assert_eq!(report.failed.len(), 1);
        assert!(matches!(
            report.failed[0].error,
            cultural_names::Error::InvalidProvinceId { .. }
        ));
        assert!(matches!(
            report.ensure_success(),
            Err(Error::BuildFailed { failed: 1, total: 2 })
        ));
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![(0, "mcn_ir".to_string()), (1, "mcn_ck3".to_string())]
        );
    }

    #[test]
    fn test_empty_pipeline_succeeds() {
        let db = NameDatabase::default();
        let dir = tempfile::tempdir().unwrap();
        let report = run_pipeline(&db, &[], &BuildOptions::new(dir.path()), &|_, _, _, _| {});

        assert_eq!(report.total(), 0);
        assert!(report.ensure_success().is_ok());
    }
}
