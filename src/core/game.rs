use crate::config::GameDefinition;
use crate::models::error::SError;
use crate::models::paths::{GamePaths, LauncherPathCanonical, LauncherPaths};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Checks candidate install directories for the game's required files.
pub struct GameLocator {
    pub game: GameDefinition,
}

impl GameLocator {
    pub fn new(game: GameDefinition) -> Self {
        Self { game }
    }

    /// The first candidate containing every required file, canonicalised.
    pub fn locate(&self, candidates: &[Utf8PathBuf]) -> Result<LauncherPathCanonical, SError> {
        for dir in candidates {
            let complete = self
                .game
                .required_files
                .iter()
                .all(|file| dir.join(file).is_file());
            debug!("candidate {dir}: complete={complete}");
            if complete {
                let paths = LauncherPaths::new(dir);
                return LauncherPathCanonical::from_launcher_paths(dir, paths);
            }
        }

        Err(SError::GameNotFound(format!(
            "{} not found in {} candidate location(s)",
            self.game.name,
            candidates.len()
        )))
    }

    pub fn default_candidates(&self) -> Vec<Utf8PathBuf> {
        vec![Utf8PathBuf::from(self.game.default_launcher_dir)]
    }
}

/// Create every per-type install root below the `.minecraft` data directory.
pub fn prepare_for_modding(data_dir: &Utf8Path) -> Result<GamePaths, SError> {
    let paths = GamePaths::new(data_dir);
    for dir in paths.all() {
        std::fs::create_dir_all(dir)?;
    }
    info!("prepared mod directories under {data_dir}");
    Ok(paths)
}
