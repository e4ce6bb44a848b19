pub mod settings;

use crate::models::error::SError;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "mc_installer";

/// Largest generated file the host can receive in a single instruction.
pub const GENERATED_FILE_LIMIT: u64 = 2 * 1024 * 1024 * 1024 - 1;

/// Extensions and folder markers the classifier and planner work from.
/// Extensions are stored lowercase without the leading dot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct InstallerConfig {
    pub version: u8,
    pub supported_game_id: String,
    pub mod_archive_ext: String,
    pub pack_archive_ext: String,
    pub meta_ext: String,
    pub assets_marker: String,
    pub shaders_marker: String,
    pub data_marker: String,
    pub generated_file_limit: u64,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            version: 0,
            supported_game_id: GameDefinition::MINECRAFT.id.to_string(),
            mod_archive_ext: "jar".to_string(),
            pack_archive_ext: "zip".to_string(),
            meta_ext: "mcmeta".to_string(),
            assets_marker: "assets".to_string(),
            shaders_marker: "shaders".to_string(),
            data_marker: "data".to_string(),
            generated_file_limit: GENERATED_FILE_LIMIT,
        }
    }
}

impl InstallerConfig {
    pub fn load() -> Result<InstallerConfig, SError> {
        confy::load(APP_NAME, "installer").map_err(Into::into)
    }

    pub fn load_path(path: &Utf8Path) -> Result<InstallerConfig, SError> {
        confy::load_path(path).map_err(Into::into)
    }

    pub fn store_path(&self, path: &Utf8Path) -> Result<(), SError> {
        confy::store_path(path, self).map_err(Into::into)
    }

    pub fn supports(&self, game_id: &str) -> bool {
        self.supported_game_id == game_id
    }
}

/// Static registration data for the supported game.
#[derive(Clone, Copy, Debug)]
pub struct GameDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub executable: &'static str,
    pub required_files: &'static [&'static str],
    pub ms_store_id: &'static str,
    pub default_launcher_dir: &'static str,
    pub merge_mods: bool,
}

impl GameDefinition {
    pub const MINECRAFT: GameDefinition = GameDefinition {
        id: "minecraft",
        name: "Minecraft: Java Edition",
        executable: "MinecraftLauncher.exe",
        required_files: &["MinecraftLauncher.exe"],
        ms_store_id: "Microsoft.4297127D64EC6",
        default_launcher_dir: "C:/Program Files (x86)/Minecraft Launcher",
        merge_mods: true,
    };
}
