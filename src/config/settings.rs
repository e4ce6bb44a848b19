use crate::core::preferences::UserPreferenceProvider;
use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// User settings persisted for the Minecraft extension.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MinecraftSettings {
    /// `None` means the user has not decided yet and should be asked.
    pub resource_pack_extraction: Option<bool>,
}

impl MinecraftSettings {
    pub fn default_path() -> Utf8PathBuf {
        ProjectDirs::from("com", "martes", "mc_installer")
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."))
            .join("settings.toml")
    }

    pub fn load(path: &Utf8Path) -> Result<Self, SError> {
        confy::load_path(path).map_err(Into::into)
    }

    pub fn save(&self, path: &Utf8Path) -> Result<(), SError> {
        confy::store_path(path, self).map_err(Into::into)
    }
}

/// Preference provider backed by a settings file and an injected prompt.
pub struct SettingsPreferences<F> {
    path: Utf8PathBuf,
    settings: Mutex<MinecraftSettings>,
    prompt: F,
}

impl<F> SettingsPreferences<F>
where
    F: Fn() -> bool + Send + Sync,
{
    pub fn open(path: &Utf8Path, prompt: F) -> Result<Self, SError> {
        let settings = MinecraftSettings::load(path)?;
        debug!("loaded settings from {path}: {:?}", settings);
        Ok(Self {
            path: path.to_owned(),
            settings: Mutex::new(settings),
            prompt,
        })
    }

    pub fn settings(&self) -> MinecraftSettings {
        self.settings.lock().clone()
    }

    pub fn set_resource_pack_extraction(&self, enabled: bool) -> Result<(), SError> {
        let mut settings = self.settings.lock();
        settings.resource_pack_extraction = Some(enabled);
        settings.save(&self.path)
    }
}

impl<F> UserPreferenceProvider for SettingsPreferences<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn resource_pack_extraction_preference(&self) -> Option<bool> {
        self.settings.lock().resource_pack_extraction
    }

    fn prompt_and_persist(&self) -> Result<bool, SError> {
        let answer = (self.prompt)();
        info!("resource pack extraction preference set to {answer}");
        self.set_resource_pack_extraction(answer)?;
        Ok(answer)
    }
}
