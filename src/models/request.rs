use crate::models::entry::{extension_of, FileEntry};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    pub file_entries: Vec<FileEntry>,
    pub game_id: String,
    pub archive_name: String,
}

impl ClassificationRequest {
    pub fn new<I, E>(file_entries: I, game_id: &str, archive_name: &str) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<FileEntry>,
    {
        Self {
            file_entries: file_entries.into_iter().map(Into::into).collect(),
            game_id: game_id.to_string(),
            archive_name: archive_name.to_string(),
        }
    }

    /// Lowercased extension of the candidate archive itself.
    pub fn archive_extension(&self) -> Option<String> {
        extension_of(&self.archive_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    #[serde(rename = "supported")]
    pub matched: bool,
    pub required_files: Vec<FileEntry>,
}

impl ClassificationResult {
    pub fn matched() -> Self {
        Self {
            matched: true,
            required_files: Vec::new(),
        }
    }

    pub fn unmatched() -> Self {
        Self::default()
    }

    pub fn from_bool(matched: bool) -> Self {
        if matched {
            Self::matched()
        } else {
            Self::unmatched()
        }
    }
}

/// Inputs for planning an install of an already classified archive.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    pub file_entries: Vec<FileEntry>,
    /// Directory the host extracted the archive into.
    pub destination_path: Utf8PathBuf,
    pub archive_path: Utf8PathBuf,
}

impl PlanRequest {
    pub fn archive_name(&self) -> &str {
        self.archive_path.file_name().unwrap_or_default()
    }

    pub fn archive_extension(&self) -> Option<String> {
        extension_of(self.archive_name())
    }
}
