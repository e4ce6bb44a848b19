use crate::config::InstallerConfig;
use crate::models::entry::{extension_of, FileEntry};
use crate::models::error::SError;
use crate::models::request::{ClassificationRequest, PlanRequest};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io;
use tracing::debug;
use uuid::Uuid;

/// An archive unpacked into its own staging directory.
#[derive(Debug)]
pub struct StagedArchive {
    pub archive_path: Utf8PathBuf,
    pub staging_dir: Utf8PathBuf,
    /// Entries in archive order; directories keep their trailing `/`.
    pub file_entries: Vec<FileEntry>,
}

impl StagedArchive {
    pub fn classification_request(&self, game_id: &str) -> ClassificationRequest {
        ClassificationRequest {
            file_entries: self.file_entries.clone(),
            game_id: game_id.to_string(),
            archive_name: self.archive_path.file_name().unwrap_or_default().to_string(),
        }
    }

    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest {
            file_entries: self.file_entries.clone(),
            destination_path: self.staging_dir.clone(),
            archive_path: self.archive_path.clone(),
        }
    }

    pub fn clean_up(&self) -> Result<(), SError> {
        debug!("clean up for {}", self.staging_dir);
        fs::remove_dir_all(&self.staging_dir).map_err(Into::into)
    }
}

/// Unpack pack archives into a fresh directory under `staging_root`.
/// Anything else (a `.jar`, say) is staged whole, as a single entry.
pub fn stage_archive(
    archive: &Utf8Path,
    staging_root: &Utf8Path,
    config: &InstallerConfig,
) -> Result<StagedArchive, SError> {
    let staging_dir = staging_root.join(Uuid::new_v4().to_string());
    fs::create_dir_all(&staging_dir)?;

    let is_pack = archive
        .file_name()
        .and_then(extension_of)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(&config.pack_archive_ext));

    let file_entries = if is_pack {
        extract(archive, &staging_dir)?
    } else {
        let name = archive
            .file_name()
            .ok_or_else(|| SError::ParseError(format!("Unable to get file name for {archive}")))?;
        fs::copy(archive, staging_dir.join(name))?;
        vec![FileEntry::from(name)]
    };

    Ok(StagedArchive {
        archive_path: archive.to_owned(),
        staging_dir,
        file_entries,
    })
}

fn extract(archive_path: &Utf8Path, destination: &Utf8Path) -> Result<Vec<FileEntry>, SError> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| SError::ParseError(format!("{archive_path}: {e}")))?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| SError::ParseError(format!("{archive_path}: {e}")))?;

        // enclosed_name() rejects names that would land outside the destination
        let Some(safe_path) = file.enclosed_name() else {
            debug!("skipping unsafe entry {}", file.name());
            continue;
        };

        let output_path = destination.as_std_path().join(&safe_path);

        if file.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&output_path)?;
            io::copy(&mut file, &mut outfile)?;
        }

        entries.push(FileEntry::from(file.name()));
    }

    Ok(entries)
}
