#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use mc_installer_lib::config::InstallerConfig;
use mc_installer_lib::core::planner::PlanContext;
use mc_installer_lib::core::preferences::UserPreferenceProvider;
use mc_installer_lib::core::repack::{WalkDirLister, ZipRepacker};
use mc_installer_lib::models::entry::FileEntry;
use mc_installer_lib::models::request::{ClassificationRequest, PlanRequest};
use std::fs;
use std::io::{Cursor, Read, Write};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub const GAME: &str = "minecraft";

pub fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

pub fn request(entries: &[&str], archive: &str) -> ClassificationRequest {
    ClassificationRequest::new(entries.iter().copied(), GAME, archive)
}

/// Write `files` (relative path, content) below `root`, the way the host extracts a candidate.
pub fn write_tree(root: &Utf8Path, files: &[(&str, &[u8])]) {
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

pub fn plan_request(entries: &[&str], destination: &Utf8Path, archive: &str) -> PlanRequest {
    PlanRequest {
        file_entries: entries.iter().map(|e| FileEntry::from(*e)).collect(),
        destination_path: destination.to_owned(),
        archive_path: Utf8PathBuf::from("/downloads").join(archive),
    }
}

pub fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer
            .start_file(name.to_string(), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// (name, content) of every file in a zip, in archive order.
pub fn read_zip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            file.read_to_end(&mut content).unwrap();
            (file.name().to_string(), content)
        })
        .collect()
}

pub static LISTER: WalkDirLister = WalkDirLister;
pub static REPACKER: ZipRepacker = ZipRepacker;

pub fn context<'a>(
    config: &'a InstallerConfig,
    preferences: &'a dyn UserPreferenceProvider,
) -> PlanContext<'a> {
    PlanContext {
        config,
        preferences,
        lister: &LISTER,
        repacker: &REPACKER,
    }
}
