use crate::models::error::SError;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io;
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Lists the files below a directory as sorted relative paths.
pub trait FileTreeLister: Send + Sync {
    fn list(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError>;
}

/// Builds an archive at `archive_path` out of `entries`, each relative to `source_dir`.
#[async_trait]
pub trait ArchiveRepacker: Send + Sync {
    async fn repack(
        &self,
        source_dir: &Utf8Path,
        entries: &[Utf8PathBuf],
        archive_path: &Utf8Path,
    ) -> Result<(), SError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WalkDirLister;

impl FileTreeLister for WalkDirLister {
    fn list(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = Utf8Path::from_path(entry.path()).ok_or_else(|| {
                SError::ParseError(format!("Invalid UTF-8 path: {:?}", entry.path()))
            })?;
            files.push(path.strip_prefix(dir)?.to_path_buf());
        }
        Ok(files)
    }
}

/// Writes deflated zip archives on a blocking worker thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipRepacker;

#[async_trait]
impl ArchiveRepacker for ZipRepacker {
    async fn repack(
        &self,
        source_dir: &Utf8Path,
        entries: &[Utf8PathBuf],
        archive_path: &Utf8Path,
    ) -> Result<(), SError> {
        let source_dir = source_dir.to_owned();
        let entries = entries.to_vec();
        let archive_path = archive_path.to_owned();

        run_blocking(move || write_zip(&source_dir, &entries, &archive_path)).await
    }
}

fn write_zip(source_dir: &Utf8Path, entries: &[Utf8PathBuf], archive_path: &Utf8Path) -> Result<(), SError> {
    debug!("packing {} entries from {source_dir} into {archive_path}", entries.len());
    let mut writer = ZipWriter::new(File::create(archive_path)?);

    for rel in entries {
        // Zip names always use forward slashes
        let name = rel.components().map(|c| c.as_str()).collect::<Vec<_>>().join("/");
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name, options)?;
        let mut file = File::open(source_dir.join(rel))?;
        io::copy(&mut file, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Runs blocking work on tokio's blocking pool.
pub(crate) async fn run_blocking<F, R>(f: F) -> Result<R, SError>
where
    F: FnOnce() -> Result<R, SError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| SError::AsyncRuntimeError(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lister_returns_sorted_relative_files() {
        let temp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(root.join("assets/minecraft")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("pack.mcmeta"), "{}").unwrap();
        fs::write(root.join("assets/minecraft/a.png"), "a").unwrap();

        let files = WalkDirLister.list(&root).unwrap();
        assert_eq!(
            files,
            vec![
                Utf8PathBuf::from("assets/minecraft/a.png"),
                Utf8PathBuf::from("pack.mcmeta"),
            ]
        );
    }
}
