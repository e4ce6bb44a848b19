use crate::config::InstallerConfig;
use crate::core::preferences::{resolve_extraction, UserPreferenceProvider};
use crate::core::repack::{run_blocking, ArchiveRepacker, FileTreeLister};
use crate::models::entry::FileEntry;
use crate::models::error::{PlanningError, SError};
use crate::models::install_type::InstallTypeId;
use crate::models::instruction::InstallPlan;
use crate::models::request::PlanRequest;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The candidate is the mod file itself; copy it as one unit.
    SingleFile,
    /// Copy each file below the detected root.
    Loose,
    /// Rebuild the archive from the extracted tree and ship it as one generated file.
    Repack,
}

/// Everything the planner reaches outside of its inputs for.
pub struct PlanContext<'a> {
    pub config: &'a InstallerConfig,
    pub preferences: &'a dyn UserPreferenceProvider,
    pub lister: &'a dyn FileTreeLister,
    pub repacker: &'a dyn ArchiveRepacker,
}

/// Produce the install plan for an archive already classified as `type_id`.
pub async fn plan(
    type_id: InstallTypeId,
    request: &PlanRequest,
    ctx: &PlanContext<'_>,
) -> Result<InstallPlan, SError> {
    let files: Vec<&FileEntry> = request.file_entries.iter().filter(|e| !e.is_dir()).collect();
    let root = detect_root(type_id, &request.file_entries, ctx.config)?;
    let strategy = select_strategy(type_id, request, &files, ctx)?;
    info!(
        "planning {} as {type_id} using {:?} (root: '{root}')",
        request.archive_name(),
        strategy
    );

    match strategy {
        Strategy::SingleFile => {
            let entry = files[0].clone();
            let destination =
                relative_to_root(&entry, &root).ok_or(PlanningError::NoModRoot(type_id))?;
            Ok(InstallPlan::builder(type_id).copy(entry, destination)?.build())
        }
        Strategy::Loose => plan_loose(type_id, &files, &root),
        Strategy::Repack => plan_repack(type_id, request, ctx).await,
    }
}

/// Decide how the archive gets materialised, without touching the filesystem.
pub fn select_strategy(
    type_id: InstallTypeId,
    request: &PlanRequest,
    files: &[&FileEntry],
    ctx: &PlanContext<'_>,
) -> Result<Strategy, SError> {
    if is_single_file(request, files) {
        return Ok(Strategy::SingleFile);
    }

    let config = ctx.config;
    let strategy = match type_id {
        // A listed .jar candidate is the exploded mod; put it back together.
        // A non-jar archive that only holds jars is still copied loose, unlike packs,
        // which repack as soon as every file is itself a pack archive. Each inner jar
        // is already an installable unit.
        InstallTypeId::DefaultMod => {
            let archive_ext = request.archive_extension();
            if archive_ext.is_some_and(|ext| ext.eq_ignore_ascii_case(&config.mod_archive_ext)) {
                Strategy::Repack
            } else {
                Strategy::Loose
            }
        }
        _ if is_double_wrapped(files, &config.pack_archive_ext) => Strategy::Repack,
        InstallTypeId::ResourcePack => {
            if resolve_extraction(ctx.preferences)? {
                Strategy::Loose
            } else {
                Strategy::Repack
            }
        }
        InstallTypeId::ShaderPack | InstallTypeId::DataPack => Strategy::Loose,
    };
    Ok(strategy)
}

/// The only file is the candidate archive itself.
fn is_single_file(request: &PlanRequest, files: &[&FileEntry]) -> bool {
    match files {
        [only] => only
            .file_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(request.archive_name())),
        _ => false,
    }
}

/// Every file already carries the wrapping archive extension.
fn is_double_wrapped(files: &[&FileEntry], wrapping_ext: &str) -> bool {
    !files.is_empty() && files.iter().all(|f| f.has_extension(wrapping_ext))
}

/// Directory (normalized, no trailing slash, possibly empty) that holds the mod's content.
///
/// The anchor is the qualifying entry nearest the top of the tree; listing order only
/// breaks ties. Packs prefer their `pack.mcmeta` over any other metadata file, since
/// animated textures ship `*.png.mcmeta` files deep inside `assets/`.
pub fn detect_root(
    type_id: InstallTypeId,
    entries: &[FileEntry],
    config: &InstallerConfig,
) -> Result<String, PlanningError> {
    // Directory entries carry no extension, so these only ever hit files.
    let shallowest_with = |ext: &str| shallowest(entries, |e| e.has_extension(ext));
    let pack_meta = || {
        let name = format!("pack.{}", config.meta_ext);
        shallowest(entries, |e| e.file_name().is_some_and(|n| n.eq_ignore_ascii_case(&name)))
            .or_else(|| shallowest_with(&config.meta_ext))
    };
    let has_files = entries.iter().any(|e| !e.is_dir());

    let anchor = match type_id {
        InstallTypeId::DefaultMod => match shallowest_with(&config.mod_archive_ext) {
            Some(jar) => Some(jar),
            // An exploded jar has no inner .jar; the tree itself is the root.
            None if has_files => return Ok(String::new()),
            None => None,
        },
        InstallTypeId::ResourcePack => {
            pack_meta().or_else(|| shallowest_with(&config.pack_archive_ext))
        }
        InstallTypeId::ShaderPack => {
            let marked = entries
                .iter()
                .any(|e| e.starts_with_folder(&config.shaders_marker));
            if marked && has_files {
                return Ok(String::new());
            }
            None
        }
        InstallTypeId::DataPack => pack_meta(),
    };

    let anchor = anchor.ok_or(PlanningError::NoModRoot(type_id))?;
    Ok(anchor
        .normalized()
        .rsplit_once('/')
        .map(|(parent, _)| parent.to_string())
        .unwrap_or_default())
}

/// First entry with the fewest path segments among those accepted by `pred`.
fn shallowest<'a>(
    entries: &'a [FileEntry],
    pred: impl Fn(&FileEntry) -> bool,
) -> Option<&'a FileEntry> {
    entries
        .iter()
        .filter(|e| pred(*e))
        .min_by_key(|e| e.segments().count())
}

/// Destination of `entry` below `root`, or `None` when it lies outside of it.
fn relative_to_root(entry: &FileEntry, root: &str) -> Option<String> {
    let normalized = entry.normalized();
    if root.is_empty() {
        return Some(normalized);
    }
    normalized
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .map(str::to_string)
}

fn plan_loose(type_id: InstallTypeId, files: &[&FileEntry], root: &str) -> Result<InstallPlan, SError> {
    let mut builder = InstallPlan::builder(type_id);
    for entry in files {
        let Some(destination) = relative_to_root(entry, root) else {
            debug!("skipping {entry}: outside of root '{root}'");
            continue;
        };
        builder = builder.copy((*entry).clone(), destination)?;
    }
    Ok(builder.build())
}

async fn plan_repack(
    type_id: InstallTypeId,
    request: &PlanRequest,
    ctx: &PlanContext<'_>,
) -> Result<InstallPlan, SError> {
    let archive_name = request.archive_name().to_string();
    let entries = ctx.lister.list(&request.destination_path)?;

    // Never overwrite an extracted file with the archive being built from it.
    let target = if entries.iter().any(|e| e.as_str() == archive_name) {
        request
            .destination_path
            .join(format!(".{}-{archive_name}", uuid::Uuid::new_v4()))
    } else {
        request.destination_path.join(&archive_name)
    };

    ctx.repacker
        .repack(&request.destination_path, &entries, &target)
        .await?;

    let data = read_generated(target, ctx.config.generated_file_limit).await?;
    debug!("regenerated {archive_name}: {} bytes", data.len());

    Ok(InstallPlan::builder(type_id)
        .generate(data, archive_name)?
        .build())
}

async fn read_generated(path: Utf8PathBuf, limit: u64) -> Result<Vec<u8>, SError> {
    run_blocking(move || {
        let size = std::fs::metadata(&path)?.len();
        if size > limit {
            warn!("generated archive {path} exceeds the transport limit");
            return Err(SError::ArchiveTooLarge { path, size, limit });
        }
        read_all(&path)
    })
    .await
}

fn read_all(path: &Utf8Path) -> Result<Vec<u8>, SError> {
    std::fs::read(path).map_err(|e| SError::ArchiveRegeneration(format!("{path}: {e}")))
}
