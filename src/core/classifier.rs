use crate::config::InstallerConfig;
use crate::models::entry::FileEntry;
use crate::models::install_type::InstallTypeId;
use crate::models::request::{ClassificationRequest, ClassificationResult};
use tracing::debug;

/// The independent ways a candidate can qualify as a resource pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourcePackBranch {
    /// A `.mcmeta` file sits among the entries.
    Leaf,
    /// A pack archive is nested inside the candidate.
    Nested,
    /// No nested archive, but an `assets` folder plus a `.mcmeta` file.
    /// Whenever this holds `Leaf` holds too; kept separate pending a product decision
    /// on whether loose packs should be told apart from leaf packs.
    Loose,
}

/// Decide whether `request` qualifies as `type_id`. Pure; never fails.
pub fn classify(
    type_id: InstallTypeId,
    request: &ClassificationRequest,
    config: &InstallerConfig,
) -> ClassificationResult {
    let matched = matches(type_id, request, config);
    debug!(
        "classify {} as {type_id}: {matched}",
        request.archive_name
    );
    ClassificationResult::from_bool(matched)
}

/// Listings made only of directory entries never match, even a `.jar` archive that the
/// default-mod rule would otherwise accept on its extension alone. The planner has no file
/// to copy for such a listing.
pub fn matches(type_id: InstallTypeId, request: &ClassificationRequest, config: &InstallerConfig) -> bool {
    if !config.supports(&request.game_id) || !has_files(&request.file_entries) {
        return false;
    }

    match type_id {
        InstallTypeId::DefaultMod => is_default_mod(request, config),
        InstallTypeId::ResourcePack => !resource_pack_branches(request, config).is_empty(),
        InstallTypeId::ShaderPack => is_shader_pack(request, config),
        InstallTypeId::DataPack => is_data_pack(request, config),
    }
}

/// Every resource pack branch the candidate satisfies, in declaration order.
/// Empty when the game is unsupported, the listing holds no files, or the archive is a mod archive.
pub fn resource_pack_branches(
    request: &ClassificationRequest,
    config: &InstallerConfig,
) -> Vec<ResourcePackBranch> {
    if !config.supports(&request.game_id)
        || !has_files(&request.file_entries)
        || archive_has_ext(request, &config.mod_archive_ext)
    {
        return Vec::new();
    }

    let entries = &request.file_entries;
    let has_meta = any_with_ext(entries, &config.meta_ext);
    let has_nested = any_with_ext(entries, &config.pack_archive_ext);
    let has_assets = any_in_folder(entries, &config.assets_marker);

    [
        (has_meta, ResourcePackBranch::Leaf),
        (has_nested, ResourcePackBranch::Nested),
        (!has_nested && has_assets && has_meta, ResourcePackBranch::Loose),
    ]
    .into_iter()
    .filter_map(|(hit, branch)| hit.then_some(branch))
    .collect()
}

fn is_default_mod(request: &ClassificationRequest, config: &InstallerConfig) -> bool {
    archive_has_ext(request, &config.mod_archive_ext)
        || any_with_ext(&request.file_entries, &config.mod_archive_ext)
}

fn is_shader_pack(request: &ClassificationRequest, config: &InstallerConfig) -> bool {
    archive_has_ext(request, &config.pack_archive_ext)
        && any_in_folder(&request.file_entries, &config.shaders_marker)
}

fn is_data_pack(request: &ClassificationRequest, config: &InstallerConfig) -> bool {
    archive_has_ext(request, &config.pack_archive_ext)
        && any_with_ext(&request.file_entries, &config.meta_ext)
        && any_in_folder(&request.file_entries, &config.data_marker)
}

fn archive_has_ext(request: &ClassificationRequest, ext: &str) -> bool {
    request
        .archive_extension()
        .is_some_and(|e| e == ext.to_lowercase())
}

/// A listing of bare directories has nothing to install.
fn has_files(entries: &[FileEntry]) -> bool {
    entries.iter().any(|e| !e.is_dir())
}

fn any_with_ext(entries: &[FileEntry], ext: &str) -> bool {
    entries.iter().any(|e| e.has_extension(ext))
}

fn any_in_folder(entries: &[FileEntry], marker: &str) -> bool {
    entries.iter().any(|e| e.starts_with_folder(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(entries: &[&str], archive: &str) -> ClassificationRequest {
        ClassificationRequest::new(entries.iter().copied(), "minecraft", archive)
    }

    #[test]
    fn test_resource_pack_branches_are_reported_independently() {
        let config = InstallerConfig::default();

        let leaf = request(&["pack.mcmeta", "pack.png"], "Leaf.zip");
        assert_eq!(resource_pack_branches(&leaf, &config), vec![ResourcePackBranch::Leaf]);

        let nested = request(&["inner.zip"], "Outer.zip");
        assert_eq!(resource_pack_branches(&nested, &config), vec![ResourcePackBranch::Nested]);

        let loose = request(&["pack.mcmeta", "assets/"], "Loose.zip");
        assert_eq!(
            resource_pack_branches(&loose, &config),
            vec![ResourcePackBranch::Leaf, ResourcePackBranch::Loose]
        );

        let both = request(&["pack.mcmeta", "assets/", "extra.zip"], "Both.zip");
        assert_eq!(
            resource_pack_branches(&both, &config),
            vec![ResourcePackBranch::Leaf, ResourcePackBranch::Nested]
        );
    }

    #[test]
    fn test_archive_without_extension_never_matches_on_archive_ext() {
        let config = InstallerConfig::default();
        let req = request(&["shaders/", "shader.fsh"], "Shaders");
        assert!(!matches(InstallTypeId::ShaderPack, &req, &config));
        assert!(!matches(InstallTypeId::DefaultMod, &req, &config));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = InstallerConfig::default();
        let req = request(&["COOLMOD.JAR"], "Mods.ZIP");
        assert!(matches(InstallTypeId::DefaultMod, &req, &config));
        let req = request(&["Shaders\\", "Shaders\\final.fsh"], "Pack.Zip");
        assert!(matches(InstallTypeId::ShaderPack, &req, &config));
    }
}
