use crate::models::error::{PlanningError, SError};
use crate::models::install_type::InstallTypeId;
use crate::models::instruction::{is_safe_destination, InstallInstruction, InstallPlan};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::{debug, info};

#[derive(Debug)]
pub struct InstalledMod {
    pub mod_type: InstallTypeId,
    pub files: Vec<Utf8PathBuf>,
}

/// Materialise `plan` below `target_root`, reading copy sources from `source_root`.
/// Existing files at a destination are overwritten.
pub fn execute_plan(
    plan: &InstallPlan,
    source_root: &Utf8Path,
    target_root: &Utf8Path,
) -> Result<InstalledMod, SError> {
    fs::create_dir_all(target_root)?;
    let mut files = Vec::new();

    for instruction in plan.instructions() {
        let Some(destination) = instruction.destination() else {
            continue;
        };
        if !is_safe_destination(destination) {
            return Err(PlanningError::UnsafeDestination(destination.to_string()).into());
        }

        let dst_path = target_root.join(destination);
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)?;
        }

        match instruction {
            InstallInstruction::CopyFile { source, .. } => {
                debug!("copy {source} -> {dst_path}");
                fs::copy(source_root.join(source.normalized()), &dst_path)?;
            }
            InstallInstruction::GenerateFile { data, .. } => {
                debug!("generate {dst_path} ({} bytes)", data.len());
                fs::write(&dst_path, data)?;
            }
            InstallInstruction::SetModType { .. } => continue,
        }
        files.push(Utf8PathBuf::from(destination));
    }

    info!("installed {} files as {}", files.len(), plan.mod_type());
    Ok(InstalledMod {
        mod_type: plan.mod_type(),
        files,
    })
}
