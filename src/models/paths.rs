use crate::models::error::SError;
use crate::models::install_type::InstallTypeId;
use camino::{Utf8Path, Utf8PathBuf};
use dunce::canonicalize;

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }

            pub fn all(&self) -> Vec<&Utf8PathBuf> {
                vec![$(&self.$field,)*]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

// Install roots below the `.minecraft` data directory.
define_paths!(GamePaths {
    mods: "~mods",
    resource_packs: "resourcepacks",
    shader_packs: "shaderpacks",
    data_packs: "datapacks",
});

define_paths!(LauncherPaths {
    launcher_exe: "MinecraftLauncher.exe",
});

impl GamePaths {
    /// Where the host deploys mods of the given type.
    pub fn target_for(&self, mod_type: InstallTypeId) -> &Utf8Path {
        match mod_type {
            InstallTypeId::DefaultMod => &self.mods,
            InstallTypeId::ResourcePack => &self.resource_packs,
            InstallTypeId::ShaderPack => &self.shader_packs,
            InstallTypeId::DataPack => &self.data_packs,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LauncherPathCanonical {
    pub root: Utf8PathBuf,
    pub launcher_exe: Utf8PathBuf,
}

impl LauncherPathCanonical {
    pub fn from_launcher_paths(root: &Utf8Path, paths: LauncherPaths) -> Result<Self, SError> {
        let to_utf8 = |p: std::path::PathBuf| {
            Utf8PathBuf::from_path_buf(p)
                .map_err(|p| SError::ParseError(format!("Invalid UTF-8 path: {:?}", p)))
        };
        Ok(Self {
            root: to_utf8(canonicalize(root)?)?,
            launcher_exe: to_utf8(canonicalize(paths.launcher_exe)?)?,
        })
    }
}
