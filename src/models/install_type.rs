use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The categories the host routes an installed mod by.
#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum InstallTypeId {
    #[display("default-mod")]
    DefaultMod,
    #[display("resource-pack")]
    ResourcePack,
    #[display("shader-pack")]
    ShaderPack,
    #[display("data-pack")]
    DataPack,
}

impl InstallTypeId {
    pub const ALL: [InstallTypeId; 4] = [
        InstallTypeId::DefaultMod,
        InstallTypeId::ResourcePack,
        InstallTypeId::ShaderPack,
        InstallTypeId::DataPack,
    ];

    /// Display name shown next to the mod type in the host.
    pub fn label(&self) -> &'static str {
        match self {
            InstallTypeId::DefaultMod => "Mod",
            InstallTypeId::ResourcePack => "Resource Pack",
            InstallTypeId::ShaderPack => "Shader Pack",
            InstallTypeId::DataPack => "Data Pack",
        }
    }
}

impl FromStr for InstallTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.to_string() == s)
            .ok_or_else(|| format!("unknown install type '{s}'"))
    }
}
