use crate::models::entry::FileEntry;
use crate::models::error::PlanningError;
use crate::models::install_type::InstallTypeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single directive for the host executor. Serialises in the host's wire shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InstallInstruction {
    #[serde(rename = "setmodtype")]
    SetModType { value: InstallTypeId },
    #[serde(rename = "copy")]
    CopyFile {
        source: FileEntry,
        destination: String,
    },
    #[serde(rename = "generatefile")]
    GenerateFile {
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
        destination: String,
    },
}

impl InstallInstruction {
    pub fn destination(&self) -> Option<&str> {
        match self {
            InstallInstruction::SetModType { .. } => None,
            InstallInstruction::CopyFile { destination, .. }
            | InstallInstruction::GenerateFile { destination, .. } => Some(destination),
        }
    }
}

/// Ordered instructions for one install. The first entry is always the mod type tag.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct InstallPlan {
    #[serde(skip)]
    mod_type: InstallTypeId,
    instructions: Vec<InstallInstruction>,
}

impl InstallPlan {
    pub fn builder(mod_type: InstallTypeId) -> PlanBuilder {
        PlanBuilder {
            mod_type,
            seen: HashSet::new(),
            payload: Vec::new(),
        }
    }

    pub fn instructions(&self) -> &[InstallInstruction] {
        &self.instructions
    }

    pub fn mod_type(&self) -> InstallTypeId {
        self.mod_type
    }

    pub fn into_instructions(self) -> Vec<InstallInstruction> {
        self.instructions
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub struct PlanBuilder {
    mod_type: InstallTypeId,
    seen: HashSet<String>,
    payload: Vec<InstallInstruction>,
}

impl PlanBuilder {
    pub fn copy(mut self, source: FileEntry, destination: String) -> Result<Self, PlanningError> {
        self.claim(&destination)?;
        self.payload.push(InstallInstruction::CopyFile {
            source,
            destination,
        });
        Ok(self)
    }

    pub fn generate(mut self, data: Vec<u8>, destination: String) -> Result<Self, PlanningError> {
        self.claim(&destination)?;
        self.payload
            .push(InstallInstruction::GenerateFile { data, destination });
        Ok(self)
    }

    pub fn build(self) -> InstallPlan {
        let mut instructions = Vec::with_capacity(self.payload.len() + 1);
        instructions.push(InstallInstruction::SetModType {
            value: self.mod_type,
        });
        instructions.extend(self.payload);
        InstallPlan {
            mod_type: self.mod_type,
            instructions,
        }
    }

    fn claim(&mut self, destination: &str) -> Result<(), PlanningError> {
        if !is_safe_destination(destination) {
            return Err(PlanningError::UnsafeDestination(destination.to_string()));
        }
        if !self.seen.insert(destination.to_string()) {
            return Err(PlanningError::DuplicateDestination(destination.to_string()));
        }
        Ok(())
    }
}

/// Relative, non-empty, and free of `.`/`..` segments and drive prefixes.
pub fn is_safe_destination(destination: &str) -> bool {
    if destination.is_empty() || destination.starts_with(['/', '\\']) {
        return false;
    }
    destination
        .split(['/', '\\'])
        .all(|seg| !seg.is_empty() && seg != "." && seg != ".." && !seg.contains(':'))
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
