use crate::models::install_type::InstallTypeId;
use camino::Utf8PathBuf;
use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum PlanningError {
    #[display("no {_0} root file found among the archive entries")]
    NoModRoot(InstallTypeId),
    #[display("destination '{_0}' escapes the mod directory")]
    UnsafeDestination(String),
    #[display("destination '{_0}' is written by more than one instruction")]
    DuplicateDestination(String),
}

#[derive(Debug, Display)]
pub enum SError {
    #[display("game installation not found: {_0}")]
    GameNotFound(String),
    #[display("planning failed: {_0}")]
    Planning(PlanningError),
    #[display("archive regeneration failed: {_0}")]
    ArchiveRegeneration(String),
    #[display("generated archive {path} is {size} bytes, over the {limit} byte limit")]
    ArchiveTooLarge {
        path: Utf8PathBuf,
        size: u64,
        limit: u64,
    },
    #[display("io error: {_0}")]
    IOError(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("config error: {_0}")]
    ConfigError(String),
    #[display("async runtime error: {_0}")]
    AsyncRuntimeError(String),
}

impl std::error::Error for SError {}

impl SError {
    pub fn is_planning(&self) -> bool {
        matches!(self, SError::Planning(_))
    }
}

impl From<PlanningError> for SError {
    fn from(e: PlanningError) -> Self {
        SError::Planning(e)
    }
}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<walkdir::Error> for SError {
    fn from(e: walkdir::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<std::path::StripPrefixError> for SError {
    fn from(e: std::path::StripPrefixError) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<zip::result::ZipError> for SError {
    fn from(e: zip::result::ZipError) -> Self {
        SError::ArchiveRegeneration(e.to_string())
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::ConfigError(e.to_string())
    }
}
