use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// A relative path inside a candidate archive, as reported by the host's lister.
/// A trailing separator marks a directory entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FileEntry(String);

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_dir(&self) -> bool {
        self.0.ends_with(SEPARATORS)
    }

    /// Path segments, split on either separator, empty segments dropped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATORS).filter(|s| !s.is_empty())
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    pub fn file_name(&self) -> Option<&str> {
        if self.is_dir() {
            return None;
        }
        self.segments().last()
    }

    /// Lowercased extension without the dot. Directories and dotfiles have none.
    pub fn extension(&self) -> Option<String> {
        extension_of(self.file_name()?)
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension().is_some_and(|e| e == ext.to_lowercase())
    }

    /// True when the first segment equals `marker`, ignoring case.
    pub fn starts_with_folder(&self, marker: &str) -> bool {
        self.first_segment()
            .is_some_and(|s| s.eq_ignore_ascii_case(marker))
    }

    /// Forward-slash form of the path, without a trailing separator.
    pub fn normalized(&self) -> String {
        self.segments().collect::<Vec<_>>().join("/")
    }
}

/// Lowercased extension of a bare file name, e.g. `"Pack.ZIP"` -> `"zip"`.
pub fn extension_of(name: &str) -> Option<String> {
    let name = name.rsplit(SEPARATORS).next().unwrap_or(name);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx + 1 < name.len() => Some(name[idx + 1..].to_lowercase()),
        Some(_) => None,
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileEntry {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FileEntry {
    fn from(s: String) -> Self {
        Self(s)
    }
}
