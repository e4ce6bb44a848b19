use crate::models::error::SError;

/// Host-side user preferences consulted while planning.
pub trait UserPreferenceProvider: Send + Sync {
    /// `Some(true)` extracts resource packs as loose files, `Some(false)` keeps them
    /// archived, `None` means undecided.
    fn resource_pack_extraction_preference(&self) -> Option<bool>;

    /// Ask the user, store the answer and return it.
    fn prompt_and_persist(&self) -> Result<bool, SError>;
}

/// A preference fixed at construction. Never prompts; undecided resolves to `default`.
#[derive(Clone, Copy, Debug)]
pub struct FixedPreference {
    pub extraction: Option<bool>,
    pub default: bool,
}

impl FixedPreference {
    pub fn extract() -> Self {
        Self {
            extraction: Some(true),
            default: true,
        }
    }

    pub fn keep_archived() -> Self {
        Self {
            extraction: Some(false),
            default: false,
        }
    }
}

impl UserPreferenceProvider for FixedPreference {
    fn resource_pack_extraction_preference(&self) -> Option<bool> {
        self.extraction
    }

    fn prompt_and_persist(&self) -> Result<bool, SError> {
        Ok(self.default)
    }
}

/// Stored preference if present, otherwise ask once.
pub fn resolve_extraction(provider: &dyn UserPreferenceProvider) -> Result<bool, SError> {
    match provider.resource_pack_extraction_preference() {
        Some(choice) => Ok(choice),
        None => provider.prompt_and_persist(),
    }
}
