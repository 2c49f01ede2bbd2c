use crate::error::Result;
use crate::host::{AssetTags, Compilation};

/// Build lifecycle phases a plugin can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Assets are final and about to be written out
    Emit,
    /// HTML tags are about to be rendered into a page
    AlterAssetTags,
}

impl Phase {
    /// Get the hook name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Emit => "emit",
            Phase::AlterAssetTags => "alter-asset-tags",
        }
    }

    /// Event name used by the callback-based plugin interface
    pub fn legacy_event(&self) -> &'static str {
        match self {
            Phase::Emit => "emit",
            Phase::AlterAssetTags => "html-webpack-plugin-alter-asset-tags",
        }
    }

    pub fn from_legacy_event(event: &str) -> Option<Phase> {
        [Phase::Emit, Phase::AlterAssetTags]
            .into_iter()
            .find(|phase| phase.legacy_event() == event)
    }
}

/// Handler run during [Phase::Emit]
pub type EmitHandler = Box<dyn Fn(&mut Compilation<'_>) -> Result<()> + Send + Sync>;

/// Handler run during [Phase::AlterAssetTags]
pub type AssetTagsHandler = Box<dyn Fn(&mut AssetTags) -> Result<()> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Emit.name(), "emit");
        assert_eq!(Phase::AlterAssetTags.name(), "alter-asset-tags");
    }

    #[test]
    fn test_legacy_event_round_trip() {
        assert_eq!(
            Phase::from_legacy_event("html-webpack-plugin-alter-asset-tags"),
            Some(Phase::AlterAssetTags)
        );
        assert_eq!(Phase::from_legacy_event("emit"), Some(Phase::Emit));
        assert_eq!(Phase::from_legacy_event("done"), None);
    }
}
