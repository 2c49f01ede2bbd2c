use std::collections::BTreeMap;

/// Build output keyed by path relative to the output directory.
pub type AssetMap = BTreeMap<String, Asset>;

/// A single in-memory build output file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Asset {
    source: String,
}

impl Asset {
    pub fn new(source: impl Into<String>) -> Self {
        Asset {
            source: source.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Size of the source in bytes
    pub fn size(&self) -> usize {
        self.source.len()
    }
}
