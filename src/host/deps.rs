use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// A host collection of rebuild triggers.
///
/// Hosts keep these either as arrays or as sets; appending the same path
/// twice is allowed in both cases.
pub trait DependencySink {
    fn append(&mut self, path: PathBuf);
}

impl DependencySink for Vec<PathBuf> {
    fn append(&mut self, path: PathBuf) {
        self.push(path);
    }
}

impl DependencySink for BTreeSet<PathBuf> {
    fn append(&mut self, path: PathBuf) {
        self.insert(path);
    }
}

impl DependencySink for HashSet<PathBuf> {
    fn append(&mut self, path: PathBuf) {
        self.insert(path);
    }
}
