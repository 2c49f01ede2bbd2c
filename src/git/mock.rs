use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{GitVersionError, Result};
use crate::git::GitQuery;

/// Mock git for testing without spawning processes.
///
/// Every query answers from a scripted value; `None` makes the query fail
/// the way `git` does when there is no repository.
#[derive(Debug, Default)]
pub struct MockGit {
    describe: Option<String>,
    branch: Option<String>,
    hash: Option<String>,
    calls: AtomicUsize,
}

impl MockGit {
    /// Create a mock where every query fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock of a repository with a commit on `branch` at `hash`
    pub fn at_commit(branch: impl Into<String>, hash: impl Into<String>) -> Self {
        MockGit {
            branch: Some(branch.into()),
            hash: Some(hash.into()),
            ..Self::default()
        }
    }

    /// Set the `git describe --long --tags` output
    pub fn with_describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = Some(describe.into());
        self
    }

    /// Number of queries issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, args: &[&str], value: &Option<String>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        value
            .clone()
            .ok_or_else(|| GitVersionError::command(args, "exit code 128: not a git repository"))
    }
}

impl GitQuery for MockGit {
    fn describe_long_tags(&self) -> Result<String> {
        self.answer(&["describe", "--long", "--tags"], &self.describe)
    }

    fn current_branch(&self) -> Result<String> {
        self.answer(&["rev-parse", "--abbrev-ref", "HEAD"], &self.branch)
    }

    fn head_hash(&self) -> Result<String> {
        self.answer(&["rev-parse", "HEAD"], &self.hash)
    }
}
