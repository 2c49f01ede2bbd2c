//! Git query abstraction layer
//!
//! The resolver only needs three read-only answers from source control. They
//! are expressed by the [GitQuery] trait so resolution logic can run against
//! the real `git` executable or against scripted answers in tests.
//!
//! - [command::GitCli]: runs the `git` executable in a fixed directory
//! - [mock::MockGit]: scripted answers with a call counter
//!
//! [repository::discover_git_dirs] uses `git2` to locate the repository
//! metadata directories, which is what rebuild triggers point at.

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCli;
pub use mock::MockGit;
pub use repository::{discover_git_dirs, GitDirs};

use crate::error::Result;

/// Read-only source-control queries used during version resolution.
///
/// Every method returns the command output with surrounding whitespace
/// trimmed. Implementors must be `Send + Sync` because the branch and hash
/// lookups are issued from separate threads.
pub trait GitQuery: Send + Sync {
    /// Long-form description of HEAD against the nearest tag
    /// (`git describe --long --tags`), e.g. `1.2.3-0-g1a2b3c4`.
    ///
    /// Fails when the repository has no tags or no commits.
    fn describe_long_tags(&self) -> Result<String>;

    /// Name of the checked-out branch (`git rev-parse --abbrev-ref HEAD`).
    fn current_branch(&self) -> Result<String>;

    /// Full hash of the HEAD commit (`git rev-parse HEAD`).
    fn head_hash(&self) -> Result<String>;
}
