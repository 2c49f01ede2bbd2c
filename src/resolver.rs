use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use std::thread;

use crate::config::Config;
use crate::error::{GitVersionError, Result};
use crate::git::{GitCli, GitQuery};

/// Number of hash characters kept in the `branch@hash` form.
pub const SHORT_HASH_LEN: usize = 7;

fn describe_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*)-(\d+)-g[0-9a-f]+$").expect("describe pattern is a valid regex")
    })
}

/// Splits `git describe --long` output into the tag and the number of
/// commits between that tag and HEAD.
///
/// Returns `None` when the output does not have the `<tag>-<offset>-g<hash>`
/// shape. The tag capture is greedy, so tags containing dashes survive.
pub fn parse_describe(describe: &str) -> Option<(&str, u64)> {
    let captures = describe_pattern().captures(describe.trim())?;
    let tag = captures.get(1)?.as_str();
    let offset = captures.get(2)?.as_str().parse().ok()?;
    Some((tag, offset))
}

/// Produces a version string from the state of the enclosing repository.
///
/// A resolver holds no mutable state: every call to [resolve](Self::resolve)
/// queries git afresh, and calls may run concurrently.
pub struct VersionResolver<G: GitQuery = GitCli> {
    git: G,
    manual: Option<String>,
}

impl VersionResolver<GitCli> {
    /// Resolver for the repository enclosing the current working directory.
    pub fn new(config: &Config) -> Self {
        Self::in_dir(".", config)
    }

    /// Resolver for the repository enclosing `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P, config: &Config) -> Self {
        Self::with_git(GitCli::new(dir), config)
    }
}

impl<G: GitQuery> VersionResolver<G> {
    pub fn with_git(git: G, config: &Config) -> Self {
        VersionResolver {
            git,
            manual: config.override_version().map(str::to_string),
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn has_override(&self) -> bool {
        self.manual.is_some()
    }

    /// Resolves the version.
    ///
    /// 1. A configured override is returned as-is, without touching git.
    /// 2. If HEAD is exactly tagged, the tag name is returned.
    /// 3. Otherwise `<branch>@<first 7 hash characters>` is returned.
    ///
    /// # Returns
    /// * `Ok(String)` - The version
    /// * `Err(GitVersionError::Resolution)` - No repository, no commits, or
    ///   git could not be run
    pub fn resolve(&self) -> Result<String> {
        if let Some(version) = &self.manual {
            return Ok(version.clone());
        }

        // No tags, or a describe we cannot read: fall through to branch@hash.
        if let Ok(describe) = self.git.describe_long_tags() {
            if let Some((tag, 0)) = parse_describe(&describe) {
                return Ok(tag.to_string());
            }
        }

        let (branch, hash) = thread::scope(|scope| {
            let branch = scope.spawn(|| self.git.current_branch());
            let hash = self.git.head_hash();
            let branch = branch
                .join()
                .unwrap_or_else(|_| Err(GitVersionError::resolution("branch lookup panicked")));
            (branch, hash)
        });

        let branch = branch.map_err(|e| GitVersionError::resolution(e.to_string()))?;
        let hash = hash.map_err(|e| GitVersionError::resolution(e.to_string()))?;

        Ok(format!("{}@{}", branch, short_hash(&hash)))
    }
}

fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}
