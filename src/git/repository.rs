use git2::Repository;
use std::path::{Path, PathBuf};

/// Relative to the git directory: reflog of HEAD, touched by commits and
/// branch switches.
pub const HEAD_LOG: &str = "logs/HEAD";

/// Relative to the common git directory: where tag references live.
pub const TAGS_DIR: &str = "refs/tags";

/// Metadata directories of a discovered repository.
///
/// In a linked worktree `git_dir` is `.git/worktrees/<name>` and holds the
/// worktree's own HEAD, while refs shared by all worktrees (tags included)
/// stay in `common_dir`. Outside worktrees both are the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDirs {
    pub git_dir: PathBuf,
    pub common_dir: PathBuf,
}

impl GitDirs {
    /// Paths whose changes alter the resolved version: the HEAD reflog
    /// (commit and branch changes) and the tags directory (tag changes).
    pub fn trigger_paths(&self) -> (PathBuf, PathBuf) {
        (self.git_dir.join(HEAD_LOG), self.common_dir.join(TAGS_DIR))
    }
}

/// Locates the git metadata directories of the repository enclosing `path`.
///
/// Returns `None` when `path` is not inside a repository.
pub fn discover_git_dirs<P: AsRef<Path>>(path: P) -> Option<GitDirs> {
    match Repository::discover(path) {
        Ok(repo) => Some(GitDirs {
            git_dir: repo.path().to_path_buf(),
            common_dir: repo.commondir().to_path_buf(),
        }),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit_empty(repo: &Repository) {
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();
    }

    #[test]
    fn test_discover_without_repository() {
        let dir = TempDir::new().unwrap();
        assert_eq!(discover_git_dirs(dir.path()), None);
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let nested = dir.path().join("src").join("app");
        std::fs::create_dir_all(&nested).unwrap();

        let dirs = discover_git_dirs(&nested).expect("repository should be found");
        assert!(dirs.git_dir.ends_with(".git"));
        assert_eq!(dirs.git_dir, dirs.common_dir);
    }

    #[test]
    fn test_trigger_paths() {
        let dirs = GitDirs {
            git_dir: PathBuf::from("/repo/.git"),
            common_dir: PathBuf::from("/repo/.git"),
        };
        let (head_log, tags) = dirs.trigger_paths();
        assert_eq!(head_log, PathBuf::from("/repo/.git/logs/HEAD"));
        assert_eq!(tags, PathBuf::from("/repo/.git/refs/tags"));
    }

    #[test]
    fn test_worktree_tags_come_from_common_dir() {
        let main = TempDir::new().unwrap();
        let repo = Repository::init(main.path()).unwrap();
        commit_empty(&repo);

        let scratch = TempDir::new().unwrap();
        let worktree_path = scratch.path().join("wt");
        repo.worktree("wt", &worktree_path, None).unwrap();

        let dirs = discover_git_dirs(&worktree_path).expect("worktree should be found");
        assert!(dirs.git_dir.ends_with(".git/worktrees/wt"));
        assert!(dirs.common_dir.ends_with(".git"));

        let (head_log, tags) = dirs.trigger_paths();
        assert!(head_log.ends_with(".git/worktrees/wt/logs/HEAD"));
        assert!(tags.is_dir(), "{} should exist", tags.display());
        assert_eq!(tags, dirs.common_dir.join("refs/tags"));
    }
}
