#![allow(dead_code)]

use git2::{ObjectType, Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// Scratch directory, optionally holding a git repository.
pub struct Fixture {
    pub dir: TempDir,
    repo: Option<Repository>,
}

impl Fixture {
    /// A directory with no git metadata at all
    pub fn bare_directory() -> Self {
        Fixture {
            dir: TempDir::new().expect("Could not create temp dir"),
            repo: None,
        }
    }

    /// A freshly initialised repository with zero commits
    pub fn empty_repository() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        Fixture {
            dir,
            repo: Some(repo),
        }
    }

    /// A repository with a single empty commit
    pub fn with_commit() -> Self {
        let fixture = Self::empty_repository();
        fixture.commit("Commit message.");
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn repo(&self) -> &Repository {
        self.repo.as_ref().expect("fixture has no repository")
    }

    fn signature() -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Could not create signature")
    }

    /// Adds an empty commit on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let repo = self.repo();
        let tree_id = repo
            .index()
            .expect("Could not get index")
            .write_tree()
            .expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        let sig = Self::signature();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag_annotated(&self, name: &str) {
        let repo = self.repo();
        let head = repo
            .head()
            .and_then(|h| h.peel(ObjectType::Commit))
            .expect("Could not resolve HEAD");
        repo.tag(name, &head, &Self::signature(), "Tag message.", false)
            .expect("Could not create annotated tag");
    }

    pub fn tag_lightweight(&self, name: &str) {
        let repo = self.repo();
        let head = repo
            .head()
            .and_then(|h| h.peel(ObjectType::Commit))
            .expect("Could not resolve HEAD");
        repo.tag_lightweight(name, &head, false)
            .expect("Could not create lightweight tag");
    }

    /// Short name of the checked-out branch
    pub fn branch(&self) -> String {
        self.repo()
            .head()
            .expect("Could not read HEAD")
            .shorthand()
            .expect("HEAD has no name")
            .to_string()
    }

    pub fn head_hash(&self) -> String {
        self.repo()
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Could not resolve HEAD")
            .id()
            .to_string()
    }
}
