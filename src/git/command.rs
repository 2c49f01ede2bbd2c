use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitVersionError, Result};
use crate::git::GitQuery;

const DESCRIBE_ARGS: &[&str] = &["describe", "--long", "--tags"];
const BRANCH_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];
const HASH_ARGS: &[&str] = &["rev-parse", "HEAD"];

/// Runs the `git` executable to answer queries.
///
/// Each query is a separate process invocation with no timeout; a hung
/// `git` blocks the caller.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    work_dir: PathBuf,
}

impl GitCli {
    /// Queries the repository enclosing `work_dir`.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        GitCli {
            program: PathBuf::from(if cfg!(windows) { "git.exe" } else { "git" }),
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Uses a specific git executable instead of the one found on `PATH`.
    pub fn with_program<P: AsRef<Path>>(mut self, program: P) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| {
                GitVersionError::command(
                    args,
                    format!("could not run {}: {}", self.program.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitVersionError::command(
                args,
                format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitQuery for GitCli {
    fn describe_long_tags(&self) -> Result<String> {
        self.run(DESCRIBE_ARGS)
    }

    fn current_branch(&self) -> Result<String> {
        self.run(BRANCH_ARGS)
    }

    fn head_hash(&self) -> Result<String> {
        self.run(HASH_ARGS)
    }
}
