//! Injects the resolved version into build output.
//!
//! The plugin registers two handlers on a [Hooks] host:
//! - emit: writes the version artifact and registers rebuild triggers
//! - alter-asset-tags: prepends an inline script that publishes the version
//!   as a global variable
//!
//! Both degrade to an empty version when resolution fails, so a missing
//! repository never breaks the build. The failure is kept as a warning for
//! the caller to collect with [VersionPlugin::take_warnings].

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::error::Result;
use crate::git::{discover_git_dirs, GitCli, GitQuery};
use crate::hooks::Hooks;
use crate::host::{Asset, AssetTags, Compilation, HtmlTag};
use crate::resolver::VersionResolver;

/// Name the plugin registers its handlers under
pub const PLUGIN_NAME: &str = "GitVersionPlugin";

/// Paths whose changes alter the resolved version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildTriggers {
    /// Reflog of HEAD: commits and branch switches
    pub head_log: PathBuf,
    /// Tag references directory: tags added or removed
    pub tags_dir: PathBuf,
}

struct Inner<G: GitQuery> {
    config: Config,
    resolver: VersionResolver<G>,
    work_dir: PathBuf,
    warnings: Mutex<Vec<String>>,
}

/// Version injection plugin for a build host.
///
/// Cloning is cheap; clones share the same configuration and resolver.
pub struct VersionPlugin<G: GitQuery + 'static = GitCli> {
    inner: Arc<Inner<G>>,
}

impl<G: GitQuery + 'static> Clone for VersionPlugin<G> {
    fn clone(&self) -> Self {
        VersionPlugin {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl VersionPlugin<GitCli> {
    /// Plugin for the repository enclosing the current working directory.
    pub fn new(config: Config) -> Result<Self> {
        Self::in_dir(".", config)
    }

    /// Plugin for the repository enclosing `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P, config: Config) -> Result<Self> {
        Self::with_git(GitCli::new(dir.as_ref()), dir, config)
    }
}

impl<G: GitQuery + 'static> VersionPlugin<G> {
    /// Builds a plugin on top of an arbitrary git backend.
    ///
    /// `work_dir` is where the repository is looked up for rebuild triggers.
    /// Fails if `config` does not validate.
    pub fn with_git<P: AsRef<Path>>(git: G, work_dir: P, config: Config) -> Result<Self> {
        config.validate()?;
        let resolver = VersionResolver::with_git(git, &config);

        Ok(VersionPlugin {
            inner: Arc::new(Inner {
                config,
                resolver,
                work_dir: work_dir.as_ref().to_path_buf(),
                warnings: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn resolver(&self) -> &VersionResolver<G> {
        &self.inner.resolver
    }

    /// Resolves the version, propagating resolution failures.
    pub fn version(&self) -> Result<String> {
        self.inner.resolver.resolve()
    }

    /// Registers the plugin's handlers on `hooks`.
    pub fn apply(&self, hooks: &mut dyn Hooks) {
        let emit = Arc::clone(&self.inner);
        hooks.tap_emit(
            PLUGIN_NAME,
            Box::new(move |compilation: &mut Compilation<'_>| emit.handle_emit(compilation)),
        );

        let tags = Arc::clone(&self.inner);
        hooks.tap_alter_asset_tags(
            PLUGIN_NAME,
            Box::new(move |asset_tags: &mut AssetTags| tags.handle_alter_asset_tags(asset_tags)),
        );
    }

    /// The paths a host should watch, or `None` when a manual override is
    /// configured or no repository encloses the working directory.
    pub fn rebuild_triggers(&self) -> Option<RebuildTriggers> {
        self.inner.rebuild_triggers()
    }

    /// Drains the warnings recorded by handlers since the last call.
    pub fn take_warnings(&self) -> Vec<String> {
        match self.inner.warnings.lock() {
            Ok(mut warnings) => std::mem::take(&mut *warnings),
            Err(_) => Vec::new(),
        }
    }

    /// The inline script publishing `version` under the configured name.
    pub fn script_tag(&self, version: &str) -> Result<HtmlTag> {
        self.inner.script_tag(version)
    }
}

impl<G: GitQuery> Inner<G> {
    fn version_or_empty(&self) -> String {
        match self.resolver.resolve() {
            Ok(version) => version,
            Err(e) => {
                if let Ok(mut warnings) = self.warnings.lock() {
                    warnings.push(format!("Could not determine version: {}", e));
                }
                String::new()
            }
        }
    }

    fn rebuild_triggers(&self) -> Option<RebuildTriggers> {
        if self.resolver.has_override() {
            return None;
        }

        let dirs = discover_git_dirs(&self.work_dir)?;
        let (head_log, tags_dir) = dirs.trigger_paths();
        Some(RebuildTriggers { head_log, tags_dir })
    }

    fn handle_emit(&self, compilation: &mut Compilation<'_>) -> Result<()> {
        let version = self.version_or_empty();
        let asset = if version.is_empty() {
            Asset::empty()
        } else {
            Asset::new(format!("{}\n", version))
        };
        compilation.assets.insert(self.config.path.clone(), asset);

        if let Some(triggers) = self.rebuild_triggers() {
            compilation.file_dependencies.append(triggers.head_log);
            compilation.context_dependencies.append(triggers.tags_dir);
        }

        Ok(())
    }

    fn handle_alter_asset_tags(&self, tags: &mut AssetTags) -> Result<()> {
        let version = self.version_or_empty();
        tags.prepend_script(self.script_tag(&version)?);
        Ok(())
    }

    fn script_tag(&self, version: &str) -> Result<HtmlTag> {
        let body = format!(
            "window[{}] = {}",
            serde_json::to_string(&self.config.name)?,
            serde_json::to_string(version)?
        );
        Ok(HtmlTag::inline_script(body))
    }
}
