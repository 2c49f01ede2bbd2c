//! Subcommand workflows
//!
//! Each `run_*` function does the work of one subcommand and returns what
//! happened instead of printing it. Output is left to the caller.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::hooks::HookStyle;
use crate::host::{AssetMap, Compilation};
use crate::output;
use crate::plugin::{RebuildTriggers, VersionPlugin};
use crate::resolver::VersionResolver;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub path: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Arguments for the emit workflow
#[derive(Debug, Clone, PartialEq)]
pub struct EmitArgs {
    /// Directory the build runs in; git and config lookups start here
    pub dir: PathBuf,

    /// Directory the assets are written below
    pub out_dir: PathBuf,

    /// HTML pages that receive the version script
    pub html: Vec<PathBuf>,

    pub style: HookStyle,
}

/// What the emit workflow did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitReport {
    /// Asset files written, in output order
    pub written: Vec<PathBuf>,

    /// HTML pages the script was injected into
    pub injected: Vec<PathBuf>,

    /// Rebuild triggers registered during emit
    pub watched: Vec<PathBuf>,

    /// Resolution failures that were degraded to an empty version
    pub warnings: Vec<String>,
}

/// Loads the configuration for a build in `dir` and applies `overrides`.
///
/// An explicit `config_path` is used as given; otherwise the file lookup
/// starts in `dir`, not in the process working directory.
pub fn build_config(
    dir: &Path,
    config_path: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<Config> {
    let mut config = config::load_config_in(dir, config_path)?;

    if let Some(path) = &overrides.path {
        config.path = path.clone();
    }
    if let Some(name) = &overrides.name {
        config.name = name.clone();
    }
    if let Some(version) = &overrides.version {
        config.version = version.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Resolves the version of the repository enclosing `dir`.
pub fn run_resolve(dir: &Path, config: &Config) -> Result<String> {
    let version = VersionResolver::in_dir(dir, config).resolve()?;
    Ok(version)
}

/// Runs the plugin through an in-memory host, then writes the assets and
/// injects the version script into every HTML page.
pub fn run_emit(args: &EmitArgs, config: Config) -> Result<EmitReport> {
    let plugin = VersionPlugin::in_dir(&args.dir, config)?;
    let mut hooks = args.style.hooks();
    plugin.apply(hooks.as_mut());

    let mut assets = AssetMap::new();
    let mut file_dependencies: Vec<PathBuf> = Vec::new();
    let mut context_dependencies: BTreeSet<PathBuf> = BTreeSet::new();
    hooks.emit(&mut Compilation::new(
        &mut assets,
        &mut file_dependencies,
        &mut context_dependencies,
    ))?;

    let written = output::write_assets(&args.out_dir, &assets)
        .with_context(|| format!("writing assets to {}", args.out_dir.display()))?;

    let mut injected = Vec::with_capacity(args.html.len());
    for page in &args.html {
        let mut tags = hooks.asset_tags();
        hooks.alter_asset_tags(&mut tags)?;
        output::inject_into_html_file(page, tags.scripts())
            .with_context(|| format!("injecting version into {}", page.display()))?;
        injected.push(page.clone());
    }

    let mut warnings = plugin.take_warnings();
    warnings.dedup();

    Ok(EmitReport {
        written,
        injected,
        watched: file_dependencies
            .into_iter()
            .chain(context_dependencies)
            .collect(),
        warnings,
    })
}

/// The rebuild triggers for a build in `dir`, if any.
pub fn run_deps(dir: &Path, config: Config) -> Result<Option<RebuildTriggers>> {
    let plugin = VersionPlugin::in_dir(dir, config)?;
    Ok(plugin.rebuild_triggers())
}
