//! In-memory model of the build host the version is injected into.
//!
//! The host owns the asset map, the rebuild-trigger collections and the
//! HTML tag groups; plugins only see them for the duration of a phase.

pub mod asset;
pub mod deps;
pub mod html;

pub use asset::{Asset, AssetMap};
pub use deps::DependencySink;
pub use html::{AssetTags, HtmlTag};

/// State handed to handlers of the emit phase.
pub struct Compilation<'a> {
    pub assets: &'a mut AssetMap,
    /// Files whose changes invalidate the build
    pub file_dependencies: &'a mut dyn DependencySink,
    /// Directories whose contents invalidate the build
    pub context_dependencies: &'a mut dyn DependencySink,
}

impl<'a> Compilation<'a> {
    pub fn new(
        assets: &'a mut AssetMap,
        file_dependencies: &'a mut dyn DependencySink,
        context_dependencies: &'a mut dyn DependencySink,
    ) -> Self {
        Compilation {
            assets,
            file_dependencies,
            context_dependencies,
        }
    }
}
