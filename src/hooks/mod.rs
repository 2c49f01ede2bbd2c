//! Build lifecycle hook registration
//!
//! Plugins register handlers for two phases:
//! - emit: assets are final and about to be written
//! - alter-asset-tags: HTML tags are about to be rendered
//!
//! Hosts speak one of two plugin interfaces, modelled by [ModernHooks] and
//! [LegacyHooks] behind the common [Hooks] trait.

pub mod lifecycle;
pub mod registry;

pub use lifecycle::{AssetTagsHandler, EmitHandler, Phase};
pub use registry::{HookStyle, Hooks, LegacyHooks, ModernHooks};
