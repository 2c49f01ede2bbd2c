pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod host;
pub mod output;
pub mod plugin;
pub mod resolver;
pub mod ui;

pub use error::{GitVersionError, Result};
pub use plugin::VersionPlugin;
pub use resolver::VersionResolver;
