//! Command-line workflows
//!
//! `main.rs` only parses arguments and prints; the work behind each
//! subcommand lives in [orchestration] so it can be called and tested
//! without clap.

pub mod orchestration;
