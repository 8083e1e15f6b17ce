//! xa command-line tooling
//!
//! Scaffolds assistant projects and exposes the location and weather
//! engine as subcommands.

pub mod cli;
pub mod commands;
pub mod scaffold;
