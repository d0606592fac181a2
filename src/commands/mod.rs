//! CLI subcommand handlers.

pub mod run;
pub mod wipe;
