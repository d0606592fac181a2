//! folioterm - an interactive portfolio terminal.
//!
//! A small TUI that puts a personal profile behind a toy command line:
//! a handful of built-in commands (`help`, `about`, `echo`, `github`, ...),
//! shell-style input history, a typing placeholder animation, and a transcript
//! that persists across runs.
//!
//! The crate is split into a pure session core ([`session`]) that owns all
//! state and performs command dispatch, a persistence layer ([`store`]), and
//! a ratatui front-end ([`tui`]). Side effects (opening URLs, saving the
//! downloadable resume, storage) are injected as capability traits so the
//! core can be driven with in-memory fakes under test.

pub mod config;
pub mod session;
pub mod store;
pub mod tui;

pub use config::Config;
pub use session::Session;
