//! TUI front-end for the terminal session.
//!
//! Built on ratatui/crossterm. The session core stays rendering-agnostic;
//! everything terminal-specific lives here.

pub mod app;
pub mod theme;
pub mod ui;

pub use app::TerminalApp;
pub use theme::Theme;
