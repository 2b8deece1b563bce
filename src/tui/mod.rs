//! TUI integration layer (crossterm + ratatui).
//!
//! 与 `kernel`/`models` 分开，核心可以被其他前端复用而不依赖终端 crate。

pub mod app;
pub mod clipboard;
mod draw;
pub mod prompt;
pub mod settings_rows;
pub mod terminal;
pub mod toast;

pub use app::{App, Focus, PropertyRow};
pub use terminal::{ExitSignal, TerminalSession};
