//! A multi-window desktop for Tiny-ERP transaction screens, hosted in the
//! terminal.
//!
//! [`window`] holds the window model, lifecycle manager and pointer
//! gestures. [`desktop`] wires them to content, the launcher and the
//! taskbar, and [`runner`] drives a desktop from an input driver.

pub mod component_context;
pub mod config;
pub mod constants;
pub mod content;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod launcher;
pub mod log_buffer;
pub mod runner;
pub mod taskbar;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::{Cli, ShellConfig};
pub use desktop::Desktop;
pub use error::{Result, ShellError};
