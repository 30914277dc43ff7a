//! Shared crate-wide constants.
//!
//! Window geometry is expressed in logical pixels; the terminal presentation
//! converts to cells through [`crate::window::CellMetrics`].

/// Width given to windows opened without an explicit width.
pub const DEFAULT_WINDOW_WIDTH: u32 = 900;

/// Height given to windows opened without an explicit height.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Floor applied to window width, both on open and while resizing.
pub const MIN_WINDOW_WIDTH: u32 = 300;

/// Floor applied to window height, both on open and while resizing.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Position of the first cascaded window on both axes.
pub const CASCADE_ORIGIN: i32 = 50;

/// Offset added per already-open window when cascading new ones.
pub const CASCADE_STEP: i32 = 20;

/// Baseline stacking value. Every window z-index is offset from it so
/// windows always stack above the rest of the page chrome.
pub const Z_INDEX_BASE: i32 = 1000;

/// Pixels covered by one terminal column.
pub const DEFAULT_CELL_WIDTH: u32 = 10;

/// Pixels covered by one terminal row.
pub const DEFAULT_CELL_HEIGHT: u32 = 20;

/// Rows reserved at the bottom of the terminal for the taskbar.
pub const TASKBAR_HEIGHT: u16 = 1;

/// Interval between idle redraws of the event loop, in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 16;

pub const APP_NAME: &str = "Tiny-ERP";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
