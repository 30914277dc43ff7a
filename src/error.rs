use std::io;

use crate::content::ContentId;

/// Failures surfaced by the shell.
///
/// Window operations never fail: an unknown window id is a silent no-op.
/// Only the terminal plumbing and content instantiation report errors.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("no content registered for `{0}`")]
    UnknownContent(ContentId),
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
