//! Error taxonomy for guide loading and resource opening.

use std::path::PathBuf;

/// Failure to load a guide source document or section content.
///
/// Loading is all-or-nothing: a `LoadError` aborts the current outline or
/// render operation and leaves prior state unchanged. Callers surface it to
/// the user rather than building a partial tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed guide document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to open a linked resource through the host opener.
///
/// Reported to the user as a warning; never tears down the content pane.
#[derive(Debug, thiserror::Error)]
pub enum ResourceOpenError {
    #[error("resource path escapes the workspace: {}", path.display())]
    OutsideWorkspace { path: PathBuf },
    #[error("could not open {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
