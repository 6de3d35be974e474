//! Workspace-relative path resolution for linked resources.

use std::path::{Component, Path, PathBuf};

use crate::error::ResourceOpenError;

/// Resolves a resource path from a rendered document against the workspace
/// root.
///
/// Resource paths travel through the pane's script layer, so they are treated
/// as untrusted input: absolute paths and parent-directory components are
/// rejected rather than resolved.
///
/// # Errors
///
/// Returns `ResourceOpenError::OutsideWorkspace` if the path is absolute or
/// contains a `..` component.
pub fn resolve_in_workspace(
    workspace_root: &Path,
    resource: &str,
) -> Result<PathBuf, ResourceOpenError> {
    let relative = Path::new(resource);

    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|component| matches!(component, Component::ParentDir));

    if escapes {
        return Err(ResourceOpenError::OutsideWorkspace {
            path: relative.to_path_buf(),
        });
    }

    Ok(workspace_root.join(relative))
}
