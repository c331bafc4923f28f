use std::path::{Path, PathBuf};

use crate::error::{PsError, Result};

pub fn default_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(PsError::NoHomeDir)?;
    Ok(home.join("Desktop").join("ps"))
}

/// Picks the tree root: explicit override first, then `~/Desktop/ps`.
/// Relative overrides are anchored at the current directory.
pub fn resolve_root(override_root: Option<&Path>) -> Result<PathBuf> {
    let root = match override_root {
        Some(path) => path.to_path_buf(),
        None => return default_root(),
    };

    if root.is_absolute() {
        return Ok(root);
    }

    let cwd = std::env::current_dir().map_err(|e| PsError::io(".", e))?;
    Ok(cwd.join(root))
}
