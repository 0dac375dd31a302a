// src/receive/dir.rs

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::errors::{DropcatchError, Result};
use crate::fs::FileSystem;

/// Turn a user-supplied directory into an absolute, normalised path.
///
/// Relative input is anchored at `cwd`; an empty string means `cwd` itself.
/// The name is taken literally (surrounding whitespace included). `.`
/// components are dropped and `..` pops the previous component; the
/// filesystem is not consulted, so the directory does not need to exist yet.
pub fn resolve_target_dir(raw: &str, cwd: &Path) -> Result<PathBuf> {
    let path = if raw.is_empty() {
        Path::new(".")
    } else {
        Path::new(raw)
    };

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        if !cwd.is_absolute() {
            return Err(DropcatchError::directory(
                cwd,
                "cannot anchor a relative directory at a relative working directory",
            ));
        }
        cwd.join(path)
    };

    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make sure `path` exists as a directory, creating it and its parents.
pub fn ensure_target_dir(fs: &dyn FileSystem, path: &Path) -> Result<()> {
    if fs.is_dir(path) {
        debug!(dir = %path.display(), "target directory already exists");
        return Ok(());
    }

    if fs.exists(path) {
        return Err(DropcatchError::directory(
            path,
            "path exists but is not a directory",
        ));
    }

    fs.create_dir_all(path)
        .map_err(|err| DropcatchError::directory(path, format!("{err:#}")))?;

    debug!(dir = %path.display(), "created target directory");
    Ok(())
}
