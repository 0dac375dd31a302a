// src/receive/listing.rs

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::fs::{DirEntryInfo, FileSystem};

/// Non-directory entries of `dir`, sorted by name.
pub fn list_received(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let mut files: Vec<DirEntryInfo> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|entry| !entry.is_dir)
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Write the human-readable listing:
///
/// ```text
/// Files in /srv/drops:
///   photo.jpg (20481 bytes)
/// ```
pub fn render_listing<W: Write + ?Sized>(
    out: &mut W,
    dir: &Path,
    entries: &[DirEntryInfo],
) -> io::Result<()> {
    writeln!(out, "Files in {}:", dir.display())?;
    for entry in entries {
        writeln!(out, "  {} ({} bytes)", entry.name, entry.size)?;
    }
    Ok(())
}
