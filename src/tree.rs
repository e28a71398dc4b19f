//! Recursive target-tree listing
//!
//! After provisioning, the setup tool prints an indented listing of the
//! whole target tree so the operator can verify what was created. Entries
//! come back from [`FileSystem::read_dir`] sorted by name, files before
//! subdirectories at each level.

use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use crate::constants::LISTING_INDENT;
use crate::filesystem::FileSystem;

/// Renders the directory tree rooted at `root` as an indented listing
///
/// Each directory appears as `name/` at its depth, followed by its files
/// one level deeper, followed by its subdirectories.
pub fn render_tree(root: &Path, fs: &dyn FileSystem) -> Result<String> {
    let mut out = String::new();
    walk(root, 0, fs, &mut out)?;
    Ok(out)
}

fn walk(dir: &Path, depth: usize, fs: &dyn FileSystem, out: &mut String) -> Result<()> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    writeln!(out, "{}{}/", LISTING_INDENT.repeat(depth), name)?;

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for path in fs.read_dir(dir)? {
        if fs.is_dir(&path) {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }

    for file in files {
        if let Some(file_name) = file.file_name() {
            writeln!(
                out,
                "{}{}",
                LISTING_INDENT.repeat(depth + 1),
                file_name.to_string_lossy()
            )?;
        }
    }

    for subdir in subdirs {
        walk(&subdir, depth + 1, fs, out)?;
    }

    Ok(())
}
