//! Portal directory provisioning
//!
//! This module performs the scripted provisioning sequence that assembles
//! the portal source tree from a staging directory of extracted files:
//!
//! 1. create the target directory list through the privileged capability,
//! 2. recursively chown the target root to the invoking user,
//! 3. copy the manifest components that exist in staging,
//! 4. copy the staged UI component files (non-recursive),
//! 5. copy the utility files, routing the stylesheet to `src/`,
//! 6. copy the supplementary asset tree recursively, overwriting,
//! 7. copy the standalone application entry file,
//! 8. print a completion banner and a recursive listing of the target tree.
//!
//! A failed privileged step is printed and the sequence continues; there is
//! no abort and no rollback. A copy whose source does not exist is skipped
//! through an existence check, which is a documented no-op, not an error.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use crate::config::SetupConfig;
use crate::constants::{
    APP_DEST_NAME, GLOBAL_STYLESHEET, MAX_DIRECTORY_DEPTH, MSG_COPIED_ASSETS, MSG_COPIED_PREFIX,
    MSG_COPIED_UI, MSG_SETUP_BANNER, MSG_SETUP_COMPLETE,
};
use crate::filesystem::FileSystem;
use crate::privileged::PrivilegedOps;
use crate::tree;
use crate::utils;
use std::path::Path;

/// Runs the full provisioning sequence
///
/// # Arguments
///
/// * `config` - Staging and target roots plus the copy manifests
/// * `fs` - Filesystem access for the unprivileged copy steps
/// * `privileged` - Capability for directory creation and ownership changes
///
/// # Returns
///
/// The names of the files confirmed as copied, in copy order. Staged UI
/// files and the asset tree get a single confirmation line each and are not
/// included in the returned list.
///
/// # Errors
///
/// Privileged-step failures are printed and skipped. An error from an
/// unprivileged copy (for a source that exists) propagates and ends the
/// run, matching the rest of the error model: fatal or printed, nothing in
/// between.
pub fn run_setup(
    config: &SetupConfig,
    fs: &dyn FileSystem,
    privileged: &dyn PrivilegedOps,
) -> Result<Vec<String>> {
    println!(
        "{}",
        MSG_SETUP_BANNER.replacen("{}", &config.target_root.display().to_string(), 1)
    );

    // Step 1: target directory list, idempotent
    for dir in &config.directories {
        let path = config.target_root.join(dir);
        if let Err(e) = privileged.create_dir_all(&path) {
            utils::print_error(&format!("{e:#}"));
        }
    }

    // Step 2: hand the whole tree to the invoking user
    match config.owner() {
        Ok(owner) => {
            if let Err(e) = privileged.chown_recursive(&config.target_root, &owner) {
                utils::print_error(&format!("{e:#}"));
            }
        }
        Err(e) => utils::print_error(&format!("{e:#}")),
    }

    let mut copied = Vec::new();

    // Step 3: manifest components
    let components_dir = config.components_dir();
    for name in &config.components {
        let src = config.staging_dir.join(name);
        if fs.exists(&src) {
            fs.copy(&src, &components_dir.join(name))
                .with_context(|| format!("Failed to copy {name}"))?;
            println!("{} {}", MSG_COPIED_PREFIX.green(), name);
            copied.push(name.clone());
        }
        // absent manifest entries are skipped, not reported
    }

    // Step 4: staged UI component files, non-recursive
    let ui_src = config.staging_ui_dir();
    if fs.exists(&ui_src) {
        let ui_dest = config.ui_dest_dir();
        for path in fs.read_dir(&ui_src)? {
            if !fs.is_file(&path) {
                continue;
            }
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid staged file name: {}", path.display()))?;
            fs.copy(&path, &ui_dest.join(file_name))
                .with_context(|| format!("Failed to copy {}", path.display()))?;
        }
        println!("{}", MSG_COPIED_UI.green());
    }

    // Step 5: utility files; the stylesheet lands in src/ directly
    for name in &config.utility_files {
        let src = config.staging_dir.join(name);
        if fs.exists(&src) {
            let dest = if name == GLOBAL_STYLESHEET {
                config.src_dir().join(name)
            } else {
                config.utils_dest_dir().join(name)
            };
            fs.copy(&src, &dest)
                .with_context(|| format!("Failed to copy {name}"))?;
            println!("{} {}", MSG_COPIED_PREFIX.green(), name);
            copied.push(name.clone());
        }
    }

    // Step 6: supplementary asset tree, recursive, overwriting
    let assets_src = config.staging_assets_dir();
    if fs.exists(&assets_src) {
        copy_directory_recursive(&assets_src, &config.assets_dest_dir(), 0, fs)?;
        println!("{}", MSG_COPIED_ASSETS.green());
    }

    // Step 7: standalone application entry file
    if fs.exists(&config.app_file) {
        fs.copy(&config.app_file, &config.app_dest())
            .with_context(|| format!("Failed to copy {APP_DEST_NAME}"))?;
        println!("{} {}", MSG_COPIED_PREFIX.green(), APP_DEST_NAME);
        copied.push(APP_DEST_NAME.to_string());
    }

    // Step 8: banner and listing for operator verification
    println!();
    utils::print_success(MSG_SETUP_COMPLETE);
    println!();
    print!("{}", tree::render_tree(&config.target_root, fs)?);

    Ok(copied)
}

/// Recursively copies a directory and its contents, overwriting existing
/// destination files
///
/// Includes depth limiting to prevent infinite recursion from circular
/// symlinks.
fn copy_directory_recursive(
    source: &Path,
    dest: &Path,
    depth: usize,
    fs: &dyn FileSystem,
) -> Result<()> {
    if depth >= MAX_DIRECTORY_DEPTH {
        return Err(anyhow!(
            "Maximum directory depth ({MAX_DIRECTORY_DEPTH}) exceeded. Possible circular reference."
        ));
    }

    fs.create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    for path in fs.read_dir(source)? {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = dest.join(file_name);

        if fs.is_dir(&path) {
            copy_directory_recursive(&path, &target, depth + 1, fs)?;
        } else if fs.is_file(&path) {
            fs.copy(&path, &target)
                .with_context(|| format!("Failed to copy {}", path.display()))?;
        }
        // special files are skipped
    }

    Ok(())
}
