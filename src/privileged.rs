//! Privileged filesystem operations
//!
//! Creating the target tree and changing its ownership require elevated
//! privileges, so those two operations run through an injected capability
//! instead of direct `std::fs` calls. Production uses [`SudoOps`], which
//! shells out to `sudo` and checks the child's exit status; tests inject
//! [`mock::MockPrivilegedOps`], which records calls and operates on a
//! plain, unprivileged temp directory.
//!
//! # Error Handling
//!
//! A failed privileged command surfaces its stderr in the returned error.
//! The provisioning sequence prints that error and continues to the next
//! step; see [`crate::setup`].

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::constants::{
    CHOWN_CMD, CHOWN_OPT_RECURSIVE, ERROR_SUDO_EXECUTE, MKDIR_CMD, MKDIR_OPT_PARENTS, SUDO_CMD,
};

/// Trait for filesystem operations that need elevated privileges
pub trait PrivilegedOps {
    /// Create a directory and all its parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Recursively change ownership of a path to `owner`
    fn chown_recursive(&self, path: &Path, owner: &str) -> Result<()>;
}

/// Production implementation that shells out to `sudo`
pub struct SudoOps;

impl SudoOps {
    /// Create a new SudoOps instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for SudoOps {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegedOps for SudoOps {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut cmd = Command::new(SUDO_CMD);
        cmd.arg(MKDIR_CMD).arg(MKDIR_OPT_PARENTS).arg(path);
        run_privileged(cmd)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    fn chown_recursive(&self, path: &Path, owner: &str) -> Result<()> {
        let owner_group = format!("{owner}:{owner}");
        let mut cmd = Command::new(SUDO_CMD);
        cmd.arg(CHOWN_CMD)
            .arg(CHOWN_OPT_RECURSIVE)
            .arg(&owner_group)
            .arg(path);
        run_privileged(cmd)
            .with_context(|| format!("Failed to change ownership of {}", path.display()))
    }
}

/// Runs a privileged command and maps a non-zero exit status to an error
/// carrying the command's stderr
fn run_privileged(mut cmd: Command) -> Result<()> {
    let output = cmd.output().context(ERROR_SUDO_EXECUTE)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{}", stderr.trim()));
    }

    Ok(())
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Recording implementation for tests
    ///
    /// Directory creation happens with plain `std::fs` (the tests run
    /// against temp directories the invoking user already owns), ownership
    /// changes are recorded without touching the filesystem, and either
    /// operation can be made to fail for a specific path.
    pub struct MockPrivilegedOps {
        created: RefCell<Vec<PathBuf>>,
        chowned: RefCell<Vec<(PathBuf, String)>>,
        should_fail: RefCell<HashMap<PathBuf, &'static str>>,
    }

    impl Default for MockPrivilegedOps {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPrivilegedOps {
        /// Create a new MockPrivilegedOps instance
        pub fn new() -> Self {
            Self {
                created: RefCell::new(Vec::new()),
                chowned: RefCell::new(Vec::new()),
                should_fail: RefCell::new(HashMap::new()),
            }
        }

        /// Make operations fail for a specific path
        pub fn with_failure(self, path: &Path, error: &'static str) -> Self {
            self.should_fail
                .borrow_mut()
                .insert(path.to_path_buf(), error);
            self
        }

        /// Paths passed to `create_dir_all`, in call order
        pub fn created(&self) -> Vec<PathBuf> {
            self.created.borrow().clone()
        }

        /// `(path, owner)` pairs passed to `chown_recursive`
        pub fn chowned(&self) -> Vec<(PathBuf, String)> {
            self.chowned.borrow().clone()
        }

        fn check_failure(&self, path: &Path) -> Result<()> {
            if let Some(error) = self.should_fail.borrow().get(path) {
                return Err(anyhow!("Mock privileged error: {error}"));
            }
            Ok(())
        }
    }

    impl PrivilegedOps for MockPrivilegedOps {
        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.check_failure(path)?;
            std::fs::create_dir_all(path)?;
            self.created.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn chown_recursive(&self, path: &Path, owner: &str) -> Result<()> {
            self.check_failure(path)?;
            self.chowned
                .borrow_mut()
                .push((path.to_path_buf(), owner.to_string()));
            Ok(())
        }
    }
}
