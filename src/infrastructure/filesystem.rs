//! Filesystem operations abstraction layer
//!
//! This module provides an abstraction over filesystem operations,
//! allowing for testable code by separating provisioning logic from
//! filesystem dependencies.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Trait for filesystem operations
///
/// This trait abstracts the filesystem access both tools perform, making
/// the code testable by allowing an in-memory implementation in unit tests
/// and the real implementation in production.
///
/// `read_dir` returns plain paths sorted by name so directory scans and
/// the final tree listing have a stable order.
pub trait FileSystem {
    /// Create a directory and all its parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read the entire contents of a file into a string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, creating the file if it doesn't exist
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Copy a file from source to destination, overwriting the destination
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;

    /// Read directory entries, sorted by name
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production implementation using std::fs
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new RealFileSystem instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)?;
        Ok(content)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        let bytes = std::fs::copy(from, to)?;
        Ok(bytes)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory filesystem for testing
    ///
    /// Registering a file also registers its ancestor directories, so
    /// `read_dir` and `is_dir` behave the way the scanning code expects.
    pub struct MockFileSystem {
        files: RefCell<BTreeMap<PathBuf, String>>,
        directories: RefCell<BTreeSet<PathBuf>>,
        should_fail: RefCell<BTreeMap<PathBuf, &'static str>>,
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockFileSystem {
        /// Create a new MockFileSystem instance
        pub fn new() -> Self {
            Self {
                files: RefCell::new(BTreeMap::new()),
                directories: RefCell::new(BTreeSet::new()),
                should_fail: RefCell::new(BTreeMap::new()),
            }
        }

        /// Add a file to the mock filesystem
        pub fn with_file(self, path: &str, content: &str) -> Self {
            let path = PathBuf::from(path);
            self.register_ancestors(&path);
            self.files.borrow_mut().insert(path, content.to_string());
            self
        }

        /// Add a directory to the mock filesystem
        pub fn with_directory(self, path: &str) -> Self {
            let path = PathBuf::from(path);
            self.register_ancestors(&path);
            self.directories.borrow_mut().insert(path);
            self
        }

        /// Make operations fail for a specific path
        pub fn with_failure(self, path: &str, error: &'static str) -> Self {
            self.should_fail
                .borrow_mut()
                .insert(PathBuf::from(path), error);
            self
        }

        fn register_ancestors(&self, path: &Path) {
            let mut dirs = self.directories.borrow_mut();
            let mut current = path.parent();
            while let Some(dir) = current {
                if dir.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }

        fn check_failure(&self, path: &Path) -> Result<()> {
            if let Some(error) = self.should_fail.borrow().get(path) {
                return Err(anyhow::anyhow!("Mock filesystem error: {error}"));
            }
            Ok(())
        }
    }

    impl FileSystem for MockFileSystem {
        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.check_failure(path)?;
            self.register_ancestors(path);
            self.directories.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.check_failure(path)?;
            if let Some(content) = self.files.borrow().get(path) {
                Ok(content.clone())
            } else {
                Err(anyhow::anyhow!("File not found: {}", path.display()))
            }
        }

        fn write(&self, path: &Path, contents: &str) -> Result<()> {
            self.check_failure(path)?;
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
            self.check_failure(from)?;
            self.check_failure(to)?;

            let content = {
                let files = self.files.borrow();
                files.get(from).cloned()
            };

            if let Some(content) = content {
                let bytes = content.len() as u64;
                self.files.borrow_mut().insert(to.to_path_buf(), content);
                Ok(bytes)
            } else {
                Err(anyhow::anyhow!("Source file not found: {}", from.display()))
            }
        }

        fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
            self.check_failure(path)?;

            if !self.directories.borrow().contains(path) {
                return Err(anyhow::anyhow!("Directory not found: {}", path.display()));
            }

            let mut entries = BTreeSet::new();
            for file in self.files.borrow().keys() {
                if file.parent() == Some(path) {
                    entries.insert(file.clone());
                }
            }
            for dir in self.directories.borrow().iter() {
                if dir.parent() == Some(path) {
                    entries.insert(dir.clone());
                }
            }

            Ok(entries.into_iter().collect())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path) || self.directories.borrow().contains(path)
        }

        fn is_file(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.directories.borrow().contains(path)
        }
    }
}
