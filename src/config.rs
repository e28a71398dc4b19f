//! Configuration management for portal-kit
//!
//! Both tools are driven by a [`Config`] value rather than by path literals
//! embedded in the code. The compiled-in defaults reproduce the original
//! provisioning layout exactly (see [`crate::constants`]); a TOML file can
//! substitute different staging and target roots, which is what the
//! integration tests do.
//!
//! # File Format
//!
//! Configuration files use TOML format. Every field is optional and falls
//! back to its default, so a minimal override looks like:
//!
//! ```toml
//! [setup]
//! staging_dir = "/tmp/portal_extracted"
//! target_root = "/tmp/portal"
//!
//! [imports]
//! ui_dir = "/tmp/portal/src/ui"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DEST_NAME, ASSETS_DEST_SUBDIR, ASSETS_STAGING_SUBDIR, COMPONENTS_SUBDIR, COMPONENT_MANIFEST,
    CONFIG_FILE_NAME, DEFAULT_APP_FILE, DEFAULT_SOURCE_EXTENSION, DEFAULT_STAGING_DIR,
    DEFAULT_TARGET_ROOT, DEFAULT_UI_SOURCE_DIR, ENV_USER, ERROR_OWNER_UNSET, SCOPED_NAMESPACE,
    SRC_SUBDIR, TARGET_DIRECTORIES, UI_DEST_SUBDIR, UI_STAGING_SUBDIR, UTILITY_FILES,
    UTILS_DEST_SUBDIR, VERSIONED_PACKAGES, WARNING_CONFIG_PARSE, WARNING_CONFIG_READ,
};

/// Main configuration structure for portal-kit
///
/// Holds one section per tool. Missing sections and fields fall back to the
/// defaults, so an empty file is equivalent to no file at all.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the `setup` subcommand
    pub setup: SetupConfig,

    /// Settings for the `fix-imports` subcommand
    pub imports: ImportsConfig,
}

/// Settings for the portal setup sequence
///
/// The staging directory is treated as a read-only source; everything under
/// `target_root` is created or overwritten by the tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Directory holding the previously extracted files
    pub staging_dir: PathBuf,

    /// Root of the directory tree the tool constructs
    pub target_root: PathBuf,

    /// Standalone application entry file copied into `<target>/src/`
    pub app_file: PathBuf,

    /// Owner for the recursive ownership change; defaults to `$USER`
    pub owner: Option<String>,

    /// Directories to create under the target root, in order
    pub directories: Vec<String>,

    /// Component files expected in the staging directory
    pub components: Vec<String>,

    /// Utility files expected in the staging directory
    ///
    /// `globals.css` routes to `<target>/src/`; every other name routes to
    /// `<target>/src/utils/supabase/`.
    pub utility_files: Vec<String>,
}

/// Settings for the import fixer
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportsConfig {
    /// Directory scanned for source files
    pub ui_dir: PathBuf,

    /// Filename suffix selecting the files to rewrite
    pub extension: String,

    /// Scoped package namespace whose imports keep their subpath
    pub scoped_namespace: String,

    /// Plain packages whose imports reduce to the bare package name
    pub packages: Vec<String>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from(DEFAULT_STAGING_DIR),
            target_root: PathBuf::from(DEFAULT_TARGET_ROOT),
            app_file: PathBuf::from(DEFAULT_APP_FILE),
            owner: None,
            directories: TARGET_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
            components: COMPONENT_MANIFEST.iter().map(|c| c.to_string()).collect(),
            utility_files: UTILITY_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            ui_dir: PathBuf::from(DEFAULT_UI_SOURCE_DIR),
            extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            scoped_namespace: SCOPED_NAMESPACE.to_string(),
            packages: VERSIONED_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from the current directory
    ///
    /// Looks for `portal-kit.toml` in the current working directory. If the
    /// file is missing, the defaults are returned. If the file exists but
    /// cannot be read or parsed, a warning is printed and the defaults are
    /// returned, so a broken config never blocks a provisioning run.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = env::current_dir() {
            let path = cwd.join(CONFIG_FILE_NAME);
            if path.exists() {
                if let Some(config) = Self::load_discovered(&path) {
                    return Ok(config);
                }
            }
        }

        Ok(Config::default())
    }

    /// Loads configuration from an explicit file path
    ///
    /// Unlike [`Config::load`], a path the operator passed on the command
    /// line must exist and parse; anything else is a hard error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Loads a discovered config file, warning instead of failing
    fn load_discovered(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!(
                    "{}",
                    WARNING_CONFIG_READ
                        .replacen("{}", &path.display().to_string(), 1)
                        .replacen("{}", &e.to_string(), 1)
                );
                return None;
            }
        };

        match toml::from_str::<Config>(&content) {
            Ok(c) => Some(c),
            Err(e) => {
                eprintln!(
                    "{}",
                    WARNING_CONFIG_PARSE
                        .replacen("{}", &path.display().to_string(), 1)
                        .replacen("{}", &e.to_string(), 1)
                );
                None
            }
        }
    }
}

impl SetupConfig {
    /// Resolves the owner for the recursive ownership change
    ///
    /// Uses the configured owner when present, otherwise the invoking
    /// user from the `USER` environment variable.
    pub fn owner(&self) -> Result<String> {
        if let Some(owner) = &self.owner {
            return Ok(owner.clone());
        }
        env::var(ENV_USER).context(ERROR_OWNER_UNSET)
    }

    /// Destination for manifest components
    pub fn components_dir(&self) -> PathBuf {
        self.target_root.join(COMPONENTS_SUBDIR)
    }

    /// Destination for staged UI component files
    pub fn ui_dest_dir(&self) -> PathBuf {
        self.target_root.join(UI_DEST_SUBDIR)
    }

    /// Destination for utility files that do not route to `src/`
    pub fn utils_dest_dir(&self) -> PathBuf {
        self.target_root.join(UTILS_DEST_SUBDIR)
    }

    /// The `src/` directory under the target root
    pub fn src_dir(&self) -> PathBuf {
        self.target_root.join(SRC_SUBDIR)
    }

    /// Destination for the supplementary asset tree
    pub fn assets_dest_dir(&self) -> PathBuf {
        self.target_root.join(ASSETS_DEST_SUBDIR)
    }

    /// Destination for the standalone application entry file
    pub fn app_dest(&self) -> PathBuf {
        self.src_dir().join(APP_DEST_NAME)
    }

    /// The UI component subdirectory inside the staging dir
    pub fn staging_ui_dir(&self) -> PathBuf {
        self.staging_dir.join(UI_STAGING_SUBDIR)
    }

    /// The supplementary asset subdirectory inside the staging dir
    pub fn staging_assets_dir(&self) -> PathBuf {
        self.staging_dir.join(ASSETS_STAGING_SUBDIR)
    }
}
