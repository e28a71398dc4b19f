//! Portal Kit - Provisioning tools for the portal frontend
//!
//! Portal Kit packages the two one-off steps that turn a directory of
//! extracted UI exports into a working portal source tree:
//!
//! - **Setup** (`portal-kit setup`): creates the target directory tree with
//!   elevated privileges, hands it to the invoking user, and copies the
//!   staged component, utility, and asset files into place, finishing with
//!   a recursive listing for verification.
//! - **Import fixing** (`portal-kit fix-imports`): rewrites import strings
//!   in the exported component files, collapsing doubled `@radix-ui`
//!   prefixes and stripping `@version` suffixes, touching only files whose
//!   text actually changes.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration structure and TOML loading
//! - [`constants`] - Default paths, manifests, and message strings
//! - [`imports`] - The import fixer
//! - [`infrastructure`] - Filesystem abstraction (real and mock)
//! - [`privileged`] - Elevated operations behind an injectable capability
//! - [`setup`] - The provisioning sequence
//! - [`tree`] - Recursive listing of the provisioned tree
//! - [`utils`] - Terminal output helpers
//!
//! Both tools take their paths from [`config::Config`] rather than from
//! embedded literals, and reach the filesystem through
//! [`infrastructure::filesystem::FileSystem`], so tests drive them against
//! temp directories or a fully in-memory mock.
//!
//! # Usage Example
//!
//! ```no_run
//! use portal_kit::config::Config;
//! use portal_kit::filesystem::RealFileSystem;
//! use portal_kit::imports;
//!
//! let config = Config::load().expect("Failed to load config");
//! let fixed = imports::fix_imports(&config.imports, &RealFileSystem::new());
//! ```

pub mod config;
pub mod constants;
pub mod imports;
pub mod infrastructure;
pub mod privileged;
pub mod setup;
pub mod tree;
pub mod utils;

pub use infrastructure::filesystem;
