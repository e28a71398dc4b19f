//! Constants used throughout the application
//!
//! This module centralizes the fixed paths, manifests, and user-facing
//! strings of the provisioning tools. The path and manifest constants are
//! the compiled-in defaults for [`crate::config::Config`]; tests substitute
//! their own staging and target roots through the configuration rather than
//! touching these.
//!
//! # Organization
//!
//! Constants are organized into the following categories:
//! - **Default Paths**: The original provisioning layout
//! - **Target Tree Layout**: Destination subdirectories under the target root
//! - **Staging Layout**: Subdirectories expected inside the staging dir
//! - **Manifests**: Component and utility file lists
//! - **Import Fixer**: Package namespaces the fixer normalizes
//! - **Privileged Commands**: Command names for elevated operations
//! - **Messages**: User-facing progress and error strings

// Default paths (the original provisioning layout)
pub const DEFAULT_STAGING_DIR: &str = "/workspaces/Translineweb/portal_extracted";
pub const DEFAULT_TARGET_ROOT: &str = "/portal";
pub const DEFAULT_APP_FILE: &str = "/workspaces/Translineweb/portal/App.tsx";
pub const DEFAULT_UI_SOURCE_DIR: &str = "/workspaces/Translineweb/portal/src/ui";

// Target tree layout, relative to the target root
pub const TARGET_DIRECTORIES: &[&str] = &[
    "src/components/ui",
    "src/utils/supabase",
    "src/assets",
    "public",
];
pub const SRC_SUBDIR: &str = "src";
pub const COMPONENTS_SUBDIR: &str = "src/components";
pub const UI_DEST_SUBDIR: &str = "src/components/ui";
pub const UTILS_DEST_SUBDIR: &str = "src/utils/supabase";
pub const ASSETS_DEST_SUBDIR: &str = "src/components/figma";
pub const APP_DEST_NAME: &str = "App.tsx";

// Staging layout
pub const UI_STAGING_SUBDIR: &str = "ui";
pub const ASSETS_STAGING_SUBDIR: &str = "figma";

// Component manifest
pub const COMPONENT_MANIFEST: &[&str] = &[
    "AdminOverrides.tsx",
    "DriversManagement.tsx",
    "EventLogs.tsx",
    "LiveShiftsMonitor.tsx",
    "OdometerReview.tsx",
    "OverviewDashboard.tsx",
    "ShiftDetailView.tsx",
    "VehiclesManagement.tsx",
];

// Utility files; the stylesheet routes to src/ instead of the utils dir
pub const UTILITY_FILES: &[&str] = &["info.tsx", "kv_store.tsx", "globals.css"];
pub const GLOBAL_STYLESHEET: &str = "globals.css";

// Import fixer
pub const DEFAULT_SOURCE_EXTENSION: &str = ".tsx";
pub const SCOPED_NAMESPACE: &str = "@radix-ui";
pub const VERSIONED_PACKAGES: &[&str] = &[
    "lucide-react",
    "cmdk",
    "react-day-picker",
    "class-variance-authority",
];

// Configuration
pub const CONFIG_FILE_NAME: &str = "portal-kit.toml";

// Privileged commands
pub const SUDO_CMD: &str = "sudo";
pub const MKDIR_CMD: &str = "mkdir";
pub const MKDIR_OPT_PARENTS: &str = "-p";
pub const CHOWN_CMD: &str = "chown";
pub const CHOWN_OPT_RECURSIVE: &str = "-R";

// Environment variables
pub const ENV_USER: &str = "USER";

// Directory depth limit for recursive copies
pub const MAX_DIRECTORY_DEPTH: usize = 50;

// Listing format
pub const LISTING_INDENT: &str = "  ";

// Progress messages
pub const MSG_SETUP_BANNER: &str = "Setting up {} directory structure...";
pub const MSG_SETUP_COMPLETE: &str = "Portal structure created successfully!";
pub const MSG_FIXED_PREFIX: &str = "Fixed:";
pub const MSG_COPIED_PREFIX: &str = "Copied";
pub const MSG_COPIED_UI: &str = "Copied UI components";
pub const MSG_COPIED_ASSETS: &str = "Copied figma components";
pub const MSG_DONE: &str = "Done!";

// Warning messages
pub const WARNING_CONFIG_READ: &str = "Warning: Failed to read {}: {}";
pub const WARNING_CONFIG_PARSE: &str = "Warning: Failed to parse {}: {}";

// Error messages
pub const ERROR_SUDO_EXECUTE: &str = "Failed to execute sudo";
pub const ERROR_OWNER_UNSET: &str = "Cannot determine invoking user: USER is not set";

// UI icons
pub const ICON_SUCCESS: &str = "✓";
pub const ICON_ERROR: &str = "✗";
