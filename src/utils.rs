//! Utility functions for terminal output formatting
//!
//! This module provides consistent, colored output functions for displaying
//! success and error messages in the terminal.

use colored::*;

use crate::constants::{ICON_ERROR, ICON_SUCCESS};

/// Displays a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", ICON_SUCCESS.green(), message.bold());
}

/// Displays an error message with a red X mark
///
/// Step failures in the provisioning sequence are reported here and the
/// sequence moves on; nothing about the process exit code changes.
pub fn print_error(message: &str) {
    eprintln!("{} {}", ICON_ERROR.red(), message);
}
