//! Import statement normalization for extracted UI components
//!
//! Files exported from the design tool carry import strings with version
//! suffixes (`"lucide-react@0.9.0"`) and, for the scoped namespace, a
//! doubled prefix (`"@radix-ui/@radix-ui/dialog@1.2.3"`). This module
//! rewrites those strings back to plain package paths so the files resolve
//! against the project's own dependency versions.
//!
//! The substitutions are textual. Nothing here parses import syntax; a
//! string no pattern matches is left exactly as it was, and a file whose
//! text does not change is not rewritten.

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;

use crate::config::ImportsConfig;
use crate::constants::{MSG_DONE, MSG_FIXED_PREFIX};
use crate::filesystem::FileSystem;

/// Compiled substitution patterns for one fixer run
///
/// Built once from [`ImportsConfig`]; configured package names are escaped
/// before they land in a pattern. The three substitution groups apply in a
/// fixed order:
///
/// 1. collapse the doubled scoped-namespace prefix,
/// 2. strip the version suffix from scoped imports, keeping the subpath,
/// 3. strip the version suffix from each plain package.
pub struct ImportRewriter {
    doubled_prefix: Regex,
    doubled_replacement: String,
    scoped_version: Regex,
    scoped_replacement: String,
    plain_versions: Vec<(Regex, String)>,
}

impl ImportRewriter {
    /// Compiles the substitution patterns for the configured packages
    pub fn new(config: &ImportsConfig) -> Result<Self> {
        let ns = regex::escape(&config.scoped_namespace);

        let doubled_prefix = Regex::new(&format!("{ns}/{ns}"))?;
        let scoped_version = Regex::new(&format!(r#""{ns}/([^@"]+)@[^"]*""#))?;
        let scoped_replacement = format!(r#""{}/${{1}}""#, config.scoped_namespace);

        let plain_versions = config
            .packages
            .iter()
            .map(|pkg| {
                let pattern = Regex::new(&format!(r#""{}@[^"]*""#, regex::escape(pkg)))?;
                Ok((pattern, format!("\"{pkg}\"")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            doubled_prefix,
            doubled_replacement: config.scoped_namespace.clone(),
            scoped_version,
            scoped_replacement,
            plain_versions,
        })
    }

    /// Applies all substitutions in order and returns the rewritten text
    pub fn rewrite(&self, input: &str) -> String {
        let mut text = self
            .doubled_prefix
            .replace_all(input, self.doubled_replacement.as_str())
            .into_owned();

        text = self
            .scoped_version
            .replace_all(&text, self.scoped_replacement.as_str())
            .into_owned();

        for (pattern, replacement) in &self.plain_versions {
            text = pattern.replace_all(&text, replacement.as_str()).into_owned();
        }

        text
    }
}

/// Rewrites import strings in every matching file under the configured
/// directory
///
/// Scans the UI directory (non-recursive) for files whose name ends in the
/// configured extension, applies the rewriter to each file's text, and
/// writes the file back only when the text changed, printing `Fixed: <name>`
/// for it. Prints `Done!` once the scan completes.
///
/// # Returns
///
/// The names of the rewritten files, in scan order.
///
/// # Errors
///
/// An unreadable or unwritable file aborts the run with the underlying
/// error; there is no per-file isolation and no backup of the original.
pub fn fix_imports(config: &ImportsConfig, fs: &dyn FileSystem) -> Result<Vec<String>> {
    let rewriter = ImportRewriter::new(config)?;
    let mut fixed = Vec::new();

    let entries = fs
        .read_dir(&config.ui_dir)
        .with_context(|| format!("Failed to read source directory {}", config.ui_dir.display()))?;

    for path in entries {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        if !name.ends_with(&config.extension) || !fs.is_file(&path) {
            continue;
        }

        let original = fs
            .read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let updated = rewriter.rewrite(&original);

        if updated != original {
            fs.write(&path, &updated)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", MSG_FIXED_PREFIX.green(), name);
            fixed.push(name);
        }
    }

    println!("{}", MSG_DONE.bright_green());

    Ok(fixed)
}
