//! Run configuration.
//!
//! The CLI layer assembles a [`ScanConfig`] once per run; the scan loop
//! consumes it as an immutable value.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::scanner::FilterRules;

/// Immutable configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the traversal starts from
    pub root: PathBuf,
    /// Filter policy applied to every visited entry
    pub rules: FilterRules,
    /// List in-scope paths instead of detecting duplicates
    pub list: bool,
    /// Render each duplicate record immediately as it is found
    pub verbose: bool,
    /// Destination for the final JSON report; stdout when unset
    pub output_file: Option<PathBuf>,
}

impl ScanConfig {
    /// Assemble the run configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            rules: FilterRules {
                extension: cli.ext.clone(),
                exclude: cli.exclude.clone(),
                min_size: cli.min_size,
            },
            list: cli.list,
            verbose: cli.verbose > 0,
            output_file: cli.out.clone(),
        }
    }
}
