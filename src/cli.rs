//! Command-line interface definitions for dupewalk.
//!
//! This module defines all CLI arguments using the clap derive API. The
//! surface is a single flat command: a root directory plus filter options,
//! a listing toggle, and an output destination.
//!
//! # Example
//!
//! ```bash
//! # Find duplicates under the current directory
//! dupewalk
//!
//! # Restrict to .log files of at least 1KiB, write the report to a file
//! dupewalk /var/log --ext .log --min-size 1KiB --out report.json
//!
//! # Just list the files that pass the filters
//! dupewalk ~/Downloads --list --exclude '*.tmp'
//!
//! # Print each duplicate as it is found
//! dupewalk -v ~/Downloads
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Duplicate file finder comparing bounded-prefix content hashes.
///
/// dupewalk walks a directory tree, filters files by extension, exclude
/// pattern, and minimum size, and reports files whose leading bytes hash
/// to the same SHA-256 fingerprint as an earlier file. The report is a
/// JSON array of original/duplicate path pairs.
#[derive(Debug, Parser)]
#[command(name = "dupewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start walking from
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Keep only files with exactly this extension, including the dot (e.g. ".log")
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Exclude files matching this glob pattern
    ///
    /// The pattern is matched against both the cleaned path and the file's
    /// base name, so `*.sh` excludes shell scripts at any depth.
    #[arg(short = 'x', long, value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Minimum file size to consider (e.g., 512, 1KB, 1MiB)
    ///
    /// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
    #[arg(short = 's', long, value_name = "SIZE", value_parser = parse_size, default_value = "0")]
    pub min_size: u64,

    /// List the files passing the filters instead of detecting duplicates
    #[arg(short, long)]
    pub list: bool,

    /// Write the final JSON report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Increase verbosity; also prints each duplicate as it is found
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse a human-readable size string into bytes.
///
/// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB.
/// Case-insensitive. Numbers without suffix are treated as bytes.
///
/// # Examples
///
/// ```
/// use dupewalk::cli::parse_size;
///
/// assert_eq!(parse_size("1024").unwrap(), 1024);
/// assert_eq!(parse_size("1KB").unwrap(), 1000);
/// assert_eq!(parse_size("1KiB").unwrap(), 1024);
/// assert_eq!(parse_size("1MiB").unwrap(), 1_048_576);
/// ```
///
/// # Errors
///
/// Returns an error if the string is empty, contains an invalid number,
/// a negative number, or an unknown size suffix.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    // Find where the number ends and the suffix begins
    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    if num < 0.0 {
        return Err("Size cannot be negative".to_string());
    }

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        "TB" | "T" => 1_000_000_000_000,
        "TIB" => 1_099_511_627_776,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    Ok((num * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_bytes() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("1024B").unwrap(), 1024);
        assert_eq!(parse_size("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size("1KB").unwrap(), 1_000);
        assert_eq!(parse_size("1KiB").unwrap(), 1_024);
        assert_eq!(parse_size("1kib").unwrap(), 1_024); // Case insensitive
        assert_eq!(parse_size("1MB").unwrap(), 1_000_000);
        assert_eq!(parse_size("1MiB").unwrap(), 1_048_576);
        assert_eq!(parse_size("1GiB").unwrap(), 1_073_741_824);
        assert_eq!(parse_size("1TB").unwrap(), 1_000_000_000_000);
    }

    #[test]
    fn test_parse_size_fractional() {
        assert_eq!(parse_size("1.5MB").unwrap(), 1_500_000);
        assert_eq!(parse_size("0.5GB").unwrap(), 500_000_000);
    }

    #[test]
    fn test_parse_size_errors() {
        assert!(parse_size("").is_err());
        assert!(parse_size("abc").is_err());
        assert!(parse_size("1XB").is_err());
        assert!(parse_size("-1MB").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["dupewalk"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.ext, None);
        assert_eq!(cli.exclude, None);
        assert_eq!(cli.min_size, 0);
        assert!(!cli.list);
        assert_eq!(cli.out, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_all_options() {
        let cli = Cli::try_parse_from([
            "dupewalk",
            "/some/path",
            "--ext",
            ".log",
            "--exclude",
            "*.tmp",
            "--min-size",
            "1KiB",
            "--out",
            "report.json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("/some/path"));
        assert_eq!(cli.ext.as_deref(), Some(".log"));
        assert_eq!(cli.exclude.as_deref(), Some("*.tmp"));
        assert_eq!(cli.min_size, 1024);
        assert_eq!(cli.out, Some(PathBuf::from("report.json")));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_list_mode() {
        let cli = Cli::try_parse_from(["dupewalk", "--list"]).unwrap();
        assert!(cli.list);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dupewalk", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_version_flag() {
        // clap exits early on --version, which try_parse_from reports as Err
        let result = Cli::try_parse_from(["dupewalk", "--version"]);
        assert!(result.is_err());
    }
}
