//! Application orchestration: walk, filter, detect, report.
//!
//! One run is a single pass over the traversal: each entry is filtered,
//! then either listed or fingerprinted and matched against the history,
//! before the next entry is considered. The scan loop owns the history
//! and the report; nothing here is shared or concurrent.
//!
//! Error policy, decided here and nowhere else: per-entry stat failures
//! and a malformed exclude pattern are logged and counted but the walk
//! continues; traversal, fingerprinting, and output failures abort the
//! run.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::duplicates::History;
use crate::error::ExitCode;
use crate::output::{listing, DupReport};
use crate::scanner::{fingerprint_file, fingerprint_to_hex, Walker};

/// What one scan run produced.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Duplicate pairs in detection order (empty in listing mode)
    pub report: DupReport,
    /// Files that passed the filter rules
    pub files_seen: usize,
    /// Non-fatal problems encountered along the way
    pub non_fatal_errors: usize,
}

/// Run the application: scan, then write the final report.
///
/// Listing lines and per-duplicate live records go to stderr, keeping
/// stdout clean for the final JSON document.
///
/// # Errors
///
/// Returns an error when the traversal, fingerprinting, or result
/// writing fails; the caller maps that to a non-zero exit.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    crate::logging::init_logging(cli.verbose, cli.quiet);
    let config = ScanConfig::from_cli(&cli);

    log::debug!("scanning {}", config.root.display());

    let stderr = io::stderr();
    let outcome = scan(&config, &mut stderr.lock())?;

    if !config.list {
        outcome
            .report
            .write_to_destination(config.output_file.as_deref())
            .with_context(|| match &config.output_file {
                Some(path) => format!("cannot write results to {}", path.display()),
                None => "cannot write results to stdout".to_string(),
            })?;
    }

    log::debug!(
        "done: {} files in scope, {} duplicates, {} skipped",
        outcome.files_seen,
        outcome.report.len(),
        outcome.non_fatal_errors
    );

    Ok(if outcome.non_fatal_errors > 0 {
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    })
}

/// Scan the configured root, writing live output to `live`.
///
/// In listing mode every in-scope path becomes one line on `live`; in
/// detection mode each file is fingerprinted and matched against the
/// history, and with `verbose` set each duplicate record is additionally
/// rendered to `live` as a JSON line the moment it is found.
///
/// # Errors
///
/// Returns an error on traversal failure, on any fingerprinting failure,
/// or when `live` cannot be written. Stat failures only increment
/// `non_fatal_errors`.
pub fn scan<W: Write>(config: &ScanConfig, live: &mut W) -> Result<ScanOutcome> {
    let mut non_fatal_errors = 0usize;

    // A malformed exclude pattern never matches; count it once so the
    // exit status reflects the degraded filter.
    if config.rules.validate().is_err() {
        non_fatal_errors += 1;
    }

    let mut history = History::new();
    let mut report = DupReport::new();
    let mut files_seen = 0usize;

    for entry in Walker::new(&config.root).walk() {
        let record = match entry {
            Ok(record) => record,
            Err(e) if !e.is_fatal() => {
                log::warn!("{}", e);
                non_fatal_errors += 1;
                continue;
            }
            Err(e) => return Err(e).context("directory walk aborted"),
        };

        if config.rules.is_excluded(&record) {
            log::trace!("excluded: {}", record.path.display());
            continue;
        }
        files_seen += 1;

        if config.list {
            listing::write_path(&record.path, live).context("cannot write listing output")?;
            continue;
        }

        let fingerprint = fingerprint_file(&record.path)
            .with_context(|| format!("cannot fingerprint {}", record.path.display()))?;
        log::trace!(
            "{} {}",
            fingerprint_to_hex(&fingerprint),
            record.path.display()
        );

        if let Some(dup) = history.process_file(&record.path, fingerprint) {
            if config.verbose {
                let line =
                    serde_json::to_string(&dup).context("cannot render duplicate record")?;
                writeln!(live, "{}", line).context("cannot write to live output")?;
            }
            report.push(dup);
        }
    }

    Ok(ScanOutcome {
        report,
        files_seen,
        non_fatal_errors,
    })
}
