//! Sequential batch loop: parse, resolve, plan, rename.
//!
//! Exactly one file is in flight at a time and every per-file problem
//! becomes an [`Outcome`] instead of an error; only the directory
//! preconditions checked at the start of a run can fail the whole batch.

mod types;

pub use types::*;

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::api::TitlePreference;
use crate::error::AppError;
use crate::parser;
use crate::planner::{self, RenamePlan};
use crate::resolver::ResolveTitle;
use crate::scanner::{scan_files, SourceFile};

/// Process every media file in `directory` once, reporting each outcome
/// through `on_outcome` as it happens and collecting them into the
/// returned report. The directory listing is snapshotted once at start.
pub fn run(
    directory: &Path,
    preference: TitlePreference,
    options: &RunOptions,
    resolver: &dyn ResolveTitle,
    cancel: &CancelToken,
    on_outcome: &mut dyn FnMut(&Outcome),
) -> Result<RunReport, AppError> {
    let files = scan_files(directory)?;
    let mut report = RunReport::new(options.preview);

    if files.is_empty() {
        info!("No matching video files found, nothing to process");
        report.completion = Completion::NothingToProcess;
        return Ok(report);
    }

    info!(count = files.len(), preview = options.preview, "Starting batch run");

    for (processed, file) in files.iter().enumerate() {
        if cancel.is_cancelled() {
            info!(processed, "Stop requested, ending batch between files");
            report.completion = Completion::Stopped { processed };
            return Ok(report);
        }

        let outcome = process_file(directory, file, preference, options, resolver);
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    Ok(report)
}

fn process_file(
    directory: &Path,
    file: &SourceFile,
    preference: TitlePreference,
    options: &RunOptions,
    resolver: &dyn ResolveTitle,
) -> Outcome {
    let Some(parsed) = parser::parse(&file.stem) else {
        debug!(name = %file.name, "No marker found, skipping");
        return Outcome::Skipped {
            name: file.name.clone(),
            reason: SkipReason::NoMarker,
        };
    };

    let Some(resolved) = resolver.resolve(&parsed.title_fragment, preference) else {
        warn!(name = %file.name, fragment = %parsed.title_fragment, "No title resolved");
        return Outcome::Skipped {
            name: file.name.clone(),
            reason: SkipReason::NoTitle,
        };
    };

    let plan = planner::plan(file, &parsed, &resolved, preference);

    if plan.proposed_name == plan.original_name {
        debug!(name = %file.name, "Already in canonical form");
        return Outcome::Skipped {
            name: file.name.clone(),
            reason: SkipReason::AlreadyNamed,
        };
    }

    if options.preview {
        return Outcome::Renamed {
            from: plan.original_name,
            to: plan.proposed_name,
        };
    }

    execute_rename(directory, plan)
}

fn execute_rename(directory: &Path, plan: RenamePlan) -> Outcome {
    let source = directory.join(&plan.original_name);
    let destination = directory.join(&plan.proposed_name);

    if destination.exists() {
        return Outcome::Failed {
            from: plan.original_name,
            error: format!("destination already exists: {}", plan.proposed_name),
        };
    }

    match fs::rename(&source, &destination) {
        Ok(()) => {
            info!("Renamed: {} -> {}", plan.original_name, plan.proposed_name);
            Outcome::Renamed {
                from: plan.original_name,
                to: plan.proposed_name,
            }
        }
        Err(e) => {
            warn!("Rename failed for {}: {}", plan.original_name, e);
            Outcome::Failed {
                from: plan.original_name,
                error: e.to_string(),
            }
        }
    }
}
