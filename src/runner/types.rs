use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a file was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The stem carries no opening/ending marker
    NoMarker,
    /// No provider returned a usable title
    NoTitle,
    /// The proposed name equals the current name
    AlreadyNamed,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::NoMarker => "no opening/ending marker found",
            SkipReason::NoTitle => "no title resolved",
            SkipReason::AlreadyNamed => "already in canonical form",
        }
    }
}

/// Per-file result reported to the outcome sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped { name: String, reason: SkipReason },
    Renamed { from: String, to: String },
    Failed { from: String, error: String },
}

/// Terminal signal for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Every snapshotted file was processed
    Finished,
    /// The snapshot held no eligible files; nothing was attempted
    NothingToProcess,
    /// A stop was requested between files; earlier renames stand
    Stopped { processed: usize },
}

/// Everything a batch run produced, in processing order
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
    pub completion: Completion,
    pub preview: bool,
}

impl RunReport {
    pub fn new(preview: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            completion: Completion::Finished,
            preview,
        }
    }

    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Renamed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Skipped { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Failed { .. }))
            .count()
    }
}

/// Options for a batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Plan and report without touching the filesystem
    pub preview: bool,
}

/// Cooperative stop flag, checked between files and never mid-file
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
