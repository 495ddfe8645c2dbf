//! Progress output for user-facing status updates.
//!
//! In verbose mode, output is suppressed since tracing handles everything.
//! In normal mode, output is shown with colors to give feedback while the
//! batch works through provider lookups and renames.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::runner::{Completion, Outcome, RunReport};

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
    /// Set from the run options so renamed lines read as proposals
    preview: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
            preview: false,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
            preview: false,
        }
    }

    /// Report the start of a batch run
    pub fn run_start(&mut self, directory: &Path, preview: bool) {
        self.preview = preview;
        if self.silent {
            return;
        }
        let heading = if preview {
            format!("Previewing renames in {}", directory.display())
        } else {
            format!("Renaming videos in {}", directory.display())
        };
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", heading.bold());
        } else {
            let _ = writeln!(self.writer, "{}", heading);
        }
    }

    /// Report a single per-file outcome as it happens
    pub fn outcome(&mut self, outcome: &Outcome) {
        if self.silent {
            return;
        }
        match outcome {
            Outcome::Renamed { from, to } => {
                if self.colors_enabled {
                    let mark = if self.preview {
                        "~".cyan().bold()
                    } else {
                        "✓".green().bold()
                    };
                    let _ =
                        writeln!(self.writer, "{} {} {} {}", mark, from.dimmed(), "→".cyan(), to);
                } else {
                    let _ = writeln!(self.writer, "{} -> {}", from, to);
                }
            }
            Outcome::Skipped { name, reason } => {
                let line = format!("skipped: {} ({})", name, reason.description());
                if self.colors_enabled {
                    let _ = writeln!(self.writer, "{}", line.dimmed());
                } else {
                    let _ = writeln!(self.writer, "{}", line);
                }
            }
            Outcome::Failed { from, error } => {
                if self.colors_enabled {
                    let _ = writeln!(
                        self.writer,
                        "{} {}: {}",
                        "✗".red().bold(),
                        from,
                        error.red()
                    );
                } else {
                    let _ = writeln!(self.writer, "Failed: {}: {}", from, error);
                }
            }
        }
    }

    /// Report the terminal state of a batch run
    pub fn completion(&mut self, report: &RunReport) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        match &report.completion {
            Completion::NothingToProcess => {
                let _ = writeln!(
                    self.writer,
                    "No matching video files found. Nothing to process."
                );
            }
            Completion::Stopped { processed } => {
                let line = format!(
                    "Stopped after {} files; earlier renames were kept.",
                    processed
                );
                if self.colors_enabled {
                    let _ = writeln!(self.writer, "{}", line.yellow());
                } else {
                    let _ = writeln!(self.writer, "{}", line);
                }
            }
            Completion::Finished => {
                let summary = format!(
                    "{} renamed, {} skipped, {} failed.",
                    report.renamed_count(),
                    report.skipped_count(),
                    report.failed_count()
                );
                if report.preview {
                    let line = format!("Preview complete. {}", summary);
                    if self.colors_enabled {
                        let _ = writeln!(self.writer, "{}", line.dimmed());
                    } else {
                        let _ = writeln!(self.writer, "{}", line);
                    }
                } else if self.colors_enabled {
                    let _ = writeln!(
                        self.writer,
                        "{} {}",
                        "✓".green().bold(),
                        format!("Renaming complete. {}", summary).green()
                    );
                } else {
                    let _ = writeln!(self.writer, "Renaming complete. {}", summary);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::SkipReason;

    fn create_test_progress() -> (Progress, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    fn output_of(buffer: &std::sync::Arc<std::sync::Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    struct TestWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_outcome_lines() {
        let (mut progress, buffer) = create_test_progress();

        progress.outcome(&Outcome::Renamed {
            from: "AttackOnTitan-OP1.webm".to_string(),
            to: "Attack on Titan - Opening 1.webm".to_string(),
        });
        progress.outcome(&Outcome::Skipped {
            name: "Holiday Video.webm".to_string(),
            reason: SkipReason::NoMarker,
        });
        progress.outcome(&Outcome::Failed {
            from: "Clash.webm".to_string(),
            error: "destination already exists: Clash - Opening 1.webm".to_string(),
        });

        let output = output_of(&buffer);
        assert!(output.contains("AttackOnTitan-OP1.webm -> Attack on Titan - Opening 1.webm"));
        assert!(output.contains("skipped: Holiday Video.webm (no opening/ending marker found)"));
        assert!(output.contains("Failed: Clash.webm: destination already exists"));
    }

    #[test]
    fn test_completion_nothing_to_process() {
        let (mut progress, buffer) = create_test_progress();

        let mut report = RunReport::new(false);
        report.completion = Completion::NothingToProcess;
        progress.completion(&report);

        assert!(output_of(&buffer).contains("Nothing to process"));
    }

    #[test]
    fn test_completion_summary_counts() {
        let (mut progress, buffer) = create_test_progress();

        let mut report = RunReport::new(false);
        report.outcomes.push(Outcome::Renamed {
            from: "a.webm".to_string(),
            to: "b.webm".to_string(),
        });
        progress.completion(&report);

        let output = output_of(&buffer);
        assert!(output.contains("Renaming complete."));
        assert!(output.contains("1 renamed, 0 skipped, 0 failed."));
    }

    #[test]
    fn test_completion_preview() {
        let (mut progress, buffer) = create_test_progress();

        progress.completion(&RunReport::new(true));

        assert!(output_of(&buffer).contains("Preview complete."));
    }

    #[test]
    fn test_completion_stopped() {
        let (mut progress, buffer) = create_test_progress();

        let mut report = RunReport::new(false);
        report.completion = Completion::Stopped { processed: 2 };
        progress.completion(&report);

        assert!(output_of(&buffer).contains("Stopped after 2"));
    }
}
