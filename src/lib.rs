pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod parser;
pub mod planner;
pub mod progress;
pub mod resolver;
pub mod runner;
pub mod scanner;

pub use api::{config_from_env, ApiConfig, TitlePreference};
pub use error::{AppError, ExitCode};
pub use resolver::{ResolveTitle, TitleResolver};
pub use runner::{CancelToken, Completion, Outcome, RunOptions, RunReport, SkipReason};
pub use scanner::{scan_files, ScannerError, SourceFile};
