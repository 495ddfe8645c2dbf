use clap::Parser;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, error, info};

use opedrenamer::cli::Args;
use opedrenamer::logging;
use opedrenamer::progress::Progress;
use opedrenamer::resolver::TitleResolver;
use opedrenamer::runner::{self, CancelToken, RunOptions, RunReport};
use opedrenamer::{config_from_env, AppError, TitlePreference};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    debug!("Environment loaded, resolving provider configuration");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new();

    let preference = TitlePreference::from(args.language);
    let options = RunOptions {
        preview: args.preview,
    };
    let cancel = CancelToken::new();

    info!(
        "Processing {} (language: {:?}, preview: {})",
        args.directory.display(),
        args.language,
        args.preview
    );

    progress.run_start(&args.directory, args.preview);

    // The batch runs on a worker thread so outcome reporting stays
    // responsive on the main thread; files still process one at a time.
    let (tx, rx) = mpsc::channel();
    let directory = args.directory.clone();
    let worker_cancel = cancel.clone();

    let worker = thread::spawn(move || -> Result<RunReport, AppError> {
        let resolver = TitleResolver::from_config(&config_from_env())?;
        runner::run(
            &directory,
            preference,
            &options,
            &resolver,
            &worker_cancel,
            &mut |outcome| {
                let _ = tx.send(outcome.clone());
            },
        )
    });

    for outcome in rx {
        progress.outcome(&outcome);
    }

    let report = worker
        .join()
        .map_err(|_| AppError::Other("Worker thread panicked".to_string()))??;

    progress.completion(&report);

    Ok(())
}
