use rfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run the pipeline.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("rfetch error: {:#}", err);
        std::process::exit(1);
    }
}
