//! CLI for rfetch: argument parsing and the straight-line pipeline driver.

use anyhow::Result;
use clap::Parser;
use rfetch_core::config;
use rfetch_core::fetch;
use rfetch_core::output::{self, Destination};
use rfetch_core::url_model;

/// Fetch a URL and write the response body to stdout or a new file.
#[derive(Debug, Parser)]
#[command(name = "rfetch")]
#[command(about = "Fetch a URL and write the body to stdout or a new file", long_about = None)]
pub struct Cli {
    /// Output file path (omit or leave empty to write to stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Absolute URL to fetch (scheme and host required).
    pub url: String,
}

impl Cli {
    /// Parses the process arguments and runs the pipeline: validate URL,
    /// resolve the destination, fetch, write. Each step either succeeds or
    /// propagates a terminal error to `main`.
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let url = url_model::validate_request_url(&cli.url)?;

        // Existence check happens before the request; file creation is
        // deferred to the write step, so a failed fetch leaves no file.
        let dest = Destination::resolve(cli.output.as_deref())?;
        match &dest {
            Destination::Stdout => println!("Empty output. Using stdout"),
            Destination::File(path) => {
                println!("Valid output file. Using file {}", path.display())
            }
        }

        let resp = fetch::fetch_body(&url, &cfg)?;
        tracing::info!(status = resp.status, bytes = resp.body.len(), url = %url, "fetched");

        output::write_body(&dest, &resp.body)?;
        Ok(())
    }
}
