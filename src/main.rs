// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and resolve the config (defaults, file, flags)
// 3. Read the URL list
// 4. Run the extraction pipeline over every URL
// 5. Write the report and print a summary
// 6. Exit with proper code (0 = done, 1 = no usable input, 2 = other error)
//
// Individual pages failing does NOT change the exit code: those failures
// are part of the report.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - layered settings
mod extract; // src/extract/ - fetch, link scan, host filter, naming
mod input; // src/input.rs - reading the URL list
mod logging; // src/logging.rs - tracing setup
mod pipeline; // src/pipeline/ - per-URL orchestration and the report

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use extract::HttpFetcher;
use pipeline::{format_report, ConsoleProgress, NoProgress, Pipeline, ProgressSink, Report};

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Anything unexpected (bad config, unwritable output, ...) lands here
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = report written
//   Ok(1) = input could not be read or had no valid URLs
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version and missing INPUT
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let cfg = config::resolve(cli.config.as_deref(), cli.overrides())?;
    tracing::debug!(?cfg, "resolved config");

    let urls = match input::read_url_list(&cli.input).await {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    eprintln!("Found {} URLs to process", urls.len());
    eprintln!("Looking for links to: {}", cfg.hosts.entries().join(", "));

    let fetcher = HttpFetcher::new(&cfg.fetch_options()).context("failed to build HTTP client")?;
    let pipeline = Pipeline::new(fetcher, cfg.hosts.clone()).with_concurrency(cfg.concurrency);

    // Progress lines are optional; the report is the same either way
    let progress: &dyn ProgressSink = if cli.quiet { &NoProgress } else { &ConsoleProgress };
    let report = pipeline.run(&urls, progress).await;

    write_report(&report, &cli.output, cli.json).await?;
    print_summary(&report, &cli.output);

    Ok(0)
}

// Writes the report either as text or JSON
// Parameters:
//   report: the finished report
//   output: file path, or "-" for stdout
//   json: whether to write JSON instead of the text layout
async fn write_report(report: &Report, output: &str, json: bool) -> Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(report)?
    } else {
        format_report(report)
    };

    if output == "-" {
        println!("{}", rendered);
    } else {
        tokio::fs::write(output, rendered)
            .await
            .with_context(|| format!("failed to write report to {}", output))?;
    }

    tracing::info!(%output, json, "report written");
    Ok(())
}

// Prints the closing banner (to stderr, so a report on stdout stays clean)
fn print_summary(report: &Report, output: &str) {
    let summary = report.summary();
    let banner = "=".repeat(60);
    let destination = if output == "-" { "<stdout>" } else { output };

    eprintln!("\n{}", banner);
    eprintln!("✓ Processing complete!");
    eprintln!("✓ Results saved to: {}", destination);
    eprintln!("✓ Processed {} URLs", summary.total);
    eprintln!(
        "   {} with links ({} links total), {} without links, {} failed",
        summary.success, summary.links, summary.empty, summary.errors
    );
    eprintln!("{}", banner);
}
