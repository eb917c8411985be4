// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   link-harvester <INPUT> [OUTPUT] [flags]
//
// INPUT is a text file with one page URL per line ("-" reads stdin).
// OUTPUT is where the report goes (default: extracted-links.txt, "-" for
// stdout).
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates all the parsing code
// - Option<T>: Flags the user may leave out
// - Vec<T>: Flags that can be given more than once
// =============================================================================

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Where the report is written when no OUTPUT is given.
pub const DEFAULT_OUTPUT: &str = "extracted-links.txt";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code.
// A missing INPUT makes clap print usage and exit with a non-zero code.
#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version = "0.1.0",
    about = "Extract file-hosting download links from a list of web pages",
    long_about = "link-harvester downloads every page listed in INPUT, scans it for href links \
                  and keeps only those pointing at allow-listed file hosts (mediafire, akia, viki, \
                  1file, rootz by default). The matches are written as a report grouped by page."
)]
pub struct Cli {
    /// File with one page URL per line, or "-" for stdin
    ///
    /// Blank lines and lines not starting with "http" are skipped.
    pub input: String,

    /// Where to write the report, or "-" for stdout
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// TOML config file with hosts, timeout_secs, concurrency, user_agent
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host substring to keep links for (replaces the default list)
    ///
    /// Repeat the flag or separate with commas: --host mediafire,rootz
    #[arg(long = "host", value_name = "SUBSTRING", value_delimiter = ',')]
    pub hosts: Vec<String>,

    /// Per-request timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// How many pages to fetch at the same time (default: 1)
    ///
    /// The report keeps input order whatever this is set to.
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// User-Agent header to send instead of the built-in browser string
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Write the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't print per-URL progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The flags that override config-file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            hosts: self.hosts.clone(),
            timeout_secs: self.timeout,
            concurrency: self.concurrency,
            user_agent: self.user_agent.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Positional arguments vs flags
//    - Fields without #[arg(long)] are positional: their order matters
//    - `input` has no default, so clap requires it
//    - `output` has default_value, so it may be left out
//
// 2. What does value_delimiter do?
//    - It splits one flag value into several: --host a,b becomes ["a", "b"]
//    - Combined with Vec<String>, --host a --host b works too
//
// 3. Why Option<u64> instead of u64 with a default?
//    - We need to know whether the user actually passed the flag
//    - If they didn't, the config file value (or built-in default) is used
// -----------------------------------------------------------------------------
