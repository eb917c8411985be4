// src/pipeline/progress.rs
// =============================================================================
// Progress notifications emitted while the pipeline runs.
//
// These are advisory: nothing here ends up in the report. The CLI prints
// them to the terminal; tests record them to check ordering.
// =============================================================================

use super::report::{ReportSection, SectionStatus};

// Receives one call before and one call after each URL is processed
//
// index is 1-based so it can be shown to users as "[index/total]".
// Methods take &self because several URLs may be in flight at once.
pub trait ProgressSink {
    fn started(&self, index: usize, total: usize, url: &str);

    fn finished(&self, _index: usize, _total: usize, _section: &ReportSection) {}
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn started(&self, _index: usize, _total: usize, _url: &str) {}
}

// Prints progress lines to stderr
//
// stderr keeps stdout free for the report when it is written there.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn started(&self, index: usize, total: usize, url: &str) {
        eprintln!("\n[{}/{}] Processing: {}", index, total, url);
    }

    fn finished(&self, _index: usize, _total: usize, section: &ReportSection) {
        match &section.status {
            SectionStatus::Success { links } => {
                eprintln!("✓ Found {} file hosting links", links.len());
            }
            SectionStatus::Empty => eprintln!("⚠ No file hosting links found"),
            SectionStatus::Error { detail } => eprintln!("✗ Error: {}", detail),
        }
    }
}
