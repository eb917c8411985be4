// src/pipeline/report.rs
// =============================================================================
// The report: one section per input URL, plus the text format we write out.
//
// The text layout is what downstream tools read, so it is fixed:
//
//   <blank>
//   ============================================================
//   GAME: super mario bros
//   SOURCE: https://example.com/super-mario-bros
//   FOUND: 2 links
//   ============================================================
//   <blank>
//   https://mediafire.com/file/abc
//   https://rootz.so/d/def
//
// Sections are separated by one blank line. A page without matches gets the
// same header followed by "[No file hosting links found]". A page that could
// not be fetched gets a single "[ERROR fetching <url>: <detail>]" block.
//
// Rust concepts:
// - Enums with data: SectionStatus::Error has no links field at all, so an
//   error section carrying links cannot even be written down
// - #[serde(tag = ...)]: The enum variant becomes a "status" field in JSON
// =============================================================================

use serde::{Deserialize, Serialize};

const SEPARATOR_WIDTH: usize = 60;

// What happened to one source URL
//
// Once a section is built its status never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    /// At least one allow-listed link was found
    Success { links: Vec<String> },
    /// The page was fetched but nothing matched
    Empty,
    /// The page could not be fetched
    Error { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// The URL exactly as it was given to us
    pub source_url: String,
    /// Label derived from the URL path
    pub name: String,
    #[serde(flatten)]
    pub status: SectionStatus,
}

impl ReportSection {
    /// Builds a success or empty section depending on whether anything matched.
    pub fn from_links(source_url: String, name: String, links: Vec<String>) -> Self {
        let status = if links.is_empty() {
            SectionStatus::Empty
        } else {
            SectionStatus::Success { links }
        };

        Self {
            source_url,
            name,
            status,
        }
    }

    pub fn error(source_url: String, name: String, detail: String) -> Self {
        Self {
            source_url,
            name,
            status: SectionStatus::Error { detail },
        }
    }

    /// The matched links; empty for Empty and Error sections.
    pub fn links(&self) -> &[String] {
        match &self.status {
            SectionStatus::Success { links } => links.as_slice(),
            SectionStatus::Empty | SectionStatus::Error { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

// Counts shown at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub success: usize,
    pub empty: usize,
    pub errors: usize,
    pub links: usize,
}

impl Report {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.sections.len(),
            ..ReportSummary::default()
        };

        for section in &self.sections {
            summary.links += section.links().len();
            match section.status {
                SectionStatus::Success { .. } => summary.success += 1,
                SectionStatus::Empty => summary.empty += 1,
                SectionStatus::Error { .. } => summary.errors += 1,
            }
        }

        summary
    }
}

// Renders the whole report as text
//
// Pure function: the same report always gives the same bytes.
pub fn format_report(report: &Report) -> String {
    report
        .sections
        .iter()
        .map(format_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_section(section: &ReportSection) -> String {
    let links = match &section.status {
        SectionStatus::Error { detail } => {
            return format!("\n[ERROR fetching {}: {}]\n", section.source_url, detail);
        }
        SectionStatus::Success { links } => links.as_slice(),
        SectionStatus::Empty => &[],
    };

    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![
        format!("\n{}", separator),
        format!("GAME: {}", section.name),
        format!("SOURCE: {}", section.source_url),
        format!("FOUND: {} links", links.len()),
        format!("{}\n", separator),
    ];

    if links.is_empty() {
        lines.push("[No file hosting links found]".to_string());
    } else {
        lines.extend(links.iter().cloned());
    }

    lines.join("\n")
}
