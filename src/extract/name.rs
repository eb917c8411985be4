// src/extract/name.rs
// =============================================================================
// Turns a page URL into a short label for the report header.
//
//   https://example.com/games/super-mario-bros  ->  "super mario bros"
//   https://example.com/                        ->  "Unknown"
//   not a url                                   ->  "Unknown Game"
//
// The label is purely cosmetic, so a URL we can't parse gets a placeholder
// instead of an error.
// =============================================================================

use url::Url;

const NO_SEGMENT_LABEL: &str = "Unknown";
const UNPARSEABLE_LABEL: &str = "Unknown Game";

pub fn derive_name(source_url: &str) -> String {
    let url = match Url::parse(source_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(url = %source_url, error = %e, "could not parse url for naming");
            return UNPARSEABLE_LABEL.to_string();
        }
    };

    // Url::path() is used rather than path_segments() because the latter
    // returns None for URLs like "mailto:x" that still have a usable path
    let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();

    let segment = segments
        .last()
        .or_else(|| segments.iter().rev().nth(1))
        .copied()
        .unwrap_or(NO_SEGMENT_LABEL);

    segment.replace('-', " ").replace('/', "").trim().to_string()
}
