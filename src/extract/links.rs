// src/extract/links.rs
// =============================================================================
// This module pulls link targets out of raw page text.
//
// This is a lexical scan, not an HTML parser. We look for the text pattern
//
//     href="..."   or   href='...'
//
// (attribute name in any case) and capture whatever sits between the quotes.
// Because we never build a DOM, matches inside comments, <script> blocks and
// broken tags are found too. That is intentional: download pages love to
// hide their links in odd places, and a text scan catches them all.
//
// What we do NOT do:
// - Decode HTML entities (&amp; stays &amp;)
// - Resolve relative links against the page URL
// - Normalise or validate the URL in any way
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// The pattern is compiled once, on first use
//
// [^"']+ means "one or more characters that are not a quote", so an empty
// href="" is never captured.
static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href=["']([^"']+)["']"#).expect("href pattern is valid"));

// Extracts every href value from the page text
//
// Parameters:
//   content: the raw page text (borrowed as &str)
//
// Returns: the captured values, in order of appearance, duplicates included
//
// Example:
//   content = "<a href='/a'>A</a><A HREF=\"https://b\">B</A>"
//   result  = ["/a", "https://b"]
pub fn extract_links(content: &str) -> Vec<String> {
    HREF_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|value| value.as_str().to_string())
        .collect()
}
