// src/extract/hosts.rs
// =============================================================================
// This module decides which links we keep.
//
// A link is kept when its lowercase form contains any of the allow-listed
// substrings. This is plain substring matching, not hostname comparison:
// "mediafire" matches "https://www.MediaFire.com/file/..." and also
// "https://example.com/?mirror=mediafire". That looseness is what we want
// for scraping download pages.
//
// Rust concepts:
// - Newtypes: HostAllowList wraps a Vec<String> so the lowercase/no-duplicate
//   rules are enforced in one place
// - Iterator adapters: filter() keeps order and duplicates for free
// =============================================================================

use serde::{Deserialize, Serialize};

/// File hosts we look for when nothing else is configured.
pub const DEFAULT_HOSTS: [&str; 5] = ["mediafire", "akia", "viki", "1file", "rootz"];

// An ordered list of lowercase host substrings
//
// Built through from_entries(), which trims and lowercases every entry and
// drops blanks and duplicates (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HostAllowList {
    entries: Vec<String>,
}

impl HostAllowList {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();

        for entry in entries {
            let entry = entry.as_ref().trim().to_lowercase();
            if !entry.is_empty() && !normalized.contains(&entry) {
                normalized.push(entry);
            }
        }

        Self { entries: normalized }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the lowercase link contains any allow-listed substring.
    pub fn matches(&self, link: &str) -> bool {
        let link = link.to_lowercase();
        self.entries.iter().any(|host| link.contains(host.as_str()))
    }
}

impl Default for HostAllowList {
    fn default() -> Self {
        Self::from_entries(DEFAULT_HOSTS)
    }
}

impl From<Vec<String>> for HostAllowList {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<HostAllowList> for Vec<String> {
    fn from(list: HostAllowList) -> Self {
        list.entries
    }
}

// Keeps only the links that point at an allow-listed host
//
// Parameters:
//   links: every link found on the page (consumed)
//   allow_list: the substrings to look for
//
// Returns: the matching links, in their original order and casing
pub fn filter_by_host(links: Vec<String>, allow_list: &HostAllowList) -> Vec<String> {
    links
        .into_iter()
        .filter(|link| allow_list.matches(link))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_allow_list() {
        let list = HostAllowList::default();
        assert_eq!(list.entries(), &["mediafire", "akia", "viki", "1file", "rootz"]);
    }

    #[test]
    fn test_entries_are_normalized() {
        let list = HostAllowList::from_entries(["  MediaFire ", "", "mediafire", "Rootz"]);
        assert_eq!(list.entries(), &["mediafire", "rootz"]);
    }

    #[test]
    fn test_filter_keeps_order_and_casing() {
        let input = links(&[
            "https://www.MEDIAFIRE.com/file/one",
            "https://unrelated.com/x",
            "https://rootz.so/d/two",
            "/local/page",
            "https://1FILE.io/three",
        ]);

        let kept = filter_by_host(input, &HostAllowList::default());

        assert_eq!(
            kept,
            links(&[
                "https://www.MEDIAFIRE.com/file/one",
                "https://rootz.so/d/two",
                "https://1FILE.io/three",
            ])
        );
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let input = links(&["https://viki.com/a", "https://viki.com/a"]);
        let kept = filter_by_host(input.clone(), &HostAllowList::default());
        assert_eq!(kept, input);
    }

    #[test]
    fn test_matching_is_substring_not_hostname() {
        let list = HostAllowList::from_entries(["akia"]);
        assert!(list.matches("https://example.com/?mirror=AKIA"));
        assert!(!list.matches("https://example.com/aki"));
    }

    #[test]
    fn test_filter_result_is_subsequence() {
        let input = links(&[
            "https://mediafire.com/1",
            "https://a.com",
            "https://mediafire.com/2",
            "https://b.com",
            "https://mediafire.com/3",
        ]);
        let kept = filter_by_host(input.clone(), &HostAllowList::from_entries(["mediafire"]));

        // Every kept link appears in the input after the previous one
        let mut remaining = input.iter();
        for link in &kept {
            assert!(remaining.any(|candidate| candidate == link));
        }
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_custom_allow_list_replaces_defaults() {
        let input = links(&["https://mediafire.com/a", "https://pixeldrain.com/b"]);
        let kept = filter_by_host(input, &HostAllowList::from_entries(["pixeldrain"]));
        assert_eq!(kept, links(&["https://pixeldrain.com/b"]));
    }
}
