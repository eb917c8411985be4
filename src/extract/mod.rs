// src/extract/mod.rs
// =============================================================================
// This module contains everything needed to turn one page URL into a list
// of file-hosting links.
//
// Submodules:
// - fetch: Downloads the raw page text over HTTP/HTTPS
// - links: Pulls every quoted href value out of that text
// - hosts: Keeps only the links that point at an allow-listed host
// - name: Turns the page URL into a human-readable label
//
// None of these know about each other. The pipeline module wires them
// together in order.
// =============================================================================

mod fetch;
mod hosts;
mod links;
mod name;

pub use fetch::{FetchOptions, HttpFetcher, PageFetcher, DEFAULT_USER_AGENT};
pub use hosts::{filter_by_host, HostAllowList};
pub use links::extract_links;
pub use name::derive_name;

// Only needed by code that implements PageFetcher itself (the test stubs)
#[cfg(test)]
pub use fetch::{FetchError, FetchErrorKind};
