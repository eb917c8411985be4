// src/pipeline/mod.rs
// =============================================================================
// This module drives the whole URL -> report process.
//
// For each input URL, in order:
// 1. Fetch the page
// 2. Extract every href value
// 3. Keep only links to allow-listed hosts
// 4. Derive a readable name from the URL
// 5. Record one report section
//
// A failed fetch becomes an Error section for that URL and the run carries
// on. Nothing a single URL does can abort the run or touch another URL's
// section.
//
// Concurrency:
// - By default one URL is processed at a time
// - With a higher limit, several fetches can be in flight at once
// - Either way, sections come back in input order because we use
//   buffered() rather than buffer_unordered()
//
// Rust concepts:
// - Generics: Pipeline<F> works with any PageFetcher
// - Streams: stream::iter(...).buffered(n) polls up to n futures at once
// =============================================================================

mod progress;
mod report;

pub use progress::{ConsoleProgress, NoProgress, ProgressSink};
pub use report::{format_report, Report, ReportSection};

use crate::extract::{derive_name, extract_links, filter_by_host, HostAllowList, PageFetcher};
use futures::stream::{self, StreamExt};

pub struct Pipeline<F> {
    fetcher: F,
    allow_list: HostAllowList,
    concurrency: usize,
}

impl<F: PageFetcher> Pipeline<F> {
    // Creates a sequential pipeline
    //
    // Parameters:
    //   fetcher: where page text comes from
    //   allow_list: the host substrings links must contain to be kept
    pub fn new(fetcher: F, allow_list: HostAllowList) -> Self {
        Self {
            fetcher,
            allow_list,
            concurrency: 1,
        }
    }

    /// Lets up to `limit` fetches run at the same time (0 is treated as 1).
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    // Processes every URL and collects the report
    //
    // Always returns exactly one section per URL, in the same order as
    // `urls`. Duplicate URLs are fetched and reported separately.
    pub async fn run<P>(&self, urls: &[String], progress: &P) -> Report
    where
        P: ProgressSink + ?Sized,
    {
        let total = urls.len();
        tracing::info!(total, concurrency = self.concurrency, "starting extraction run");

        let tasks = urls.iter().enumerate().map(move |(i, url)| async move {
            let index = i + 1;
            progress.started(index, total, url);
            let section = self.process_url(url).await;
            progress.finished(index, total, &section);
            section
        });

        let sections: Vec<ReportSection> = stream::iter(tasks)
            .buffered(self.concurrency)
            .collect()
            .await;

        Report { sections }
    }

    // Runs the fetch -> extract -> filter -> name steps for one URL
    //
    // Never fails: a fetch error is turned into an Error section.
    pub async fn process_url(&self, url: &str) -> ReportSection {
        let name = derive_name(url);

        match self.fetcher.fetch(url).await {
            Ok(page) => {
                let links = extract_links(&page);
                let found = links.len();
                let matched = filter_by_host(links, &self.allow_list);

                tracing::debug!(%url, found, matched = matched.len(), "links extracted");
                ReportSection::from_links(url.to_string(), name, matched)
            }
            Err(e) => {
                tracing::info!(%url, error = %e, "fetch failed");
                ReportSection::error(url.to_string(), name, e.kind.to_string())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered() vs buffer_unordered()
//    - Both run up to N futures at once
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures were created, holding
//      early finishers back until the ones before them are done
//    - We need input order in the report, so buffered it is
//
// 2. Why no tokio::spawn?
//    - Spawned tasks must be 'static and Send
//    - Our futures borrow the pipeline and the progress sink
//    - buffered polls them all inside the current task, so plain borrows work
// -----------------------------------------------------------------------------
