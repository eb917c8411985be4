// src/input.rs
// =============================================================================
// Reads the list of page URLs to process.
//
// Format: one URL per line. Each line is trimmed. Blank lines and lines that
// don't start with "http" are dropped without complaint, so a file can
// carry notes or headings between URLs.
//
// The source is a file path, or "-" for standard input (handy for piping
// in a pasted list).
// =============================================================================

use thiserror::Error;
use tokio::io::AsyncReadExt;

/// Input path that means "read from stdin".
pub const STDIN_SOURCE: &str = "-";

// Problems that stop a run before any page is fetched
#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("could not read input {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid URLs found in {path}")]
    NoValidUrls { path: String },
}

// Reads and filters the URL list
//
// Returns: the URLs in file order (duplicates kept), or an error if the
// source can't be read or contains no usable URLs
pub async fn read_url_list(source: &str) -> Result<Vec<String>, SourceReadError> {
    let text = if source == STDIN_SOURCE {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| io_error(source, e))?;
        text
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| io_error(source, e))?
    };

    let urls = parse_url_list(&text);
    if urls.is_empty() {
        return Err(SourceReadError::NoValidUrls {
            path: display_name(source).to_string(),
        });
    }

    tracing::debug!(source = display_name(source), count = urls.len(), "url list loaded");
    Ok(urls)
}

// Keeps the trimmed, non-empty lines that start with "http"
//
// A leading byte-order mark (Windows Notepad adds one) is dropped, and a
// bare '\r' counts as a line break just like '\n' and "\r\n".
pub fn parse_url_list(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.starts_with("http"))
        .map(str::to_string)
        .collect()
}

fn io_error(source: &str, error: std::io::Error) -> SourceReadError {
    SourceReadError::Io {
        path: display_name(source).to_string(),
        source: error,
    }
}

fn display_name(source: &str) -> &str {
    if source == STDIN_SOURCE {
        "<stdin>"
    } else {
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_and_filters() {
        let text = "  https://a.com/one  \n\n# my list\nftp://nope\r\nhttp://b.com/two\r\n   \nwww.no-scheme.com\n";
        assert_eq!(
            parse_url_list(text),
            vec!["https://a.com/one", "http://b.com/two"]
        );
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let text = "\u{feff}https://a.com/one\nhttps://b.com/two\n";
        assert_eq!(
            parse_url_list(text),
            vec!["https://a.com/one", "https://b.com/two"]
        );
    }

    #[test]
    fn test_parse_splits_on_bare_carriage_return() {
        let text = "https://a.com/one\rhttps://b.com/two\r\rnotes\r";
        assert_eq!(
            parse_url_list(text),
            vec!["https://a.com/one", "https://b.com/two"]
        );
    }

    #[tokio::test]
    async fn test_read_file_with_bom_and_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFhttps://example.com/first\r\nhttps://example.com/second\r\n")
            .unwrap();

        let urls = read_url_list(file.path().to_str().unwrap()).await.unwrap();

        assert_eq!(
            urls,
            vec!["https://example.com/first", "https://example.com/second"]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let text = "https://a.com\nhttps://b.com\nhttps://a.com\n";
        assert_eq!(
            parse_url_list(text),
            vec!["https://a.com", "https://b.com", "https://a.com"]
        );
    }

    #[tokio::test]
    async fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "https://example.com/super-mario-bros").unwrap();
        writeln!(file, "not a url").unwrap();
        writeln!(file, "https://example.com/zelda").unwrap();

        let urls = read_url_list(file.path().to_str().unwrap()).await.unwrap();

        assert_eq!(
            urls,
            vec!["https://example.com/super-mario-bros", "https://example.com/zelda"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_url_list(missing.to_str().unwrap()).await.unwrap_err();

        assert!(matches!(err, SourceReadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_file_without_urls_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\n   \nexample.com\n").unwrap();

        let err = read_url_list(file.path().to_str().unwrap()).await.unwrap_err();

        assert!(matches!(err, SourceReadError::NoValidUrls { .. }));
        assert!(err.to_string().starts_with("no valid URLs found in"));
    }
}
