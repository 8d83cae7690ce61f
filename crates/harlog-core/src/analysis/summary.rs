use super::{Analyzer, SummaryStats};
use crate::Result;
use crate::har::Har;
use std::collections::BTreeSet;
use std::collections::HashSet;
use url::Url;

pub struct SummaryAnalyzer;

impl Analyzer for SummaryAnalyzer {
    type Output = SummaryStats;

    fn analyze(&self, har: &Har) -> Result<Self::Output> {
        tracing::debug!("Analyzing HAR summary statistics");

        let entries = &har.log.entries;
        let total_entries = entries.len();
        let total_pages = har.log.pages.as_ref().map_or(0, |p| p.len());

        // Response body sizes, ignoring the -1 "unknown" sentinel
        let total_size: u64 = entries
            .iter()
            .map(|e| e.response.body_size.max(0) as u64)
            .sum();

        let mut domains = HashSet::new();
        for entry in entries {
            if let Ok(url) = Url::parse(&entry.request.url)
                && let Some(domain) = url.domain()
            {
                domains.insert(domain.to_string());
            }
        }

        let date_range = match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => Some((
                first.started_date_time.clone(),
                last.started_date_time.clone(),
            )),
            _ => None,
        };

        let mut http_versions = BTreeSet::new();
        for entry in entries {
            let normalized = normalize_http_version(&entry.request.http_version);
            if !normalized.is_empty() {
                http_versions.insert(normalized);
            }
        }

        let extension_keys = collect_extension_keys(har);

        tracing::info!(
            "Summary analysis complete: {} entries, {} domains",
            total_entries,
            domains.len()
        );

        Ok(SummaryStats {
            total_entries,
            total_pages,
            total_size,
            unique_domains: domains.len(),
            date_range,
            http_versions: http_versions.into_iter().collect(),
            extension_keys,
        })
    }
}

/// Distinct custom-field keys across every record of the log, sorted.
fn collect_extension_keys(har: &Har) -> Vec<String> {
    let mut keys = BTreeSet::new();

    let mut absorb = |ext: &crate::har::Extensions| {
        for key in ext.keys() {
            keys.insert(key.clone());
        }
    };

    absorb(&har.log.extensions);
    if let Some(pages) = &har.log.pages {
        for page in pages {
            absorb(&page.extensions);
            absorb(&page.page_timings.extensions);
        }
    }
    for entry in &har.log.entries {
        absorb(&entry.extensions);
        absorb(&entry.request.extensions);
        absorb(&entry.response.extensions);
        absorb(&entry.response.content.extensions);
        absorb(&entry.cache.extensions);
        absorb(&entry.timings.extensions);
    }

    keys.into_iter().collect()
}

/// Normalize HTTP version strings to a consistent format
fn normalize_http_version(version: &str) -> String {
    match version.to_lowercase().as_str() {
        "h2" | "http/2" | "http/2.0" => "HTTP/2.0".to_string(),
        "h3" | "http/3" | "http/3.0" => "HTTP/3.0".to_string(),
        "http/1.0" => "HTTP/1.0".to_string(),
        "http/1.1" => "HTTP/1.1".to_string(),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::HarReader;

    const SAMPLE: &str = r#"{
        "log": {
            "version": "1.2",
            "creator": {"name": "test", "version": "1.0"},
            "entries": [{
                "startedDateTime": "2024-03-01T10:00:00.000Z",
                "time": 150.0,
                "request": {
                    "method": "GET",
                    "url": "https://api.example.com/v1/items",
                    "httpVersion": "h2",
                    "cookies": [], "headers": [], "queryString": [],
                    "headersSize": -1, "bodySize": -1
                },
                "response": {
                    "status": 200, "statusText": "OK", "httpVersion": "h2",
                    "cookies": [], "headers": [],
                    "content": {"size": 2048, "mimeType": "application/json"},
                    "redirectURL": "", "headersSize": -1, "bodySize": -1
                },
                "cache": {},
                "timings": {"send": 0.0, "wait": 120.0, "receive": 30.0},
                "_resourceType": "xhr"
            }]
        }
    }"#;

    #[test]
    fn test_summary_counts_and_versions() {
        let har = HarReader::from_str(SAMPLE).unwrap();
        let stats = SummaryAnalyzer.analyze(&har).unwrap();

        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.total_pages, 0);
        assert_eq!(stats.unique_domains, 1);
        assert_eq!(stats.http_versions, vec!["HTTP/2.0".to_string()]);
        // bodySize -1 means unknown, not negative bytes
        assert_eq!(stats.total_size, 0);
    }

    #[test]
    fn test_summary_reports_extension_keys() {
        let har = HarReader::from_str(SAMPLE).unwrap();
        let stats = SummaryAnalyzer.analyze(&har).unwrap();
        assert_eq!(stats.extension_keys, vec!["_resourceType".to_string()]);
    }

    #[test]
    fn test_normalize_http_version() {
        assert_eq!(normalize_http_version("h2"), "HTTP/2.0");
        assert_eq!(normalize_http_version("HTTP/1.1"), "HTTP/1.1");
        assert_eq!(normalize_http_version("SPDY/3"), "SPDY/3");
    }
}
