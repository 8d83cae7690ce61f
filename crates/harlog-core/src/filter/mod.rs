mod host_matcher;

pub use host_matcher::HostPattern;

use crate::har::{Entry, Har, Log};
use url::Url;

/// Filter criteria for HAR entries
///
/// Conditions combine with AND logic: an entry must match every specified
/// criterion to pass. Within the host list, any matching pattern passes.
#[derive(Debug, Default)]
pub struct FilterCriteria {
    /// Host patterns to match
    pub hosts: Vec<HostPattern>,
    /// HTTP status filter (e.g., "2xx", "404", "500-599")
    pub status: Option<StatusFilter>,
    /// HTTP method filter (case-insensitive)
    pub method: Option<String>,
    /// Content-Type filter (substring match, case-insensitive)
    pub content_type: Option<String>,
    /// Parent page filter (exact `pageref` match)
    pub page: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add host patterns from a list of pattern strings
    pub fn with_hosts(mut self, patterns: Vec<String>) -> crate::Result<Self> {
        for pattern in patterns {
            self.hosts.push(HostPattern::parse(&pattern)?);
        }
        Ok(self)
    }

    /// Set status filter from a status pattern string
    pub fn with_status(mut self, pattern: String) -> crate::Result<Self> {
        self.status = Some(StatusFilter::parse(&pattern)?);
        Ok(self)
    }

    /// Set method filter (case-insensitive)
    pub fn with_method(mut self, method: String) -> Self {
        self.method = Some(method.to_uppercase());
        self
    }

    /// Set content-type filter (substring match, case-insensitive)
    pub fn with_content_type(mut self, content_type: String) -> Self {
        self.content_type = Some(content_type.to_lowercase());
        self
    }

    /// Keep only entries belonging to the given page id
    pub fn with_page(mut self, page_id: String) -> Self {
        self.page = Some(page_id);
        self
    }

    /// Check if an entry matches all filter criteria
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_host(entry)
            && self.matches_status(entry)
            && self.matches_method(entry)
            && self.matches_content_type(entry)
            && self.matches_page(entry)
    }

    fn matches_host(&self, entry: &Entry) -> bool {
        if self.hosts.is_empty() {
            return true;
        }

        let url = match Url::parse(&entry.request.url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Failed to parse URL {}: {}", entry.request.url, e);
                return false;
            }
        };

        let Some(hostname) = url.host_str() else {
            tracing::debug!("No host in URL: {}", entry.request.url);
            return false;
        };

        self.hosts.iter().any(|pattern| pattern.matches(hostname))
    }

    fn matches_status(&self, entry: &Entry) -> bool {
        match &self.status {
            None => true,
            Some(filter) => filter.matches(entry.response.status),
        }
    }

    fn matches_method(&self, entry: &Entry) -> bool {
        match &self.method {
            None => true,
            Some(method) => entry.request.method.to_uppercase() == *method,
        }
    }

    fn matches_content_type(&self, entry: &Entry) -> bool {
        match &self.content_type {
            None => true,
            Some(filter) => entry
                .response
                .content
                .mime_type
                .to_lowercase()
                .contains(filter),
        }
    }

    fn matches_page(&self, entry: &Entry) -> bool {
        match &self.page {
            None => true,
            Some(page_id) => entry.page_ref.as_deref() == Some(page_id.as_str()),
        }
    }
}

/// Status filter for HTTP status codes
#[derive(Debug, Clone)]
pub enum StatusFilter {
    /// Exact status code (e.g., 404)
    Exact(i64),
    /// Inclusive status code range (e.g., 200-299 for "2xx")
    Range(i64, i64),
}

impl StatusFilter {
    /// Parse a status filter pattern
    ///
    /// Supports exact codes ("404"), class shorthand ("2xx"), and explicit
    /// ranges ("200-299").
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        if pattern.len() == 3
            && pattern.ends_with("xx")
            && let Some(class) = pattern.chars().next().and_then(|c| c.to_digit(10))
        {
            let start = class as i64 * 100;
            return Ok(StatusFilter::Range(start, start + 99));
        }

        if let Some((start_str, end_str)) = pattern.split_once('-') {
            let start = start_str.trim().parse::<i64>().map_err(|_| {
                crate::Error::InvalidPattern(format!("Invalid status range start: {}", start_str))
            })?;
            let end = end_str.trim().parse::<i64>().map_err(|_| {
                crate::Error::InvalidPattern(format!("Invalid status range end: {}", end_str))
            })?;
            return Ok(StatusFilter::Range(start, end));
        }

        let code = pattern.trim().parse::<i64>().map_err(|_| {
            crate::Error::InvalidPattern(format!("Invalid status code: {}", pattern))
        })?;
        Ok(StatusFilter::Exact(code))
    }

    /// Check if a status code matches this filter
    pub fn matches(&self, status: i64) -> bool {
        match self {
            StatusFilter::Exact(code) => status == *code,
            StatusFilter::Range(start, end) => status >= *start && status <= *end,
        }
    }
}

/// Filter a HAR document based on criteria
///
/// Returns a new HAR with only matching entries; log metadata (creator,
/// browser, pages, extensions) is preserved as-is. Zero matches is an error.
pub fn filter_har(har: &Har, criteria: &FilterCriteria) -> crate::Result<Har> {
    let filtered_entries: Vec<Entry> = har
        .log
        .entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect();

    tracing::debug!(
        "Filter kept {} of {} entries",
        filtered_entries.len(),
        har.log.entries.len()
    );

    if filtered_entries.is_empty() {
        return Err(crate::Error::Analysis(
            "No entries matched the filter criteria".to_string(),
        ));
    }

    Ok(Har {
        log: Log {
            entries: filtered_entries,
            ..har.log.clone()
        },
    })
}
