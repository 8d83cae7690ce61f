mod performance;
mod summary;

pub use performance::PerformanceAnalyzer;
pub use summary::SummaryAnalyzer;

use crate::har::Har;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: SummaryStats,
    pub performance: PerformanceStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_entries: usize,
    pub total_pages: usize,
    pub total_size: u64,
    pub unique_domains: usize,
    pub date_range: Option<(String, String)>,
    pub http_versions: Vec<String>,
    /// Distinct custom-field keys (underscore-prefixed) seen anywhere in the log.
    pub extension_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub total_time: f64,
    pub average_time: f64,
    pub median_time: f64,
    pub slowest_requests: Vec<SlowRequest>,
    pub phases: Vec<PhaseStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlowRequest {
    pub url: String,
    pub time: f64,
    pub method: String,
    pub status: i64,
}

/// Aggregate for one timing phase across all entries.
///
/// Only applicable samples count: a phase that is absent or `-1` in an entry
/// contributes nothing, so `samples` can be smaller than the entry count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseStats {
    pub phase: String,
    pub samples: usize,
    pub total: f64,
    pub average: f64,
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, har: &Har) -> crate::Result<Self::Output>;
}
