use super::types::{Har, Timings};
use crate::{Error, Result};
use chrono::DateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Tolerance in milliseconds when comparing declared and computed entry time.
const TIME_TOLERANCE_MS: f64 = 0.5;

/// Check that a parsed HAR document is structurally sound.
///
/// This covers what serde cannot: required text fields that are present but
/// empty, and mandatory timing phases that must be non-negative. An empty
/// `log.version` is not an error (readers assume "1.1").
pub fn validate(har: &Har) -> Result<()> {
    tracing::debug!("Validating HAR structure");

    if har.log.version.is_empty() {
        tracing::warn!("HAR version is empty, assuming {}", super::DEFAULT_VERSION);
    }

    if har.log.entries.is_empty() {
        tracing::warn!("HAR file contains no entries");
    }

    for (idx, entry) in har.log.entries.iter().enumerate() {
        if entry.request.method.is_empty() {
            return Err(Error::InvalidStructure(format!(
                "Entry {} has empty request method",
                idx
            )));
        }
        if entry.request.url.is_empty() {
            return Err(Error::InvalidStructure(format!(
                "Entry {} has empty request URL",
                idx
            )));
        }
        for (phase, value) in [
            ("send", entry.timings.send),
            ("wait", entry.timings.wait),
            ("receive", entry.timings.receive),
        ] {
            if value < 0.0 {
                return Err(Error::InvalidStructure(format!(
                    "Entry {} has negative mandatory timing '{}': {}",
                    idx, phase, value
                )));
            }
        }
    }

    tracing::debug!("HAR structure is valid");
    Ok(())
}

/// A producer defect: the document is usable, but whoever wrote it broke a
/// convention of the format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Defect {
    /// `log.version` is empty; consumers assume "1.1".
    EmptyVersion,
    /// Two pages share the same id.
    DuplicatePageId { id: String },
    /// An entry references a page id that does not exist in `pages`.
    DanglingPageRef { entry: usize, pageref: String },
    /// An optional timing phase is negative but not the `-1` sentinel.
    InvalidOptionalTiming {
        entry: usize,
        phase: String,
        value: f64,
    },
    /// Declared `entry.time` differs from the sum of applicable phases.
    TimeMismatch {
        entry: usize,
        declared: f64,
        computed: f64,
    },
    /// A `startedDateTime` is not valid ISO 8601.
    InvalidTimestamp { location: String, value: String },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::EmptyVersion => write!(f, "log.version is empty (consumers assume \"1.1\")"),
            Defect::DuplicatePageId { id } => write!(f, "duplicate page id '{}'", id),
            Defect::DanglingPageRef { entry, pageref } => write!(
                f,
                "entry {} references page '{}' which is not in pages",
                entry, pageref
            ),
            Defect::InvalidOptionalTiming {
                entry,
                phase,
                value,
            } => write!(
                f,
                "entry {} timing '{}' is {} (expected >= 0 or the -1 sentinel)",
                entry, phase, value
            ),
            Defect::TimeMismatch {
                entry,
                declared,
                computed,
            } => write!(
                f,
                "entry {} declares time {}ms but timings sum to {}ms",
                entry, declared, computed
            ),
            Defect::InvalidTimestamp { location, value } => {
                write!(f, "{} has invalid startedDateTime '{}'", location, value)
            }
        }
    }
}

/// Report producer defects in a HAR document.
///
/// None of these make the document unreadable, so this never fails; the
/// caller decides how strict to be. Referential problems (dangling
/// `pageref`) are producer defects by definition, not parse failures.
pub fn lint(har: &Har) -> Vec<Defect> {
    tracing::debug!("Linting HAR document");

    let mut defects = Vec::new();

    if har.log.version.is_empty() {
        defects.push(Defect::EmptyVersion);
    }

    let page_ids: Option<HashSet<&str>> = har.log.pages.as_ref().map(|pages| {
        let mut seen = HashSet::new();
        for page in pages {
            if !seen.insert(page.id.as_str()) {
                defects.push(Defect::DuplicatePageId {
                    id: page.id.clone(),
                });
            }
            if !is_iso8601(&page.started_date_time) {
                defects.push(Defect::InvalidTimestamp {
                    location: format!("page '{}'", page.id),
                    value: page.started_date_time.clone(),
                });
            }
        }
        seen
    });

    for (idx, entry) in har.log.entries.iter().enumerate() {
        if let Some(ids) = &page_ids
            && let Some(pageref) = &entry.page_ref
            && !ids.contains(pageref.as_str())
        {
            defects.push(Defect::DanglingPageRef {
                entry: idx,
                pageref: pageref.clone(),
            });
        }

        for (phase, value) in optional_phases(&entry.timings) {
            if let Some(v) = value
                && v < 0.0
                && v != -1.0
            {
                defects.push(Defect::InvalidOptionalTiming {
                    entry: idx,
                    phase: phase.to_string(),
                    value: v,
                });
            }
        }

        let computed = entry.computed_time();
        if entry.time >= 0.0 && (entry.time - computed).abs() > TIME_TOLERANCE_MS {
            defects.push(Defect::TimeMismatch {
                entry: idx,
                declared: entry.time,
                computed,
            });
        }

        if !is_iso8601(&entry.started_date_time) {
            defects.push(Defect::InvalidTimestamp {
                location: format!("entry {}", idx),
                value: entry.started_date_time.clone(),
            });
        }
    }

    tracing::debug!("Lint complete: {} defects", defects.len());
    defects
}

fn optional_phases(timings: &Timings) -> [(&'static str, Option<f64>); 4] {
    [
        ("blocked", timings.blocked),
        ("dns", timings.dns),
        ("connect", timings.connect),
        ("ssl", timings.ssl),
    ]
}

fn is_iso8601(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}
