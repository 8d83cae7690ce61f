use anyhow::Result;
use harlog_core::filter::FilterCriteria;
use harlog_core::har::{HarReader, HarWriter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn execute(
    file: &Path,
    hosts: Vec<String>,
    status: Option<String>,
    method: Option<String>,
    content_type: Option<String>,
    page: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::debug!("Filtering HAR file: {}", file.display());

    // Handle comma-separated values inside repeated --host flags
    let host_patterns: Vec<String> = hosts
        .iter()
        .flat_map(|h| h.split(',').map(|s| s.trim().to_string()))
        .collect();

    let mut criteria = FilterCriteria::new();

    if !host_patterns.is_empty() {
        criteria = criteria.with_hosts(host_patterns)?;
    }

    if let Some(status_pattern) = status {
        criteria = criteria.with_status(status_pattern)?;
    }

    if let Some(method_filter) = method {
        criteria = criteria.with_method(method_filter);
    }

    if let Some(content_type_filter) = content_type {
        criteria = criteria.with_content_type(content_type_filter);
    }

    if let Some(page_id) = page {
        criteria = criteria.with_page(page_id);
    }

    let har = HarReader::from_file(file)?;

    let filtered_har = harlog_core::filter::filter_har(&har, &criteria)?;

    if let Some(output_path) = output {
        tracing::debug!("Writing filtered HAR to: {}", output_path.display());
        HarWriter::to_file(&filtered_har, &output_path)?;
    } else {
        let json = HarWriter::to_string(&filtered_har)?;
        io::stdout().write_all(json.as_bytes())?;
        io::stdout().write_all(b"\n")?;
    }

    Ok(())
}
