use crate::OutputFormat;
use anyhow::Result;
use harlog_core::analysis::{AnalysisReport, Analyzer, PerformanceAnalyzer, SummaryAnalyzer};
use harlog_core::har::HarReader;
use std::path::Path;

pub fn execute(file: &Path, timings: bool, format: OutputFormat) -> Result<()> {
    tracing::debug!("Extracting statistics from HAR file: {}", file.display());

    let har = HarReader::from_file(file)?;

    let report = AnalysisReport {
        summary: SummaryAnalyzer.analyze(&har)?,
        performance: PerformanceAnalyzer::default().analyze(&har)?,
    };

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Pretty => output_pretty(&report, file, timings),
    }

    Ok(())
}

fn output_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn output_pretty(report: &AnalysisReport, file: &Path, timings: bool) {
    use console::style;

    let summary = &report.summary;
    let perf = &report.performance;

    println!(
        "\n{}",
        style(format!("HAR statistics: {}", file.display()))
            .bold()
            .cyan()
    );
    println!();

    println!("{}", style("Overview").bold());
    println!(
        "  Entries:        {} requests",
        style(summary.total_entries).yellow()
    );
    println!("  Pages:          {}", summary.total_pages);
    println!("  Unique Domains: {}", summary.unique_domains);
    println!("  Response Bytes: {}", summary.total_size);

    if let Some((start, end)) = &summary.date_range {
        println!("  Time Range:     {} to {}", start, end);
    }

    if !summary.http_versions.is_empty() {
        println!("  HTTP Versions:  {}", summary.http_versions.join(", "));
    }

    if !summary.extension_keys.is_empty() {
        println!(
            "  Custom Fields:  {}",
            style(summary.extension_keys.join(", ")).dim()
        );
    }

    println!("\n{}", style("Performance").bold());
    println!("  Total Time:   {:.2}ms", perf.total_time);
    println!("  Average Time: {:.2}ms", perf.average_time);
    println!("  Median Time:  {:.2}ms", perf.median_time);

    if !perf.slowest_requests.is_empty() {
        println!("\n{}", style("Slowest Requests").bold());
        for slow in &perf.slowest_requests {
            println!(
                "  {:>9.2}ms  {} {} ({})",
                slow.time,
                slow.method,
                slow.url,
                slow.status
            );
        }
    }

    if timings {
        println!("\n{}", style("Timing Phases").bold());
        for phase in &perf.phases {
            println!(
                "  {:<8} {:>4} samples  total {:>10.2}ms  avg {:>8.2}ms",
                phase.phase, phase.samples, phase.total, phase.average
            );
        }
    }
}
