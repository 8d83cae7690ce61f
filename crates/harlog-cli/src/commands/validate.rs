use crate::OutputFormat;
use anyhow::{Result, bail};
use harlog_core::har::{self, HarReader};
use std::path::Path;

pub fn execute(file: &Path, strict: bool, format: OutputFormat) -> Result<()> {
    tracing::debug!("Validating HAR file: {}", file.display());

    // Parse and structural checks are always fatal: a document missing
    // required fields is malformed.
    let har = HarReader::from_file(file)?;
    har::validate(&har)?;

    // Producer defects are reported but only fail under --strict.
    let defects = har::lint(&har);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&defects)?);
        }
        OutputFormat::Pretty => output_pretty(file, &har, &defects),
    }

    if strict && !defects.is_empty() {
        bail!("{} producer defect(s) found", defects.len());
    }

    Ok(())
}

fn output_pretty(file: &Path, har: &harlog_core::har::Har, defects: &[har::Defect]) {
    use console::style;

    println!(
        "\n{}",
        style(format!("Validation: {}", file.display())).bold().cyan()
    );
    println!(
        "  Format version {} with {} entries",
        har.log.effective_version(),
        har.log.entries.len()
    );

    if defects.is_empty() {
        println!("  {}", style("Structure OK, no producer defects").green());
        return;
    }

    println!(
        "  {}",
        style(format!("Structure OK, {} producer defect(s):", defects.len())).yellow()
    );
    for defect in defects {
        println!("    - {}", defect);
    }
}
