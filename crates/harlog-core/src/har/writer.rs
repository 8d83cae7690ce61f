use super::types::Har;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct HarWriter;

impl HarWriter {
    /// Write a HAR document to a file (pretty-printed)
    pub fn to_file(har: &Har, path: &Path) -> Result<()> {
        tracing::debug!("Writing HAR file to: {}", path.display());

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, har)?;

        tracing::info!(
            "Wrote HAR file with {} entries to {}",
            har.log.entries.len(),
            path.display()
        );

        Ok(())
    }

    /// Serialize a HAR document to a pretty-printed JSON string
    pub fn to_string(har: &Har) -> Result<String> {
        let json = serde_json::to_string_pretty(har)?;
        Ok(json)
    }

    /// Serialize a HAR document to a compact JSON string
    pub fn to_string_compact(har: &Har) -> Result<String> {
        let json = serde_json::to_string(har)?;
        Ok(json)
    }
}
