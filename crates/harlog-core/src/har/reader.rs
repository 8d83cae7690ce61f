use super::types::Har;
use crate::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let file = File::open(path)?;
        let har = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            "Parsed HAR file {} with {} entries",
            path.display(),
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Parse a HAR document from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        let har: Har = serde_json::from_str(content)?;

        tracing::debug!("Parsed HAR from string with {} entries", har.log.entries.len());

        Ok(har)
    }

    /// Parse a HAR document from any reader
    ///
    /// A missing required field (e.g. `timings.wait`) surfaces as a parse
    /// error; unknown fields are collected into the record's extensions and
    /// never cause rejection.
    pub fn from_reader<R: Read>(reader: R) -> Result<Har> {
        let har: Har = serde_json::from_reader(reader)?;
        Ok(har)
    }
}
