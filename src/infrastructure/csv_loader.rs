// Observation table loader
use crate::domain::weather::Observation;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    read_observations(file).with_context(|| format!("Failed to parse CSV file: {:?}", path))
}

/// Rows are matched to fields by header name, so extra columns such as an
/// unnamed index column are ignored.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for (line, result) in rdr.deserialize::<Observation>().enumerate() {
        let row = result.with_context(|| format!("Invalid observation on data row {}", line + 1))?;
        rows.push(row);
    }

    Ok(rows)
}
