use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// One row of an input table: a genomic region plus its label.
///
/// The label cell is carried through to the output verbatim, so it stays a
/// string here no matter what the column holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRecord {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub label: String,
}

/// Load interval records from a CSV table with a header row.
///
/// * The first **three** columns are taken positionally as
///   (`chrom`, `start`, `end`) regardless of what the header calls them.
/// * The label column is located **by name** (`label_col`) in the header.
///
/// That positional/named split mirrors how the tables are produced upstream;
/// do not "fix" one side to match the other.
pub fn read_intervals(path: &Path, label_col: &str) -> Result<Vec<IntervalRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Opening input table {:?}", path))?;

    let headers = reader.headers().context("Reading header row")?.clone();
    let label_idx = headers
        .iter()
        .position(|h| h == label_col)
        .ok_or_else(|| anyhow!("label column {:?} missing from {:?}", label_col, path))?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context(format!("Reading row of {:?}", path))?;
        let chrom = row
            .get(0)
            .ok_or_else(|| anyhow!("row in {:?} has fewer than three columns", path))?
            .to_string();
        let start: u64 = row
            .get(1)
            .ok_or_else(|| anyhow!("row in {:?} has fewer than three columns", path))?
            .parse()
            .context("Parsing interval start")?;
        let end: u64 = row
            .get(2)
            .ok_or_else(|| anyhow!("row in {:?} has fewer than three columns", path))?
            .parse()
            .context("Parsing interval end")?;
        let label = row
            .get(label_idx)
            .ok_or_else(|| anyhow!("row in {:?} is missing the label field", path))?
            .to_string();
        records.push(IntervalRecord {
            chrom,
            start,
            end,
            label,
        });
    }
    Ok(records)
}
