use crate::dataset::table::IntervalRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Header name of the sequence column in the output dataset.
pub const SEQ_COL: &str = "seq";
/// Canonical header name the label column is renamed to.
pub const RESULT_COL: &str = "result";

/// Write the final two-column dataset (`seq,result`) as CSV.
///
/// One output row per input record, no row-index column. Callers only reach
/// this once every sequence lookup has succeeded.
pub fn write_dataset(path: &Path, seqs: &[String], records: &[IntervalRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).context(format!("Creating output table {:?}", path))?;
    writer
        .write_record([SEQ_COL, RESULT_COL])
        .context("Writing output header")?;
    for (seq, rec) in seqs.iter().zip(records) {
        writer
            .write_record([seq.as_str(), rec.label.as_str()])
            .context("Writing output row")?;
    }
    writer.flush().context(format!("Flushing {:?}", path))?;
    Ok(())
}
