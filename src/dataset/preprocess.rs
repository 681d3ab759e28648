use crate::dataset::genome::SequenceSource;
use crate::dataset::table::{read_intervals, IntervalRecord};
use crate::dataset::write::write_dataset;
use anyhow::{anyhow, bail, Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix appended to the derived output prefix.
pub const OUTPUT_SUFFIX: &str = "_seq_result.csv";

/// Fetch the sequence for every record and normalize it to uppercase.
///
/// The map is order-preserving: `seqs[i]` belongs to `records[i]`. Rows are
/// distributed over the rayon pool; the 2bit reader seeks, so every worker
/// gets its own handle via `open_source`.
pub fn attach_sequences<S, F>(
    records: &[IntervalRecord],
    open_source: F,
    progress: Option<&ProgressBar>,
) -> Result<Vec<String>>
where
    S: SequenceSource + Send,
    F: Fn() -> Result<S> + Sync + Send,
{
    records
        .par_iter()
        .map_init(open_source, |source, rec| -> Result<String> {
            let source = match source {
                Ok(s) => s,
                Err(e) => bail!("opening genome in worker: {:#}", e),
            };
            let seq = source.fetch(&rec.chrom, rec.start, rec.end)?;
            if let Some(pb) = progress {
                pb.inc(1);
            }
            Ok(seq.to_ascii_uppercase())
        })
        .collect() // short-circuits on the first Err
}

/// Derive the output path for an input table.
///
/// The prefix is the input file name truncated at its *first* `.` (so
/// `K562_CTCF_train.csv` becomes `K562_CTCF_train`), with the
/// `_seq_result.csv` suffix appended; the output lands next to the input.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("cannot derive output name from {:?}", input))?;
    let prefix = match file_name.split_once('.') {
        Some((prefix, _)) => prefix,
        None => file_name,
    };
    Ok(input.with_file_name(format!("{}{}", prefix, OUTPUT_SUFFIX)))
}

/// Run the full transformation for one input table.
///
/// Reads the intervals, fetches and uppercases every sequence, then writes
/// the two-column `seq,result` dataset. The output file is only created once
/// the last lookup has succeeded, so a failed run leaves nothing behind.
pub fn preprocess_table<S, F>(
    input: &Path,
    label_col: &str,
    open_source: F,
    progress: Option<&ProgressBar>,
) -> Result<PathBuf>
where
    S: SequenceSource + Send,
    F: Fn() -> Result<S> + Sync + Send,
{
    let records = read_intervals(input, label_col)?;
    if let Some(pb) = progress {
        pb.set_length(records.len() as u64);
        pb.set_position(0);
    }
    let seqs = attach_sequences(&records, open_source, progress)?;
    let out = derive_output_path(input)?;
    write_dataset(&out, &seqs, &records).context(format!("Writing dataset for {:?}", input))?;
    Ok(out)
}
