#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use peakseq::dataset::genome::SequenceSource;
    use peakseq::dataset::preprocess::{attach_sequences, derive_output_path, preprocess_table};
    use peakseq::dataset::table::IntervalRecord;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// In-memory stand-in for the 2bit reader.
    struct MapSource(HashMap<String, String>);

    impl MapSource {
        fn new(seqs: &[(&str, &str)]) -> Self {
            MapSource(
                seqs.iter()
                    .map(|(chrom, seq)| (chrom.to_string(), seq.to_string()))
                    .collect(),
            )
        }
    }

    impl SequenceSource for MapSource {
        fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> anyhow::Result<String> {
            let seq = self
                .0
                .get(chrom)
                .ok_or_else(|| anyhow!("chromosome {} not found in genome", chrom))?;
            Ok(seq[start as usize..end as usize].to_string())
        }
    }

    fn record(chrom: &str, start: u64, end: u64, label: &str) -> IntervalRecord {
        IntervalRecord {
            chrom: chrom.into(),
            start,
            end,
            label: label.into(),
        }
    }

    /* ---------- sequence attachment ------------------------------------- */

    #[test]
    fn sequences_are_uppercased_and_ordered() -> anyhow::Result<()> {
        let records = vec![
            record("chr1", 10, 16, "1"),
            record("chr2", 0, 3, "0"),
            record("chr1", 0, 2, "1"),
        ];
        let seqs = attach_sequences(
            &records,
            || Ok(MapSource::new(&[("chr1", "nnacgtacgtacgtac"), ("chr2", "ttga")])),
            None,
        )?;

        assert_eq!(seqs, vec!["ACGTAC", "TTG", "NN"]);
        Ok(())
    }

    #[test]
    fn uppercasing_is_idempotent() -> anyhow::Result<()> {
        // Already-uppercase source comes back unchanged
        let records = vec![record("chr1", 0, 4, "1")];
        let seqs = attach_sequences(&records, || Ok(MapSource::new(&[("chr1", "ACGT")])), None)?;

        assert_eq!(seqs, vec!["ACGT"]);
        Ok(())
    }

    #[test]
    fn row_count_and_order_are_preserved() -> anyhow::Result<()> {
        let seq = "acgtacgtacgtacgtacgtacgtacgtacgt";
        let records: Vec<IntervalRecord> = (0..100)
            .map(|i| record("chr1", i % 16, i % 16 + 4, "1"))
            .collect();

        let seqs = attach_sequences(&records, || Ok(MapSource::new(&[("chr1", seq)])), None)?;

        assert_eq!(seqs.len(), records.len());
        for (rec, got) in records.iter().zip(&seqs) {
            let want = seq[rec.start as usize..rec.end as usize].to_ascii_uppercase();
            assert_eq!(got, &want);
        }
        Ok(())
    }

    #[test]
    fn missing_chromosome_aborts_with_its_name() {
        let records = vec![record("chr1", 0, 4, "1"), record("chrZZ", 0, 4, "0")];

        let err = attach_sequences(&records, || Ok(MapSource::new(&[("chr1", "acgt")])), None)
            .unwrap_err();
        assert!(err.to_string().contains("chrZZ"), "unexpected error: {err}");
    }

    /* ---------- output naming ------------------------------------------- */

    #[test]
    fn output_path_truncates_at_first_dot() -> anyhow::Result<()> {
        assert_eq!(
            derive_output_path(Path::new("K562_CTCF_train.csv"))?,
            PathBuf::from("K562_CTCF_train_seq_result.csv")
        );
        // First dot wins, not the extension
        assert_eq!(
            derive_output_path(Path::new("data/peaks.v2.csv"))?,
            PathBuf::from("data/peaks_seq_result.csv")
        );
        // No dot at all: the whole name is the prefix
        assert_eq!(
            derive_output_path(Path::new("peaks"))?,
            PathBuf::from("peaks_seq_result.csv")
        );
        Ok(())
    }

    /* ---------- full pipeline (in-memory source) ------------------------ */

    #[test]
    fn dataset_has_exactly_two_renamed_columns() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("peaks.csv");
        fs::write(
            &input,
            "chrom,start,end,strand,my_label\nchr1,10,16,+,1\nchr1,0,2,-,0\n",
        )?;

        let out = preprocess_table(
            &input,
            "my_label",
            || Ok(MapSource::new(&[("chr1", "nnacgtacgtacgtac")])),
            None,
        )?;

        // Output keeps the sequence column plus the label column renamed to
        // `result`, whatever the label column was called in the input
        let written = fs::read_to_string(&out)?;
        assert_eq!(written, "seq,result\nACGTAC,1\nNN,0\n");
        Ok(())
    }
}
