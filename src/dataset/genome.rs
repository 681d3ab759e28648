use anyhow::{bail, Context, Result};
use fxhash::FxHashSet;
use std::path::Path;
use twobit::TwoBitFile;

/// Random-access nucleotide lookup by chromosome name and half-open range.
///
/// The transformer only needs this one capability, so it is a trait: the
/// production source wraps a 2bit file, tests can back it with a plain map.
pub trait SequenceSource {
    /// Return the nucleotide substring for `chrom` at `[start, end)`.
    ///
    /// Fails with an error naming `chrom` when it is not a key of the
    /// underlying index.
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<String>;
}

/// 2bit-backed genome index.
pub struct TwoBitGenome {
    tb: twobit::TwoBitPhysicalFile,
    // Cached at open; hit once per row
    chrom_names: FxHashSet<String>,
}

impl TwoBitGenome {
    /// Open a 2bit reference file and cache its chromosome name set.
    pub fn open(path: &Path) -> Result<Self> {
        let tb = TwoBitFile::open(path).context(format!("Opening 2bit {:?}", path))?;
        let chrom_names = tb.chrom_names().into_iter().collect();
        Ok(TwoBitGenome { tb, chrom_names })
    }

    /// Names of all chromosomes in the index.
    pub fn chrom_names(&self) -> &FxHashSet<String> {
        &self.chrom_names
    }
}

impl SequenceSource for TwoBitGenome {
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<String> {
        if !self.chrom_names.contains(chrom) {
            bail!("chromosome {} not found in genome", chrom);
        }
        self.tb
            .read_sequence(chrom, start as usize..end as usize)
            .context(format!("extracting {}:{}-{}", chrom, start, end))
    }
}
