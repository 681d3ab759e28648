use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use peakseq::dataset::genome::TwoBitGenome;
use peakseq::dataset::preprocess::preprocess_table;
use std::{path::PathBuf, time::Instant};

/// Command-line options for the sequence/label dataset preprocessor
#[derive(Parser)]
#[command(
    name = "peakseq",
    about = "Annotate genomic intervals with reference sequence and write seq/label datasets",
    long_about = "Annotate genomic intervals with reference sequence and write seq/label datasets.


EXAMPLES:
    // Using defaults (K562 CTCF train/test pair against hg38)
    $ peakseq
    // Explicit paths
    $ peakseq --ref-2bit <path/to/hg38.2bit> -i <path/to/peaks_train.csv> -i <path/to/peaks_test.csv> -l <label_column> --n-threads <N>
    ",
    version = "0.0.1"
)]
struct Cli {
    /// 2bit reference file [path]
    /// E.g., "hg38.2bit"
    #[clap(
        short = 'r',
        long,
        value_parser,
        default_value = "hg38.2bit",
        help_heading = "Core"
    )]
    pub ref_2bit: PathBuf,

    /// Input interval tables [paths]
    ///
    /// CSV with a header row; the first three columns are taken as
    /// chromosome, start, end regardless of their names.
    #[clap(
        short = 'i',
        long,
        num_args = 1..,
        value_parser,
        value_delimiter = ',',
        default_values = ["K562_CTCF_train.csv", "K562_CTCF_test.csv"],
        help_heading = "Core"
    )]
    pub inputs: Vec<PathBuf>,

    /// Name of the label column carried through to the output as 'result' [string]
    #[clap(
        short = 'l',
        long,
        default_value = "peak_k562:ctcf",
        help_heading = "Core"
    )]
    pub label_col: String,

    /// Number of threads to use [integer]
    #[clap(short = 't', long, default_value = "1", help_heading = "Core")]
    pub n_threads: usize,
}

fn main() {
    // Catch and handle errors
    if let Err(e) = run() {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    let opt = Cli::parse();

    // Configure global thread-pool size
    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.n_threads)
        .build_global()
        .context("building Rayon thread pool")?;

    // Validate the reference before any table work
    println!("Start: Loading genome index");
    let genome = TwoBitGenome::open(&opt.ref_2bit)?;
    println!("Found {} chromosomes", genome.chrom_names().len());
    drop(genome);

    for input in &opt.inputs {
        println!("Start: Preprocessing {:?}", input);
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("       {bar:40} {pos}/{len} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        let out = preprocess_table(
            input,
            &opt.label_col,
            || TwoBitGenome::open(&opt.ref_2bit),
            Some(&pb),
        )?;
        pb.finish_with_message("| Finished lookups");
        println!("Wrote {:?}", out);
    }

    // Print execution time
    let elapsed = start_time.elapsed();
    println!("Elapsed time: {:.2?}", elapsed);
    Ok(())
}
