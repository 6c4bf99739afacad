//! Lexsim CLI - lexical similarity analysis over word lists.
//!
//! Command-line interface for building similarity matrices and
//! threshold-indexed cluster reports.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lexsim::{
    analyze_sweep, report, wordlist, Config, DamerauLevenshtein, DistanceMetric, LexsimError,
    MatrixBuilder, Result,
};
use log::error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lexsim")]
#[command(author = "Lexsim Contributors")]
#[command(version)]
#[command(about = "Lexical similarity analysis over word lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and write both reports
    Analyze {
        /// Input word list (first tab-separated field of each line)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the similarity-matrix report
        #[arg(short, long, default_value = "word-matrix.txt")]
        matrix_out: PathBuf,

        /// Output file for the threshold-cluster report
        #[arg(short = 'o', long, default_value = "word-distance-clusters.txt")]
        clusters_out: PathBuf,

        /// Neighbor retention cutoff in (0, 1]; overrides the config file
        #[arg(short, long)]
        cutoff: Option<f64>,

        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker threads for the pairwise loop (0 = all cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Build and write only the similarity-matrix report
    Matrix {
        /// Input word list (first tab-separated field of each line)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the similarity-matrix report
        #[arg(short, long, default_value = "word-matrix.txt")]
        output: PathBuf,

        /// Neighbor retention cutoff in (0, 1]; overrides the config file
        #[arg(short, long)]
        cutoff: Option<f64>,

        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker threads for the pairwise loop (0 = all cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Compute the normalized distance between two words
    Distance {
        /// First word
        first: String,

        /// Second word
        second: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Analyze {
            input,
            matrix_out,
            clusters_out,
            cutoff,
            config,
            threads,
        } => run_analyze(input, matrix_out, Some(clusters_out), cutoff, config, threads),

        Commands::Matrix {
            input,
            output,
            cutoff,
            config,
            threads,
        } => run_analyze(input, output, None, cutoff, config, threads),

        Commands::Distance { first, second } => run_distance(&first, &second),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Merges the optional config file with CLI overrides.
fn resolve_config(
    config_path: Option<&Path>,
    cutoff: Option<f64>,
    threads: Option<usize>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(cutoff) = cutoff {
        config.cutoff = cutoff;
    }
    if let Some(threads) = threads {
        config.threads = threads;
    }
    config.validate()?;
    Ok(config)
}

fn init_thread_pool(threads: usize) -> Result<()> {
    if threads == 0 {
        return Ok(());
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| LexsimError::Config(format!("thread pool: {}", e)))
}

fn run_analyze(
    input: PathBuf,
    matrix_out: PathBuf,
    clusters_out: Option<PathBuf>,
    cutoff: Option<f64>,
    config: Option<PathBuf>,
    threads: Option<usize>,
) -> Result<()> {
    let start_time = Instant::now();
    let config = resolve_config(config.as_deref(), cutoff, threads)?;
    init_thread_pool(config.threads)?;

    println!("Lexsim Lexical Similarity Analysis");
    println!("   Word list: {}", input.display());
    println!();

    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap();

    // Step 1: Load word list
    let words = wordlist::load_words(&input)?;
    println!("✓ Loaded {} words", words.len());

    // Step 2: Build similarity matrix
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style.clone());
    pb.set_message(format!("Scoring word pairs (cutoff {})...", config.cutoff));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let build_start = Instant::now();
    let matrix = MatrixBuilder::new(config.cutoff).build(words, &DamerauLevenshtein);

    pb.finish_and_clear();
    println!(
        "✓ Built similarity matrix ({} entries) in {} ms",
        matrix.entry_count(),
        build_start.elapsed().as_millis()
    );

    // Step 3: Matrix report
    let write_start = Instant::now();
    let rows = write_report(&matrix_out, "matrix", |out| {
        report::write_matrix_report(&matrix, out)
    })?;
    println!(
        "✓ Wrote {} matrix rows to {} in {} ms",
        rows,
        matrix_out.display(),
        write_start.elapsed().as_millis()
    );

    // Step 4: Threshold sweep and cluster report
    if let Some(clusters_out) = clusters_out {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style);
        pb.set_message("Sweeping thresholds...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let sweep_start = Instant::now();
        let records = analyze_sweep(&matrix)?;

        pb.finish_and_clear();
        println!(
            "✓ Derived {} clusters across {} thresholds in {} ms",
            records.len(),
            matrix.thresholds().len(),
            sweep_start.elapsed().as_millis()
        );

        let rows = write_report(&clusters_out, "cluster", |out| {
            report::write_cluster_report(&records, out)
        })?;
        println!("✓ Wrote {} cluster rows to {}", rows, clusters_out.display());
    }

    println!();
    println!("Done in {} ms", start_time.elapsed().as_millis());
    Ok(())
}

/// Opens a report destination and runs a writer against it.
fn write_report<F>(path: &Path, report: &'static str, write: F) -> Result<usize>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<usize>,
{
    let file = File::create(path).map_err(|source| LexsimError::ReportWrite { report, source })?;
    let mut out = BufWriter::new(file);
    let rows = write(&mut out)?;
    out.flush()
        .map_err(|source| LexsimError::ReportWrite { report, source })?;
    Ok(rows)
}

fn run_distance(first: &str, second: &str) -> Result<()> {
    let distance = DamerauLevenshtein.distance(first, second);
    println!("{}", distance);
    Ok(())
}
