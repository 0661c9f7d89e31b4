//! Strsynth CLI - Command-line interface for synthetic STR dataset generation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strsynth::base::Locus;
use strsynth::evolution::FrequencyTable;
use strsynth::simulation::{
    GeneratorBuilder, DEFAULT_DATABASE_SIZE, DEFAULT_DROPOUT_RATE, DEFAULT_MUTATION_RATE,
    DEFAULT_QUERY_COUNT, DEFAULT_SINGLE_ALLELE_RATE, DEFAULT_TRUE_PAIRS,
};
use strsynth::storage;

/// Strsynth - Synthetic STR kinship dataset generator
#[derive(Parser, Debug)]
#[command(name = "strsynth")]
#[command(author, version, about = "Synthetic STR kinship dataset generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the database, query, and ground-truth CSVs
    Generate {
        /// Output directory for the three CSV files
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        /// Total profiles in the database
        #[arg(long, default_value_t = DEFAULT_DATABASE_SIZE)]
        database_size: usize,

        /// Total query profiles
        #[arg(long, default_value_t = DEFAULT_QUERY_COUNT)]
        queries: usize,

        /// Queries with a true parent in the database
        #[arg(long, default_value_t = DEFAULT_TRUE_PAIRS)]
        true_pairs: usize,

        /// Locus dropout rate
        #[arg(long, default_value_t = DEFAULT_DROPOUT_RATE)]
        dropout_rate: f64,

        /// Single-allele observation rate
        #[arg(long, default_value_t = DEFAULT_SINGLE_ALLELE_RATE)]
        single_allele_rate: f64,

        /// Transmission mutation rate
        #[arg(long, default_value_t = DEFAULT_MUTATION_RATE)]
        mutation_rate: f64,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the 21 loci and their allele distributions
    Loci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            database_size,
            queries,
            true_pairs,
            dropout_rate,
            single_allele_rate,
            mutation_rate,
            seed,
        } => cmd_generate(
            output,
            database_size,
            queries,
            true_pairs,
            dropout_rate,
            single_allele_rate,
            mutation_rate,
            seed,
        ),
        Commands::Loci => cmd_loci(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    output: PathBuf,
    database_size: usize,
    queries: usize,
    true_pairs: usize,
    dropout_rate: f64,
    single_allele_rate: f64,
    mutation_rate: f64,
    seed: Option<u64>,
) -> Result<()> {
    println!("Generating synthetic STR kinship dataset...");

    let mut builder = GeneratorBuilder::new()
        .database_size(database_size)
        .query_count(queries)
        .true_pairs(true_pairs)
        .dropout_rate(dropout_rate)
        .single_allele_rate(single_allele_rate)
        .mutation_rate(mutation_rate);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }

    let mut generator = builder.build().context("invalid generator configuration")?;
    let dataset = generator.generate();

    storage::write_dataset(&dataset, &output)
        .with_context(|| format!("failed to write dataset to {}", output.display()))?;

    println!(
        "Database saved: {} ({} profiles)",
        output.join(storage::DATABASE_FILE).display(),
        dataset.database_size()
    );
    println!(
        "Queries saved: {} ({} profiles)",
        output.join(storage::QUERIES_FILE).display(),
        dataset.query_count()
    );
    println!(
        "Ground truth saved: {} ({} true pairs)",
        output.join(storage::GROUND_TRUTH_FILE).display(),
        dataset.true_pair_count()
    );

    Ok(())
}

fn cmd_loci() -> Result<()> {
    let table = FrequencyTable::forensic();

    println!("{:<10} {:>8}  alleles", "Locus", "count");
    for locus in Locus::ALL {
        let alleles: Vec<String> = table
            .frequencies(locus)
            .iter()
            .map(|(allele, _)| allele.to_string())
            .collect();
        println!(
            "{:<10} {:>8}  {}",
            locus.name(),
            table.allele_count(locus),
            alleles.join(", ")
        );
    }

    Ok(())
}
