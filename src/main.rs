use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[macro_use]
extern crate text_io;

use crossgen::config::Config;
use crossgen::crossword::generator::{generate_variants, Solution};
use crossgen::crossword::order;
use crossgen::errors::Result;
use crossgen::utils::serialization;

/// Lays a list of words out on a grid so they cross as often as possible
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to place, in placement order
    words: Vec<String>,

    /// Read words from a file, one per line
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Grid height
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Grid width
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Number of solutions to generate. The first keeps the given word order, later
    /// ones shuffle it a little
    #[arg(short = 'n', long)]
    variants: Option<usize>,

    /// Seed for shuffling the word order between variants
    #[arg(long)]
    seed: Option<u64>,

    /// Order words by how many letters they share before searching
    #[arg(long)]
    sort: bool,

    /// Require every word after the first to cross an earlier one
    #[arg(long)]
    connected: bool,

    /// Search depths below this run in parallel
    #[arg(long)]
    parallel_depth: Option<usize>,

    /// JSON configuration file; flags given here take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the solutions to this file (bincode)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print solutions as JSON instead of drawing the grids
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    crossgen::log::init_logger(cli.debug);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let mut config = build_config(&cli)?;
    if config.words.is_empty() {
        config.words = prompt_words();
    }
    if config.sort_words {
        config.words = order::by_shared_letters(&config.words);
        log::debug!("Sorted words: {:?}", config.words);
    }
    config.validate()?;

    log::info!(
        "Placing {} words on a {}x{} grid",
        config.words.len(),
        config.height,
        config.width
    );
    let start = Instant::now();
    let solutions = run(&config)?;
    log::info!(
        "Generated {} solution(s) in {:.2?}",
        solutions.len(),
        start.elapsed()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solutions)?);
    } else {
        for (i, solution) in solutions.iter().enumerate() {
            show_solution(i, solution);
        }
    }

    if let Some(path) = &cli.save {
        serialization::save_to_disk(&solutions, path)?;
        log::info!("Saved solutions to {}", path.display());
    }
    Ok(())
}

/// Config file (if any) with command line flags layered on top
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if !cli.words.is_empty() {
        config.words = cli.words.clone();
    } else if let Some(path) = &cli.words_file {
        config.words = std::fs::read_to_string(path)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(variants) = cli.variants {
        config.variants = variants;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(depth) = cli.parallel_depth {
        config.parallel_depth = depth;
    }
    config.sort_words |= cli.sort;
    config.require_crossing |= cli.connected;
    Ok(config)
}

fn prompt_words() -> Vec<String> {
    println!("Enter words separated by spaces:");
    let line: String = read!("{}\n");
    line.split_whitespace().map(String::from).collect()
}

fn run(config: &Config) -> Result<Vec<Solution>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_variants(
        &config.words,
        config.height,
        config.width,
        &config.variant_options(),
        &mut rng,
    )
}

fn show_solution(index: usize, solution: &Solution) {
    println!("===== Variant {} / Score {} =====", index + 1, solution.score);
    if !solution.is_complete() {
        println!("No complete placement found");
        return;
    }
    for (word, placement) in solution.entries() {
        println!(
            "{:<12} row {:>2} col {:>2} {:?}",
            word, placement.pos.row, placement.pos.col, placement.dir
        );
    }
    print!("{}", solution.grid);
}
