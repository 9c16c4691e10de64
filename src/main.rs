use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;

use alphabet_cover::dictionary::Dictionary;
use alphabet_cover::errors::CoverError;
use alphabet_cover::solver;

/// Find every set of words with pairwise distinct letters covering the alphabet,
/// possibly closed by one single letter.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(default_value = "words_alpha.txt")]
    dictionary: PathBuf,

    /// Length of the words to combine
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Write solutions to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker threads for the enumeration (default: one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Also log the words that can start a cover
    #[arg(long)]
    solvable: bool,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var(alphabet_cover::log::DEBUG_ENV).is_ok();
    alphabet_cover::log::init_logger(debug_enabled);

    if let Err(e) = try_main(Cli::parse()) {
        if let Some(cover_err) = e.downcast_ref::<CoverError>() {
            eprintln!("Error: {}", cover_err.display_detailed());
        } else {
            eprintln!("Error: {e:#}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<()> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to size the thread pool")?;
    }

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, cli.length)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_solve = Instant::now();
    let solution = solver::solve(&dictionary.words, cli.length)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if cli.solvable {
        for &mask in &solution.seeds {
            let words = solution.catalog.spellings_of(mask).iter().join(", ");
            log::info!("solvable {mask:026b}: {words}");
        }
    }

    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            solution.expander().write_all(&solution.chains, &mut BufWriter::new(file))?
        }
        None => {
            let stdout = io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            let written = solution.expander().write_all(&solution.chains, &mut sink)?;
            sink.flush()?;
            written
        }
    };

    log::info!(
        "{} combinations, {written} solutions; loaded in {load_secs:.3}s, solved in {solve_secs:.3}s",
        solution.chains.len()
    );
    Ok(())
}
