//! u-knapsack CLI - solve a 0/1 knapsack instance with a genetic algorithm.

use anyhow::{Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use u_knapsack::ga::{GaConfig, GaRunner};
use u_knapsack::knapsack::{Catalog, Knapsack};
use u_knapsack::report::{write_solution, Summary};

fn cli() -> Command {
    Command::new("u-knapsack")
        .about("Evolves a packing for a 0/1 knapsack instance")
        .arg(
            arg!(--items [ITEMS] "Text file of whitespace-separated `weight value` pairs")
                .default_value("data.txt")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"item-count" [N] "Number of items to read from the file")
                .default_value("50")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--capacity [LIMIT] "Capacity limit; reaching it makes a packing infeasible")
                .default_value("60")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--population [SIZE] "Number of chromosomes per generation")
                .default_value("50")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--generations [COUNT] "Number of generations to run")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"mutation-rate" [RATE] "Per-bit flip probability")
                .default_value("0.01")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"crossover-rate" [RATE] "Probability that a generation mates")
                .default_value("1.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"inclusion-rate" [RATE] "Probability of a 1 gene in initial chromosomes")
                .default_value("0.05")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--seed [SEED] "Random seed")
                .default_value("33")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--quiet "Print only the per-generation summary lines")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = cli().get_matches();
    run(&matches)
}

/// Rates are taken as given so that `validate` rejects out-of-range input
/// instead of the builders clamping it.
fn config_from(matches: &ArgMatches) -> GaConfig {
    GaConfig {
        population_size: *matches.get_one::<usize>("population").unwrap(),
        max_generations: *matches.get_one::<usize>("generations").unwrap(),
        crossover_rate: *matches.get_one::<f64>("crossover-rate").unwrap(),
        mutation_rate: *matches.get_one::<f64>("mutation-rate").unwrap(),
        initial_inclusion_rate: *matches.get_one::<f64>("inclusion-rate").unwrap(),
        seed: Some(*matches.get_one::<u64>("seed").unwrap()),
        ..GaConfig::default()
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let items_path = matches.get_one::<PathBuf>("items").unwrap().clone();
    let item_count = *matches.get_one::<usize>("item-count").unwrap();
    let capacity = *matches.get_one::<u64>("capacity").unwrap();
    let quiet = matches.get_flag("quiet");

    let config = config_from(matches);
    config.validate().context("invalid GA configuration")?;

    let catalog = Catalog::load(&items_path, item_count)
        .with_context(|| format!("failed to load item catalog from {}", items_path.display()))?;
    info!("catalog: {} items, capacity limit {}", catalog.len(), capacity);
    let knapsack = Knapsack::new(catalog, capacity);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_err = None;

    let result = GaRunner::run_with_observer(&knapsack, &config, |report| {
        if write_err.is_some() {
            return;
        }
        let written = if quiet {
            write!(out, "{}", Summary(report))
        } else {
            write!(out, "{report}")
        };
        if let Err(e) = written {
            write_err = Some(e);
        }
    })?;
    if let Some(e) = write_err {
        return Err(e).context("failed to write report");
    }

    write_solution(&mut out, &knapsack, &result).context("failed to write solution")?;
    out.flush().context("failed to write solution")?;
    Ok(())
}
