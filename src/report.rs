//! Console rendering of generation reports.
//!
//! Layout of one generation:
//!
//! ```text
//! generation 3
//! 00100000010000000000        45
//! ...
//! elite 7 00100000010000000000        45      31.240000
//! ```
//!
//! Each member line is the chromosome's bits, a tab, and its fitness. The
//! summary line gives the slot the elite came from, the elite's bits and
//! fitness, and the population's mean fitness.

use crate::ga::{GaResult, GenerationReport};
use crate::knapsack::Knapsack;
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "generation {}", self.generation)?;
        for member in &self.members {
            writeln!(f, "{}\t{}", member.chromosome, member.fitness)?;
        }
        write_summary(f, self)
    }
}

/// Writes only the summary line of a report.
pub struct Summary<'a>(pub &'a GenerationReport);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {}: ", self.0.generation)?;
        write_summary(f, self.0)
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, report: &GenerationReport) -> fmt::Result {
    writeln!(
        f,
        "elite {} {}\t{}\t{:.6}",
        report.elite_index,
        report.elite(),
        report.best_fitness,
        report.mean_fitness
    )
}

/// Writes the closing description of the best solution of a run.
pub fn write_solution<W: Write>(out: &mut W, knapsack: &Knapsack, result: &GaResult) -> io::Result<()> {
    let items: Vec<String> = result.best.included().map(|i| i.to_string()).collect();
    writeln!(out, "best after {} generations", result.generations)?;
    writeln!(out, "chromosome\t{}", result.best)?;
    writeln!(out, "fitness\t{}", result.best_fitness)?;
    writeln!(
        out,
        "weight\t{} / {}",
        knapsack.total_weight(&result.best),
        knapsack.capacity_limit()
    )?;
    writeln!(out, "items\t{}", items.join(" "))
}
