use clap::Parser;

use crate::catalog::SCENARIOS;

/// Diagnose a broken computer from a customer's complaint, then prove it by refutation.
///
/// Type the observed symptoms as comma-separated literals, in order, e.g. `A, -B, C`.
#[derive(Parser, Debug)]
#[command(name = "error404", version, about)]
pub struct Args {
    /// Seed for the scenario choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play this scenario instead of a random one
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..SCENARIOS.len() as i64))]
    pub scenario: Option<u8>,

    /// Exit with a status describing the verdict instead of always 0
    #[arg(long)]
    pub exit_codes: bool,
}
