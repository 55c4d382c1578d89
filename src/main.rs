use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use error404::{catalog, config::Args, game, solver::SplrSolver};

/// EX_IOERR from sysexits.h
const IO_ERROR: i32 = 74;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let scenario = match args.scenario {
        Some(index) => catalog::scenario(index as usize).unwrap_or(&catalog::SCENARIOS[0]),
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            catalog::choose(&mut rng)
        }
    };

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();

    let verdict = match game::play(scenario, &mut input, &mut output, &mut SplrSolver) {
        Ok(verdict) => verdict,
        Err(e) => {
            eprintln!("Console error: {e}");
            std::process::exit(IO_ERROR);
        }
    };

    log::info!("Verdict: {verdict:?}");

    if args.exit_codes {
        std::process::exit(verdict.exit_code());
    }
}
