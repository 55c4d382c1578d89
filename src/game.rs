//! One round of the diagnosis game.

use std::io::{self, BufRead, Write};

use crate::{
    catalog::{self, Scenario},
    io::{self as console, explain},
    logging::targets,
    solver::{self, SatSolver},
    types::Verdict,
};

/// Plays `scenario` against one line read from `input`.
///
/// The typed tokens must equal the scenario's observation exactly, order
/// included. Only console I/O errors are returned; solver trouble ends up in
/// the verdict.
pub fn play(
    scenario: &Scenario,
    input: &mut impl BufRead,
    output: &mut impl Write,
    solver: &mut impl SatSolver,
) -> io::Result<Verdict> {
    console::write_intro(output, scenario)?;

    let given = console::read_observation(input)?;
    log::debug!(target: targets::GAME, "Read {given:?}");

    if given.iter().map(String::as_str).ne(scenario.observation.iter().copied()) {
        log::info!(target: targets::GAME, "Mismatch: expected {:?}", scenario.observation);
        console::write_mismatch(output, scenario.observation, &given)?;
        return Ok(Verdict::Mismatch {
            expected: scenario.observation.iter().map(|t| t.to_string()).collect(),
            given,
        });
    }

    let Some(rule) = catalog::rule_for(scenario.observation) else {
        log::warn!(target: targets::GAME, "No rule for {:?}", scenario.observation);
        console::write_no_rule(output)?;
        return Ok(Verdict::NoMatchingRule);
    };

    explain::write_trace(output, scenario.observation, rule.symbol, true)?;

    let refutation = solver::refute(solver, scenario.observation, rule.symbol);
    console::write_refutation(output, rule.name, &refutation)?;

    console::write_verdict(output, rule.name)?;
    output.flush()?;

    Ok(Verdict::Diagnosed {
        fault: rule.symbol,
        outcome: refutation.outcome,
    })
}
