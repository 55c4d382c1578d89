pub mod explain;

use std::io::{self, BufRead, Write};

use crate::{
    catalog::{Scenario, LEGEND},
    solver::Refutation,
    types::{Clause, Outcome},
};

pub const PROMPT: &str = "Enter the propositions separated by commas (e.g. A, -B, C): ";

const TAG: &str = "[ERROR 404]";

pub fn write_intro(writer: &mut impl Write, scenario: &Scenario) -> io::Result<()> {
    writeln!(writer, "{LEGEND}")?;
    writeln!(writer)?;
    writeln!(writer, "[CLIENT]: '{}'", scenario.message)?;
    writeln!(writer, "{PROMPT}")?;
    writer.flush()
}

/// Reads one line of comma-separated tokens, trimmed but otherwise unchecked.
///
/// End of input reads as an empty line, i.e. a single empty token.
pub fn read_observation(reader: &mut impl BufRead) -> io::Result<Vec<String>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(line
        .split(',')
        .map(|token| token.trim().to_string())
        .collect())
}

pub fn write_mismatch<E: AsRef<str>, G: AsRef<str>>(
    writer: &mut impl Write,
    expected: &[E],
    given: &[G],
) -> io::Result<()> {
    let expected: Vec<&str> = expected.iter().map(|t| t.as_ref()).collect();
    let given: Vec<&str> = given.iter().map(|t| t.as_ref()).collect();

    writeln!(writer)?;
    writeln!(
        writer,
        "{TAG}: The propositions entered do not match the client's case."
    )?;
    writeln!(writer, "Expected: {expected:?}")?;
    writeln!(writer, "Entered: {given:?}")
}

pub fn write_no_rule(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{TAG}: No component matches the given propositions."
    )
}

/// `[1], [-2], [3]` for unit clauses, `[1, 2], [-3]` in general.
pub fn clause_list(clauses: &[Clause]) -> String {
    clauses
        .iter()
        .map(|clause| {
            let lits: Vec<String> = clause.iter().map(|lit| lit.to_string()).collect();
            format!("[{}]", lits.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Solver block of the trace; `name` is the fault's display name.
pub fn write_refutation(
    writer: &mut impl Write,
    name: &str,
    refutation: &Refutation,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "5. SAT solver verification:")?;

    match &refutation.outcome {
        Outcome::Confirmed => {
            writeln!(writer, "   SAT solver confirms: the fault IS in the {name}")?;
            writeln!(writer)?;
            writeln!(
                writer,
                "   SAT solver model: {}",
                clause_list(&refutation.clauses)
            )
        }

        Outcome::Unconfirmed { model } => {
            writeln!(
                writer,
                "   SAT solver says: the fault in the {name} cannot be proven"
            )?;
            let units: Vec<Clause> = model.iter().map(|&lit| vec![lit]).collect();
            writeln!(writer)?;
            writeln!(writer, "   SAT solver model: {}", clause_list(&units))
        }

        Outcome::Unknown { diagnostic } => {
            writeln!(writer, "   SAT solver error: {diagnostic}")?;
            writeln!(writer, "   The fault could be neither confirmed nor refuted.")
        }
    }
}

pub fn write_verdict(writer: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{TAG}: The fault is in the {name}.")
}
