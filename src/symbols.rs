//! Fixed association between symptom symbols and integer literals.
//!
//! Two alphabets share the five magnitudes: the descriptive one used for
//! observations (`A`..`F`) and the fault-indexed one used for conclusions
//! (`psu`, `board`, `ram`, `disk`, `system`). The codes never change so solver
//! models read the same from run to run.

use crate::{errors::LookupError, types::Clause, types::Lit};

/// Descriptive propositions with their codes.
pub const PROPOSITIONS: [(&str, Lit); 5] = [("A", 1), ("B", 2), ("C", 3), ("D", 4), ("F", 5)];

/// Fault symbols aliasing the proposition codes.
pub const FAULTS: [(&str, Lit); 5] = [
    ("psu", 1),
    ("board", 2),
    ("ram", 3),
    ("disk", 4),
    ("system", 5),
];

const NEGATION: char = '-';

/// Signed integer code of `token`, e.g. `-B` is `-2` and `ram` is `3`.
pub fn code(token: &str) -> Result<Lit, LookupError> {
    let (negated, name) = match token.strip_prefix(NEGATION) {
        Some(name) => (true, name),
        None => (false, token),
    };

    let magnitude = PROPOSITIONS
        .iter()
        .chain(FAULTS.iter())
        .find(|(symbol, _)| *symbol == name)
        .map(|&(_, lit)| lit)
        .ok_or_else(|| LookupError::UnknownSymbol(token.to_string()))?;

    Ok(if negated { -magnitude } else { magnitude })
}

/// Token of `lit` in the descriptive alphabet.
pub fn symbol(lit: Lit) -> Result<String, LookupError> {
    let (name, _) = PROPOSITIONS
        .iter()
        .find(|(_, code)| *code == lit.abs())
        .ok_or(LookupError::UnknownLiteral(lit))?;

    Ok(match lit < 0 {
        true => format!("{NEGATION}{name}"),
        false => name.to_string(),
    })
}

/// One unit clause per token.
pub fn unit_clauses<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Clause>, LookupError> {
    tokens
        .iter()
        .map(|token| code(token.as_ref()).map(|lit| vec![lit]))
        .collect()
}
