use std::io::{self, Write};

const RULE: &str = "========================================";

fn conjunction<S: AsRef<str>>(premises: &[S]) -> String {
    let parts: Vec<&str> = premises.iter().map(|p| p.as_ref()).collect();
    format!("({})", parts.join(" ∧ "))
}

/// Implication from the observed literals to the fault.
pub fn formalization<S: AsRef<str>>(premises: &[S], conclusion: &str) -> String {
    format!("{} → {conclusion}", conjunction(premises))
}

/// Refutation form: the premises together with the negated conclusion.
pub fn refutation_form<S: AsRef<str>>(premises: &[S], conclusion: &str) -> String {
    format!("{} ∧ ¬{conclusion}", conjunction(premises))
}

/// Writes the four-step trace of proving `conclusion` from `premises` by refutation.
///
/// Nothing is decided here, `valid` is the caller's verdict.
pub fn write_trace<S: AsRef<str>>(
    writer: &mut impl Write,
    premises: &[S],
    conclusion: &str,
    valid: bool,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "LOGICAL RESOLUTION PROCESS")?;
    writeln!(writer, "{RULE}")?;

    writeln!(writer, "1. Formalization: {}", formalization(premises, conclusion))?;
    writeln!(
        writer,
        "2. Conversion for refutation: {}",
        refutation_form(premises, conclusion)
    )?;
    writeln!(writer, "3. Negating the conclusion: ¬{conclusion}")?;
    writeln!(writer, "4. Applying refutation...")?;

    match valid {
        true => writeln!(writer, "   CONTRADICTION FOUND: The hypothesis is TRUE."),
        false => writeln!(writer, "   NO CONTRADICTION: The hypothesis cannot be proven."),
    }
}
