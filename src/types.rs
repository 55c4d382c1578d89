pub type Lit = i32;

pub type Var = usize;

pub type Clause = Vec<Lit>;

pub fn to_var(lit: Lit) -> Var {
    lit.unsigned_abs() as Var
}

/// Raw answer of a SAT solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Sat { model: Vec<Lit> },
    Unsat,
    Unknown,
}

/// What the refutation check concluded about a diagnosis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Premises together with the negated fault are unsatisfiable.
    Confirmed,
    /// The negated fault is consistent with the premises; `model` is a witness
    /// restricted to the variables of the checked clauses.
    Unconfirmed { model: Vec<Lit> },
    /// The solver failed or gave up.
    Unknown { diagnostic: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Diagnosed {
        fault: &'static str,
        outcome: Outcome,
    },
    Mismatch {
        expected: Vec<String>,
        given: Vec<String>,
    },
    NoMatchingRule,
}

impl Verdict {
    /// Process exit code used when distinct exit codes are requested.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Diagnosed {
                outcome: Outcome::Confirmed,
                ..
            } => 0,
            Verdict::Mismatch { .. } => 1,
            Verdict::NoMatchingRule => 2,
            Verdict::Diagnosed {
                outcome: Outcome::Unconfirmed { .. },
                ..
            } => 3,
            Verdict::Diagnosed {
                outcome: Outcome::Unknown { .. },
                ..
            } => 4,
        }
    }
}
