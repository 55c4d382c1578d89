mod backend;

pub use backend::SplrSolver;

use crate::{
    errors::{LookupError, SolverFailure},
    logging::targets,
    symbols,
    types::{to_var, Clause, Lit, Outcome, Solution, Var},
};

/// An external SAT solver.
///
/// Each call is an independent session: nothing learnt while solving one clause
/// set may leak into the next.
pub trait SatSolver {
    fn solve(&mut self, clauses: &[Clause]) -> Result<Solution, SolverFailure>;
}

/// Clauses handed to the solver and what came back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Refutation {
    pub clauses: Vec<Clause>,
    pub outcome: Outcome,
}

/// Premises as unit clauses followed by the negated conclusion.
pub fn refutation_clauses<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
) -> Result<Vec<Clause>, LookupError> {
    let mut clauses = symbols::unit_clauses(premises)?;
    clauses.push(vec![-symbols::code(conclusion)?]);
    Ok(clauses)
}

/// Checks that `premises` entail `conclusion` by asking whether
/// premises ∧ ¬conclusion is unsatisfiable.
///
/// Never fails: lookup and solver errors are reported as [`Outcome::Unknown`].
pub fn refute<S: AsRef<str>>(
    solver: &mut impl SatSolver,
    premises: &[S],
    conclusion: &str,
) -> Refutation {
    let clauses = match refutation_clauses(premises, conclusion) {
        Ok(clauses) => clauses,
        Err(e) => {
            log::error!(target: targets::BRIDGE, "Failed to encode refutation: {e}");
            return Refutation {
                clauses: vec![],
                outcome: Outcome::Unknown {
                    diagnostic: SolverFailure::from(e).to_string(),
                },
            };
        }
    };

    log::debug!(target: targets::BRIDGE, "Solving {clauses:?}");
    let outcome = check(solver, &clauses);
    log::info!(target: targets::BRIDGE, "{conclusion}: {outcome:?}");

    Refutation { clauses, outcome }
}

/// Solves `clauses` and reads the answer as a refutation outcome.
pub fn check(solver: &mut impl SatSolver, clauses: &[Clause]) -> Outcome {
    match solver.solve(clauses) {
        Ok(Solution::Unsat) => Outcome::Confirmed,

        Ok(Solution::Sat { model }) => {
            if !satisfies(clauses, &model) {
                log::warn!(target: targets::BRIDGE, "Model {model:?} does not satisfy {clauses:?}");
            }
            Outcome::Unconfirmed {
                model: restrict(&model, clauses),
            }
        }

        Ok(Solution::Unknown) => Outcome::Unknown {
            diagnostic: "solver returned no answer".to_string(),
        },

        Err(e) => {
            log::error!(target: targets::BRIDGE, "Solve error: {e}");
            Outcome::Unknown {
                diagnostic: e.to_string(),
            }
        }
    }
}

/// Literals of `model` over variables that occur in `clauses`.
pub fn restrict(model: &[Lit], clauses: &[Clause]) -> Vec<Lit> {
    let mut vars: Vec<Var> = clauses.iter().flatten().map(|&lit| to_var(lit)).collect();
    vars.sort();
    vars.dedup();

    model
        .iter()
        .copied()
        .filter(|&lit| vars.binary_search(&to_var(lit)).is_ok())
        .collect()
}

/// Whether every clause has a literal in `model`.
pub fn satisfies(clauses: &[Clause], model: &[Lit]) -> bool {
    let mut sorted = model.to_vec();
    sorted.sort();
    clauses
        .iter()
        .all(|clause| clause.iter().any(|lit| sorted.binary_search(lit).is_ok()))
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::SolverFailure,
        types::{Clause, Outcome, Solution},
    };

    use super::{refutation_clauses, refute, restrict, satisfies, SatSolver};

    /// Answers with a fixed solution and remembers what it was asked.
    struct Canned {
        answer: Result<Solution, SolverFailure>,
        asked: Vec<Vec<Clause>>,
    }

    impl Canned {
        fn new(answer: Result<Solution, SolverFailure>) -> Self {
            Canned {
                answer,
                asked: vec![],
            }
        }
    }

    impl SatSolver for Canned {
        fn solve(&mut self, clauses: &[Clause]) -> Result<Solution, SolverFailure> {
            self.asked.push(clauses.to_vec());
            self.answer.clone()
        }
    }

    #[test]
    fn encoding() {
        let clauses = refutation_clauses(&["A", "-B", "C"], "ram").unwrap();
        assert_eq!(clauses, vec![vec![1], vec![-2], vec![3], vec![-3]]);

        let clauses = refutation_clauses(&["-F"], "system").unwrap();
        assert_eq!(clauses, vec![vec![-5], vec![-5]]);

        assert!(refutation_clauses(&["A"], "cpu").is_err());
    }

    #[test]
    fn unsat_confirms() {
        let mut solver = Canned::new(Ok(Solution::Unsat));
        let refutation = refute(&mut solver, &["A", "-B", "C"], "ram");
        assert_eq!(refutation.outcome, Outcome::Confirmed);
        assert_eq!(solver.asked, vec![refutation.clauses]);
    }

    #[test]
    fn sat_does_not_confirm() {
        let model = vec![1, -2, -3, -4, -5, 6];
        let mut solver = Canned::new(Ok(Solution::Sat { model }));
        let refutation = refute(&mut solver, &["A", "-B", "-C", "-D", "-F"], "board");
        assert_eq!(
            refutation.outcome,
            Outcome::Unconfirmed {
                model: vec![1, -2, -3, -4, -5]
            }
        );
    }

    #[test]
    fn failure_is_contained() {
        let failure = SolverFailure::Backend("out of memory".to_string());
        let mut solver = Canned::new(Err(failure));
        let refutation = refute(&mut solver, &["A", "-B", "C"], "ram");
        match refutation.outcome {
            Outcome::Unknown { diagnostic } => assert!(diagnostic.contains("out of memory")),
            outcome => panic!("unexpected {outcome:?}"),
        }

        let mut solver = Canned::new(Ok(Solution::Unknown));
        let refutation = refute(&mut solver, &["-F"], "system");
        assert!(matches!(refutation.outcome, Outcome::Unknown { .. }));
    }

    #[test]
    fn bad_symbols_never_reach_the_solver() {
        let mut solver = Canned::new(Ok(Solution::Unsat));
        let refutation = refute(&mut solver, &["A", "Q"], "ram");
        assert!(matches!(refutation.outcome, Outcome::Unknown { .. }));
        assert!(refutation.clauses.is_empty());
        assert!(solver.asked.is_empty());
    }

    #[test]
    fn restriction() {
        let clauses = vec![vec![-5], vec![-5]];
        assert_eq!(restrict(&[-1, -2, -3, -4, -5], &clauses), vec![-5]);
        assert_eq!(restrict(&[1, 2], &clauses), Vec::<i32>::new());
    }

    #[test]
    fn satisfaction() {
        let clauses = vec![vec![1, 2], vec![-1, 3]];
        assert!(satisfies(&clauses, &[1, -2, 3]));
        assert!(!satisfies(&clauses, &[1, 2, -3]));
        assert!(satisfies(&[], &[]));
    }
}
