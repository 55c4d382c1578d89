use splr::{Certificate, Config, SolveIF, Solver, SolverError};

use crate::{
    errors::SolverFailure,
    logging::targets,
    types::{Clause, Solution},
};

use super::SatSolver;

/// [splr](https://docs.rs/splr) with its default configuration.
///
/// A fresh solver is built for every call and dropped before returning.
#[derive(Default)]
pub struct SplrSolver;

impl SatSolver for SplrSolver {
    fn solve(&mut self, clauses: &[Clause]) -> Result<Solution, SolverFailure> {
        let answer = match Solver::try_from((Config::default(), clauses)) {
            Ok(mut solver) => solver.solve(),
            // trivial instances are decided while the clauses are loaded
            Err(result) => result,
        };

        match answer {
            Ok(Certificate::SAT(model)) => Ok(Solution::Sat { model }),
            Ok(Certificate::UNSAT) => Ok(Solution::Unsat),

            // conflicting units leave an empty clause at the root level
            Err(SolverError::EmptyClause | SolverError::Inconsistent) => {
                log::debug!(target: targets::BRIDGE, "Root level conflict while loading clauses");
                Ok(Solution::Unsat)
            }

            Err(e) => Err(SolverFailure::Backend(format!("{e:?}"))),
        }
    }
}
