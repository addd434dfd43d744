pub mod backtrack;
pub mod bdd;
pub mod config;
pub mod driver;
mod error;
pub mod formula;
pub mod matrix;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SatResult {
    Satisfiable,
    Unsatisfiable,
}

impl From<SatResult> for bool {
    fn from(r: SatResult) -> bool {
        r == SatResult::Satisfiable
    }
}

impl From<SatResult> for u8 {
    fn from(r: SatResult) -> u8 {
        bool::from(r) as u8
    }
}

pub use backtrack::BacktrackSolver;
pub use bdd::BddSolver;
pub use error::FormulaError;
pub use formula::{Clause, Formula, Literal, Variable};
pub use matrix::{encode, encode_formula, extract_literal_universe, ClauseMatrix, Polarity, TautologyPolicy};

pub fn solve_bdd(expression: &str) -> Result<bool, FormulaError> {
    let universe = extract_literal_universe(expression)?;
    let matrix = encode(&universe, expression)?;
    Ok(BddSolver::new(&matrix).solve().into())
}

pub fn solve_backtracking(expression: &str) -> Result<bool, FormulaError> {
    let universe = extract_literal_universe(expression)?;
    let matrix = encode(&universe, expression)?;
    Ok(BacktrackSolver::new(&matrix).solve().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::formula_3sat_strategy;
    use proptest::prelude::*;
    use test_env_log::test;

    #[test]
    fn scenario_unit_clause() {
        let e = "(1)";
        assert_eq!(extract_literal_universe(e).unwrap(), vec![Variable(1)]);
        assert_eq!(encode(&[Variable(1)], e).unwrap().to_ints(), vec![vec![1]]);
        assert_eq!(solve_bdd(e), Ok(true));
        assert_eq!(solve_backtracking(e), Ok(true));
    }

    #[test]
    fn scenario_contradiction() {
        let e = "(1)^(~1)";
        assert_eq!(encode(&[Variable(1)], e).unwrap().to_ints(), vec![vec![1], vec![-1]]);
        assert_eq!(solve_bdd(e), Ok(false));
        assert_eq!(solve_backtracking(e), Ok(false));
    }

    #[test]
    fn scenario_exclusive_or() {
        let e = "(1V2)^(~1V~2)";
        let universe = extract_literal_universe(e).unwrap();
        assert_eq!(universe, vec![Variable(1), Variable(2)]);
        assert_eq!(encode(&universe, e).unwrap().to_ints(), vec![vec![1, 1], vec![-1, -1]]);
        assert_eq!(solve_bdd(e), Ok(true));
        assert_eq!(solve_backtracking(e), Ok(true));
    }

    #[test]
    fn malformed_is_an_error_not_unsat() {
        for e in &["", "(1V)", "(0)", "(a)"] {
            assert!(matches!(solve_bdd(e), Err(FormulaError::MalformedExpression(_))));
            assert!(matches!(solve_backtracking(e), Err(FormulaError::MalformedExpression(_))));
        }
    }

    #[test]
    fn tautology_is_rejected() {
        assert!(matches!(
            solve_bdd("(1V~1)"),
            Err(FormulaError::InconsistentClause { clause: 0, .. })
        ));
    }

    #[test]
    fn solvers_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<BddSolver>();
        assert_send::<BacktrackSolver>();
    }

    proptest! {
        #[test]
        fn proptest_solvers_agree(f in formula_3sat_strategy()) {
            let e = f.to_string();
            let bdd = solve_bdd(&e).unwrap();
            let backtrack = solve_backtracking(&e).unwrap();
            assert_eq!(bdd, backtrack);
            assert_eq!(bdd, bool::from(brute_force::solve_brute_force(&f)));
        }

        #[test]
        fn proptest_universe_is_strictly_ascending(f in formula_3sat_strategy()) {
            let universe = extract_literal_universe(&f.to_string()).unwrap();
            assert!(universe.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(universe, f.universe());
        }
    }
}
