//! Satisfiability by recursive case split over the clause matrix.
//!
//! Each call fixes the literal at column `k` both ways. Clauses satisfied by a
//! choice are dropped from that branch's residual, and the node is satisfiable
//! if either branch is. A branch whose residual is empty is satisfiable; a
//! branch that runs out of columns with clauses left is not.

use crate::matrix::{ClauseMatrix, Polarity};
use crate::SatResult;
use log::{debug, trace};

pub struct BddSolver<'a> {
    matrix: &'a ClauseMatrix,
    nodes: u64,
}

impl<'a> BddSolver<'a> {
    pub fn new(matrix: &'a ClauseMatrix) -> Self {
        Self { matrix, nodes: 0 }
    }

    pub fn solve(&mut self) -> SatResult {
        self.nodes = 0;
        let matrix = self.matrix;
        let residual = matrix.rows().collect::<Vec<_>>();
        let satisfiable = self.node(0, &residual);
        debug!(
            "bdd: {} literals, {} clauses, {} nodes, satisfiable = {}",
            self.matrix.width(),
            self.matrix.num_clauses(),
            self.nodes,
            satisfiable
        );
        if satisfiable {
            SatResult::Satisfiable
        } else {
            SatResult::Unsatisfiable
        }
    }

    /// Decision nodes visited by the last call to `solve`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn node(&mut self, k: usize, residual: &[&[Polarity]]) -> bool {
        self.nodes += 1;

        if residual.is_empty() {
            trace!("node at literal {}: all clauses satisfied", k);
            return true;
        }
        if k == self.matrix.width() {
            trace!("node at literal {}: {} clauses left unsatisfied", k, residual.len());
            return false;
        }

        // left drops the clauses satisfied by literal k being true, right those
        // satisfied by it being false
        let left = residual
            .iter()
            .filter(|row| row[k] != Polarity::Positive)
            .copied()
            .collect::<Vec<_>>();
        let right = residual
            .iter()
            .filter(|row| row[k] != Polarity::Negative)
            .copied()
            .collect::<Vec<_>>();

        let left = self.node(k + 1, &left);
        let right = self.node(k + 1, &right);
        left | right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force::solve_brute_force;
    use crate::formula::formula_3sat_strategy;
    use crate::matrix::{encode, encode_formula, extract_literal_universe, TautologyPolicy};
    use proptest::prelude::*;
    use test_env_log::test;

    fn solve(e: &str) -> SatResult {
        let universe = extract_literal_universe(e).unwrap();
        let matrix = encode(&universe, e).unwrap();
        BddSolver::new(&matrix).solve()
    }

    #[test]
    fn solve_unit() {
        assert_eq!(solve("(1)"), SatResult::Satisfiable);
    }

    #[test]
    fn solve_complementary_units() {
        assert_eq!(solve("(1)^(~1)"), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_exclusive_or() {
        assert_eq!(solve("(1V2)^(~1V~2)"), SatResult::Satisfiable);
    }

    #[test]
    fn solve_all_four_two_clauses() {
        assert_eq!(solve("(1V2)^(1V~2)^(~1V2)^(~1V~2)"), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_conflict_sat() {
        assert_eq!(solve("(1V2V3)^(~1V~2V3)^(~2V~3)"), SatResult::Satisfiable);
    }

    #[test]
    fn solve_pigeonhole_3_into_2() {
        // pigeon i in hole j is variable 2 * i + j + 1
        let e = "(1V2)^(3V4)^(5V6)^(~1V~3)^(~1V~5)^(~3V~5)^(~2V~4)^(~2V~6)^(~4V~6)";
        assert_eq!(solve(e), SatResult::Unsatisfiable);
    }

    #[test]
    fn empty_matrix_is_sat() {
        let matrix = ClauseMatrix::new(3, vec![]).unwrap();
        let mut solver = BddSolver::new(&matrix);
        assert_eq!(solver.solve(), SatResult::Satisfiable);
        assert_eq!(solver.nodes(), 1);

        let matrix = ClauseMatrix::new(0, vec![]).unwrap();
        assert_eq!(BddSolver::new(&matrix).solve(), SatResult::Satisfiable);
    }

    #[test]
    fn satisfied_clauses_are_pruned() {
        // the only clause is satisfied as soon as 1 is true
        let matrix = ClauseMatrix::new(2, vec![vec![Polarity::Positive, Polarity::Positive]]).unwrap();
        let mut solver = BddSolver::new(&matrix);
        assert_eq!(solver.solve(), SatResult::Satisfiable);
        // root, the satisfied left leaf, the right node and its two leaves
        assert_eq!(solver.nodes(), 5);
    }

    #[test]
    fn result_as_integer() {
        assert_eq!(u8::from(solve("(1)")), 1);
        assert_eq!(u8::from(solve("(1)^(~1)")), 0);
    }

    proptest! {
        #[test]
        fn proptest_solve(f in formula_3sat_strategy()) {
            let matrix = encode_formula(&f.universe(), &f, TautologyPolicy::Reject).unwrap();
            let bdd = BddSolver::new(&matrix).solve();
            log::trace!("result = {:?}", bdd);
            assert_eq!(bdd, solve_brute_force(&f));
        }
    }
}
