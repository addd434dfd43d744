use crate::formula::Formula;
use crate::SatResult;

// Bitmask enumeration straight off the formula, independent of the clause matrix.
// Bit i of an assignment is the value of the i-th variable of the universe.
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let universe = f.universe();
    assert!(universe.len() <= 15); // just for safety

    let bit = |literal: &crate::formula::Literal| {
        universe
            .binary_search(literal.variable())
            .expect("universe covers every variable")
    };

    'search: for assignment in 0..2u32.pow(universe.len() as u32) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                let value = assignment & (1 << bit(literal)) != 0;
                if value == literal.is_positive() {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            continue 'search;
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        return SatResult::Satisfiable;
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_sparse_names() {
        let c1 = Clause::new(vec![p(10), p(300)]);
        let c2 = Clause::new(vec![n(10), p(300)]);
        let c3 = Clause::new(vec![n(300), p(7)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn solve_tautology() {
        let f = Formula::new(vec![Clause::new(vec![n(1), p(1)]), Clause::new(vec![n(2)])]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }
}
