use crate::matrix::{ClauseMatrix, Polarity};
use crate::SatResult;
use log::{debug, trace};

// Exhaustive depth-first search over every sign assignment, in universe order,
// trying false before true for each literal.
pub struct BacktrackSolver<'a> {
    matrix: &'a ClauseMatrix,
    assignment: Vec<Polarity>,
    assignments: u64,
}

impl<'a> BacktrackSolver<'a> {
    pub fn new(matrix: &'a ClauseMatrix) -> Self {
        Self {
            matrix,
            assignment: Vec::with_capacity(matrix.width()),
            assignments: 0,
        }
    }

    pub fn solve(&mut self) -> SatResult {
        self.assignments = 0;
        let satisfiable = self.search();
        debug_assert!(self.assignment.is_empty());
        debug!(
            "backtrack: {} literals, {} clauses, {} assignments checked, satisfiable = {}",
            self.matrix.width(),
            self.matrix.num_clauses(),
            self.assignments,
            satisfiable
        );
        if satisfiable {
            SatResult::Satisfiable
        } else {
            SatResult::Unsatisfiable
        }
    }

    /// Complete assignments checked by the last call to `solve`.
    pub fn assignments(&self) -> u64 {
        self.assignments
    }

    fn search(&mut self) -> bool {
        if self.assignment.len() == self.matrix.width() {
            self.assignments += 1;
            return self.check();
        }

        for value in [Polarity::Negative, Polarity::Positive] {
            self.assignment.push(value);
            let found = self.search();
            // restore before returning either way
            self.assignment.pop();
            if found {
                return true;
            }
        }
        false
    }

    fn check(&self) -> bool {
        let satisfied = self.matrix.rows().all(|clause| {
            clause
                .iter()
                .zip(&self.assignment)
                .any(|(c, a)| *c != Polarity::Absent && c == a)
        });
        if satisfied {
            trace!(
                "satisfying assignment {:?}",
                self.assignment.iter().map(|p| p.value()).collect::<Vec<_>>()
            );
        }
        satisfied
    }
}
