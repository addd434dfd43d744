//! The clause matrix shared by both solvers.
//!
//! Row `i` is the `i`-th clause of the formula and column `j` is the `j`-th
//! variable of the literal universe in ascending order. Each entry records
//! which polarity of that variable satisfies the clause, if any.

use crate::error::FormulaError;
use crate::formula::{expr, Formula, Variable};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Polarity {
    Negative,
    Absent,
    Positive,
}

impl Polarity {
    pub fn value(self) -> i8 {
        match self {
            Polarity::Negative => -1,
            Polarity::Absent => 0,
            Polarity::Positive => 1,
        }
    }
}

/// What to do with a clause that mentions a variable both negated and
/// unnegated. Such a clause is satisfied by every assignment, but a single
/// matrix cell cannot record both polarities.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TautologyPolicy {
    /// Fail with [`FormulaError::InconsistentClause`]
    Reject,
    /// Leave the clause out of the matrix
    Drop,
}

impl Default for TautologyPolicy {
    fn default() -> Self {
        TautologyPolicy::Reject
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClauseMatrix {
    width: usize,
    rows: Vec<Vec<Polarity>>,
}

impl ClauseMatrix {
    /// Builds a matrix from raw rows. Every row must be `width` long.
    pub fn new(width: usize, rows: Vec<Vec<Polarity>>) -> Result<Self, FormulaError> {
        if let Some(idx) = rows.iter().position(|row| row.len() != width) {
            return Err(FormulaError::malformed(format!(
                "row {} has {} columns, expected {}",
                idx,
                rows[idx].len(),
                width
            )));
        }
        Ok(Self { width, rows })
    }

    /// The number of literals, i.e. the size of the universe.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn num_clauses(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Polarity]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// The matrix as -1/0/1 integers, row by row.
    pub fn to_ints(&self) -> Vec<Vec<i8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|p| p.value()).collect())
            .collect()
    }
}

impl Display for ClauseMatrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.rows {
            let mut first = true;
            for p in row {
                if first {
                    first = false;
                } else {
                    f.write_str(" ")?;
                }
                write!(f, "{:>2}", p.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses `expression` and returns its variables, ascending and without duplicates.
pub fn extract_literal_universe(expression: &str) -> Result<Vec<Variable>, FormulaError> {
    Ok(expr::parse(expression)?.universe())
}

/// Encodes `expression` against `universe`, rejecting tautological clauses.
pub fn encode(universe: &[Variable], expression: &str) -> Result<ClauseMatrix, FormulaError> {
    let formula = expr::parse(expression)?;
    encode_formula(universe, &formula, TautologyPolicy::Reject)
}

pub fn encode_formula(
    universe: &[Variable],
    formula: &Formula,
    tautologies: TautologyPolicy,
) -> Result<ClauseMatrix, FormulaError> {
    if universe.windows(2).any(|w| w[0] >= w[1]) {
        return Err(FormulaError::malformed("literal universe is not strictly ascending"));
    }

    let mut rows = Vec::with_capacity(formula.num_clauses());
    for (idx, clause) in formula.clauses().enumerate() {
        let mut row = vec![Polarity::Absent; universe.len()];
        // every literal is still checked against the universe once this is set
        let mut tautological = false;
        for literal in clause.literals() {
            let column = universe.binary_search(literal.variable()).map_err(|_| {
                FormulaError::malformed(format!(
                    "clause {} mentions {}, which is outside the literal universe",
                    idx,
                    literal.variable()
                ))
            })?;
            let polarity = if literal.is_positive() {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            match row[column] {
                Polarity::Absent => row[column] = polarity,
                p if p == polarity => {}
                _ => match tautologies {
                    TautologyPolicy::Reject => {
                        return Err(FormulaError::InconsistentClause {
                            clause: idx,
                            variable: *literal.variable(),
                        })
                    }
                    TautologyPolicy::Drop => tautological = true,
                },
            }
        }
        if tautological {
            trace!("dropping tautological clause {}", idx);
        } else {
            rows.push(row);
        }
    }

    Ok(ClauseMatrix {
        width: universe.len(),
        rows,
    })
}
