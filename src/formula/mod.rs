pub mod dimacs;
pub mod expr;

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Debug)]
pub struct Variable(pub usize);

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(v) => write!(f, "{}", v),
            Literal::Negative(v) => write!(f, "~{}", v),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Every variable mentioned by the formula, ascending and without duplicates.
    /// This is the column order of the clause matrix.
    pub fn universe(&self) -> Vec<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals.iter().map(|literal| *literal.variable()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// Writes the expression syntax accepted by `expr::parse`
impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str("^")?;
            }
            f.write_str("(")?;
            let mut first_literal = true;
            for literal in &clause.literals {
                if first_literal {
                    first_literal = false;
                } else {
                    f.write_str("V")?;
                }
                write!(f, "{}", literal)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

// Random formulas with at most three literals per clause. A variable appears at
// most once per clause, so no generated clause is tautological.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    const MAX_VARS: usize = 10;
    const MAX_CLAUSES: usize = 12;

    (1..=MAX_VARS).prop_flat_map(|num_vars| {
        let literal = (1..=num_vars, any::<bool>());
        let clause = prop::collection::vec(literal, 1..=3).prop_map(|literals| {
            let mut seen = vec![];
            Clause::new(literals.into_iter().filter_map(|(x, positive)| {
                if seen.contains(&x) {
                    return None;
                }
                seen.push(x);
                Some(if positive { p(x) } else { n(x) })
            }))
        });
        prop::collection::vec(clause, 1..=MAX_CLAUSES).prop_map(|clauses| Formula::new(clauses))
    })
}
