//! Parser for the textual CNF syntax, e.g. `(1V2)^(~1V~2)`.
//!
//! Clauses are separated by `^`, literals within a clause by `V`, and `~`
//! negates a literal. A clause may be wrapped in one pair of parentheses.
//! Identifiers are decimal integers starting at 1. Whitespace between tokens
//! is ignored.

use crate::error::FormulaError;
use crate::formula::{Clause, Formula, Literal, Variable};

pub const CONJUNCTION: char = '^';
pub const DISJUNCTION: char = 'V';
pub const NEGATION: char = '~';

pub fn parse(expression: &str) -> Result<Formula, FormulaError> {
    if expression.trim().is_empty() {
        return Err(FormulaError::malformed("empty expression"));
    }

    let clauses = expression
        .split(CONJUNCTION)
        .enumerate()
        .map(|(idx, clause)| parse_clause(idx, clause))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Formula::new(clauses))
}

fn parse_clause(idx: usize, s: &str) -> Result<Clause, FormulaError> {
    let s = s.trim();
    let body = match (s.strip_prefix('('), s.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => s,
        _ => return Err(FormulaError::malformed(format!("unbalanced parentheses in clause {}", idx))),
    };
    if body.contains(|c: char| c == '(' || c == ')') {
        return Err(FormulaError::malformed(format!("nested parentheses in clause {}", idx)));
    }
    if body.trim().is_empty() {
        return Err(FormulaError::malformed(format!("clause {} is empty", idx)));
    }

    let literals = body
        .split(DISJUNCTION)
        .map(|token| parse_literal(idx, token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Clause::new(literals))
}

fn parse_literal(idx: usize, token: &str) -> Result<Literal, FormulaError> {
    let token = token.trim();
    let (positive, digits) = match token.strip_prefix(NEGATION) {
        Some(rest) => (false, rest.trim_start()),
        None => (true, token),
    };

    let invalid = || FormulaError::malformed(format!("invalid literal '{}' in clause {}", token, idx));
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let x = digits.parse::<usize>().map_err(|_| invalid())?;
    if x == 0 {
        return Err(invalid());
    }

    let var = Variable(x);
    Ok(if positive {
        Literal::Positive(var)
    } else {
        Literal::Negative(var)
    })
}
