use crate::formula::Variable;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    MalformedExpression(String),
    // A clause mentions a variable both negated and unnegated
    InconsistentClause { clause: usize, variable: Variable },
}

impl FormulaError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        FormulaError::MalformedExpression(msg.into())
    }
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FormulaError::MalformedExpression(msg) => write!(f, "malformed expression: {}", msg),
            FormulaError::InconsistentClause { clause, variable } => write!(
                f,
                "clause {} contains both {} and ~{}",
                clause, variable, variable
            ),
        }
    }
}

impl std::error::Error for FormulaError {}
