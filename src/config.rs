use crate::matrix::TautologyPolicy;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolverKind {
    Bdd,
    Backtrack,
    Both,
}

impl SolverKind {
    pub const NAMES: &'static [&'static str] = &["bdd", "backtrack", "both"];
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            SolverKind::Bdd => "bdd",
            SolverKind::Backtrack => "backtrack",
            SolverKind::Both => "both",
        })
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bdd" => Ok(SolverKind::Bdd),
            "backtrack" => Ok(SolverKind::Backtrack),
            "both" => Ok(SolverKind::Both),
            _ => Err(format!("unknown solver '{}'", s)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputFormat {
    /// `(1V~2)^(2V3)` style expressions
    Expr,
    Dimacs,
}

impl InputFormat {
    pub const NAMES: &'static [&'static str] = &["expr", "dimacs"];
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expr" => Ok(InputFormat::Expr),
            "dimacs" => Ok(InputFormat::Dimacs),
            _ => Err(format!("unknown input format '{}'", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub solver: SolverKind,
    pub format: InputFormat,
    pub tautologies: TautologyPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solver: SolverKind::Bdd,
            format: InputFormat::Expr,
            tautologies: TautologyPolicy::Reject,
        }
    }
}
