//! Reads formulas, solves them with the configured procedure and reports how
//! long each solve took.

use crate::backtrack::BacktrackSolver;
use crate::bdd::BddSolver;
use crate::config::{Config, InputFormat, SolverKind};
use crate::error::FormulaError;
use crate::formula::dimacs::{self, DimacsParseError};
use crate::formula::{expr, Formula};
use crate::matrix::{encode_formula, ClauseMatrix};
use crate::SatResult;
use log::{debug, error, trace};
use std::fmt::{self, Display, Formatter};
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Dimacs(DimacsParseError),
    Formula(FormulaError),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DimacsParseError> for Error {
    fn from(e: DimacsParseError) -> Self {
        Self::Dimacs(e)
    }
}

impl From<FormulaError> for Error {
    fn from(e: FormulaError) -> Self {
        Self::Formula(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Dimacs(e) => write!(f, "{}", e),
            Error::Formula(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Debug)]
pub struct Report {
    pub name: String,
    pub variables: usize,
    pub clauses: usize,
    pub solver: SolverKind,
    pub result: SatResult,
    pub elapsed: Duration,
    /// Decision nodes for the BDD solver, complete assignments for backtracking
    pub work: u64,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let result = match self.result {
            SatResult::Satisfiable => "SAT",
            SatResult::Unsatisfiable => "UNSAT",
        };
        write!(
            f,
            "{} {} {} {} {} {:.6}",
            self.name,
            self.variables,
            self.clauses,
            self.solver,
            result,
            self.elapsed.as_secs_f64()
        )
    }
}

pub fn solve_file(config: &Config, path: &Path) -> Result<Vec<Report>, Error> {
    let text = std::fs::read_to_string(path)?;
    solve_source(config, &path.display().to_string(), &text)
}

pub fn solve_reader<R: Read>(config: &Config, name: &str, mut reader: R) -> Result<Vec<Report>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    solve_source(config, name, &text)
}

pub fn solve_source(config: &Config, name: &str, text: &str) -> Result<Vec<Report>, Error> {
    let formula = match config.format {
        InputFormat::Expr => expr::parse(text)?,
        InputFormat::Dimacs => dimacs::parse(text.as_bytes())?,
    };
    let matrix = encode(config, &formula)?;
    debug!(
        "{}: {} variables, {} clauses",
        name,
        matrix.width(),
        matrix.num_clauses()
    );
    trace!("{} clause matrix:\n{}", name, matrix);

    let reports = match config.solver {
        SolverKind::Bdd => vec![run(name, &matrix, SolverKind::Bdd)],
        SolverKind::Backtrack => vec![run(name, &matrix, SolverKind::Backtrack)],
        SolverKind::Both => {
            let bdd = run(name, &matrix, SolverKind::Bdd);
            let backtrack = run(name, &matrix, SolverKind::Backtrack);
            if bdd.result != backtrack.result {
                error!(
                    "{}: solvers disagree (bdd {:?}, backtrack {:?})",
                    name, bdd.result, backtrack.result
                );
            }
            vec![bdd, backtrack]
        }
    };
    Ok(reports)
}

fn encode(config: &Config, formula: &Formula) -> Result<ClauseMatrix, FormulaError> {
    encode_formula(&formula.universe(), formula, config.tautologies)
}

fn run(name: &str, matrix: &ClauseMatrix, solver: SolverKind) -> Report {
    let start = Instant::now();
    let (result, work) = match solver {
        SolverKind::Backtrack => {
            let mut s = BacktrackSolver::new(matrix);
            (s.solve(), s.assignments())
        }
        _ => {
            let mut s = BddSolver::new(matrix);
            (s.solve(), s.nodes())
        }
    };
    Report {
        name: name.to_string(),
        variables: matrix.width(),
        clauses: matrix.num_clauses(),
        solver,
        result,
        elapsed: start.elapsed(),
        work,
    }
}
