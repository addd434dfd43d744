use crate::formula::{Clause, Formula, Literal, Variable};
use std::fmt::{self, Display, Formatter};
use std::io::{BufRead, BufReader, Read};

struct Header {
    num_variables: usize,
    num_clauses: usize,
}

pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header: Option<Header> = None;
    // Literals of a clause may span several lines until the terminating 0
    let mut clause = vec![];

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | None => continue,
            Some(&"p") => {
                if header.is_some() {
                    return Err(DimacsParseError::Format("duplicate 'p' line".into()));
                }
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let num_variables = parse_count(line.next(), "invalid num_variables")?;
                let num_clauses = parse_count(line.next(), "invalid num_clauses")?;
                header = Some(Header {
                    num_variables,
                    num_clauses,
                });
            }
            Some(_) => {
                let h = header
                    .as_ref()
                    .ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

                for x in line {
                    match parse_literal(x, h.num_variables)? {
                        Some(l) => clause.push(l),
                        None => {
                            // Empty clauses are skipped
                            if !clause.is_empty() {
                                clauses.push(Clause::new(clause.drain(..)));
                            }
                        }
                    }
                }

                if clauses.len() >= h.num_clauses {
                    break;
                }
            }
        }
    }

    if header.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }
    if !clause.is_empty() {
        return Err(DimacsParseError::Format("last clause is not terminated by 0".into()));
    }

    log::debug!("read {} clauses from DIMACS input", clauses.len());
    Ok(Formula::new(clauses))
}

fn parse_count(s: Option<&str>, msg: &str) -> Result<usize, DimacsParseError> {
    s.and_then(|c| c.parse::<usize>().ok())
        .ok_or_else(|| DimacsParseError::Format(msg.into()))
}

fn parse_literal(s: &str, num_variables: usize) -> Result<Option<Literal>, DimacsParseError> {
    let l = s
        .parse::<isize>()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    let x = l.unsigned_abs();
    if x > num_variables {
        return Err(DimacsParseError::Format(format!(
            "literal {} exceeds the declared {} variables",
            l, num_variables
        )));
    }
    if l > 0 {
        Ok(Some(Literal::Positive(Variable(x))))
    } else if l < 0 {
        Ok(Some(Literal::Negative(Variable(x))))
    } else {
        Ok(None)
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for DimacsParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DimacsParseError::Io(e) => write!(f, "i/o error: {}", e),
            DimacsParseError::Format(msg) => write!(f, "bad DIMACS input: {}", msg),
        }
    }
}

impl std::error::Error for DimacsParseError {}
