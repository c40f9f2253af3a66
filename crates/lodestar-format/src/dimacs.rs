//! DIMACS CNF format parser.
//!
//! Line-oriented ASCII. `c` lines are comments, the `p cnf V C` problem line
//! declares the variable and clause counts, and the remaining tokens are
//! signed integer literals where each run terminated by `0` forms one
//! clause. Clauses may span lines.
//!
//! Policy notes:
//! - Blank lines are rejected.
//! - Parsing stops once the declared number of clauses has been read, so
//!   trailing content (such as the `%` / `0` tail of SATLIB files) is
//!   ignored.
//! - A missing terminating `0` at end of input is tolerated.
//! - The declared counts are reported as-is, not validated against the
//!   clauses actually read.

use lodestar_base::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};

/// A problem read from a DIMACS CNF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimacsCnf {
    /// Declared variable count.
    pub num_vars: usize,
    /// Declared clause count.
    pub num_clauses: usize,
    /// Clauses as signed integer literals (negative = negated).
    pub clauses: Vec<Vec<i64>>,
}

impl DimacsCnf {
    /// Parses DIMACS CNF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut header: Option<(usize, usize)> = None;
        let mut clauses: Vec<Vec<i64>> = Vec::new();
        let mut current: Vec<i64> = Vec::new();

        'lines: for line in reader.lines() {
            let line = line?;

            if line.trim().is_empty() {
                return Err(Error::Parse("blank line in DIMACS input".to_string()));
            }
            if line.starts_with('c') {
                continue;
            }

            let Some((_, declared_clauses)) = header else {
                header = Some(parse_problem_line(&line)?);
                continue;
            };

            for token in line.split_whitespace() {
                let value: i64 = token
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid literal token {token:?}")))?;

                if value == 0 {
                    if !current.is_empty() {
                        clauses.push(std::mem::take(&mut current));
                        if clauses.len() >= declared_clauses {
                            break 'lines;
                        }
                    }
                } else {
                    current.push(value);
                }
            }
        }

        // A final clause without its terminating zero.
        if !current.is_empty() {
            clauses.push(current);
        }

        match header {
            Some((num_vars, num_clauses)) => Ok(Self {
                num_vars,
                num_clauses,
                clauses,
            }),
            None => Err(Error::Parse("missing 'p cnf' problem line".to_string())),
        }
    }

    /// Parses DIMACS CNF from a string.
    pub fn from_str(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Renders the problem back into DIMACS text.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }
}

/// Parses `p cnf V C`. The first non-comment line must be the problem line.
fn parse_problem_line(line: &str) -> Result<(usize, usize)> {
    if !line.starts_with('p') {
        return Err(Error::Parse(format!(
            "expected comment or problem line, got {line:?}"
        )));
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(Error::Parse(format!(
            "problem line must have exactly four fields, got {line:?}"
        )));
    }
    if fields[1] != "cnf" {
        return Err(Error::Parse(format!(
            "problem type must be 'cnf', got {:?}",
            fields[1]
        )));
    }

    let num_vars = fields[2]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid variable count {:?}: {e}", fields[2])))?;
    let num_clauses = fields[3]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid clause count {:?}: {e}", fields[3])))?;

    Ok((num_vars, num_clauses))
}
