//! Reading a DIMACS CNF formula into a solver.
//!
//! The reader accepts the usual shape:
//!
//! ```text
//! c an optional comment
//! p cnf 3 2
//! 1 -2 0
//! 2 3 0
//! ```
//!
//! - `c` lines are comments, ignored.
//! - The single `p cnf <variables> <clauses>` line precedes the clauses.
//! - Each clause is a line of non-zero integers; a negative integer is the
//!   negation of the variable it names. `0` tokens are skipped wherever they
//!   appear and a clause also closes at the end of its line, so the
//!   conventional trailing `0` is accepted but not demanded --- a malformed
//!   line missing its terminator parses silently.
//! - A line beginning with `%` ends the formula.
//!
//! Variables named by the header (or by any literal beyond it) are added to
//! the solver on sight.
//!
//! Decompression is left to the caller: any [BufRead] serves, so a gzipped
//! file is read by wrapping the file in a decoder first.

use std::io::BufRead;

use crate::{
    solver::Solver,
    structures::literal::Literal,
    types::err::{ErrorKind, ParseError},
};

/// What a read of a DIMACS formula added to the solver.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The variable count declared by the problem line.
    pub expected_variables: usize,

    /// The clause count declared by the problem line.
    pub expected_clauses: usize,

    /// A count of clauses added.
    pub added_clauses: usize,
}

impl Solver {
    /// Reads a DIMACS CNF formula into the solver.
    ///
    /// ```rust
    /// # use heron_sat::config::Config;
    /// # use heron_sat::reports::Report;
    /// # use heron_sat::solver::Solver;
    /// let mut solver = Solver::new(Config::default());
    ///
    /// let dimacs = "
    /// c every variable is forced
    /// p cnf 2 2
    /// 1 0
    /// -1 2 0
    /// ";
    ///
    /// assert!(solver.read_dimacs(dimacs.as_bytes()).is_ok());
    /// assert_eq!(solver.solve(), Report::Satisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::default();
        let mut line = 0;

        // First phase: read to the problem line.
        'preamble: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(ParseError::MissingHeader)),
                Ok(_) => line += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line))),
            }

            let mut tokens = buffer.split_whitespace();
            match tokens.next() {
                None => continue 'preamble,
                Some(token) if token.starts_with('c') => continue 'preamble,

                Some("p") => {
                    match tokens.next() {
                        Some("cnf") => {}
                        Some(_) => {
                            return Err(ErrorKind::from(ParseError::UnsupportedProblemType))
                        }
                        None => return Err(ErrorKind::from(ParseError::ProblemSpecification)),
                    }

                    let variables: usize = match tokens.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(ParseError::ProblemSpecification)),
                    };
                    let clauses: usize = match tokens.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(ParseError::ProblemSpecification)),
                    };

                    for _ in 0..variables {
                        self.add_variable();
                    }

                    info.expected_variables = variables;
                    info.expected_clauses = clauses;
                    break 'preamble;
                }

                Some(_) => return Err(ErrorKind::from(ParseError::MissingHeader)),
            }
        }

        // Second phase: read clauses to the end of the input.
        let mut literals = Vec::default();
        'formula: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula,
                Ok(_) => line += 1,
                Err(_) => return Err(ErrorKind::from(ParseError::Line(line))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula,
                Some('c') => continue 'formula,
                _ => {}
            }

            literals.clear();
            for token in buffer.split_whitespace() {
                let int: i64 = match token.parse() {
                    Ok(int) => int,
                    Err(_) => return Err(ErrorKind::from(ParseError::Token(line))),
                };
                if int == 0 {
                    continue;
                }

                // Grow to any variable the formula names beyond the header.
                let variable = int.unsigned_abs() as usize - 1;
                while self.variable_count() <= variable {
                    self.add_variable();
                }

                literals.push(Literal::from_dimacs(int));
            }

            if !literals.is_empty() {
                self.add_clause(std::mem::take(&mut literals))?;
                info.added_clauses += 1;
            }
        }

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn missing_header() {
        let mut solver = Solver::new(Config::default());
        let result = solver.read_dimacs("1 2 0\n".as_bytes());
        assert_eq!(result, Err(ErrorKind::from(ParseError::MissingHeader)));
    }

    #[test]
    fn unsupported_problem_type() {
        let mut solver = Solver::new(Config::default());
        let result = solver.read_dimacs("p wcnf 2 1\n1 2 0\n".as_bytes());
        assert_eq!(
            result,
            Err(ErrorKind::from(ParseError::UnsupportedProblemType))
        );
    }

    #[test]
    fn garbled_problem_line() {
        let mut solver = Solver::new(Config::default());
        let result = solver.read_dimacs("p cnf two 1\n".as_bytes());
        assert_eq!(
            result,
            Err(ErrorKind::from(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn non_integer_token() {
        let mut solver = Solver::new(Config::default());
        let result = solver.read_dimacs("p cnf 2 1\n1 x 0\n".as_bytes());
        assert_eq!(result, Err(ErrorKind::from(ParseError::Token(2))));
    }

    #[test]
    fn comments_and_counts() {
        let mut solver = Solver::new(Config::default());
        let dimacs = "c a comment\np cnf 3 2\n1 -2 0\nc between clauses\n2 3 0\n";

        let info = solver.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.expected_variables, 3);
        assert_eq!(info.expected_clauses, 2);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(solver.variable_count(), 3);
    }

    #[test]
    fn percent_ends_the_formula() {
        let mut solver = Solver::new(Config::default());
        let dimacs = "p cnf 2 1\n1 2 0\n%\n0\n";

        let info = solver.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 1);
    }

    #[test]
    fn missing_terminator_parses() {
        let mut solver = Solver::new(Config::default());
        let dimacs = "p cnf 2 2\n1 2\n-1 2 0\n";

        let info = solver.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 2);
    }

    #[test]
    fn variables_grow_on_sight() {
        let mut solver = Solver::new(Config::default());
        let dimacs = "p cnf 1 1\n1 -3 0\n";

        assert!(solver.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(solver.variable_count(), 3);
    }

    #[test]
    fn empty_formula_is_fine() {
        let mut solver = Solver::new(Config::default());
        let info = solver.read_dimacs("p cnf 2 0\n".as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 0);
        assert_eq!(solver.variable_count(), 2);
    }
}
