//! Reading a DIMACS model file.
//!
//! A model file holds one model per line as a whitespace-separated list of
//! signed variable indices in declaration order: positive for true, negative
//! for false, with an optional trailing `0`.
//!
//! Model files pair with instance files in the test suite: the solver's
//! enumerated models are compared against the models listed here.

use std::io::BufRead;

use crate::types::err::{ErrorKind, ParseError};

/// Reads the models of a DIMACS model file.
pub fn read_models(mut reader: impl BufRead) -> Result<Vec<Vec<bool>>, ErrorKind> {
    let mut models = Vec::default();
    let mut buffer = String::default();
    let mut line = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line += 1,
            Err(_) => return Err(ErrorKind::from(ParseError::Line(line))),
        }

        if buffer.trim().is_empty() || buffer.starts_with('c') {
            continue;
        }

        let mut model = Vec::default();
        for token in buffer.split_whitespace() {
            let int: i64 = match token.parse() {
                Ok(int) => int,
                Err(_) => return Err(ErrorKind::from(ParseError::Token(line))),
            };
            if int == 0 {
                continue;
            }
            model.push(int > 0);
        }
        models.push(model);
    }

    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_with_and_without_terminator() {
        let file = "1 -2 3 0\n-1 2 -3\n";
        let models = read_models(file.as_bytes()).unwrap();

        assert_eq!(
            models,
            vec![vec![true, false, true], vec![false, true, false]]
        );
    }

    #[test]
    fn empty_file_no_models() {
        let models = read_models("\n\n".as_bytes()).unwrap();
        assert!(models.is_empty());
    }
}
