use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::str::FromStr;

use info_calc::{Ensemble, EnsembleError};
use info_calc::serialization::EnsembleDescription;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input: {0}")]
    Input(String),
    #[error("{0}")]
    Ensemble(#[from] EnsembleError),
}

pub fn read_ensemble_file(path: &str) -> Result<Ensemble, CliError> {
    let file = fs::File::open(path)?;
    let desc: EnsembleDescription = serde_json::from_reader(BufReader::new(file))?;
    Ok(desc.to_ensemble()?)
}

/// Interactive collection of an ensemble, one whitespace-separated token per answer.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, CliError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::Input(String::from("unexpected end of input")));
            }
            self.tokens.extend(line.split_whitespace().map(String::from));
        }
        // loop above guarantees a token
        self.tokens.pop_front().ok_or_else(|| CliError::Input(String::from("no token")))
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T, CliError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let token = self.next_token()?;
        token.parse().map_err(|_| CliError::Input(format!("cannot parse {:?}", token)))
    }

    pub fn read_ensemble(&mut self) -> Result<Ensemble, CliError> {
        let x_size: usize = self.ask("Enter the number of elements of ensemble X: ")?;
        let y_size: usize = self.ask("Enter the number of elements of ensemble Y: ")?;
        if x_size.checked_mul(y_size).is_none() {
            return Err(CliError::Input(format!("dimensions {}x{} are too large", x_size, y_size)));
        }
        let mut values = Vec::new();
        for i in 1..=x_size {
            for j in 1..=y_size {
                let p: f64 = self.ask(&format!("Enter the probability of x{}y{} as 0.0: ", i, j))?;
                values.push(p);
            }
        }
        Ok(Ensemble::from_flat(x_size, y_size, values)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompted_ensemble() {
        let input = Cursor::new("2\n2\n0.25 0.25\n0.25\n0.25\n");
        let mut output = Vec::new();
        let ens = Prompter::new(input, &mut output).read_ensemble().unwrap();
        assert_eq!(vec!(vec!(0.25, 0.25), vec!(0.25, 0.25)), ens.probabilities());

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.starts_with("Enter the number of elements of ensemble X: "));
        assert!(prompts.contains("Enter the probability of x1y2 as 0.0: "));
        assert!(prompts.ends_with("Enter the probability of x2y2 as 0.0: "));
    }

    #[test]
    fn test_prompted_all_on_one_line() {
        let input = Cursor::new("1 3 0.2 0.3 0.5");
        let ens = Prompter::new(input, Vec::new()).read_ensemble().unwrap();
        assert_eq!(1, ens.x_size());
        assert_eq!(3, ens.y_size());
    }

    #[test]
    fn test_truncated_input() {
        let input = Cursor::new("2\n2\n0.25\n");
        let res = Prompter::new(input, Vec::new()).read_ensemble();
        assert!(matches!(res, Err(CliError::Input(_))));
    }

    #[test]
    fn test_bad_token() {
        let input = Cursor::new("two\n");
        let res = Prompter::new(input, Vec::new()).read_ensemble();
        assert!(matches!(res, Err(CliError::Input(_))));
    }

    #[test]
    fn test_zero_dimension() {
        let input = Cursor::new("0\n2\n");
        let res = Prompter::new(input, Vec::new()).read_ensemble();
        assert!(matches!(res, Err(CliError::Ensemble(EnsembleError::Shape(_)))));
    }

    #[test]
    fn test_overflowing_dimensions() {
        let input = Cursor::new("4611686018427387904\n4\n");
        let res = Prompter::new(input, Vec::new()).read_ensemble();
        assert!(matches!(res, Err(CliError::Input(_))));
    }

    #[test]
    fn test_huge_dimensions_need_every_answer() {
        let input = Cursor::new("1000000000\n1\n0.5\n");
        let res = Prompter::new(input, Vec::new()).read_ensemble();
        assert!(matches!(res, Err(CliError::Input(_))));
    }

    #[test]
    fn test_missing_file() {
        let res = read_ensemble_file("/nonexistent/ensemble.json");
        assert!(matches!(res, Err(CliError::Io(_))));
    }
}
