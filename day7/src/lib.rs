use std::{error, fmt::Display, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoColonInEquation(String),
    InvalidResultText(String),
    InvalidOperandText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoColonInEquation(s) => write!(
                f,
                "Can't find separator(:) between result and operands in equation text({}).",
                s
            ),
            Error::InvalidResultText(s) => write!(f, "Invalid result text({}).", s),
            Error::InvalidOperandText(s) => write!(f, "Invalid operand text({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Equation {
    result: u64,
    operands: Vec<u64>,
}

impl TryFrom<&str> for Equation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (result, operands) = value
            .split_once(':')
            .ok_or_else(|| Error::NoColonInEquation(value.to_string()))?;
        let result = result
            .parse::<u64>()
            .map_err(|_| Error::InvalidResultText(result.to_string()))?;
        let operands = operands
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| Error::InvalidOperandText(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { result, operands })
    }
}

impl Equation {
    pub fn result(&self) -> u64 {
        self.result
    }

    /// Can the operands reach the result with `+` and `*`, evaluated left to
    /// right?
    pub fn is_solvable(&self) -> bool {
        Self::can_reach(self.result, &self.operands, false)
    }

    /// Like `is_solvable`, with digit concatenation as a third operator.
    pub fn is_solvable_with_concat(&self) -> bool {
        Self::can_reach(self.result, &self.operands, true)
    }

    // Works backwards from the target, peeling off the last operand; this
    // prunes most operator combinations early.
    fn can_reach(target: u64, operands: &[u64], allow_concat: bool) -> bool {
        let Some((last, rest)) = operands.split_last() else {
            return target == 0;
        };

        if rest.is_empty() {
            return target == *last;
        }

        if target >= *last && Self::can_reach(target - last, rest, allow_concat) {
            return true;
        }

        if *last != 0 && target % last == 0 && Self::can_reach(target / last, rest, allow_concat) {
            return true;
        }

        if allow_concat {
            // A 20-digit operand can't be the suffix of any u64 target.
            if let Some(shift) = 10u64.checked_pow(last.checked_ilog10().unwrap_or(0) + 1) {
                if target % shift == *last && Self::can_reach(target / shift, rest, allow_concat)
                {
                    return true;
                }
            }
        }

        false
    }
}

pub fn parse_equations(text: &str) -> Result<Vec<Equation>, Error> {
    text.lines().map(Equation::try_from).collect()
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(parse_equations(&text)?)
}
