use std::{error, fmt::Display, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidLevel(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(s) => write!(f, "Invalid level({}) in given report.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Report {
    levels: Vec<u32>,
}

impl TryFrom<&str> for Report {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let levels = value
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| Error::InvalidLevel(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }
}

impl Report {
    /// A report is safe when its levels are strictly monotonic with adjacent
    /// gaps of 1 to 3.
    pub fn is_safe(&self) -> bool {
        Self::levels_are_safe(self.levels.iter().copied())
    }

    /// Safe as-is, or safe after removing one single level.
    pub fn is_safe_with_dampener(&self) -> bool {
        if self.is_safe() {
            return true;
        }

        (0..self.levels.len()).any(|skip_ind| {
            Self::levels_are_safe(
                self.levels
                    .iter()
                    .enumerate()
                    .filter(|(ind, _)| *ind != skip_ind)
                    .map(|(_, level)| *level),
            )
        })
    }

    fn levels_are_safe(levels: impl Iterator<Item = u32> + Clone) -> bool {
        let mut pairs = levels.clone().zip(levels.skip(1)).peekable();
        let Some(is_inc) = pairs.peek().map(|(l, r)| l < r) else {
            return true;
        };

        pairs.all(|(l, r)| (l < r) == is_inc && (1..=3).contains(&l.abs_diff(r)))
    }
}

pub fn parse_reports(text: &str) -> Result<Vec<Report>, Error> {
    text.lines().map(Report::try_from).collect()
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(parse_reports(&text)?)
}
