use std::{collections::HashMap, error, fmt::Display, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidId(String),
    WrongIdCount(String, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidId(s) => write!(f, "Invalid location ID({}) in given list.", s),
            Error::WrongIdCount(s, n) => write!(
                f,
                "Expect two location IDs per line, given {} in line({}).",
                n, s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn parse_lists(text: &str) -> Result<(Vec<usize>, Vec<usize>), Error> {
    let mut list0 = Vec::new();
    let mut list1 = Vec::new();
    for line in text.lines() {
        let ids = line
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| Error::InvalidId(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let (id0, id1) = match ids[..] {
            [id0, id1] => (id0, id1),
            _ => return Err(Error::WrongIdCount(line.to_string(), ids.len())),
        };

        list0.push(id0);
        list1.push(id1);
    }

    Ok((list0, list1))
}

/// Sum of pairwise distances after sorting both lists independently.
pub fn total_distance(list0: &[usize], list1: &[usize]) -> usize {
    let mut sorted0 = list0.to_vec();
    let mut sorted1 = list1.to_vec();
    sorted0.sort_unstable();
    sorted1.sort_unstable();

    sorted0
        .iter()
        .zip(sorted1.iter())
        .map(|(id0, id1)| id0.abs_diff(*id1))
        .sum()
}

/// Sum over the left list of each ID times its occurrence count in the right
/// list.
pub fn similarity_score(list0: &[usize], list1: &[usize]) -> usize {
    let mut occurrence_counts = HashMap::new();
    for id in list1 {
        *occurrence_counts.entry(*id).or_insert(0usize) += 1;
    }

    list0
        .iter()
        .map(|id| id * occurrence_counts.get(id).copied().unwrap_or(0))
        .sum()
}

pub fn read_lists<P: AsRef<Path>>(path: P) -> Result<(Vec<usize>, Vec<usize>)> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(parse_lists(&text)?)
}
