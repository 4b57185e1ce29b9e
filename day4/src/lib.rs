use std::{error, fmt::Display, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_n, real_n) => write!(
                f,
                "Expect {} characters per row, given {}.",
                expect_n, real_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const ALL_DIRS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

pub struct WordField {
    letters: Vec<char>,
    row_n: usize,
    col_n: usize,
}

impl WordField {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut letters = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in text.lines() {
            let this_col_n = line.chars().count();
            let expect_col_n = *col_n.get_or_insert(this_col_n);
            if expect_col_n != this_col_n {
                return Err(Error::InconsistentRow(expect_col_n, this_col_n));
            }

            letters.extend(line.chars());
            row_n += 1;
        }

        Ok(Self {
            letters,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }

    /// Count every straight occurrence of `XMAS` in all eight directions.
    pub fn xmas_count(&self) -> usize {
        let mut count = 0;
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                if self.letter(r as isize, c as isize) != Some('X') {
                    continue;
                }

                count += ALL_DIRS
                    .iter()
                    .filter(|(dr, dc)| {
                        "MAS".chars().enumerate().all(|(ind, expect)| {
                            let step = ind as isize + 1;
                            self.letter(r as isize + dr * step, c as isize + dc * step)
                                == Some(expect)
                        })
                    })
                    .count();
            }
        }

        count
    }

    /// Count the X-shaped pairs of `MAS`/`SAM` crossing on their `A`.
    pub fn mas_cross_count(&self) -> usize {
        let mut count = 0;
        for r in 1..self.row_n.saturating_sub(1) {
            for c in 1..self.col_n.saturating_sub(1) {
                if self.letter(r as isize, c as isize) != Some('A') {
                    continue;
                }

                let r = r as isize;
                let c = c as isize;
                let diagonals = [
                    (self.letter(r - 1, c - 1), self.letter(r + 1, c + 1)),
                    (self.letter(r - 1, c + 1), self.letter(r + 1, c - 1)),
                ];
                if diagonals.iter().all(|ends| {
                    matches!(ends, (Some('M'), Some('S')) | (Some('S'), Some('M')))
                }) {
                    count += 1;
                }
            }
        }

        count
    }

    fn letter(&self, r: isize, c: isize) -> Option<char> {
        if r < 0 || c < 0 || r as usize >= self.row_n || c as usize >= self.col_n {
            None
        } else {
            self.letters.get(r as usize * self.col_n + c as usize).copied()
        }
    }
}

pub fn read_field<P: AsRef<Path>>(path: P) -> Result<WordField> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(WordField::parse(&text)?)
}
