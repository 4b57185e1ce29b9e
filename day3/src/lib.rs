use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

static INST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap());

/// Sum of all correct `mul(X,Y)` instructions, ignoring the conditional ones.
pub fn mul_sum(text: &str) -> usize {
    INST_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let l_factor = caps.get(1)?.as_str().parse::<usize>().unwrap();
            let r_factor = caps[2].parse::<usize>().unwrap();
            Some(l_factor * r_factor)
        })
        .sum()
}

/// Sum of the `mul(X,Y)` instructions that are enabled at their point in the
/// stream; `do()` enables, `don't()` disables, the initial state is enabled.
pub fn mul_sum_toggled(text: &str) -> usize {
    let mut enabled = true;
    let mut sum = 0;
    for caps in INST_PATTERN.captures_iter(text) {
        match (caps.get(1), &caps[0]) {
            (Some(l_factor), _) => {
                if enabled {
                    sum += l_factor.as_str().parse::<usize>().unwrap()
                        * caps[2].parse::<usize>().unwrap();
                }
            }
            (None, "do()") => enabled = true,
            (None, _) => enabled = false,
        }
    }

    sum
}

pub fn read_program<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}
