use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidRuleText(String),
    InvalidPageText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => write!(f, "Invalid ordering rule text({}).", s),
            Error::InvalidPageText(s) => write!(f, "Invalid page number text({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct OrderingRules {
    successors: HashMap<u32, HashSet<u32>>,
}

impl OrderingRules {
    pub fn add_rule(&mut self, rule_text: &str) -> Result<(), Error> {
        let (before, after) = rule_text
            .split_once('|')
            .ok_or_else(|| Error::InvalidRuleText(rule_text.to_string()))?;
        let before = before
            .parse::<u32>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        let after = after
            .parse::<u32>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        self.successors.entry(before).or_default().insert(after);

        Ok(())
    }

    pub fn is_ordered(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(ind, page)| {
            update[..ind]
                .iter()
                .all(|earlier| !self.must_precede(*page, *earlier))
        })
    }

    pub fn reorder(&self, update: &[u32]) -> Vec<u32> {
        let mut ordered = update.to_vec();
        ordered.sort_by(|l_page, r_page| {
            if self.must_precede(*l_page, *r_page) {
                Ordering::Less
            } else if self.must_precede(*r_page, *l_page) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        ordered
    }

    fn must_precede(&self, before: u32, after: u32) -> bool {
        self.successors
            .get(&before)
            .is_some_and(|succ| succ.contains(&after))
    }
}

pub fn middle_page(update: &[u32]) -> Option<u32> {
    update.get(update.len() / 2).copied()
}

pub fn parse_input(text: &str) -> Result<(OrderingRules, Vec<Vec<u32>>), Error> {
    let mut rules = OrderingRules::default();
    let mut updates = Vec::new();
    let mut in_updates = false;
    for line in text.lines() {
        if line.is_empty() {
            in_updates = true;
            continue;
        }

        if !in_updates {
            rules.add_rule(line)?;
        } else {
            let pages = line
                .split(',')
                .map(|s| {
                    s.parse::<u32>()
                        .map_err(|_| Error::InvalidPageText(s.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            updates.push(pages);
        }
    }

    Ok((rules, updates))
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<(OrderingRules, Vec<Vec<u32>>)> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(parse_input(&text)?)
}
