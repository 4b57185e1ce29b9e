use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use utils::{Glyph, MapBounds, MapScanner, Position, ScanError};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct AntennaField {
    antennas: HashMap<char, Vec<Position>>,
    bounds: MapBounds,
}

impl AntennaField {
    pub fn parse(text: &str) -> Result<Self, ScanError> {
        let mut scanner = MapScanner::new(text, |c| match c {
            '.' => Glyph::Floor,
            c if c.is_ascii_alphanumeric() => Glyph::Item(c),
            _ => Glyph::Invalid,
        });

        let mut antennas: HashMap<char, Vec<Position>> = HashMap::new();
        for item in scanner.by_ref() {
            let (pos, frequency) = item?;
            antennas.entry(frequency).or_default().push(pos);
        }

        Ok(Self {
            antennas,
            bounds: scanner.bounds(),
        })
    }

    /// Distinct in-bounds antinodes, one mirror point per ordered pair of
    /// same-frequency antennas.
    pub fn antinode_count(&self) -> usize {
        let mut antinodes = HashSet::new();
        for positions in self.antennas.values() {
            for (source, destination) in Self::ordered_pairs(positions) {
                let v = source.delta(destination);
                if let Some(antinode) = source.offset(&v) {
                    if self.bounds.contains(&antinode) {
                        antinodes.insert(antinode);
                    }
                }
            }
        }

        antinodes.len()
    }

    /// Distinct in-bounds antinodes with resonant harmonics: every grid point
    /// in line with a same-frequency pair at a whole multiple of its offset,
    /// the antennas themselves included.
    pub fn resonant_antinode_count(&self) -> usize {
        let mut antinodes = HashSet::new();
        for positions in self.antennas.values() {
            for (source, destination) in Self::ordered_pairs(positions) {
                let v = destination.delta(source);
                let mut harmonic = Some(*destination);
                while let Some(antinode) = harmonic.filter(|pos| self.bounds.contains(pos)) {
                    antinodes.insert(antinode);
                    harmonic = antinode.offset(&v);
                }
            }
        }

        antinodes.len()
    }

    fn ordered_pairs(positions: &[Position]) -> impl Iterator<Item = (&Position, &Position)> {
        positions.iter().flat_map(move |source| {
            positions
                .iter()
                .filter(move |destination| *destination != source)
                .map(move |destination| (source, destination))
        })
    }
}

pub fn read_field<P: AsRef<Path>>(path: P) -> Result<AntennaField> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(AntennaField::parse(&text)?)
}
