use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use utils::{Glyph, MapBounds, MapScanner, Position, ScanError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Scan(ScanError),
    MultipleWards(Position, Position),
    NoWard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Scan(e) => write!(f, "{}", e),
            Error::MultipleWards(pos0, pos1) => write!(
                f,
                "Found multiple wards({}, {}) in given map, expect one only.",
                pos0, pos1
            ),
            Error::NoWard => write!(f, "There's no ward in given map, but expect one."),
        }
    }
}

impl error::Error for Error {}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Scan(e)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    fn turn_right(self) -> Self {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
        }
    }

    fn flag(self) -> u8 {
        match self {
            Facing::Up => 1,
            Facing::Down => 2,
            Facing::Left => 4,
            Facing::Right => 8,
        }
    }
}

/// Set of facings under which one cell was visited, as a 4-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacingSet(u8);

impl FacingSet {
    pub fn union(self, facing: Facing) -> Self {
        Self(self.0 | facing.flag())
    }

    pub fn contains(self, facing: Facing) -> bool {
        self.0 & facing.flag() != 0
    }
}

#[derive(Debug, Clone, Copy)]
struct Ward {
    pos: Position,
    facing: Facing,
}

impl Ward {
    /// Cell one step ahead, or `None` when that step would leave the map.
    fn ahead(&self, bounds: MapBounds) -> Option<Position> {
        let Position { r, c } = self.pos;
        match self.facing {
            Facing::Up if r > 0 => Some(Position::new(r - 1, c)),
            Facing::Down if r + 1 < bounds.rows => Some(Position::new(r + 1, c)),
            Facing::Left if c > 0 => Some(Position::new(r, c - 1)),
            Facing::Right if c + 1 < bounds.cols => Some(Position::new(r, c + 1)),
            _ => None,
        }
    }

    fn turn_right(&mut self) {
        self.facing = self.facing.turn_right();
    }
}

/// Every `(position, facing)` pair seen during one patrol run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PatrolRecord {
    visited: HashMap<Position, FacingSet>,
}

impl PatrolRecord {
    pub fn saw(&self, pos: &Position, facing: Facing) -> bool {
        self.visited
            .get(pos)
            .is_some_and(|facings| facings.contains(facing))
    }

    pub fn facings_at(&self, pos: &Position) -> Option<FacingSet> {
        self.visited.get(pos).copied()
    }

    /// Number of distinct cells visited, regardless of facing.
    pub fn position_count(&self) -> usize {
        self.visited.len()
    }

    fn record(&mut self, pos: Position, facing: Facing) {
        let facings = self.visited.entry(pos).or_default();
        *facings = facings.union(facing);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolEnd {
    Exited,
    Looped,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Patrol {
    record: PatrolRecord,
    end: PatrolEnd,
}

impl Patrol {
    pub fn record(&self) -> &PatrolRecord {
        &self.record
    }

    pub fn end(&self) -> PatrolEnd {
        self.end
    }
}

enum MapSymbol {
    Obstacle,
    Ward(Facing),
}

#[derive(Debug)]
pub struct WardMap {
    obstacles: HashSet<Position>,
    bounds: MapBounds,
    // None only for the degenerate zero-sized map.
    ward: Option<Ward>,
}

impl WardMap {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut scanner = MapScanner::new(text, |c| match c {
            '#' => Glyph::Item(MapSymbol::Obstacle),
            '^' => Glyph::Item(MapSymbol::Ward(Facing::Up)),
            'v' => Glyph::Item(MapSymbol::Ward(Facing::Down)),
            '<' => Glyph::Item(MapSymbol::Ward(Facing::Left)),
            '>' => Glyph::Item(MapSymbol::Ward(Facing::Right)),
            '.' => Glyph::Floor,
            _ => Glyph::Invalid,
        });

        let mut obstacles = HashSet::new();
        let mut ward: Option<Ward> = None;
        for item in scanner.by_ref() {
            let (pos, symbol) = item?;
            match symbol {
                MapSymbol::Obstacle => {
                    obstacles.insert(pos);
                }
                MapSymbol::Ward(facing) => {
                    if let Some(first) = &ward {
                        return Err(Error::MultipleWards(first.pos, pos));
                    }

                    ward = Some(Ward { pos, facing });
                }
            }
        }

        let bounds = scanner.bounds();
        if ward.is_none() && !bounds.is_empty() {
            return Err(Error::NoWard);
        }

        Ok(Self {
            obstacles,
            bounds,
            ward,
        })
    }

    /// Walk the ward from its start until it leaves the map or revisits a
    /// `(position, facing)` pair. Transient in-place rotations are recorded
    /// too, so a fully boxed ward terminates as a loop.
    pub fn patrol(&self) -> Patrol {
        let mut record = PatrolRecord::default();
        let Some(mut ward) = self.ward else {
            return Patrol {
                record,
                end: PatrolEnd::Exited,
            };
        };

        loop {
            if record.saw(&ward.pos, ward.facing) {
                return Patrol {
                    record,
                    end: PatrolEnd::Looped,
                };
            }

            record.record(ward.pos, ward.facing);
            match ward.ahead(self.bounds) {
                // Only the cell ahead is ever tested; the occupied cell never is.
                Some(next) if self.obstacles.contains(&next) => ward.turn_right(),
                Some(next) => ward.pos = next,
                None => {
                    return Patrol {
                        record,
                        end: PatrolEnd::Exited,
                    }
                }
            }
        }
    }

    /// Number of distinct cells the ward visits before leaving the map.
    pub fn visited_cell_count(&self) -> usize {
        self.patrol().record.position_count()
    }

    /// Number of distinct cells where one extra obstacle would trap the ward
    /// in a loop. The ward's own start cell is never a candidate.
    ///
    /// Each candidate is tested at its first encounter on the baseline path,
    /// resuming from the step just before the ward would enter it instead of
    /// from the global start. The baseline record built so far doubles as
    /// context for the trial: a trial state matching it would retrace the
    /// walked path back to the resume point and deflect again, so it is a
    /// loop. States the baseline only reaches later must not be consulted;
    /// their continuation is no longer valid once the obstruction deflects
    /// the path.
    pub fn looping_obstruction_count(&self) -> usize {
        let Some(start) = self.ward else {
            return 0;
        };

        let mut tried = HashSet::from([start.pos]);
        let mut causes_loop = HashSet::new();
        let mut walked = PatrolRecord::default();
        let mut ward = start;
        loop {
            if walked.saw(&ward.pos, ward.facing) {
                // The baseline patrol itself loops; the rest of the path is
                // already covered.
                break;
            }

            walked.record(ward.pos, ward.facing);
            match ward.ahead(self.bounds) {
                Some(next) if self.obstacles.contains(&next) => ward.turn_right(),
                Some(next) => {
                    if tried.insert(next) && self.obstruction_traps(ward, &next, &walked) {
                        causes_loop.insert(next);
                    }

                    ward.pos = next;
                }
                None => break,
            }
        }

        causes_loop.len()
    }

    fn obstruction_traps(
        &self,
        resume: Ward,
        obstruction: &Position,
        context: &PatrolRecord,
    ) -> bool {
        let mut ward = resume;
        let mut record = PatrolRecord::default();
        // The hypothetical obstacle set is the shared one plus `obstruction`;
        // the shared set is never touched.
        record.record(ward.pos, ward.facing);
        loop {
            match ward.ahead(self.bounds) {
                Some(next) if next == *obstruction || self.obstacles.contains(&next) => {
                    ward.turn_right()
                }
                Some(next) => ward.pos = next,
                None => return false,
            }

            if record.saw(&ward.pos, ward.facing) || context.saw(&ward.pos, ward.facing) {
                return true;
            }

            record.record(ward.pos, ward.facing);
        }
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<WardMap> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(WardMap::parse(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A start cell sharing its position with an obstacle can't come from
    // parsed text, but the simulation has to stay well-defined for it: the
    // occupied cell is never obstacle-tested, so the ward patrols normally.
    #[test]
    fn ward_starting_on_obstacle_patrols_normally() {
        let start = Position::new(2, 1);
        let map = WardMap {
            obstacles: HashSet::from([start]),
            bounds: MapBounds::new(5, 5),
            ward: Some(Ward {
                pos: start,
                facing: Facing::Up,
            }),
        };

        let patrol = map.patrol();
        assert_eq!(patrol.end(), PatrolEnd::Exited);
        assert_eq!(patrol.record().position_count(), 3);
    }
}
