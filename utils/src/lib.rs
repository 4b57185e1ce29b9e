use std::{error, fmt::Display, iter::Peekable, str::Chars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    InconsistentRow(usize, usize),
    InvalidChar(char),
    BareCarriageReturn,
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            ScanError::InvalidChar(c) => {
                write!(f, "Invalid character({}) in text of map.", c)
            }
            ScanError::BareCarriageReturn => {
                write!(f, "Carriage return without following line feed in text of map.")
            }
        }
    }
}

impl error::Error for ScanError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Difference from `other` to `self`, as a signed offset.
    pub fn delta(&self, other: &Position) -> Vector {
        Vector::new(
            self.r as isize - other.r as isize,
            self.c as isize - other.c as isize,
        )
    }

    /// Position moved by `v`, or `None` when any component would become negative.
    pub fn offset(&self, v: &Vector) -> Option<Position> {
        let r = self.r as isize + v.r;
        let c = self.c as isize + v.c;
        if r >= 0 && c >= 0 {
            Some(Position::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub r: isize,
    pub c: isize,
}

impl Vector {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }

    pub fn scaled(&self, n: isize) -> Vector {
        Vector::new(self.r * n, self.c * n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBounds {
    pub rows: usize,
    pub cols: usize,
}

impl MapBounds {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Classification of one map character.
pub enum Glyph<T> {
    Item(T),
    Floor,
    Invalid,
}

/// Lazily walks the text of a rectangular ASCII map, yielding every
/// recognized symbol with its position. Rows must all have the same length;
/// `\r\n` line endings are accepted on every platform, a bare `\r` is not.
/// Once the scanner is exhausted without error, `bounds` gives the final
/// dimensions of the map.
pub struct MapScanner<'a, T, F> {
    chars: Peekable<Chars<'a>>,
    classify: F,
    row: usize,
    col: usize,
    col_n: Option<usize>,
    done: bool,
    _glyph: std::marker::PhantomData<T>,
}

impl<'a, T, F> MapScanner<'a, T, F>
where
    F: Fn(char) -> Glyph<T>,
{
    pub fn new(text: &'a str, classify: F) -> Self {
        Self {
            chars: text.chars().peekable(),
            classify,
            row: 0,
            col: 0,
            col_n: None,
            done: false,
            _glyph: std::marker::PhantomData,
        }
    }

    /// Dimensions of the scanned map. Final only after the scanner has been
    /// exhausted without error.
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.row, self.col_n.unwrap_or(0))
    }

    fn end_row(&mut self) -> Result<(), ScanError> {
        let expect_col_n = *self.col_n.get_or_insert(self.col);
        if expect_col_n != self.col {
            return Err(ScanError::InconsistentRow(expect_col_n, self.col));
        }

        self.row += 1;
        self.col = 0;

        Ok(())
    }

    fn fail(&mut self, e: ScanError) -> Option<Result<(Position, T), ScanError>> {
        self.done = true;
        Some(Err(e))
    }
}

impl<T, F> Iterator for MapScanner<'_, T, F>
where
    F: Fn(char) -> Glyph<T>,
{
    type Item = Result<(Position, T), ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.chars.next() {
                None => {
                    self.done = true;
                    // A missing newline on the last row is fine, but the row
                    // still has to match the expected length.
                    if self.col > 0 {
                        if let Err(e) = self.end_row() {
                            return Some(Err(e));
                        }
                    }

                    return None;
                }
                Some('\n') => {
                    if let Err(e) = self.end_row() {
                        return self.fail(e);
                    }
                }
                Some('\r') => {
                    if self.chars.peek() != Some(&'\n') {
                        return self.fail(ScanError::BareCarriageReturn);
                    }
                }
                Some(c) => {
                    let pos = Position::new(self.row, self.col);
                    self.col += 1;
                    match (self.classify)(c) {
                        Glyph::Floor => {}
                        Glyph::Invalid => return self.fail(ScanError::InvalidChar(c)),
                        Glyph::Item(item) => return Some(Ok((pos, item))),
                    }
                }
            }
        }
    }
}
