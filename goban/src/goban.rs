use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::Point;
use crate::error::GobanError;
use crate::status::Status;

/// A rectangular Go board of raw symbols stored as a flat array.
///
/// Symbols are kept as given: `.` is empty, `o` is a white stone and `#` is a
/// black stone. Anything else is only reported when it is read, as
/// [`GobanError::Malformed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    cells: Vec<char>,
    cols: usize,
    rows: usize,
}

impl Goban {
    /// Create a goban from its rows, top row first. The first row fixes the
    /// width; every other row must match it.
    pub fn new<I, S>(rows: I) -> Result<Self, GobanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let start = cells.len();
            cells.extend(line.as_ref().chars());
            let found = cells.len() - start;
            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(GobanError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            count += 1;
        }

        Ok(Goban {
            cells,
            cols: cols.unwrap_or(0),
            rows: count,
        })
    }

    // -- Accessors --

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when the board has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    /// What occupies `(x, y)`. Never fails for points off the board; fails
    /// only when an on-board cell holds an unknown symbol.
    pub fn status(&self, x: i32, y: i32) -> Result<Status, GobanError> {
        if !self.on_board((x, y)) {
            return Ok(Status::OutOfBounds);
        }
        let symbol = self.cells[self.idx((x, y))];
        Status::from_symbol(symbol).ok_or(GobanError::Malformed { x, y, symbol })
    }

    /// All on-board points, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows as i32).flat_map(move |y| (0..self.cols as i32).map(move |x| (x, y)))
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        [
            x.checked_sub(1).map(|x| (x, y)),
            x.checked_add(1).map(|x| (x, y)),
            y.checked_sub(1).map(|y| (x, y)),
            y.checked_add(1).map(|y| (x, y)),
        ]
        .into_iter()
        .flatten()
        .filter(|&p| self.on_board(p))
        .collect()
    }

    /// Neighbors the liberty search may step to: empty points and points of
    /// the same status as `point`. Opposite-color stones are never included.
    pub fn neighbors_for_group(&self, point: Point) -> Result<ArrayVec<Point, 4>, GobanError> {
        let own = self.status(point.0, point.1)?;
        let mut result = ArrayVec::new();
        for n in self.neighbors(point) {
            let status = self.status(n.0, n.1)?;
            if status == Status::Empty || status == own {
                result.push(n);
            }
        }
        Ok(result)
    }

    /// Whether the group holding `(x, y)` has no liberties left.
    ///
    /// Empty and off-board points are never captured. The whole connected
    /// group is searched, so a liberty several stones away counts.
    pub fn is_captured(&self, x: i32, y: i32) -> Result<bool, GobanError> {
        if !self.status(x, y)?.is_stone() {
            return Ok(false);
        }

        let mut visited = vec![false; self.cells.len()];
        let captured = self.exhausted_without_liberty((x, y), &mut visited)?;
        tracing::debug!(x, y, captured, "liberty check");
        Ok(captured)
    }

    /// Depth-first walk from `start` through same-colored stones. Returns
    /// `false` on the first empty neighbor, `true` once every reachable stone
    /// has been expanded. Points already marked in `visited` are treated as
    /// explored and never entered, so callers must pass a cleared bitmap to
    /// get the full answer.
    fn exhausted_without_liberty(
        &self,
        start: Point,
        visited: &mut [bool],
    ) -> Result<bool, GobanError> {
        let mut stack = vec![start];
        visited[self.idx(start)] = true;

        while let Some(p) = stack.pop() {
            for n in self.neighbors_for_group(p)? {
                if self.status(n.0, n.1)? == Status::Empty {
                    tracing::trace!(x = n.0, y = n.1, "liberty found");
                    return Ok(false);
                }
                let ni = self.idx(n);
                if !visited[ni] {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }

        Ok(true)
    }

    /// Flood-fill connected group of same-colored stones. Empty for points
    /// without a stone.
    pub fn group(&self, x: i32, y: i32) -> Result<Vec<Point>, GobanError> {
        let stone = self.status(x, y)?;
        if !stone.is_stone() {
            return Ok(Vec::new());
        }

        let mut visited = vec![false; self.cells.len()];
        let mut result = Vec::new();
        let mut stack = vec![(x, y)];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if !visited[self.idx(n)] && self.status(n.0, n.1)? == stone {
                    stack.push(n);
                }
            }
        }

        Ok(result)
    }

    /// Distinct empty points touching the group at `(x, y)`.
    pub fn liberties(&self, x: i32, y: i32) -> Result<Vec<Point>, GobanError> {
        let group = self.group(x, y)?;
        let mut seen = vec![false; self.cells.len()];
        let mut libs = Vec::new();
        for p in group {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.status(n.0, n.1)? == Status::Empty {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        Ok(libs)
    }

    // -- Internal helpers --

    /// Flat index of an on-board point.
    #[inline]
    fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.cols + x as usize
    }
}

impl FromStr for Goban {
    type Err = GobanError;

    /// One row per line. Surrounding whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goban::new(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
