use serde::Serialize;
use std::fmt;

/// What occupies a board coordinate.
///
/// `OutOfBounds` is never stored; it is what the board answers for any
/// coordinate outside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    White,
    Black,
    Empty,
    OutOfBounds,
}

impl Status {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Status::Empty),
            'o' => Some(Status::White),
            '#' => Some(Status::Black),
            _ => None,
        }
    }

    /// White or Black.
    pub fn is_stone(self) -> bool {
        matches!(self, Status::White | Status::Black)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::White => write!(f, "White"),
            Status::Black => write!(f, "Black"),
            Status::Empty => write!(f, "Empty"),
            Status::OutOfBounds => write!(f, "Out of bounds"),
        }
    }
}
