pub mod error;
pub mod goban;
pub mod status;

/// A board coordinate as `(x, y)`: column then row, both 0-indexed.
/// Signed so that points off the board can be asked about.
pub type Point = (i32, i32);

pub use error::GobanError;
pub use goban::Goban;
pub use status::Status;
