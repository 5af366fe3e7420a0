use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GobanError {
    /// An on-board cell holds a symbol other than `.`, `o` or `#`.
    #[error("malformed board: unknown symbol {symbol:?} at ({x}, {y})")]
    Malformed { x: i32, y: i32, symbol: char },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
