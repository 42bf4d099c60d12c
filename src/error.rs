use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },
    #[error("player index {index} out of range")]
    PlayerIndexOutOfRange { index: i32 },
    #[error("cell element rejected its display color")]
    DisplayColorRejected,
}
