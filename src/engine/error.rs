#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OutOfBounds { row: usize, col: usize, size: usize },
    AlreadyRevealed { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds { row, col, size } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", row, col, size, size)
            },
            Error::AlreadyRevealed { row, col } => {
                write!(f, "cell ({}, {}) has already been revealed", row, col)
            },
        }
    }
}

impl std::error::Error for Error {}
