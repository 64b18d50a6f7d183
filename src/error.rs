use std::fmt;
use std::io;

/// Errors raised while configuring or running a collapse.
#[derive(Debug)]
pub enum Error {
    /// No tile satisfies every neighbour constraint of the cell at (x, y).
    ConstraintViolation { x: usize, y: usize },

    /// Size, rule set or seed rejected before any cell was collapsed.
    InvalidConfiguration { reason: String },

    /// `Grid::set` on a cell that already holds a value.
    AlreadySet { x: usize, y: usize },

    /// `Grid::set` outside the grid.
    OutOfBounds { x: isize, y: isize },

    Io(io::Error),
}

impl Error {
    pub fn invalid_configuration(reason: impl ToString) -> Self {
        Self::InvalidConfiguration {
            reason: reason.to_string(),
        }
    }

    /// Contradictions are the only failure worth retrying with a new seed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation { x, y } => {
                write!(f, "No tile satisfies the neighbours of cell ({x}, {y})")
            }
            Self::InvalidConfiguration { reason } => write!(f, "Invalid configuration: {reason}"),
            Self::AlreadySet { x, y } => write!(f, "Cell ({x}, {y}) is already collapsed"),
            Self::OutOfBounds { x, y } => write!(f, "Cell ({x}, {y}) out of range"),
            Self::Io(source) => write!(f, "I/O error: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
