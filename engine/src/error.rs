use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid extent of zero columns or rows.
    InvalidDimensions { cols: usize, rows: usize },
    /// A direct access outside `[0, cols) x [0, rows)`.
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { cols, rows } => {
                write!(f, "grid dimensions must be positive, got {cols}x{rows}")
            }
            Error::OutOfBounds {
                col,
                row,
                cols,
                rows,
            } => write!(
                f,
                "cell ({col}, {row}) is outside the {cols}x{rows} grid"
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_offending_values() {
        let err = Error::InvalidDimensions { cols: 0, rows: 4 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x4");

        let err = Error::OutOfBounds {
            col: 9,
            row: 1,
            cols: 8,
            rows: 8,
        };
        assert_eq!(err.to_string(), "cell (9, 1) is outside the 8x8 grid");
    }
}
