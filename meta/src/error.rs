use std::error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grammar text could not be parsed starting at `remaining`.
    Syntax { remaining: String, expected: String },
    Incomplete,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Syntax {
                ref remaining,
                ref expected,
            } => write!(
                f,
                "failed to parse grammar at '{}', expected {}",
                remaining, expected
            ),
            Error::Incomplete => write!(f, "grammar text ended unexpectedly"),
        }
    }
}

impl error::Error for Error {}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Error {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Syntax {
                remaining: e.input.to_owned(),
                expected: e.code.description().to_owned(),
            },
            nom::Err::Incomplete(_) => Error::Incomplete,
        }
    }
}
