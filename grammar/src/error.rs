use std::error;
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Attempted to change a value after it was frozen.
    LockedMutation(String),
    /// Equality requested between a frozen-able value and something that is
    /// not one.
    IncompatibleComparison {
        left: &'static str,
        right: &'static str,
    },
    /// The tree contained a tag with no entry in the tag table.
    UnrecognizedTag(String),
    /// A node handler received children it cannot work with.
    MalformedChild { tag: &'static str, reason: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::LockedMutation(ref s) => {
                write!(f, "object is locked, cannot change attributes of: {}", s)
            }
            Error::IncompatibleComparison { left, right } => write!(
                f,
                "'=' not supported between instances of '{}' and '{}'",
                left, right
            ),
            Error::UnrecognizedTag(ref tag) => write!(f, "unrecognized tree tag: '{}'", tag),
            Error::MalformedChild { tag, ref reason } => {
                write!(f, "malformed children for '{}': {}", tag, reason)
            }
        }
    }
}

impl error::Error for Error {}
