use std::error as err;
use std::fmt;

/// Errors surfaced to callers of the adjudication core. Order-level illegality and
/// paradox resolution are never reported here; those are internal resolver outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl err::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The board's current turn phase does not match the adjudicator being invoked.
    PhaseMismatch { expected: &'static str, found: String },
    UnknownProvince(String),
    UnknownPlayer(String),
    /// `BoardMutator::create_unit` was asked to place a unit on an occupied province.
    OccupiedDestination(String),
    /// A coastal destination has more than one named coast and none was specified.
    AmbiguousCoast(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::PhaseMismatch { expected, found } => {
                write!(f, "expected a {} phase, board is in {}", expected, found)
            }
            ErrorKind::UnknownProvince(name) => write!(f, "unknown province: {}", name),
            ErrorKind::UnknownPlayer(name) => write!(f, "unknown player: {}", name),
            ErrorKind::OccupiedDestination(name) => {
                write!(f, "province already occupied: {}", name)
            }
            ErrorKind::AmbiguousCoast(name) => {
                write!(f, "province {} has multiple coasts and none was specified", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
