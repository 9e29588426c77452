use std::fmt;

/// Result type for tabi-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An itinerary must contain at least one day
    EmptyItinerary,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyItinerary => write!(f, "itinerary has no days"),
        }
    }
}

impl std::error::Error for Error {}
