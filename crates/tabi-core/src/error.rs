use std::fmt;
use std::path::PathBuf;

/// Result type for tabi-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Itinerary file could not be parsed
    Parse { path: PathBuf, message: String },

    /// Itinerary file has an extension we cannot read
    UnsupportedFormat(PathBuf),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            Error::UnsupportedFormat(path) => write!(
                f,
                "Unsupported itinerary format: {} (expected .toml or .json)",
                path.display()
            ),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { .. } | Error::UnsupportedFormat(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
