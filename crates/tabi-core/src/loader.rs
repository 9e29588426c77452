use std::fmt;
use std::path::{Path, PathBuf};

use tabi_types::Itinerary;

use crate::{Config, Error, Result};

/// The Kansai winter trip compiled into the binary
pub const BUNDLED_SOURCE: &str = include_str!("../data/kansai-winter-2026.toml");

const BUNDLED_NAME: &str = "<bundled>";

/// On-disk encodings we can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(SourceFormat::Toml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// Where the itinerary for this run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItinerarySource {
    Bundled,
    File(PathBuf),
}

impl ItinerarySource {
    /// Pick the source by priority:
    /// 1. Explicit path (command line)
    /// 2. `itinerary` key in config.toml
    /// 3. Bundled data set
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> Self {
        if let Some(path) = explicit {
            return ItinerarySource::File(path.to_path_buf());
        }
        if let Some(path) = &config.itinerary {
            return ItinerarySource::File(path.clone());
        }
        ItinerarySource::Bundled
    }

    pub fn load(&self) -> Result<Itinerary> {
        match self {
            ItinerarySource::Bundled => bundled(),
            ItinerarySource::File(path) => load_itinerary(path),
        }
    }
}

impl fmt::Display for ItinerarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItinerarySource::Bundled => f.write_str("bundled (kansai-winter-2026)"),
            ItinerarySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse the bundled data set.
pub fn bundled() -> Result<Itinerary> {
    parse_itinerary(BUNDLED_SOURCE, SourceFormat::Toml, Path::new(BUNDLED_NAME))
}

/// Read an itinerary file, choosing the decoder from its extension.
pub fn load_itinerary(path: &Path) -> Result<Itinerary> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let itinerary = parse_itinerary(&content, format, path)?;

    tracing::info!(
        path = %path.display(),
        days = itinerary.len(),
        events = itinerary.event_count(),
        "loaded itinerary"
    );
    Ok(itinerary)
}

/// Decode `content`; `origin` is only used in error messages.
pub fn parse_itinerary(content: &str, format: SourceFormat, origin: &Path) -> Result<Itinerary> {
    let parsed = match format {
        SourceFormat::Toml => toml::from_str::<Itinerary>(content).map_err(|e| e.to_string()),
        SourceFormat::Json => serde_json::from_str::<Itinerary>(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| Error::Parse {
        path: origin.to_path_buf(),
        message: message.trim_end().to_string(),
    })
}
