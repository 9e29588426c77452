use serde::Serialize;

/// Density of a day or trip rendering.
///
/// `Minimal` prints one line per day; `Verbose` adds map URLs and image links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minimal,
    #[default]
    Compact,
    Standard,
    Verbose,
}

/// Whether itinerary output goes to the console as text or as a JSON envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::types::OutputFormat> for OutputFormat {
    fn from(format: crate::types::OutputFormat) -> Self {
        match format {
            crate::types::OutputFormat::Plain => Self::Text,
            crate::types::OutputFormat::Json => Self::Json,
        }
    }
}

/// Density plus whether category and pass colours are allowed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub mode: ViewMode,
    pub enable_color: bool,
}

impl DisplayOptions {
    pub fn new(mode: ViewMode, enable_color: bool) -> Self {
        Self { mode, enable_color }
    }
}

/// Headline of a command result, e.g. "3 days in Osaka Weekend" or a missing-map warning
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            label: label.into(),
        }
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}

/// Follow-up shown under a result, such as opening a day or checking a file
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
