//! Assertions over the `--format json` envelope.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert that `content.days` (home list) has `expected` entries.
pub fn assert_day_count(json: &Value, expected: usize) -> Result<()> {
    let days = json["content"]["days"]
        .as_array()
        .context("Expected 'content.days' array in JSON")?;

    if days.len() != expected {
        bail!("Expected {} days, got {}", expected, days.len());
    }
    Ok(())
}

/// Assert the badge level (`success`, `info`, `warning`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}

/// Assert that some suggestion carries exactly `command`.
pub fn assert_suggests(json: &Value, command: &str) -> Result<()> {
    let suggestions = json["suggestions"]
        .as_array()
        .context("Expected 'suggestions' array in JSON")?;

    if !suggestions.iter().any(|s| s["command"] == command) {
        bail!("No suggestion with command '{}'", command);
    }
    Ok(())
}
