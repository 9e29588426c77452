use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::{DisplayOptions, ViewMode};
use crate::types::OutputFormat;

/// Bare `tabi`: what the tool is and where to start.
pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let options = DisplayOptions::new(ViewMode::default(), std::io::stdout().is_terminal());
    HandlerContext::new(format, options).render(presenters::present_guidance(data_dir))
}
