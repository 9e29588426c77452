use clap::Args;

use crate::presentation::ViewMode;
use crate::types::ViewStyle;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, value_name = "STYLE", help = "Information density of the text output")]
    pub view: Option<ViewStyle>,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> ViewMode {
        match self.view {
            Some(ViewStyle::Minimal) => ViewMode::Minimal,
            Some(ViewStyle::Compact) => ViewMode::Compact,
            Some(ViewStyle::Standard) => ViewMode::Standard,
            Some(ViewStyle::Verbose) => ViewMode::Verbose,
            None => ViewMode::default(),
        }
    }
}
