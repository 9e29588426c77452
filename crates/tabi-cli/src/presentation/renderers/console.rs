use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    /// Full text rendering of a result, as printed to stdout
    pub fn render_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let color = self.options.enable_color;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            let label = if color {
                badge.label.bold().to_string()
            } else {
                badge.label.clone()
            };
            let _ = writeln!(out, "{} {}", badge.icon(), label);
            out.push('\n');
        }

        let _ = write!(out, "{}", result.content.create_view(self.options));

        if !result.suggestions.is_empty() {
            let heading = if color {
                "💡 Tips:".yellow().bold().to_string()
            } else {
                "💡 Tips:".to_string()
            };
            let _ = writeln!(out, "\n{}", heading);
            for tip in &result.suggestions {
                let _ = write!(out, "  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if color {
                        let _ = write!(out, ": {}", cmd.cyan());
                    } else {
                        let _ = write!(out, ": {}", cmd);
                    }
                }
                out.push('\n');
            }
        }

        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => print!("{}", self.render_text(&result)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        Guidance, MapLinkViewModel, MapLinksViewModel, StatusBadge, ViewMode,
    };

    fn links() -> CommandResultViewModel<MapLinksViewModel> {
        CommandResultViewModel::new(MapLinksViewModel {
            day_label: "Day 8".to_string(),
            day_title: "京都療癒日".to_string(),
            links: vec![MapLinkViewModel {
                event_number: 1,
                time: "10:00".to_string(),
                title: "錦市場".to_string(),
                query: "Nishiki Market".to_string(),
                url: "https://www.google.com/maps/search/?api=1&query=Nishiki%20Market"
                    .to_string(),
            }],
        })
        .with_badge(StatusBadge::info("1 map link(s) for Day 8"))
        .with_suggestion(Guidance::new("Open the day").with_command("tabi day 8"))
    }

    #[test]
    fn test_text_layout() {
        let renderer =
            ConsoleRenderer::new(OutputFormat::Text, DisplayOptions::new(ViewMode::Compact, false));
        let text = renderer.render_text(&links());

        assert_eq!(
            text,
            "ℹ️ 1 map link(s) for Day 8\n\
             \n\
             Day 8 京都療癒日\n\
             \x20 1. 10:00 錦市場\n\
             \x20    https://www.google.com/maps/search/?api=1&query=Nishiki%20Market\n\
             \n\
             💡 Tips:\n\
             \x20 • Open the day: tabi day 8\n"
        );
    }

    #[test]
    fn test_json_envelope() {
        let value = serde_json::to_value(links()).unwrap();
        assert_eq!(value["badge"]["level"], "info");
        assert_eq!(value["content"]["links"][0]["event_number"], 1);
        assert_eq!(value["suggestions"][0]["command"], "tabi day 8");
    }
}
