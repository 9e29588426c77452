use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::presentation::view_models::SplashViewModel;

/// Full-screen intro shown over the home list for the splash duration
pub struct SplashView<'a> {
    model: &'a SplashViewModel,
}

impl<'a> SplashView<'a> {
    pub fn new(model: &'a SplashViewModel) -> Self {
        Self { model }
    }

    pub fn build(self) -> Paragraph<'a> {
        let mut lines = vec![Line::default(), Line::default()];
        if let Some(season) = &self.model.season {
            lines.push(Line::from(Span::styled(
                season.to_uppercase(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            self.model.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Loading itinerary...",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered())
    }
}
