use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::TripHeaderViewModel;

/// Season line and trip title across the top of every screen
pub struct TripHeaderView<'a> {
    model: &'a TripHeaderViewModel,
}

impl<'a> TripHeaderView<'a> {
    pub fn new(model: &'a TripHeaderViewModel) -> Self {
        Self { model }
    }

    pub fn build(self) -> Paragraph<'a> {
        let mut spans = Vec::new();
        if let Some(season) = &self.model.season {
            spans.push(Span::styled(
                season.to_uppercase(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            self.model.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM))
    }
}
