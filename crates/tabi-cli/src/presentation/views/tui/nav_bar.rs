use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::NavBarViewModel;

/// Prev / label / next strip under an open day
pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavBarViewModel) -> Self {
        Self { model }
    }

    pub fn build(self) -> Paragraph<'a> {
        let enabled = Style::default().add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);

        let line = Line::from(vec![
            Span::styled(
                "<- Prev",
                if self.model.has_prev { enabled } else { disabled },
            ),
            Span::raw("     "),
            Span::styled(
                self.model.label.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("     "),
            Span::styled(
                "Next ->",
                if self.model.has_next { enabled } else { disabled },
            ),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}
