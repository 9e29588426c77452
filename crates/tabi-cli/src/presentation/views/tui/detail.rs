//! Day heading and the side cards (accommodation, travel tip) of an open day.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::formatters::style::weather_color;
use crate::presentation::formatters::weather_badge;
use crate::presentation::view_models::DayDetailViewModel;

pub struct DayHeaderView<'a> {
    model: &'a DayDetailViewModel,
}

impl<'a> DayHeaderView<'a> {
    pub fn new(model: &'a DayDetailViewModel) -> Self {
        Self { model }
    }

    pub fn build(self) -> Paragraph<'a> {
        let day = self.model;

        let mut top = vec![
            Span::styled(
                format!(" {} ", day.label),
                Style::default().fg(Color::White).bg(Color::Black),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", day.date, day.weekday),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(weather) = &day.weather {
            top.push(Span::raw("   "));
            top.push(Span::styled(
                weather_badge(weather),
                Style::default().fg(weather_color(weather.icon)),
            ));
        }
        if day.pass {
            top.push(Span::raw("   "));
            top.push(Span::styled(
                " JR PASS ",
                Style::default().fg(Color::White).bg(Color::Red),
            ));
        }

        let lines = vec![
            Line::from(top),
            Line::from(Span::styled(
                day.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                day.description.as_str(),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM))
    }
}

/// Accommodation and travel tip cards. Missing parts are left out entirely.
pub struct InfoCardsView<'a> {
    model: &'a DayDetailViewModel,
}

impl<'a> InfoCardsView<'a> {
    pub fn new(model: &'a DayDetailViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.accommodation.is_none() && self.model.tips.is_none()
    }

    pub fn build(self) -> Paragraph<'a> {
        let mut lines = Vec::new();

        if let Some(stay) = &self.model.accommodation {
            lines.push(Line::from(Span::styled(
                "Accommodation",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                stay.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if let Some(check_in) = &stay.check_in {
                lines.push(Line::from(format!("Check-in after {}", check_in)));
            }
        }

        if let Some(tips) = &self.model.tips {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                "Travel Tip",
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(tips.as_str()));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Info "))
    }
}
