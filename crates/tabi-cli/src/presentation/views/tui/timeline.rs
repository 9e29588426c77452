//! Timeline View
//!
//! Events of the open day, one list item per event.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::style::category_color;
use crate::presentation::formatters::{category_badge, transport_badge};
use crate::presentation::view_models::DayDetailViewModel;

pub struct TimelineView<'a> {
    model: &'a DayDetailViewModel,
}

impl<'a> TimelineView<'a> {
    pub fn new(model: &'a DayDetailViewModel) -> Self {
        Self { model }
    }

    pub fn build_list(self) -> List<'a> {
        let items: Vec<ListItem> = self
            .model
            .events
            .iter()
            .map(|event| {
                let marker = if event.highlight {
                    Span::styled("● ", Style::default().fg(Color::Red))
                } else {
                    Span::raw("○ ")
                };

                let mut head = vec![
                    marker,
                    Span::styled(
                        format!("{:<7}", event.time),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if let Some(badge) = category_badge(event.category) {
                    head.push(Span::styled(
                        format!("[{}] ", badge),
                        Style::default().fg(category_color(event.category)),
                    ));
                }

                let title_style = if event.highlight {
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                head.push(Span::styled(event.title.as_str(), title_style));

                if event.map_url.is_some() {
                    head.push(Span::styled(" [map]", Style::default().fg(Color::Cyan)));
                }

                let mut lines = vec![Line::from(head)];
                if !event.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("         {}", event.description),
                        Style::default().fg(Color::Gray),
                    )));
                }
                if let Some(transport) = &event.transport {
                    lines.push(Line::from(vec![
                        Span::raw("         "),
                        Span::styled(
                            format!(" {} ", transport_badge(transport, event.category)),
                            Style::default().fg(Color::White).bg(Color::Rgb(140, 123, 108)),
                        ),
                    ]));
                }

                ListItem::new(lines)
            })
            .collect();

        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Timeline "))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ")
    }
}
