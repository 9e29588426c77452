//! Day cards for the home list and the day-mode sidebar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::truncate_width;
use crate::presentation::view_models::DayCardViewModel;

const SIDEBAR_TITLE_WIDTH: usize = 18;

/// Full cards for the home list
pub struct DayListView<'a> {
    days: &'a [DayCardViewModel],
}

impl<'a> DayListView<'a> {
    pub fn new(days: &'a [DayCardViewModel]) -> Self {
        Self { days }
    }

    pub fn build_list(self) -> List<'a> {
        let items: Vec<ListItem> = self
            .days
            .iter()
            .map(|day| {
                let mut head = vec![
                    Span::styled(
                        format!("{:>2} ", day.day_of_month),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<4}", day.weekday),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        day.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ];
                if day.pass {
                    head.push(Span::raw("  "));
                    head.push(Span::styled(
                        "JR PASS",
                        Style::default().fg(Color::White).bg(Color::Red),
                    ));
                }

                ListItem::new(vec![
                    Line::from(head),
                    Line::from(Span::styled(
                        format!("       {}", day.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Days "))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ")
    }
}

/// Condensed cards beside an open day.
///
/// The open day is highlighted; the JR marker is shown only on the others.
pub struct SidebarView<'a> {
    days: &'a [DayCardViewModel],
}

impl<'a> SidebarView<'a> {
    pub fn new(days: &'a [DayCardViewModel]) -> Self {
        Self { days }
    }

    /// Index of the open day, for the list state
    pub fn selected(&self) -> Option<usize> {
        self.days.iter().position(|d| d.selected)
    }

    pub fn build_list(self) -> List<'a> {
        let items: Vec<ListItem> = self
            .days
            .iter()
            .map(|day| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:>2} ", day.day_of_month),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(truncate_width(&day.title, SIDEBAR_TITLE_WIDTH)),
                ];
                if day.pass && !day.selected {
                    spans.push(Span::styled(" JR", Style::default().fg(Color::Red)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Trip "))
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
    }
}
