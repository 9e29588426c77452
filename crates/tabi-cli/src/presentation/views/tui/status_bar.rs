use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const HOME_KEYS: &str = "j/k move  Enter open  1-9 jump  q quit";
const DAY_KEYS: &str = "<-/-> day  j/k event  m map  Esc home  q quit";

/// One-line footer: the last status message, or key help for the screen
pub struct StatusBarView<'a> {
    message: Option<&'a str>,
    on_day: bool,
}

impl<'a> StatusBarView<'a> {
    pub fn new(message: Option<&'a str>, on_day: bool) -> Self {
        Self { message, on_day }
    }

    pub fn build(self) -> Paragraph<'a> {
        let line = match self.message {
            Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Cyan))),
            None => Line::from(Span::styled(
                if self.on_day { DAY_KEYS } else { HOME_KEYS },
                Style::default().fg(Color::DarkGray),
            )),
        };
        Paragraph::new(line)
    }
}
