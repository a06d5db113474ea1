use crate::{
    constants::{DIVIDER_CHAR, GUTTER, USER_INDENT},
    models::Sender,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// One item in the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    Message { lines: Vec<String>, sender: Sender },
    Divider,
}

impl ChatEntry {
    pub fn message(content: &str, sender: Sender) -> Self {
        ChatEntry::Message {
            lines: split_line_breaks(content),
            sender,
        }
    }

    /// Message text with line breaks as `\n`. Dividers have none.
    pub fn text(&self) -> Option<String> {
        match self {
            ChatEntry::Message { lines, .. } => Some(lines.join("\n")),
            ChatEntry::Divider => None,
        }
    }

    pub fn sender(&self) -> Option<Sender> {
        match self {
            ChatEntry::Message { sender, .. } => Some(*sender),
            ChatEntry::Divider => None,
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, ChatEntry::Divider)
    }

    /// Styled terminal lines for this entry, wrapped to `width` columns.
    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        match self {
            ChatEntry::Message { lines, sender } => render_message(lines, *sender, width),
            ChatEntry::Divider => vec![Line::from(Span::styled(
                DIVIDER_CHAR.to_string().repeat(width as usize),
                Style::default().fg(Color::DarkGray),
            ))],
        }
    }
}

/// Splits content on newlines. `\r\n` and the `<br>` tags stored by the
/// browser client count as line breaks too.
pub fn split_line_breaks(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace("<br />", "\n")
        .replace("<br/>", "\n")
        .replace("<br>", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn message_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Rgb(255, 223, 128)),
        Sender::Assistance => Style::default()
            .fg(Color::Rgb(144, 238, 144))
            .add_modifier(Modifier::ITALIC),
    }
}

fn render_message(lines: &[String], sender: Sender, width: u16) -> Vec<Line<'static>> {
    let style = message_style(sender);
    let indent = match sender {
        Sender::User => USER_INDENT,
        Sender::Assistance => "",
    };
    let wrap_width = (width as usize)
        .saturating_sub(indent.len() + GUTTER.chars().count())
        .max(1);

    let mut rendered = Vec::new();
    for line in lines {
        for wrapped_line in wrap(line, wrap_width) {
            rendered.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled(GUTTER.to_string(), style.add_modifier(Modifier::DIM)),
                Span::styled(wrapped_line.into_owned(), style),
            ]));
        }
    }
    rendered
}
