use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Default)]
pub struct StatusIndicator {
    pending: usize,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, pending: usize) {
        self.pending = pending;
    }

    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn status_text(&self) -> String {
        match self.pending {
            0 => String::new(),
            1 => "Waiting for reply...".to_string(),
            n => format!("Waiting for {} replies...", n),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner = if self.is_waiting() {
            SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let status = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(self.status_text(), Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(status).alignment(Alignment::Left), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let mut status = StatusIndicator::new();
        assert!(!status.is_waiting());
        assert_eq!(status.status_text(), "");

        status.set_pending(1);
        assert_eq!(status.status_text(), "Waiting for reply...");

        status.set_pending(3);
        assert_eq!(status.status_text(), "Waiting for 3 replies...");
    }
}
