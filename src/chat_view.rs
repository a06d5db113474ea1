use crate::{chat_panel::ChatPanel, status_indicator::StatusIndicator};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, panel: &mut ChatPanel, status: &StatusIndicator) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_messages(f, panel, chunks[0]);
    status.render(f, chunks[1]);
    draw_input(f, panel, chunks[2]);
}

fn draw_messages(f: &mut Frame, panel: &mut ChatPanel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Laptop Online Assistant ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let height = inner.height as usize;
    let lines = tail_lines(panel, inner.width, height + panel.scroll_back() as usize);

    // Only short of `wanted` when every entry was rendered, so the clamp is exact
    let max_scroll = lines.len().saturating_sub(height);
    panel.clamp_scroll(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let end = lines.len() - panel.scroll_back() as usize;
    let start = end.saturating_sub(height);
    let visible: Vec<Line> = lines[start..end].to_vec();

    f.render_widget(Paragraph::new(visible).block(block), area);
}

/// Renders entries from the newest backwards until at least `wanted` lines
/// exist. Returns them oldest first.
fn tail_lines(panel: &ChatPanel, width: u16, wanted: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in panel.entries().iter().rev() {
        lines.extend(entry.render(width).into_iter().rev());
        if lines.len() >= wanted {
            break;
        }
    }
    lines.reverse();
    lines
}

fn draw_input(f: &mut Frame, panel: &ChatPanel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Message (Enter to send, Esc to quit) ");
    let inner = block.inner(area);

    let prefix = "→ ";
    let visible_width = inner.width.saturating_sub(prefix.width() as u16);
    let text_width = panel.input().width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    let input = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(panel.input(), Style::default().fg(Color::White)),
    ]);

    f.render_widget(
        Paragraph::new(input).block(block).scroll((0, scroll_offset)),
        area,
    );

    let cursor_x = inner.x + prefix.width() as u16 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(panel: &mut ChatPanel, status: &StatusIndicator, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_chat(f, panel, status)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_newlines_render_on_separate_rows() {
        let mut panel = ChatPanel::new();
        panel.push_message("Assistance: Pick One:\n1. laptop\n2. issue", Sender::Assistance);
        panel.push_divider();

        let rows = screen(&mut panel, &StatusIndicator::new(), 40, 12);

        assert!(rows[1].contains("│ Assistance: Pick One:"));
        assert!(rows[2].contains("│ 1. laptop"));
        assert!(rows[3].contains("│ 2. issue"));
        assert!(rows[4].contains("──────────"));
    }

    #[test]
    fn test_follows_bottom_when_overflowing() {
        let mut panel = ChatPanel::new();
        for i in 0..20 {
            panel.push_message(&format!("User: message {}", i), Sender::User);
        }

        let rows = screen(&mut panel, &StatusIndicator::new(), 40, 10);
        let text = rows.join("\n");

        assert!(text.contains("message 19"));
        assert!(!text.contains("message 0 "));
    }

    #[test]
    fn test_scroll_back_is_clamped() {
        let mut panel = ChatPanel::new();
        for i in 0..6 {
            panel.push_message(&format!("User: message {}", i), Sender::User);
        }
        panel.scroll_up(100);

        let rows = screen(&mut panel, &StatusIndicator::new(), 40, 9);

        // 6 lines in a 3-line viewport
        assert_eq!(panel.scroll_back(), 3);
        assert!(rows.join("\n").contains("message 0"));
    }

    #[test]
    fn test_follows_bottom_past_u16_line_count() {
        let mut panel = ChatPanel::new();
        for i in 0..70_000 {
            panel.push_message(&format!("User: message {}", i), Sender::User);
        }

        let rows = screen(&mut panel, &StatusIndicator::new(), 40, 10);
        let text = rows.join("\n");

        assert!(text.contains("message 69999"));
        assert!(text.contains("message 69996"));
        assert!(!text.contains("message 65534"));
    }

    #[test]
    fn test_scroll_back_in_long_history() {
        let mut panel = ChatPanel::new();
        for i in 0..70_000 {
            panel.push_message(&format!("User: message {}", i), Sender::User);
        }
        panel.scroll_up(10);

        let rows = screen(&mut panel, &StatusIndicator::new(), 40, 10);
        let text = rows.join("\n");

        // 4-line viewport, 10 lines up from the bottom
        assert_eq!(panel.scroll_back(), 10);
        assert!(text.contains("message 69989"));
        assert!(!text.contains("message 69999"));
    }

    #[test]
    fn test_input_and_status_are_drawn() {
        let mut panel = ChatPanel::new();
        panel.set_input("fan is loud");
        let mut status = StatusIndicator::new();
        status.set_pending(1);

        let rows = screen(&mut panel, &status, 50, 10);
        let text = rows.join("\n");

        assert!(text.contains("→ fan is loud"));
        assert!(text.contains("Waiting for reply..."));
    }
}
