use crate::{chat_message::ChatEntry, models::Sender};

/// Everything the chat view shows: rendered entries, the input buffer and
/// the scroll position.
#[derive(Debug, Default)]
pub struct ChatPanel {
    entries: Vec<ChatEntry>,
    input: String,
    // Lines scrolled up from the bottom; 0 follows the newest entry
    scroll_back: u16,
    pending_requests: usize,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn message_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_divider()).count()
    }

    pub fn divider_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_divider()).count()
    }

    pub fn push_message(&mut self, content: &str, sender: Sender) {
        self.entries.push(ChatEntry::message(content, sender));
        self.scroll_to_bottom();
    }

    pub fn push_divider(&mut self) {
        self.entries.push(ChatEntry::Divider);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Keeps `scroll_back` within the rendered content so scrolling down
    /// again responds immediately.
    pub fn clamp_scroll(&mut self, max_scroll: u16) {
        self.scroll_back = self.scroll_back.min(max_scroll);
    }

    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    pub fn end_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    pub fn pending_requests(&self) -> usize {
        self.pending_requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_snaps_to_bottom() {
        let mut panel = ChatPanel::new();
        panel.scroll_up(5);
        assert_eq!(panel.scroll_back(), 5);

        panel.push_message("User: hi", Sender::User);
        assert_eq!(panel.scroll_back(), 0);
    }

    #[test]
    fn test_counts() {
        let mut panel = ChatPanel::new();
        panel.push_message("User: hi", Sender::User);
        panel.push_message("Assistance: hello", Sender::Assistance);
        panel.push_divider();

        assert_eq!(panel.message_count(), 2);
        assert_eq!(panel.divider_count(), 1);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut panel = ChatPanel::new();
        panel.scroll_down(3);
        assert_eq!(panel.scroll_back(), 0);

        panel.scroll_up(20);
        panel.clamp_scroll(7);
        assert_eq!(panel.scroll_back(), 7);
    }

    #[test]
    fn test_input_editing() {
        let mut panel = ChatPanel::new();
        panel.push_char('h');
        panel.push_char('i');
        panel.push_char('!');
        panel.pop_char();
        assert_eq!(panel.input(), "hi");

        panel.clear_input();
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn test_pending_requests_never_underflow() {
        let mut panel = ChatPanel::new();
        panel.begin_request();
        panel.end_request();
        panel.end_request();
        assert_eq!(panel.pending_requests(), 0);
    }
}
