use crate::{constants::SCROLL_PAGE, widget::ChatWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Applies one key press to the chat widget. Must be called from within the
/// tokio runtime, since Enter spawns the send request.
pub fn handle_chat_input(key: KeyEvent, widget: &ChatWidget) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Enter => {
            widget.send_message();
        }
        KeyCode::Backspace => widget.panel().pop_char(),
        KeyCode::Up => widget.panel().scroll_up(1),
        KeyCode::Down => widget.panel().scroll_down(1),
        KeyCode::PageUp => widget.panel().scroll_up(SCROLL_PAGE),
        KeyCode::PageDown => widget.panel().scroll_down(SCROLL_PAGE),
        KeyCode::End => widget.panel().scroll_to_bottom(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' | 'd' => return KeyOutcome::Quit,
                    'u' => widget.panel().clear_input(),
                    _ => {}
                }
            } else {
                widget.panel().push_char(c);
            }
        }
        _ => {}
    }

    KeyOutcome::Continue
}
