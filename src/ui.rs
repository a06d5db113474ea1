// src/ui.rs

use crate::{
    chat_view::draw_chat,
    constants::TICK_RATE_MS,
    errors::ChatResult,
    key_handlers::{handle_chat_input, KeyOutcome},
    status_indicator::StatusIndicator,
    widget::ChatWidget,
};
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the chat widget in the terminal until the user quits.
pub async fn run_ui(widget: ChatWidget) -> ChatResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, widget).await;

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, widget: ChatWidget) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // crossterm polling blocks, so it gets its own thread
    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        loop {
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(event) => Event::Input(event),
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => Event::Tick,
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    return;
                }
            };
            if tx.blocking_send(event).is_err() {
                return;
            }
        }
    });

    let mut status = StatusIndicator::new();

    loop {
        {
            let mut panel = widget.panel();
            status.set_pending(panel.pending_requests());
            terminal.draw(|f| draw_chat(f, &mut panel, &status))?;
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                if handle_chat_input(key, &widget) == KeyOutcome::Quit {
                    break;
                }
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => status.update_spinner(),
            None => break,
        }
    }

    Ok(())
}
