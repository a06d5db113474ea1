// src/lib.rs

pub mod api;
pub mod chat_message;
pub mod chat_panel;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod status_indicator;
pub mod ui;
pub mod widget;

pub use errors::{ChatError, ChatResult};
pub use widget::ChatWidget;
