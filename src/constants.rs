// Backend endpoints, relative to the configured base URL
pub const HISTORY_ENDPOINT: &str = "get_history";
pub const SEND_ENDPOINT: &str = "send_message";
pub const STORE_ENDPOINT: &str = "store_message";

// Wire names of the two senders
pub const USER_SENDER: &str = "User";
pub const ASSISTANT_SENDER: &str = "Assistance";

// Fixed assistant texts
pub const WELCOME_MESSAGE: &str = "Welcome to Laptop Online Assistant. Please state the product name you would like to learn about to obtain the support resources you need or chat with our technicians.\nPick One: \n1. look for specific laptop\n2. normal issue";
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand that.";
pub const SEND_ERROR_MESSAGE: &str =
    "Assistance: Error fetching response, please try again later.";
pub const HISTORY_ERROR_MESSAGE: &str =
    "Assistance: Error loading chat history, please try again later.";

// Config defaults
pub const APP_NAME: &str = "helpdesk-chat";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const BASE_URL_ENV: &str = "HELPDESK_CHAT_URL";

// UI Constants
pub const DIVIDER_CHAR: char = '─';
pub const GUTTER: &str = "│ ";
pub const USER_INDENT: &str = "  ";
pub const SCROLL_PAGE: u16 = 10;
pub const TICK_RATE_MS: u64 = 100;
