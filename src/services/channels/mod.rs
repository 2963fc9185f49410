pub mod telegram;
pub mod whatsapp;

pub use telegram::TelegramChannel;
pub use whatsapp::WhatsAppChannel;

use serde::Serialize;

/// What the browser has to do once a booking message is composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DispatchAction {
    /// Open `url` in a new browsing context.
    OpenUrl { url: String },
    /// Write `clipboard` to the clipboard, show `notice`, then open `url`.
    CopyAndOpen {
        clipboard: String,
        notice: String,
        url: String,
    },
}

impl DispatchAction {
    pub fn url(&self) -> &str {
        match self {
            DispatchAction::OpenUrl { url } => url,
            DispatchAction::CopyAndOpen { url, .. } => url,
        }
    }
}

pub trait Channel: Send + Sync {
    fn dispatch(&self, message: &str) -> DispatchAction;
}
