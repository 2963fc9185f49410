use super::{Channel, DispatchAction};

pub const COPY_NOTICE: &str = "Message copié. Ouvre Telegram et colle-le si besoin.";

pub struct TelegramChannel {
    profile_url: String,
}

impl TelegramChannel {
    pub fn new(owner_handle: &str) -> Self {
        Self {
            profile_url: format!("https://t.me/{owner_handle}"),
        }
    }
}

impl Channel for TelegramChannel {
    // t.me profile links cannot carry a message, so it goes through the clipboard.
    fn dispatch(&self, message: &str) -> DispatchAction {
        DispatchAction::CopyAndOpen {
            clipboard: message.to_string(),
            notice: COPY_NOTICE.to_string(),
            url: self.profile_url.clone(),
        }
    }
}
