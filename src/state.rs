use crate::config::AppConfig;
use crate::services::channels::{TelegramChannel, WhatsAppChannel};

pub struct AppState {
    pub whatsapp: WhatsAppChannel,
    pub telegram: TelegramChannel,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            whatsapp: WhatsAppChannel::new(&config.owner_whatsapp),
            telegram: TelegramChannel::new(&config.owner_telegram),
        }
    }
}
