use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Owner WhatsApp number, any formatting. Only its digits end up in the link.
    pub owner_whatsapp: String,
    /// Owner Telegram handle, without the leading `@`.
    pub owner_telegram: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            owner_whatsapp: env::var("OWNER_WHATSAPP")
                .unwrap_or_else(|_| "+33612345678".to_string()),
            owner_telegram: env::var("OWNER_TELEGRAM")
                .unwrap_or_else(|_| "VotreHandle".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.owner_whatsapp.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::Config(format!(
                "OWNER_WHATSAPP has no digits: {:?}",
                self.owner_whatsapp
            )));
        }
        if self.owner_telegram.trim().is_empty() {
            return Err(AppError::Config("OWNER_TELEGRAM is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(phone: &str, handle: &str) -> AppConfig {
        AppConfig {
            port: 3000,
            owner_whatsapp: phone.to_string(),
            owner_telegram: handle.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_formatted_phone() {
        assert!(config("+33 6 12-34-56-78", "VotreHandle").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_phone_without_digits() {
        let err = config("+--", "VotreHandle").validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_blank_handle() {
        let err = config("+33612345678", "  ").validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
