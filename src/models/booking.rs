use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::errors::AppError;

pub const PRICE_PER_SLOT_EUROS: u32 = 12;
pub const SLOT_MINUTES: u32 = 30;

/// Raw values as posted by the booking form. Nothing here is trusted yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: String,
    /// Checkbox value; browsers omit the field entirely when unchecked.
    #[serde(default)]
    pub consent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDuration {
    HalfHour,
    OneHour,
    HourAndHalf,
}

impl SessionDuration {
    pub const ALL: [SessionDuration; 3] = [
        SessionDuration::HalfHour,
        SessionDuration::OneHour,
        SessionDuration::HourAndHalf,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::HalfHour => 30,
            SessionDuration::OneHour => 60,
            SessionDuration::HourAndHalf => 90,
        }
    }

    pub fn price_euros(self) -> u32 {
        (self.minutes() / SLOT_MINUTES) * PRICE_PER_SLOT_EUROS
    }

    /// Only the exact option values `30`, `60` and `90` are accepted, so the
    /// rendered minutes always match what was submitted.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.minutes().to_string() == s.trim())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactChannel {
    #[default]
    WhatsApp,
    Telegram,
}

impl ContactChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactChannel::WhatsApp => "whatsapp",
            ContactChannel::Telegram => "telegram",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" => Some(ContactChannel::WhatsApp),
            "telegram" => Some(ContactChannel::Telegram),
            _ => None,
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated session request. Lives only for the duration of one submission.
///
/// `date` and `time` keep the submitted text; they are only parsed to check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingIntent {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub duration: SessionDuration,
    pub notes: String,
    pub channel: ContactChannel,
}

impl BookingIntent {
    pub fn price_euros(&self) -> u32 {
        self.duration.price_euros()
    }
}

impl TryFrom<BookingForm> for BookingIntent {
    type Error = AppError;

    fn try_from(form: BookingForm) -> Result<Self, Self::Error> {
        if form.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        if !consent_given(form.consent.as_deref()) {
            return Err(AppError::Validation(
                "consent to be contacted is required".to_string(),
            ));
        }

        let date = form.date.trim().to_string();
        NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation(format!("invalid date: {:?}", form.date)))?;

        let time = form.time.trim().to_string();
        NaiveTime::parse_from_str(&time, "%H:%M")
            .map_err(|_| AppError::Validation(format!("invalid time: {:?}", form.time)))?;

        let duration = SessionDuration::parse(&form.duration).ok_or_else(|| {
            AppError::Validation(format!(
                "duration must be 30, 60 or 90 minutes, got {:?}",
                form.duration
            ))
        })?;

        let channel = match form.contact.as_deref() {
            None => ContactChannel::default(),
            Some(raw) => ContactChannel::parse(raw).ok_or_else(|| {
                AppError::Validation(format!("unknown contact channel: {raw:?}"))
            })?,
        };

        Ok(Self {
            name: form.name,
            email: form.email,
            date,
            time,
            duration,
            notes: form.notes,
            channel,
        })
    }
}

fn consent_given(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.trim().to_lowercase().as_str(), "" | "false" | "off" | "0"),
    }
}
