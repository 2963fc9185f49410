pub mod booking;

pub use booking::{BookingForm, BookingIntent, ContactChannel, SessionDuration};
