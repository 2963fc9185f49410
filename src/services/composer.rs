use crate::errors::AppError;
use crate::models::{BookingForm, BookingIntent, ContactChannel};
use crate::services::channels::{Channel, DispatchAction};
use crate::state::AppState;

pub fn compose_message(intent: &BookingIntent) -> String {
    format!(
        "Bonjour, je souhaite réserver une séance d'écoute.\n\n\
         Nom: {name}\n\
         Email: {email}\n\
         Date: {date} à {time}\n\
         Durée: {minutes} minutes\n\
         Tarif estimé: {price} €\n\
         Notes: {notes}",
        name = intent.name,
        email = intent.email,
        date = intent.date,
        time = intent.time,
        minutes = intent.duration.minutes(),
        price = intent.price_euros(),
        notes = intent.notes,
    )
}

/// Validates a submitted form and turns it into the action the browser performs.
pub fn submit(state: &AppState, form: BookingForm) -> Result<DispatchAction, AppError> {
    let intent = BookingIntent::try_from(form)?;
    let message = compose_message(&intent);

    let channel: &dyn Channel = match intent.channel {
        ContactChannel::WhatsApp => &state.whatsapp,
        ContactChannel::Telegram => &state.telegram,
    };
    let action = channel.dispatch(&message);

    tracing::info!(
        channel = %intent.channel,
        duration = intent.duration.minutes(),
        price = intent.price_euros(),
        "booking request composed"
    );

    Ok(action)
}
