use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};

use crate::errors::AppError;
use crate::models::BookingForm;
use crate::services::channels::DispatchAction;
use crate::services::composer;
use crate::state::AppState;

pub async fn booking_page() -> Html<&'static str> {
    Html(include_str!("../web/booking.html"))
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BookingForm>,
) -> Result<Json<DispatchAction>, AppError> {
    match composer::submit(&state, form) {
        Ok(action) => Ok(Json(action)),
        Err(e) => {
            tracing::warn!(error = %e, "booking request rejected");
            Err(e)
        }
    }
}
