use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::warn;
use tripsync_core::{
    errors::TourError,
    models::contact::{ContactRequest, ContactResponse},
    scheduling::{
        availability::reserve_slot,
        clock::Clock,
        timezone::{SlotDisplay, slot_display},
    },
};

use crate::{ApiState, middleware::error_handling::AppError};

fn notify(state: &Arc<ApiState>, payload: &ContactRequest, slot: Option<&SlotDisplay>) {
    let mailer = state.mailer.clone();
    let recipient = state.config.contact_recipient.clone();
    let text = payload.email_text(slot);
    let html = payload.email_html(slot);
    tokio::spawn(async move {
        if let Err(err) = mailer
            .send(&recipient, "New Contact Form Submission", &text, &html)
            .await
        {
            warn!("failed to send contact notification: {err}");
        }
    });
}

/// `POST /api/contact`
///
/// Plain enquiries are persisted and mailed. When the payload carries
/// `meeting_date`/`meeting_time` the slot engine decides first: only a
/// successful reservation is persisted, so a 409 never leaves a partial
/// submission behind. The notification mail goes out after every booking
/// decision, reserved or denied, and its failure never rolls back a
/// reservation.
#[axum::debug_handler]
pub async fn submit_contact_form(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "name is required".to_string(),
        )));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError(TourError::Validation(
            "email is required".to_string(),
        )));
    }

    let slot = if payload.wants_meeting() {
        let raw_date = payload.meeting_date.as_deref().unwrap_or_default();
        let raw_time = payload.meeting_time.as_deref().unwrap_or_default();

        match reserve_slot(raw_date, raw_time, state.clock.now_utc(), &state.registry) {
            Ok((date, time)) => Some(slot_display(date, time, payload.user_time_zone.as_deref())),
            // The slot engine made a decision; report the denied attempt
            // before surfacing the error.
            Err(err @ (TourError::Policy(_) | TourError::Conflict(_))) => {
                notify(&state, &payload, None);
                return Err(AppError(err));
            }
            Err(err) => return Err(AppError(err)),
        }
    } else {
        None
    };

    tripsync_db::repositories::contact_submission::create_submission(
        &state.db_pool,
        &payload,
        slot.as_ref().map(|s| s.ist.as_str()),
        slot.as_ref().map(|s| s.user.as_str()),
    )
    .await
    .map_err(TourError::Database)?;

    notify(&state, &payload, slot.as_ref());

    Ok(Json(ContactResponse {
        success: true,
        message: "Your message has been sent successfully.".to_string(),
    }))
}
