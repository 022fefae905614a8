use crate::models::DbContactSubmission;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tripsync_core::models::contact::ContactRequest;
use uuid::Uuid;

const SUBMISSION_COLUMNS: &str = "id, name, email, phone, inquiry_type, subject, message, \
    country_code, country, adults, children, start_date, end_date, destinations, \
    hotel_category, interests, special_requests, meeting_date, meeting_time, \
    user_time_zone, slot_ist, slot_user, created_at";

/// Appends one submission. The store is append-only; nothing ever updates
/// these rows.
pub async fn create_submission(
    pool: &Pool<Postgres>,
    form: &ContactRequest,
    slot_ist: Option<&str>,
    slot_user: Option<&str>,
) -> Result<DbContactSubmission> {
    let id = Uuid::new_v4();

    let submission = sqlx::query_as::<_, DbContactSubmission>(&format!(
        r#"
        INSERT INTO contact_submissions (
            id, name, email, phone, inquiry_type, subject, message,
            country_code, country, adults, children, start_date, end_date,
            destinations, hotel_category, interests, special_requests,
            meeting_date, meeting_time, user_time_zone, slot_ist, slot_user
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22)
        RETURNING {SUBMISSION_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&form.name)
    .bind(&form.email)
    .bind(&form.phone)
    .bind(&form.inquiry_type)
    .bind(&form.subject)
    .bind(&form.message)
    .bind(&form.country_code)
    .bind(&form.country)
    .bind(form.adults)
    .bind(form.children)
    .bind(&form.start_date)
    .bind(&form.end_date)
    .bind(&form.destinations)
    .bind(&form.hotel_category)
    .bind(&form.interests)
    .bind(&form.special_requests)
    .bind(&form.meeting_date)
    .bind(&form.meeting_time)
    .bind(&form.user_time_zone)
    .bind(slot_ist)
    .bind(slot_user)
    .fetch_one(pool)
    .await?;

    Ok(submission)
}

/// Admin review listing: newest first, optional exact-match filters.
pub async fn list_submissions(
    pool: &Pool<Postgres>,
    email: Option<&str>,
    meeting_date: Option<&str>,
    page: i64,
    limit: i64,
) -> Result<Vec<DbContactSubmission>> {
    let offset = (page - 1) * limit;

    let submissions = sqlx::query_as::<_, DbContactSubmission>(&format!(
        r#"
        SELECT {SUBMISSION_COLUMNS}
        FROM contact_submissions
        WHERE ($1::text IS NULL OR email = $1)
          AND ($2::text IS NULL OR meeting_date = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(email)
    .bind(meeting_date)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(submissions)
}

pub async fn count_submissions(
    pool: &Pool<Postgres>,
    email: Option<&str>,
    meeting_date: Option<&str>,
) -> Result<i64> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM contact_submissions
        WHERE ($1::text IS NULL OR email = $1)
          AND ($2::text IS NULL OR meeting_date = $2)
        "#,
    )
    .bind(email)
    .bind(meeting_date)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// Meeting slots already taken from `today` (ISO date) onward; feeds the
/// registry preload at boot. Dates are ISO strings, so lexicographic
/// comparison matches chronological order.
pub async fn get_upcoming_meetings(
    pool: &Pool<Postgres>,
    today: &str,
) -> Result<Vec<(String, String)>> {
    let meetings = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT meeting_date, meeting_time
        FROM contact_submissions
        WHERE meeting_date IS NOT NULL
          AND meeting_time IS NOT NULL
          AND meeting_date >= $1
        "#,
    )
    .bind(today)
    .fetch_all(pool)
    .await?;

    Ok(meetings)
}
