use crate::models::DbTour;
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use tripsync_core::models::ordering::ReorderEntry;
use tripsync_core::models::tour::ItineraryDay;
use uuid::Uuid;

const TOUR_COLUMNS: &str =
    "id, city_id, title, duration, destinations, itinerary, image, featured, sort_order, created_at";

pub async fn create_tour(
    pool: &Pool<Postgres>,
    city_id: Uuid,
    title: &str,
    duration: &str,
    destinations: &[String],
    itinerary: &[ItineraryDay],
    image: Option<&str>,
) -> Result<DbTour> {
    let id = Uuid::new_v4();

    let tour = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        INSERT INTO tours (id, city_id, title, duration, destinations, itinerary, image)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {TOUR_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(city_id)
    .bind(title)
    .bind(duration)
    .bind(destinations)
    .bind(Json(itinerary))
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(tour)
}

pub async fn get_tour_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTour>> {
    let tour = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        SELECT {TOUR_COLUMNS}
        FROM tours
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(tour)
}

pub async fn get_tours_by_city_id(pool: &Pool<Postgres>, city_id: Uuid) -> Result<Vec<DbTour>> {
    let tours = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        SELECT {TOUR_COLUMNS}
        FROM tours
        WHERE city_id = $1
        ORDER BY sort_order ASC, created_at ASC
        "#
    ))
    .bind(city_id)
    .fetch_all(pool)
    .await?;

    Ok(tours)
}

pub async fn get_featured_tours(pool: &Pool<Postgres>) -> Result<Vec<DbTour>> {
    let tours = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        SELECT {TOUR_COLUMNS}
        FROM tours
        WHERE featured = TRUE
        ORDER BY sort_order ASC, created_at ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(tours)
}

pub async fn update_tour(
    pool: &Pool<Postgres>,
    id: Uuid,
    title: Option<&str>,
    duration: Option<&str>,
    destinations: Option<&[String]>,
    itinerary: Option<&[ItineraryDay]>,
    image: Option<&str>,
) -> Result<Option<DbTour>> {
    let tour = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        UPDATE tours
        SET title = COALESCE($2, title),
            duration = COALESCE($3, duration),
            destinations = COALESCE($4, destinations),
            itinerary = COALESCE($5, itinerary),
            image = COALESCE($6, image)
        WHERE id = $1
        RETURNING {TOUR_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(title)
    .bind(duration)
    .bind(destinations)
    .bind(itinerary.map(Json))
    .bind(image)
    .fetch_optional(pool)
    .await?;

    Ok(tour)
}

pub async fn delete_tour(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTour>> {
    let tour = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        DELETE FROM tours
        WHERE id = $1
        RETURNING {TOUR_COLUMNS}
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(tour)
}

pub async fn count_tours_for_city(pool: &Pool<Postgres>, city_id: Uuid) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM tours WHERE city_id = $1
        "#,
    )
    .bind(city_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn set_featured(pool: &Pool<Postgres>, id: Uuid, featured: bool) -> Result<Option<DbTour>> {
    let tour = sqlx::query_as::<_, DbTour>(&format!(
        r#"
        UPDATE tours
        SET featured = $2
        WHERE id = $1
        RETURNING {TOUR_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(featured)
    .fetch_optional(pool)
    .await?;

    Ok(tour)
}

pub async fn reorder_tours(pool: &Pool<Postgres>, entries: &[ReorderEntry]) -> Result<()> {
    for entry in entries {
        sqlx::query(
            r#"
            UPDATE tours
            SET sort_order = $2
            WHERE id = $1
            "#,
        )
        .bind(entry.id)
        .bind(entry.sort_order)
        .execute(pool)
        .await?;
    }

    Ok(())
}
