use crate::models::DbCity;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tripsync_core::models::ordering::ReorderEntry;
use uuid::Uuid;

pub async fn create_city(
    pool: &Pool<Postgres>,
    title: &str,
    description: &str,
    image: &str,
) -> Result<DbCity> {
    let id = Uuid::new_v4();

    let city = sqlx::query_as::<_, DbCity>(
        r#"
        INSERT INTO cities (id, title, description, image)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, description, image, sort_order, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(city)
}

pub async fn get_all_cities(pool: &Pool<Postgres>) -> Result<Vec<DbCity>> {
    let cities = sqlx::query_as::<_, DbCity>(
        r#"
        SELECT id, title, description, image, sort_order, created_at
        FROM cities
        ORDER BY sort_order ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(cities)
}

pub async fn get_city_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCity>> {
    let city = sqlx::query_as::<_, DbCity>(
        r#"
        SELECT id, title, description, image, sort_order, created_at
        FROM cities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(city)
}

pub async fn update_city(
    pool: &Pool<Postgres>,
    id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
) -> Result<Option<DbCity>> {
    let city = sqlx::query_as::<_, DbCity>(
        r#"
        UPDATE cities
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            image = COALESCE($4, image)
        WHERE id = $1
        RETURNING id, title, description, image, sort_order, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(image)
    .fetch_optional(pool)
    .await?;

    Ok(city)
}

/// Deletes the city; its tours go with it via the FK cascade.
pub async fn delete_city(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCity>> {
    let city = sqlx::query_as::<_, DbCity>(
        r#"
        DELETE FROM cities
        WHERE id = $1
        RETURNING id, title, description, image, sort_order, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(city)
}

pub async fn reorder_cities(pool: &Pool<Postgres>, entries: &[ReorderEntry]) -> Result<()> {
    for entry in entries {
        sqlx::query(
            r#"
            UPDATE cities
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
