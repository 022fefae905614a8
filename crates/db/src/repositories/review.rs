use crate::models::DbReview;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tripsync_core::models::ordering::ReorderEntry;
use uuid::Uuid;

const REVIEW_COLUMNS: &str =
    "id, customer_name, rating, review, image, is_active, sort_order, created_at, updated_at";

pub async fn create_review(
    pool: &Pool<Postgres>,
    customer_name: &str,
    rating: i32,
    review: &str,
    image: &str,
) -> Result<DbReview> {
    let id = Uuid::new_v4();

    let review = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        INSERT INTO reviews (id, customer_name, rating, review, image)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {REVIEW_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(customer_name)
    .bind(rating)
    .bind(review)
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(review)
}

pub async fn get_all_reviews(pool: &Pool<Postgres>) -> Result<Vec<DbReview>> {
    let reviews = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        SELECT {REVIEW_COLUMNS}
        FROM reviews
        ORDER BY sort_order ASC, created_at DESC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

/// Public storefront listing: active reviews only.
pub async fn get_active_reviews(pool: &Pool<Postgres>) -> Result<Vec<DbReview>> {
    let reviews = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        SELECT {REVIEW_COLUMNS}
        FROM reviews
        WHERE is_active = TRUE
        ORDER BY sort_order ASC, created_at DESC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

pub async fn get_review_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbReview>> {
    let review = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        SELECT {REVIEW_COLUMNS}
        FROM reviews
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(review)
}

pub async fn update_review(
    pool: &Pool<Postgres>,
    id: Uuid,
    customer_name: Option<&str>,
    rating: Option<i32>,
    review: Option<&str>,
    image: Option<&str>,
    is_active: Option<bool>,
) -> Result<Option<DbReview>> {
    let review = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        UPDATE reviews
        SET customer_name = COALESCE($2, customer_name),
            rating = COALESCE($3, rating),
            review = COALESCE($4, review),
            image = COALESCE($5, image),
            is_active = COALESCE($6, is_active),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {REVIEW_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(customer_name)
    .bind(rating)
    .bind(review)
    .bind(image)
    .bind(is_active)
    .fetch_optional(pool)
    .await?;

    Ok(review)
}

pub async fn delete_review(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbReview>> {
    let review = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        DELETE FROM reviews
        WHERE id = $1
        RETURNING {REVIEW_COLUMNS}
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(review)
}

pub async fn set_review_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_active: bool,
) -> Result<Option<DbReview>> {
    let review = sqlx::query_as::<_, DbReview>(&format!(
        r#"
        UPDATE reviews
        SET is_active = $2,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {REVIEW_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(is_active)
    .fetch_optional(pool)
    .await?;

    Ok(review)
}

pub async fn reorder_reviews(pool: &Pool<Postgres>, entries: &[ReorderEntry]) -> Result<()> {
    for entry in entries {
        sqlx::query(
            r#"
            UPDATE reviews
            SET sort_order = $2,
                updated_at = NOW()
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
