use crate::models::DbAdmin;
use argon2::{Argon2, PasswordVerifier};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_admin(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
) -> Result<DbAdmin> {
    let id = Uuid::new_v4();

    let admin = sqlx::query_as::<_, DbAdmin>(
        r#"
        INSERT INTO admins (id, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(admin)
}

pub async fn get_admin_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbAdmin>> {
    let admin = sqlx::query_as::<_, DbAdmin>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM admins
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// Constant-time credential check. Unknown emails report false rather than
/// erroring so login failures are indistinguishable to callers.
pub async fn verify_credentials(
    pool: &Pool<Postgres>,
    email: &str,
    password: &str,
) -> Result<Option<DbAdmin>> {
    let Some(admin) = get_admin_by_email(pool, email).await? else {
        return Ok(None);
    };

    let parsed_hash = argon2::PasswordHash::new(&admin.password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid.then_some(admin))
}
