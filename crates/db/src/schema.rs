use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create cities table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cities (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            image TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create tours table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tours (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            city_id UUID NOT NULL REFERENCES cities(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            duration VARCHAR(255) NOT NULL,
            destinations TEXT[] NOT NULL DEFAULT '{}',
            itinerary JSONB NOT NULL DEFAULT '[]',
            image TEXT NULL,
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_name VARCHAR(255) NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            review VARCHAR(2000) NOT NULL,
            image TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create contact_submissions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NULL,
            inquiry_type VARCHAR(64) NULL,
            subject VARCHAR(255) NULL,
            message TEXT NULL,
            country_code VARCHAR(8) NULL,
            country VARCHAR(128) NULL,
            adults INTEGER NULL,
            children INTEGER NULL,
            start_date VARCHAR(32) NULL,
            end_date VARCHAR(32) NULL,
            destinations TEXT[] NOT NULL DEFAULT '{}',
            hotel_category VARCHAR(64) NULL,
            interests TEXT NULL,
            special_requests TEXT NULL,
            meeting_date VARCHAR(16) NULL,
            meeting_time VARCHAR(8) NULL,
            user_time_zone VARCHAR(64) NULL,
            slot_ist VARCHAR(64) NULL,
            slot_user VARCHAR(64) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create admins table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tours_city_id ON tours(city_id);
        CREATE INDEX IF NOT EXISTS idx_tours_featured ON tours(featured);
        CREATE INDEX IF NOT EXISTS idx_reviews_is_active ON reviews(is_active);
        CREATE INDEX IF NOT EXISTS idx_contact_submissions_email ON contact_submissions(email);
        CREATE INDEX IF NOT EXISTS idx_contact_submissions_meeting_date ON contact_submissions(meeting_date);
        CREATE INDEX IF NOT EXISTS idx_contact_submissions_created_at ON contact_submissions(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
