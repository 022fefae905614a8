use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use tripsync_core::models::{
    city::City,
    contact::ContactSubmission,
    review::Review,
    tour::{ItineraryDay, Tour, TourSummary},
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTour {
    pub id: Uuid,
    pub city_id: Uuid,
    pub title: String,
    pub duration: String,
    pub destinations: Vec<String>,
    pub itinerary: Json<Vec<ItineraryDay>>,
    pub image: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReview {
    pub id: Uuid,
    pub customer_name: String,
    pub rating: i32,
    pub review: String,
    pub image: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub destinations: Vec<String>,
    pub hotel_category: Option<String>,
    pub interests: Option<String>,
    pub special_requests: Option<String>,
    pub meeting_date: Option<String>,
    pub meeting_time: Option<String>,
    pub user_time_zone: Option<String>,
    pub slot_ist: Option<String>,
    pub slot_user: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAdmin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbCity> for City {
    fn from(row: DbCity) -> Self {
        City {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

impl From<DbTour> for Tour {
    fn from(row: DbTour) -> Self {
        Tour {
            id: row.id,
            city_id: row.city_id,
            title: row.title,
            duration: row.duration,
            destinations: row.destinations,
            itinerary: row.itinerary.0,
            image: row.image,
            featured: row.featured,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

impl From<DbTour> for TourSummary {
    fn from(row: DbTour) -> Self {
        TourSummary {
            id: row.id,
            title: row.title,
            duration: row.duration,
            destinations: row.destinations,
        }
    }
}

impl From<DbReview> for Review {
    fn from(row: DbReview) -> Self {
        Review {
            id: row.id,
            customer_name: row.customer_name,
            rating: row.rating,
            review: row.review,
            image: row.image,
            is_active: row.is_active,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbContactSubmission> for ContactSubmission {
    fn from(row: DbContactSubmission) -> Self {
        ContactSubmission {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            inquiry_type: row.inquiry_type,
            subject: row.subject,
            message: row.message,
            country_code: row.country_code,
            country: row.country,
            adults: row.adults,
            children: row.children,
            start_date: row.start_date,
            end_date: row.end_date,
            destinations: row.destinations,
            hotel_category: row.hotel_category,
            interests: row.interests,
            special_requests: row.special_requests,
            meeting_date: row.meeting_date,
            meeting_time: row.meeting_time,
            user_time_zone: row.user_time_zone,
            slot_ist: row.slot_ist,
            slot_user: row.slot_user,
            created_at: row.created_at,
        }
    }
}
