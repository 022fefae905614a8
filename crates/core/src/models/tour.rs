use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: Uuid,
    pub city_id: Uuid,
    pub title: String,
    pub duration: String,
    pub destinations: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub image: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Trimmed projection used when listing a city's tours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSummary {
    pub id: Uuid,
    pub title: String,
    pub duration: String,
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTourRequest {
    pub city_id: Uuid,
    pub title: String,
    pub duration: String,
    pub destinations: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTourRequest {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub destinations: Option<Vec<String>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFeaturedRequest {
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourListResponse {
    pub count: usize,
    pub tours: Vec<Tour>,
}
