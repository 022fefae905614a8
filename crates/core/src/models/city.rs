use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tour::TourSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCityRequest {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityListResponse {
    pub count: usize,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityWithToursResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tours: Vec<TourSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCityResponse {
    pub id: Uuid,
    pub deleted_tours: u64,
}
