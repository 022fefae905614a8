use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bulk drag-and-drop reorder payload shared by cities, tours and reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub entries: Vec<ReorderEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderEntry {
    pub id: Uuid,
    pub sort_order: i32,
}
