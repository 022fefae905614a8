use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scheduling::timezone::SlotDisplay;

/// Incoming contact/enquiry payload. A submission with `meeting_date` and
/// `meeting_time` set goes through the slot-booking path; without them it is
/// a plain enquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub inquiry_type: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    // Tailor-made trip fields
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub adults: Option<i32>,
    #[serde(default)]
    pub children: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub hotel_category: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    // Meeting slot fields
    #[serde(default)]
    pub meeting_date: Option<String>,
    #[serde(default)]
    pub meeting_time: Option<String>,
    #[serde(default)]
    pub user_time_zone: Option<String>,
}

impl ContactRequest {
    pub fn wants_meeting(&self) -> bool {
        self.meeting_date.is_some() || self.meeting_time.is_some()
    }

    /// The known fields in presentation order, skipping everything unset.
    fn field_rows(&self, slot: Option<&SlotDisplay>) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
        ];
        let optional = [
            ("Phone", &self.phone),
            ("Inquiry type", &self.inquiry_type),
            ("Subject", &self.subject),
            ("Message", &self.message),
            ("Country code", &self.country_code),
            ("Country", &self.country),
            ("Start date", &self.start_date),
            ("End date", &self.end_date),
            ("Hotel category", &self.hotel_category),
            ("Interests", &self.interests),
            ("Special requests", &self.special_requests),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                rows.push((label, value.clone()));
            }
        }
        if let Some(adults) = self.adults {
            rows.push(("Adults", adults.to_string()));
        }
        if let Some(children) = self.children {
            rows.push(("Children", children.to_string()));
        }
        if !self.destinations.is_empty() {
            rows.push(("Destinations", self.destinations.join(", ")));
        }
        match slot {
            Some(slot) => {
                rows.push(("Meeting slot (IST)", slot.ist.clone()));
                rows.push(("Meeting slot (your time)", slot.user.clone()));
            }
            // A meeting attempt that did not reserve still reports what was
            // asked for.
            None => {
                if let Some(date) = &self.meeting_date {
                    rows.push(("Requested meeting date", date.clone()));
                }
                if let Some(time) = &self.meeting_time {
                    rows.push(("Requested meeting time", time.clone()));
                }
            }
        }
        rows
    }

    pub fn email_text(&self, slot: Option<&SlotDisplay>) -> String {
        let mut text = String::new();
        for (label, value) in self.field_rows(slot) {
            text.push_str(&format!("{label}: {value}\n"));
        }
        text
    }

    pub fn email_html(&self, slot: Option<&SlotDisplay>) -> String {
        let mut html = String::from("<h2>New Contact Form Submission</h2><ul>");
        for (label, value) in self.field_rows(slot) {
            html.push_str(&format!("<li><strong>{label}:</strong> {value}</li>"));
        }
        html.push_str("</ul>");
        html
    }
}

/// Persisted submission row as surfaced to the admin back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub data: Vec<ContactSubmission>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
