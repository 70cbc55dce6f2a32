use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::itinerary::Itinerary;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Draft,
    Confirmed,
    Completed,
}

impl Default for PlanStatus {
    fn default() -> Self {
        PlanStatus::Draft
    }
}

/// Incoming planning request, as posted by the client form.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlanRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub destination: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    pub interests: Vec<String>,
}

/// A stored travel plan: the original request plus the assembled itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlan {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interests: Vec<String>,
    pub itinerary: Itinerary,
    #[serde(default)]
    pub status: PlanStatus,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

impl TravelPlan {
    /// Bind a freshly assembled itinerary to its request. Timestamps are set
    /// here; the `_id` is assigned by the database on insert.
    pub fn from_request(request: &PlanRequest, itinerary: Itinerary) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            user_id: request.user_id.clone(),
            destination: request.destination.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            interests: request.interests.clone(),
            itinerary,
            status: PlanStatus::Draft,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
