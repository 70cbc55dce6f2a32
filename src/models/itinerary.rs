use serde::{Deserialize, Serialize};

/// The six canonical activity categories used for scheduling.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Food,
    Culture,
    Relaxation,
    Adventure,
    Shopping,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Sightseeing,
        ActivityCategory::Food,
        ActivityCategory::Culture,
        ActivityCategory::Relaxation,
        ActivityCategory::Adventure,
        ActivityCategory::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Sightseeing => "sightseeing",
            ActivityCategory::Food => "food",
            ActivityCategory::Culture => "culture",
            ActivityCategory::Relaxation => "relaxation",
            ActivityCategory::Adventure => "adventure",
            ActivityCategory::Shopping => "shopping",
        }
    }

    /// The place-type string used when querying the places lookup for this
    /// category.
    pub fn places_search_type(&self) -> &'static str {
        match self {
            ActivityCategory::Sightseeing => "tourist_attraction",
            ActivityCategory::Food => "restaurant",
            ActivityCategory::Culture => "museum",
            ActivityCategory::Relaxation => "park",
            ActivityCategory::Adventure => "amusement_park",
            ActivityCategory::Shopping => "shopping_mall",
        }
    }

    /// Map a free-text interest tag to a category. Matching is
    /// case-insensitive; unrecognized tags map to nothing.
    pub fn from_interest(tag: &str) -> Option<ActivityCategory> {
        match tag.trim().to_lowercase().as_str() {
            "sightseeing" => Some(ActivityCategory::Sightseeing),
            "food" | "food & dining" => Some(ActivityCategory::Food),
            "culture" => Some(ActivityCategory::Culture),
            "relaxation" => Some(ActivityCategory::Relaxation),
            "adventure" => Some(ActivityCategory::Adventure),
            "shopping" => Some(ActivityCategory::Shopping),
            _ => None,
        }
    }
}

/// An unbound (name, location) candidate for an activity. Templates carry no
/// day or time information; that is bound in when a day plan is built.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ActivityTemplate {
    pub name: String,
    pub location: String,
}

impl ActivityTemplate {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// A template bound to a specific day and time slot.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ActivityInstance {
    pub time: String,
    pub activity: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: ActivityCategory,
}

/// One day's date plus its ordered activities. Day indices are 1-based and
/// contiguous across the trip.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub activities: Vec<ActivityInstance>,
}

/// The complete multi-day plan returned for one planning request.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub destination: String,
    pub duration: String,
    pub interests: Vec<String>,
    pub itinerary: Vec<DayPlan>,
}
