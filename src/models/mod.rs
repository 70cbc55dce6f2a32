pub mod itinerary;
pub mod travel_plan;
