pub mod activity_catalog;
pub mod email_service;
pub mod famous_places_service;
pub mod itinerary_engine;
pub mod pdf_service;
pub mod places_service;
