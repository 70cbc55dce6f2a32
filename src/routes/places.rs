use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::services::famous_places_service::{FamousPlacesError, FamousPlacesService};

#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    pub city: Option<String>,
}

/*
    GET /api/travel-plans/places?city=<city>
*/
pub async fn famous_places(query: web::Query<PlacesQuery>) -> impl Responder {
    let city = match query.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => return HttpResponse::BadRequest().json(json!({ "error": "City is required" })),
    };

    let service = FamousPlacesService::from_env();
    match service.famous_places(&city).await {
        Ok(places) => HttpResponse::Ok().json(json!({ "city": city, "places": places })),
        Err(FamousPlacesError::CityNotFound(city)) => {
            HttpResponse::NotFound().json(json!({ "error": format!("City not found: {}", city) }))
        }
        Err(err) => {
            eprintln!("Failed to fetch famous places for {}: {}", city, err);
            HttpResponse::InternalServerError().body("Failed to fetch famous places")
        }
    }
}
