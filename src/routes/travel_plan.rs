use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use futures::TryStreamExt;
use mongodb::Client;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo::{DATABASE, PLANS_COLLECTION};
use crate::models::itinerary::Itinerary;
use crate::models::travel_plan::{PlanRequest, TravelPlan};
use crate::services::email_service::{EmailConfig, EmailService};
use crate::services::itinerary_engine::ItineraryEngine;
use crate::services::pdf_service;
use crate::services::places_service::GooglePlacesService;

fn build_engine() -> ItineraryEngine<GooglePlacesService> {
    // The places lookup is optional; without an API key the engine degrades
    // to its static fallback tables.
    let places = match GooglePlacesService::from_env() {
        Ok(service) => Some(service),
        Err(e) => {
            println!("Places lookup not available: {}. Using fallback data.", e);
            None
        }
    };
    ItineraryEngine::new(places)
}

/*
    POST /api/travel-plans
*/
pub async fn create(data: web::Data<Arc<Client>>, input: web::Json<PlanRequest>) -> impl Responder {
    let request = input.into_inner();
    println!(
        "Creating travel plan for {} ({} to {})",
        request.destination, request.start_date, request.end_date
    );

    let engine = build_engine();
    let mut rng = StdRng::from_entropy();

    let itinerary = match engine.assemble(&request, &mut rng).await {
        Ok(itinerary) => itinerary,
        Err(err) => {
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    let client = data.into_inner();
    let collection: mongodb::Collection<TravelPlan> =
        client.database(DATABASE).collection(PLANS_COLLECTION);

    let mut plan = TravelPlan::from_request(&request, itinerary);
    match collection.insert_one(&plan).await {
        Ok(result) => {
            plan.id = result.inserted_id.as_object_id();
            HttpResponse::Created().json(plan)
        }
        Err(err) => {
            eprintln!("Failed to insert travel plan: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create travel plan.")
        }
    }
}

/*
    GET /api/travel-plans/{user_id}
*/
pub async fn get_by_user(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let user_id = path.into_inner();
    let client = data.into_inner();
    let collection: mongodb::Collection<TravelPlan> =
        client.database(DATABASE).collection(PLANS_COLLECTION);

    let cursor = collection.find(doc! { "user_id": &user_id }).await;

    match cursor {
        Ok(cursor) => match cursor.try_collect::<Vec<TravelPlan>>().await {
            Ok(plans) => HttpResponse::Ok().json(plans),
            Err(err) => {
                eprintln!("Failed to collect travel plans: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to process travel plans")
            }
        },
        Err(err) => {
            eprintln!("Failed to retrieve travel plans: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve travel plans")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportPdfRequest {
    pub itinerary: Itinerary,
}

/*
    POST /api/travel-plans/export-pdf
*/
pub async fn export_pdf(input: web::Json<ExportPdfRequest>) -> impl Responder {
    match pdf_service::render_itinerary(&input.itinerary) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"itinerary.pdf\"",
            ))
            .body(bytes),
        Err(err) => {
            eprintln!("Failed to render itinerary PDF: {}", err);
            HttpResponse::InternalServerError().body("Failed to export itinerary")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub itinerary: Itinerary,
    pub email: String,
    pub subject: Option<String>,
}

/*
    POST /api/travel-plans/send-email
*/
pub async fn send_email(input: web::Json<SendEmailRequest>) -> impl Responder {
    let request = input.into_inner();
    if request.email.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Email address is required" }));
    }

    let config = match EmailConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Email not configured: {}", err);
            return HttpResponse::InternalServerError().body("Email is not configured");
        }
    };

    let service = match EmailService::new(config) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to build email transport: {}", err);
            return HttpResponse::InternalServerError().body("Failed to send email");
        }
    };

    let subject = request
        .subject
        .unwrap_or_else(|| "Your Travel Itinerary".to_string());

    match service
        .send_itinerary(&request.email, &request.itinerary, &subject)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => {
            eprintln!("Failed to send itinerary email: {}", err);
            HttpResponse::InternalServerError().body("Failed to send email")
        }
    }
}
