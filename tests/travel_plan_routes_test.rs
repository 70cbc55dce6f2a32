mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

fn sample_itinerary_json() -> serde_json::Value {
    json!({
        "destination": "Lisbon",
        "duration": "1 days",
        "interests": ["Food"],
        "itinerary": [
            {
                "day": 1,
                "date": "2025-06-01",
                "activities": [
                    {
                        "time": "09:00 AM",
                        "activity": "Day 1: Try local cuisine",
                        "location": "Traditional Restaurant",
                        "type": "food"
                    }
                ]
            }
        ]
    })
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
async fn test_create_travel_plan_endpoint() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travel-plans")
        .set_json(&json!({
            "userId": "traveler-1",
            "destination": "Lisbon",
            "startDate": "2025-06-01",
            "endDate": "2025-06-03",
            "interests": ["Food"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
}

#[actix_rt::test]
async fn test_list_travel_plans_endpoint() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/travel-plans/traveler-1")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.is_array());
}

#[actix_rt::test]
async fn test_export_pdf_returns_pdf_bytes() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travel-plans/export-pdf")
        .set_json(&json!({ "itinerary": sample_itinerary_json() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/pdf"
    );

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[actix_rt::test]
async fn test_export_pdf_rejects_malformed_payload() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travel-plans/export-pdf")
        .set_json(&json!({ "wrong": true }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_send_email_requires_address() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travel-plans/send-email")
        .set_json(&json!({
            "itinerary": sample_itinerary_json(),
            "email": "   "
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_send_email_fails_without_configuration() {
    std::env::remove_var("EMAIL_USER");
    std::env::remove_var("EMAIL_PASS");

    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travel-plans/send-email")
        .set_json(&json!({
            "itinerary": sample_itinerary_json(),
            "email": "traveler@example.com"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}

#[actix_rt::test]
async fn test_places_requires_city() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/travel-plans/places")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
