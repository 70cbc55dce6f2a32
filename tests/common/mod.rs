use actix_web::{web, App, HttpResponse, Responder};

use travel_planner_api::routes;

/// Test app wiring the real non-database handlers alongside mocks for the
/// handlers that need MongoDB.
pub struct TestApp;

impl TestApp {
    pub fn create_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api").service(
                    web::scope("/travel-plans")
                        .route("/places", web::get().to(routes::places::famous_places))
                        .route(
                            "/export-pdf",
                            web::post().to(routes::travel_plan::export_pdf),
                        )
                        .route(
                            "/send-email",
                            web::post().to(routes::travel_plan::send_email),
                        )
                        .route("", web::post().to(create_plan_mock))
                        .route("/{user_id}", web::get().to(list_plans_mock)),
                ),
            )
    }
}

// Mock handlers standing in for the MongoDB-backed routes
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

async fn create_plan_mock() -> impl Responder {
    HttpResponse::Created().json(serde_json::json!({"status": "draft"}))
}

async fn list_plans_mock() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}
