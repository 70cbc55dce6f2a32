use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::mongo::DATABASE;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    let places_result = check_places_api();
    health
        .services
        .insert("places_lookup".to_string(), places_result.clone());

    let email_result = check_email();
    health
        .services
        .insert("email".to_string(), email_result.clone());

    // Overall status degrades when a collaborator is down; the planner keeps
    // working on fallback data either way.
    if mongo_result.status != "ok" || places_result.status != "ok" || email_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client.database(DATABASE).run_command(doc! {"ping": 1}).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            eprintln!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

// Keys are not guaranteed to be ASCII, so mask on char boundaries.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", prefix, suffix)
    } else {
        "***".to_string()
    }
}

fn check_places_api() -> ServiceStatus {
    match env::var("GOOGLE_PLACES_API_KEY") {
        Ok(key) => {
            let masked_key = mask_key(&key);

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("Places API key configured ({})", masked_key)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("GOOGLE_PLACES_API_KEY not configured; itineraries use fallback data".to_string()),
        },
    }
}

fn check_email() -> ServiceStatus {
    let user = env::var("EMAIL_USER").ok();
    let pass = env::var("EMAIL_PASS").ok();

    if user.is_some() && pass.is_some() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Email configured for {}", user.unwrap())),
        }
    } else {
        let mut missing = Vec::new();
        if user.is_none() {
            missing.push("EMAIL_USER");
        }
        if pass.is_none() {
            missing.push("EMAIL_PASS");
        }

        ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Missing environment variables: {}", missing.join(", "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_key_keeps_only_edges() {
        assert_eq!(mask_key("AIzaSyExampleKey"), "AIza***eKey");
    }

    #[test]
    fn mask_key_handles_multibyte_keys() {
        // Char-based masking must not split a UTF-8 sequence.
        assert_eq!(mask_key("ключ-примера-key"), "ключ***-key");
        assert_eq!(mask_key("日本語のキーです長い"), "日本語の***です長い");
    }

    #[test]
    fn mask_key_hides_short_keys_entirely() {
        assert_eq!(mask_key("short"), "***");
        assert_eq!(mask_key(""), "***");
    }
}
