use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::itinerary::ActivityTemplate;
use crate::services::itinerary_engine::PlacesLookup;

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const MAX_RESULTS: usize = 8;

#[derive(Debug)]
pub enum PlacesError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            PlacesError::HttpError(err) => write!(f, "HTTP error: {}", err),
            PlacesError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for PlacesError {}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::HttpError(err)
    }
}

#[derive(Debug, Clone)]
pub struct GooglePlacesConfig {
    pub api_key: String,
}

impl GooglePlacesConfig {
    pub fn from_env() -> Result<Self, PlacesError> {
        let api_key = env::var("GOOGLE_PLACES_API_KEY").map_err(|_| {
            PlacesError::EnvironmentError("GOOGLE_PLACES_API_KEY not set".to_string())
        })?;
        Ok(Self { api_key })
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: String,
    formatted_address: Option<String>,
}

/// Google Places text-search client used as the engine's places lookup.
#[derive(Clone)]
pub struct GooglePlacesService {
    client: Client,
    config: GooglePlacesConfig,
}

impl GooglePlacesService {
    pub fn new(config: GooglePlacesConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Construct from the process environment, if an API key is configured.
    pub fn from_env() -> Result<Self, PlacesError> {
        Ok(Self::new(GooglePlacesConfig::from_env()?))
    }
}

impl PlacesLookup for GooglePlacesService {
    async fn search(
        &self,
        destination: &str,
        search_type: &str,
    ) -> Result<Vec<ActivityTemplate>, Box<dyn Error>> {
        let query = format!("{} in {}", search_type, destination);

        let response = self
            .client
            .get(TEXT_SEARCH_URL)
            .query(&[
                ("query", query.as_str()),
                ("key", self.config.api_key.as_str()),
                ("type", search_type),
            ])
            .send()
            .await
            .map_err(PlacesError::from)?;

        let body: TextSearchResponse = response.json().await.map_err(PlacesError::from)?;

        if body.status != "OK" {
            // ZERO_RESULTS and quota errors both degrade to the fallback
            // tables; neither is an engine failure.
            return Ok(Vec::new());
        }

        let templates = body
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(|place| {
                let location = place
                    .formatted_address
                    .unwrap_or_else(|| place.name.clone());
                ActivityTemplate::new(format!("Visit {}", place.name), location)
            })
            .collect();

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ok_status_yields_no_templates() {
        let body: TextSearchResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert_eq!(body.status, "ZERO_RESULTS");
        assert!(body.results.is_empty());
    }

    #[test]
    fn place_results_deserialize_without_address() {
        let body: TextSearchResponse = serde_json::from_str(
            r#"{"status": "OK", "results": [{"name": "Alfama"}, {"name": "Belem Tower", "formatted_address": "Av. Brasilia, Lisbon"}]}"#,
        )
        .unwrap();
        assert_eq!(body.results.len(), 2);
        assert!(body.results[0].formatted_address.is_none());
        assert_eq!(
            body.results[1].formatted_address.as_deref(),
            Some("Av. Brasilia, Lisbon")
        );
    }
}
