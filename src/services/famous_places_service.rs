use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const OPENTRIPMAP_RADIUS_URL: &str = "https://api.opentripmap.com/0.1/en/places/radius";
const OPENTRIPMAP_DETAIL_URL: &str = "https://api.opentripmap.com/0.1/en/places/xid";
const USER_AGENT: &str = "travel-planner-api/1.0";

const SEARCH_RADIUS_METERS: u32 = 10_000;
const MAX_PLACES: u32 = 20;

#[derive(Debug)]
pub enum FamousPlacesError {
    CityNotFound(String),
    HttpError(reqwest::Error),
}

impl fmt::Display for FamousPlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamousPlacesError::CityNotFound(city) => write!(f, "City not found: {}", city),
            FamousPlacesError::HttpError(err) => write!(f, "HTTP error: {}", err),
        }
    }
}

impl Error for FamousPlacesError {}

impl From<reqwest::Error> for FamousPlacesError {
    fn from(err: reqwest::Error) -> Self {
        FamousPlacesError::HttpError(err)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct RadiusPlace {
    xid: String,
}

#[derive(Debug, Deserialize)]
struct PlaceDetail {
    #[serde(default)]
    name: String,
    xid: String,
    #[serde(default)]
    kinds: String,
    address: Option<PlaceAddress>,
    wikipedia_extracts: Option<WikipediaExtract>,
    preview: Option<PlacePreview>,
    point: Option<PlacePoint>,
}

#[derive(Debug, Deserialize)]
struct PlaceAddress {
    road: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WikipediaExtract {
    text: String,
}

#[derive(Debug, Deserialize)]
struct PlacePreview {
    source: String,
}

#[derive(Debug, Deserialize)]
struct PlacePoint {
    lat: f64,
    lon: f64,
}

/// A notable place near the requested city, as returned to the client.
#[derive(Debug, Serialize, Clone)]
pub struct FamousPlace {
    pub name: String,
    pub address: String,
    pub kinds: String,
    pub wikipedia: String,
    pub image: String,
    pub xid: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Points-of-interest lookup: geocode the city via Nominatim, then pull
/// nearby interesting places from OpenTripMap.
#[derive(Clone)]
pub struct FamousPlacesService {
    client: Client,
    api_key: String,
}

impl FamousPlacesService {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        // OpenTripMap offers free keys; the shared demo key keeps the route
        // usable out of the box.
        let api_key = env::var("OPENTRIPMAP_API_KEY")
            .unwrap_or_else(|_| "5ae2e3f221c38a28845f05b611c5446a".to_string());
        Self::new(api_key)
    }

    pub async fn famous_places(&self, city: &str) -> Result<Vec<FamousPlace>, FamousPlacesError> {
        let (lat, lon) = self.geocode(city).await?;
        let places = self.nearby_places(lat, lon).await?;

        // Detail lookups are independent; fetch them concurrently and drop
        // the ones that fail.
        let futures: Vec<_> = places
            .iter()
            .map(|place| self.place_detail(&place.xid))
            .collect();

        let details = join_all(futures)
            .await
            .into_iter()
            .filter_map(|result| result.ok())
            .filter(|place| !place.name.is_empty())
            .collect();

        Ok(details)
    }

    async fn geocode(&self, city: &str) -> Result<(String, String), FamousPlacesError> {
        let results: Vec<GeocodeResult> = self
            .client
            .get(NOMINATIM_URL)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .json()
            .await?;

        match results.into_iter().next() {
            Some(result) => Ok((result.lat, result.lon)),
            None => Err(FamousPlacesError::CityNotFound(city.to_string())),
        }
    }

    async fn nearby_places(
        &self,
        lat: String,
        lon: String,
    ) -> Result<Vec<RadiusPlace>, FamousPlacesError> {
        let places = self
            .client
            .get(OPENTRIPMAP_RADIUS_URL)
            .query(&[
                ("radius", SEARCH_RADIUS_METERS.to_string()),
                ("lat", lat),
                ("lon", lon),
                ("kinds", "interesting_places".to_string()),
                ("format", "json".to_string()),
                ("limit", MAX_PLACES.to_string()),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(places)
    }

    async fn place_detail(&self, xid: &str) -> Result<FamousPlace, FamousPlacesError> {
        let detail: PlaceDetail = self
            .client
            .get(format!("{}/{}", OPENTRIPMAP_DETAIL_URL, xid))
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?
            .json()
            .await?;

        let address = detail
            .address
            .and_then(|a| a.road.or(a.suburb).or(a.city))
            .unwrap_or_default();

        Ok(FamousPlace {
            name: detail.name,
            address,
            kinds: detail.kinds,
            wikipedia: detail
                .wikipedia_extracts
                .map(|w| w.text)
                .unwrap_or_default(),
            image: detail.preview.map(|p| p.source).unwrap_or_default(),
            xid: detail.xid,
            lat: detail.point.as_ref().map(|p| p.lat),
            lon: detail.point.as_ref().map(|p| p.lon),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_deserializes_with_sparse_fields() {
        let detail: PlaceDetail = serde_json::from_str(
            r#"{"xid": "W123", "name": "Castelo de S. Jorge", "kinds": "castles,interesting_places", "point": {"lat": 38.71, "lon": -9.13}}"#,
        )
        .unwrap();
        assert_eq!(detail.name, "Castelo de S. Jorge");
        assert!(detail.address.is_none());
        assert!(detail.wikipedia_extracts.is_none());
        assert_eq!(detail.point.unwrap().lat, 38.71);
    }

    #[test]
    fn address_prefers_road_over_city() {
        let detail: PlaceDetail = serde_json::from_str(
            r#"{"xid": "W1", "name": "Spot", "address": {"road": "Rua Augusta", "city": "Lisbon"}}"#,
        )
        .unwrap();
        let address = detail.address.and_then(|a| a.road.or(a.suburb).or(a.city));
        assert_eq!(address.as_deref(), Some("Rua Augusta"));
    }
}
