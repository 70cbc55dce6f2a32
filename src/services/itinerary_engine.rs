use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::models::itinerary::{
    ActivityCategory, ActivityInstance, ActivityTemplate, DayPlan, Itinerary,
};
use crate::models::travel_plan::PlanRequest;
use crate::services::activity_catalog::ActivityCatalog;

const MAX_ACTIVITIES_PER_DAY: usize = 5;
const MAX_TEMPLATES_PER_CATEGORY: usize = 8;

/// Fixed time slots for a day's activities, in schedule order.
const SLOT_TIMES: [&str; 5] = ["09:00 AM", "11:00 AM", "02:00 PM", "04:00 PM", "06:00 PM"];
/// Slot used if selection ever exceeds the per-day cap.
const OVERFLOW_SLOT_TIME: &str = "10:00 AM";

const NIGHTLIFE_TIME: &str = "08:00 PM";
const HIKING_TIME: &str = "10:00 AM";

/// External lookup for real places matching a category's search type.
/// Failure or an empty result is never fatal; the engine falls back to its
/// static tables.
pub trait PlacesLookup {
    fn search(
        &self,
        destination: &str,
        search_type: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ActivityTemplate>, Box<dyn Error>>>;
}

#[derive(Debug)]
pub enum ValidationError {
    MissingDestination,
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingDestination => write!(f, "Destination must not be empty"),
            ValidationError::InvalidDateRange { start, end } => {
                write!(f, "End date {} precedes start date {}", end, start)
            }
        }
    }
}

impl Error for ValidationError {}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub max_activities_per_day: usize,
    pub max_templates_per_category: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_activities_per_day: MAX_ACTIVITIES_PER_DAY,
            max_templates_per_category: MAX_TEMPLATES_PER_CATEGORY,
        }
    }
}

/// Resolve interest tags to the categories scheduled into the itinerary.
/// Output preserves canonical category order and is deduplicated; a set with
/// no recognized tags selects all six categories.
pub fn resolve_categories(interests: &[String]) -> Vec<ActivityCategory> {
    let selected: Vec<ActivityCategory> = ActivityCategory::ALL
        .iter()
        .copied()
        .filter(|category| {
            interests
                .iter()
                .any(|tag| ActivityCategory::from_interest(tag) == Some(*category))
        })
        .collect();

    if selected.is_empty() {
        ActivityCategory::ALL.to_vec()
    } else {
        selected
    }
}

/// Interest tags handled outside the six-category model: each appends one
/// fixed activity per day rather than competing for a time slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialInterests {
    pub nightlife: bool,
    pub hiking: bool,
}

impl SpecialInterests {
    pub fn from_tags(interests: &[String]) -> Self {
        let has = |wanted: &str| {
            interests
                .iter()
                .any(|tag| tag.trim().eq_ignore_ascii_case(wanted))
        };
        Self {
            nightlife: has("nightlife"),
            hiking: has("hiking"),
        }
    }
}

/// Assembles day-by-day itineraries from a date range and interest tags.
///
/// The engine is a pure function of its inputs, the injected catalog/config,
/// the injected places lookup, and the caller's random source. It holds no
/// state between calls.
pub struct ItineraryEngine<P> {
    config: EngineConfig,
    catalog: ActivityCatalog,
    places: Option<P>,
}

impl<P: PlacesLookup> ItineraryEngine<P> {
    pub fn new(places: Option<P>) -> Self {
        Self::with_config(places, EngineConfig::default())
    }

    pub fn with_config(places: Option<P>, config: EngineConfig) -> Self {
        Self {
            config,
            catalog: ActivityCatalog::default(),
            places,
        }
    }

    /// Build the full itinerary for a planning request.
    ///
    /// Validation happens up front; once inputs pass, assembly cannot fail.
    /// The only randomness is the per-day category shuffle and the template
    /// pick, both drawn from `rng`.
    pub async fn assemble<R: Rng>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<Itinerary, ValidationError> {
        let destination = request.destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingDestination);
        }

        // Inclusive day difference: a same-day trip is 1 day.
        let days = (request.end_date - request.start_date).num_days() + 1;
        if days < 1 {
            return Err(ValidationError::InvalidDateRange {
                start: request.start_date,
                end: request.end_date,
            });
        }

        let categories = resolve_categories(&request.interests);
        let special = SpecialInterests::from_tags(&request.interests);

        // Candidate templates are resolved once per category, not per day.
        let sources = self.resolve_sources(destination, &categories).await;

        let mut day_plans = Vec::with_capacity(days as usize);
        for day in 1..=days as u32 {
            let date = request.start_date + Duration::days(i64::from(day) - 1);
            day_plans.push(self.build_day(day, date, destination, &categories, &sources, special, rng));
        }

        Ok(Itinerary {
            destination: destination.to_string(),
            duration: format!("{} days", days),
            interests: request.interests.clone(),
            itinerary: day_plans,
        })
    }

    /// Produce the candidate template list for each category, in priority
    /// order: curated city table, places lookup, generic fallback. Every
    /// canonical category ends up with a non-empty list.
    async fn resolve_sources(
        &self,
        destination: &str,
        categories: &[ActivityCategory],
    ) -> HashMap<ActivityCategory, Vec<ActivityTemplate>> {
        if let Some(curated) = self.catalog.curated(destination) {
            return categories
                .iter()
                .map(|&category| (category, curated.templates(category)))
                .collect();
        }

        println!("No curated data for {}, attempting places lookup...", destination);

        let mut sources = HashMap::new();
        for &category in categories {
            let mut templates = Vec::new();

            if let Some(places) = &self.places {
                match places.search(destination, category.places_search_type()).await {
                    Ok(found) => {
                        templates = found;
                        templates.truncate(self.config.max_templates_per_category);
                    }
                    Err(err) => {
                        eprintln!(
                            "Places lookup failed for {} ({}): {}. Using fallback data.",
                            destination,
                            category.as_str(),
                            err
                        );
                    }
                }
            }

            if templates.is_empty() {
                templates = self.catalog.fallback(category, destination);
            }

            sources.insert(category, templates);
        }

        sources
    }

    fn build_day<R: Rng>(
        &self,
        day: u32,
        date: NaiveDate,
        destination: &str,
        categories: &[ActivityCategory],
        sources: &HashMap<ActivityCategory, Vec<ActivityTemplate>>,
        special: SpecialInterests,
        rng: &mut R,
    ) -> DayPlan {
        let mut day_categories = categories.to_vec();
        day_categories.shuffle(rng);
        day_categories.truncate(self.config.max_activities_per_day);

        let mut activities = Vec::new();
        for (slot, &category) in day_categories.iter().enumerate() {
            // An empty candidate list skips the category for this day.
            let template = match sources.get(&category).and_then(|t| t.choose(rng)) {
                Some(template) => template,
                None => continue,
            };

            activities.push(ActivityInstance {
                time: SLOT_TIMES.get(slot).copied().unwrap_or(OVERFLOW_SLOT_TIME).to_string(),
                activity: format!("Day {}: {}", day, template.name),
                location: template.location.clone(),
                category,
            });
        }

        if special.nightlife {
            activities.push(ActivityInstance {
                time: NIGHTLIFE_TIME.to_string(),
                activity: format!("Day {}: Nightlife experience", day),
                location: format!("{} Entertainment District", destination),
                category: ActivityCategory::Culture,
            });
        }

        if special.hiking {
            activities.push(ActivityInstance {
                time: HIKING_TIME.to_string(),
                activity: format!("Day {}: Hiking adventure", day),
                location: format!("{} Nature Trails", destination),
                category: ActivityCategory::Adventure,
            });
        }

        DayPlan {
            day,
            date: date.format("%Y-%m-%d").to_string(),
            activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct NoPlaces;

    impl PlacesLookup for NoPlaces {
        async fn search(
            &self,
            _destination: &str,
            _search_type: &str,
        ) -> Result<Vec<ActivityTemplate>, Box<dyn Error>> {
            Ok(Vec::new())
        }
    }

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn request(destination: &str, start: &str, end: &str, interests: &[&str]) -> PlanRequest {
        PlanRequest {
            user_id: "traveler-1".to_string(),
            destination: destination.to_string(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            interests: tags(interests),
        }
    }

    #[test]
    fn resolver_matches_tags_case_insensitively() {
        let categories = resolve_categories(&tags(&["Sightseeing", "food & dining", "SHOPPING"]));
        assert_eq!(
            categories,
            vec![
                ActivityCategory::Sightseeing,
                ActivityCategory::Food,
                ActivityCategory::Shopping,
            ]
        );
    }

    #[test]
    fn resolver_falls_back_to_all_categories() {
        assert_eq!(resolve_categories(&[]), ActivityCategory::ALL.to_vec());
        assert_eq!(
            resolve_categories(&tags(&["Stargazing", "Nightlife"])),
            ActivityCategory::ALL.to_vec()
        );
    }

    #[test]
    fn resolver_deduplicates_tags() {
        let categories = resolve_categories(&tags(&["Food & Dining", "food", "Food"]));
        assert_eq!(categories, vec![ActivityCategory::Food]);
    }

    #[test]
    fn special_interests_are_case_insensitive() {
        let special = SpecialInterests::from_tags(&tags(&["NightLife", "hiking"]));
        assert!(special.nightlife);
        assert!(special.hiking);

        let none = SpecialInterests::from_tags(&tags(&["Food"]));
        assert!(!none.nightlife);
        assert!(!none.hiking);
    }

    #[test]
    fn rejects_empty_destination() {
        let engine = ItineraryEngine::new(None::<NoPlaces>);
        let req = request("   ", "2025-06-01", "2025-06-03", &[]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = tokio_test::block_on(engine.assemble(&req, &mut rng)).unwrap_err();
        assert!(matches!(err, ValidationError::MissingDestination));
    }

    #[test]
    fn rejects_end_before_start() {
        let engine = ItineraryEngine::new(None::<NoPlaces>);
        let req = request("Lisbon", "2025-06-05", "2025-06-01", &[]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = tokio_test::block_on(engine.assemble(&req, &mut rng)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateRange { .. }));
    }

    #[test]
    fn single_day_trip_has_one_plan() {
        let engine = ItineraryEngine::new(None::<NoPlaces>);
        let req = request("Lisbon", "2025-06-01", "2025-06-01", &[]);
        let mut rng = StdRng::seed_from_u64(7);
        let itinerary = tokio_test::block_on(engine.assemble(&req, &mut rng)).unwrap();
        assert_eq!(itinerary.duration, "1 days");
        assert_eq!(itinerary.itinerary.len(), 1);
        assert_eq!(itinerary.itinerary[0].date, "2025-06-01");
    }

    #[test]
    fn day_names_carry_the_day_prefix() {
        let engine = ItineraryEngine::new(None::<NoPlaces>);
        let req = request("Lisbon", "2025-06-01", "2025-06-02", &["Food"]);
        let mut rng = StdRng::seed_from_u64(21);
        let itinerary = tokio_test::block_on(engine.assemble(&req, &mut rng)).unwrap();
        for plan in &itinerary.itinerary {
            for activity in &plan.activities {
                assert!(activity.activity.starts_with(&format!("Day {}: ", plan.day)));
            }
        }
    }
}
