use crate::models::itinerary::{ActivityCategory, ActivityTemplate};

/// Static activity data: curated per-city tables plus a destination-agnostic
/// fallback table. The catalog sits behind the source selector so destination
/// coverage can grow without touching engine logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityCatalog;

/// Curated (name, location) entries for one city, keyed per category.
#[derive(Debug)]
pub struct CuratedCity {
    key: &'static str,
    sightseeing: &'static [(&'static str, &'static str)],
    food: &'static [(&'static str, &'static str)],
    culture: &'static [(&'static str, &'static str)],
    relaxation: &'static [(&'static str, &'static str)],
    adventure: &'static [(&'static str, &'static str)],
    shopping: &'static [(&'static str, &'static str)],
}

impl CuratedCity {
    fn entries(&self, category: ActivityCategory) -> &'static [(&'static str, &'static str)] {
        match category {
            ActivityCategory::Sightseeing => self.sightseeing,
            ActivityCategory::Food => self.food,
            ActivityCategory::Culture => self.culture,
            ActivityCategory::Relaxation => self.relaxation,
            ActivityCategory::Adventure => self.adventure,
            ActivityCategory::Shopping => self.shopping,
        }
    }

    pub fn templates(&self, category: ActivityCategory) -> Vec<ActivityTemplate> {
        self.entries(category)
            .iter()
            .map(|(name, location)| ActivityTemplate::new(*name, *location))
            .collect()
    }
}

impl ActivityCatalog {
    /// Look up the curated table for a destination. Matching is a
    /// case-insensitive exact match on the city key.
    pub fn curated(&self, destination: &str) -> Option<&'static CuratedCity> {
        let key = destination.trim().to_lowercase();
        CURATED_CITIES.iter().find(|city| city.key == key)
    }

    /// Destination-agnostic fallback templates for a category, with generic
    /// placeholder text substituted for the destination. Always 8 entries.
    pub fn fallback(&self, category: ActivityCategory, destination: &str) -> Vec<ActivityTemplate> {
        fallback_entries(category)
            .iter()
            .map(|(name, location)| {
                ActivityTemplate::new(
                    name.replace("local", destination),
                    location.replace("City Center", &format!("{} City Center", destination)),
                )
            })
            .collect()
    }
}

fn fallback_entries(category: ActivityCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        ActivityCategory::Sightseeing => &[
            ("Visit local landmarks", "City Center"),
            ("Explore historical monuments", "Old Town"),
            ("See famous architecture", "Architectural District"),
            ("Visit local museums", "Museum District"),
            ("Walk through city gardens", "Botanical Gardens"),
            ("See local palaces", "Royal District"),
            ("Explore city markets", "Central Market"),
            ("Visit religious sites", "Sacred Places"),
        ],
        ActivityCategory::Food => &[
            ("Try local cuisine", "Traditional Restaurant"),
            ("Visit food markets", "Food Market"),
            ("Wine tasting experience", "Wine Cellar"),
            ("Cooking class", "Culinary School"),
            ("Street food tour", "Street Food District"),
            ("Fine dining experience", "Upscale Restaurant"),
            ("Coffee culture tour", "Coffee District"),
            ("Local brewery visit", "Craft Brewery"),
        ],
        ActivityCategory::Culture => &[
            ("Attend local festival", "Festival Grounds"),
            ("Visit art galleries", "Art District"),
            ("Watch traditional dance", "Cultural Center"),
            ("Learn local language", "Language School"),
            ("Visit religious sites", "Sacred Places"),
            ("Attend theater performance", "Theater District"),
            ("Explore local crafts", "Craft Village"),
            ("Visit cultural museums", "Cultural Museum"),
        ],
        ActivityCategory::Relaxation => &[
            ("Spa and wellness", "Wellness Center"),
            ("Yoga session", "Yoga Studio"),
            ("Meditation retreat", "Meditation Garden"),
            ("Beach relaxation", "Beach Resort"),
            ("Mountain retreat", "Mountain Lodge"),
            ("Hot springs visit", "Hot Springs"),
            ("Forest bathing", "Nature Reserve"),
            ("Sunset viewing", "Sunset Point"),
        ],
        ActivityCategory::Adventure => &[
            ("Hiking adventure", "Mountain Trails"),
            ("Water sports", "Water Sports Center"),
            ("Rock climbing", "Climbing Center"),
            ("Cycling tour", "Cycling Routes"),
            ("Zip lining", "Adventure Park"),
            ("Cave exploration", "Cave System"),
            ("Wildlife safari", "Wildlife Reserve"),
            ("Paragliding", "Paragliding Site"),
        ],
        ActivityCategory::Shopping => &[
            ("Visit shopping malls", "Shopping Center"),
            ("Explore local markets", "Local Market"),
            ("Antique shopping", "Antique District"),
            ("Fashion boutiques", "Fashion Street"),
            ("Craft shopping", "Craft Market"),
            ("Bookstore browsing", "Book District"),
            ("Jewelry shopping", "Jewelry Quarter"),
            ("Souvenir hunting", "Tourist Market"),
        ],
    }
}

static CURATED_CITIES: &[CuratedCity] = &[
    CuratedCity {
        key: "london",
        sightseeing: &[
            ("Visit Big Ben and Houses of Parliament", "Westminster, London"),
            ("Explore the Tower of London", "Tower Hill, London"),
            ("See Buckingham Palace", "Westminster, London"),
            ("Walk across Tower Bridge", "Tower Bridge, London"),
            ("Visit Westminster Abbey", "Westminster, London"),
            ("Explore St. Paul's Cathedral", "City of London"),
            ("See the London Eye", "South Bank, London"),
            ("Visit Trafalgar Square", "Westminster, London"),
        ],
        food: &[
            ("Traditional Fish & Chips", "Poetry Fish & Chips, London"),
            ("Afternoon Tea at The Ritz", "The Ritz London"),
            ("Borough Market Food Tour", "Borough Market, London Bridge"),
            ("Gourmet Dinner at Sketch", "Sketch, Mayfair"),
            ("Indian Cuisine at Dishoom", "Dishoom, Covent Garden"),
            ("Pub Lunch at The Churchill Arms", "The Churchill Arms, Kensington"),
            ("Chocolate Workshop at Hotel Chocolat", "Hotel Chocolat, Covent Garden"),
            ("Gin Tasting at Beefeater Distillery", "Beefeater Distillery, Kennington"),
        ],
        culture: &[
            ("Visit the British Museum", "British Museum, Bloomsbury"),
            ("Explore the National Gallery", "National Gallery, Trafalgar Square"),
            ("Watch a West End Show", "West End Theatre District"),
            ("Visit the Tate Modern", "Tate Modern, Bankside"),
            ("Explore Camden Market", "Camden Market, Camden Town"),
            ("Visit the Natural History Museum", "Natural History Museum, South Kensington"),
            ("Explore the Victoria & Albert Museum", "V&A Museum, South Kensington"),
            ("Visit Shakespeare's Globe", "Shakespeare's Globe, Bankside"),
        ],
        relaxation: &[
            ("Spa Day at The Dorchester", "The Dorchester Spa, Mayfair"),
            ("Yoga in Hyde Park", "Hyde Park, London"),
            ("Boat Ride on the Thames", "Thames River Cruise"),
            ("Afternoon in Kew Gardens", "Royal Botanic Gardens, Kew"),
            ("Relax at Hampstead Heath", "Hampstead Heath, North London"),
            ("Visit the Sky Garden", "Sky Garden, Fenchurch Street"),
            ("Walk along the South Bank", "South Bank, London"),
            ("Visit Regent's Park", "Regent's Park, London"),
        ],
        adventure: &[
            ("Climb the O2 Arena", "The O2 Arena, Greenwich"),
            ("Cycling in Richmond Park", "Richmond Park, London"),
            ("Rock Climbing at The Castle", "The Castle Climbing Centre, Stoke Newington"),
            ("Zip Line at Go Ape", "Go Ape, Battersea Park"),
            ("Kayaking on the Thames", "Thames Kayaking, Putney"),
            ("Escape Room Challenge", "Escape Hunt, Oxford Street"),
            ("Indoor Skydiving", "iFLY Indoor Skydiving, Milton Keynes"),
            ("High Ropes Course", "Tree Top Adventure, Battersea"),
        ],
        shopping: &[
            ("Shop at Oxford Street", "Oxford Street, London"),
            ("Explore Covent Garden Market", "Covent Garden Market"),
            ("Visit Harrods", "Harrods, Knightsbridge"),
            ("Shop at Portobello Market", "Portobello Road Market, Notting Hill"),
            ("Explore Carnaby Street", "Carnaby Street, Soho"),
            ("Visit Liberty London", "Liberty London, Regent Street"),
            ("Shop at Selfridges", "Selfridges, Oxford Street"),
            ("Explore Spitalfields Market", "Spitalfields Market, East London"),
        ],
    },
    CuratedCity {
        key: "indore",
        sightseeing: &[
            ("Visit Rajwada Palace", "Rajwada Palace, Indore"),
            ("Explore Lal Bagh Palace", "Lal Bagh Palace, Indore"),
            ("See Kanch Mandir", "Kanch Mandir, Indore"),
            ("Visit Central Museum", "Central Museum, Indore"),
            ("Explore Annapurna Temple", "Annapurna Temple, Indore"),
            ("See Gomatgiri", "Gomatgiri, Indore"),
            ("Visit Bada Ganpati", "Bada Ganpati Temple, Indore"),
            ("Explore Chhatris", "Chhatris, Indore"),
        ],
        food: &[
            ("Try Poha Jalebi", "56 Dukaan, Indore"),
            ("Visit Sarafa Bazaar", "Sarafa Bazaar, Indore"),
            ("Try Bhutte ka Kees", "Local Food Stalls, Indore"),
            ("Visit Chappan Dukaan", "56 Dukaan, Indore"),
            ("Try Garadu", "Street Food Vendors, Indore"),
            ("Visit Food Street", "Food Street, Indore"),
            ("Try Sabudana Khichdi", "Local Restaurants, Indore"),
            ("Visit Traditional Restaurants", "Old Indore Area"),
        ],
        culture: &[
            ("Visit Central Museum", "Central Museum, Indore"),
            ("Explore Tribal Museum", "Tribal Museum, Indore"),
            ("Watch Traditional Dance", "Cultural Centers, Indore"),
            ("Visit Art Galleries", "Art District, Indore"),
            ("Explore Local Crafts", "Craft Markets, Indore"),
            ("Visit Religious Sites", "Temple District, Indore"),
            ("Attend Cultural Events", "Cultural Centers, Indore"),
            ("Learn Local Traditions", "Heritage Centers, Indore"),
        ],
        relaxation: &[
            ("Visit Pipliyapala Regional Park", "Pipliyapala Regional Park, Indore"),
            ("Yoga at Local Centers", "Yoga Centers, Indore"),
            ("Meditation at Temples", "Temple Gardens, Indore"),
            ("Walk in City Parks", "City Parks, Indore"),
            ("Visit Botanical Gardens", "Botanical Gardens, Indore"),
            ("Relax at Water Bodies", "Lakes and Ponds, Indore"),
            ("Spa and Wellness", "Wellness Centers, Indore"),
            ("Sunset Viewing", "High Points, Indore"),
        ],
        adventure: &[
            ("Trekking at Local Hills", "Hills around Indore"),
            ("Cycling Tours", "Cycling Routes, Indore"),
            ("Rock Climbing", "Adventure Centers, Indore"),
            ("Water Sports", "Water Sports Centers, Indore"),
            ("Zip Lining", "Adventure Parks, Indore"),
            ("Escape Rooms", "Escape Room Centers, Indore"),
            ("Indoor Sports", "Sports Complexes, Indore"),
            ("Outdoor Activities", "Adventure Parks, Indore"),
        ],
        shopping: &[
            ("Shop at 56 Dukaan", "56 Dukaan, Indore"),
            ("Visit Sarafa Bazaar", "Sarafa Bazaar, Indore"),
            ("Explore Rajwada Market", "Rajwada Market, Indore"),
            ("Visit Shopping Malls", "Shopping Malls, Indore"),
            ("Shop for Traditional Items", "Traditional Markets, Indore"),
            ("Visit Fashion Street", "Fashion Street, Indore"),
            ("Explore Local Markets", "Local Markets, Indore"),
            ("Shop for Handicrafts", "Craft Markets, Indore"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_lookup_is_case_insensitive() {
        let catalog = ActivityCatalog::default();
        assert!(catalog.curated("London").is_some());
        assert!(catalog.curated("LONDON").is_some());
        assert!(catalog.curated(" indore ").is_some());
        assert!(catalog.curated("Atlantis").is_none());
    }

    #[test]
    fn every_curated_category_has_eight_entries() {
        let catalog = ActivityCatalog::default();
        for city in ["london", "indore"] {
            let curated = catalog.curated(city).unwrap();
            for category in ActivityCategory::ALL {
                assert_eq!(curated.templates(category).len(), 8, "{city} {category:?}");
            }
        }
    }

    #[test]
    fn fallback_substitutes_destination_placeholders() {
        let catalog = ActivityCatalog::default();
        let templates = catalog.fallback(ActivityCategory::Sightseeing, "Lisbon");
        assert_eq!(templates.len(), 8);
        assert_eq!(templates[0].name, "Visit Lisbon landmarks");
        assert_eq!(templates[0].location, "Lisbon City Center");
        // Entries without placeholders pass through untouched.
        assert_eq!(templates[1].location, "Old Town");
    }
}
