use serde::{Deserialize, Serialize};

/// One listed property, with its session-stable id and aggregate rating.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u32,                      // Unique ID for the property, stable for the session
    pub property_name: String,        // Display name
    pub property_images: Vec<String>, // Ordered image URLs, at least one
    pub rating: f64,                  // Average rating in [0, 5]
    pub review_count: u32,            // Number of submitted reviews
    #[serde(default)]
    pub liked: bool,                  // User-specific, overwritten at hydration
    pub details: Option<PropertyDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyDetails {
    pub rent: u32,             // Monthly rent in yen
    pub size: String,          // Free text, e.g. "25㎡"
    pub location: String,      // Free text
    pub features: Vec<String>, // Feature tags, order preserved for display
}

impl Review {
    /// Whether this property carries the given feature tag.
    /// A property without details satisfies no feature check.
    pub fn has_feature(&self, tag: &str) -> bool {
        self.details
            .as_ref()
            .map_or(false, |d| d.features.iter().any(|f| f == tag))
    }

    /// Rent for sorting purposes; unknown rent is treated as 0.
    pub fn rent_or_default(&self) -> u32 {
        self.details.as_ref().map_or(0, |d| d.rent)
    }
}
