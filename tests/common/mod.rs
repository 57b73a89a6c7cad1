use ioa::models::review::{PropertyDetails, Review};

/// Builds a listing for tests. `rent: None` produces a review without
/// details, i.e. no rent and no feature tags.
pub fn review(id: u32, rating: f64, review_count: u32, rent: Option<u32>, features: &[&str]) -> Review {
    Review {
        id,
        property_name: format!("物件{}", id),
        property_images: vec![
            format!("https://example.com/{}-a.jpg", id),
            format!("https://example.com/{}-b.jpg", id),
        ],
        rating,
        review_count,
        liked: false,
        details: rent.map(|rent| PropertyDetails {
            rent,
            size: "25㎡".to_string(),
            location: "会津若松市 駅から徒歩5分".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }),
    }
}
