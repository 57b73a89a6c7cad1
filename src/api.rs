/// Mock data source for property listings.
///
/// Stands in for the real listings API; the shape matches what that API
/// will return so swapping in a network fetch only touches this module.
use crate::models::review::{PropertyDetails, Review};

/// Returns the full working set of property reviews, seeded synchronously
/// once per page load.
pub fn fetch_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            property_name: "アワシマンション".to_string(),
            property_images: vec![
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994".to_string(),
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2".to_string(),
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688".to_string(),
            ],
            rating: 4.5,
            review_count: 10,
            liked: false,
            details: Some(PropertyDetails {
                rent: 0,
                size: "25㎡".to_string(),
                location: "会津若松市 駅から徒歩5分".to_string(),
                features: vec![
                    "エアコン".to_string(),
                    "バス・トイレ別".to_string(),
                    "宅配ボックス".to_string(),
                ],
            }),
        },
        Review {
            id: 2,
            property_name: "Cathyマンション".to_string(),
            property_images: vec![
                "https://images.unsplash.com/photo-1580587771525-78b9dba3b914".to_string(),
                "https://images.unsplash.com/photo-1584622650111-993a426fbf0a".to_string(),
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb".to_string(),
            ],
            rating: 4.2,
            review_count: 8,
            liked: false,
            details: Some(PropertyDetails {
                rent: 999999,
                size: "30㎡".to_string(),
                location: "喜多方市 バス停から徒歩3分".to_string(),
                features: vec![
                    "駐車場付き".to_string(),
                    "ペット可".to_string(),
                    "オートロック".to_string(),
                ],
            }),
        },
        Review {
            id: 3,
            property_name: "延松ハイツ".to_string(),
            property_images: vec![
                "https://images.unsplash.com/photo-1576941089067-2de3c901e126".to_string(),
                "https://images.unsplash.com/photo-1598928506311-c55ded91a20c".to_string(),
                "https://images.unsplash.com/photo-1515263487990-61b07816b324".to_string(),
            ],
            rating: 3.8,
            review_count: 15,
            liked: false,
            details: Some(PropertyDetails {
                rent: 70000,
                size: "22㎡".to_string(),
                location: "会津若松市 駅から徒歩10分".to_string(),
                features: vec![
                    "インターネット無料".to_string(),
                    "コインランドリー".to_string(),
                    "バルコニー付き".to_string(),
                ],
            }),
        },
    ]
}

/// Case-insensitive substring search over property name and location,
/// backing the home-page search box.
pub fn search_reviews(term: &str) -> Vec<Review> {
    let term = term.to_lowercase();
    fetch_reviews()
        .into_iter()
        .filter(|review| {
            review.property_name.to_lowercase().contains(&term)
                || review
                    .details
                    .as_ref()
                    .map_or(false, |d| d.location.to_lowercase().contains(&term))
        })
        .collect()
}
