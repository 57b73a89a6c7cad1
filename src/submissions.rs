/// User-submitted property reviews, persisted per property.
///
/// A plain read-modify-write against the storage adapter: no validation,
/// no id assignment, no deduplication. Single-tab, last write wins.
use crate::models::property_review::PropertyReview;
use crate::storage::{self, StorageAdapter};
use leptos::logging::log;
use std::rc::Rc;

pub fn review_key(property_id: u32) -> String {
    format!("propertyReviews_{}", property_id)
}

pub struct ReviewSubmissions {
    storage: Rc<dyn StorageAdapter>,
}

impl ReviewSubmissions {
    pub fn new(storage: Rc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// Appends a review to the property's persisted list, creating it if
    /// absent. A malformed persisted list is replaced rather than repaired.
    pub fn add_review(&self, property_id: u32, review: PropertyReview) {
        let key = review_key(property_id);
        let mut reviews: Vec<PropertyReview> = storage::get_json(self.storage.as_ref(), &key);
        reviews.push(review);
        storage::set_json(self.storage.as_ref(), &key, &reviews);
        log!("[REVIEWS] Property {} now has {} reviews", property_id, reviews.len());
    }

    pub fn reviews_for(&self, property_id: u32) -> Vec<PropertyReview> {
        storage::get_json(self.storage.as_ref(), &review_key(property_id))
    }
}
