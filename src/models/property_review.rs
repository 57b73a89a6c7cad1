use serde::{Deserialize, Serialize};

/// A user-submitted comment attached to a property. Persisted as-is under
/// the property's storage key; the core logic does not constrain the schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyReview {
    pub author: String,
    pub rating: u8,      // 1-5
    pub comment: String,
    pub date: String,    // Stamped at submission time, e.g. "2026/08/24"
}
