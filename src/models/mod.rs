pub mod property_review;
pub mod review;
