pub mod home;
pub mod liked;
pub mod reviews;
