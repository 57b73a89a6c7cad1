pub mod add_review_modal;
pub mod header;
pub mod property_reviews;
pub mod review_list;
pub mod search_form;
pub mod search_results;
pub mod sort_filter_dialog;
pub mod star_rating;
