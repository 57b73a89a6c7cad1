use crate::components::review_list::ReviewList;
use leptos::*;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! { <ReviewList/> }
}
