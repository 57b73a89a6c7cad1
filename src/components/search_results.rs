use crate::components::star_rating::StarRating;
use crate::models::review::Review;
use leptos::*;
use leptos_router::A;

/// Compact result cards for the home-page search.
#[component]
pub fn SearchResults(results: ReadSignal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="search-results">
            {move || results.get().into_iter().map(|review| view! {
                <div class="search-result">
                    <img
                        src=review.property_images.first().cloned().unwrap_or_default()
                        alt=review.property_name.clone()
                    />
                    <div class="search-result-body">
                        <h3>{review.property_name}</h3>
                        <div class="review-rating">
                            <StarRating rating=review.rating/>
                            <span class="rating-count">{format!("({}件の口コミ)", review.review_count)}</span>
                        </div>
                        {review.details.map(|details| view! {
                            <p class="location">{details.location}</p>
                        })}
                        <A href="/reviews" class="detail-link">{ "一覧で見る" }</A>
                    </div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
