use crate::app::AppState;
use leptos::*;

/// Lists every persisted submission for one property.
#[component]
pub fn PropertyReviews(property_id: u32) -> impl IntoView {
    let state = expect_context::<AppState>();
    let reviews = state.submissions.reviews_for(property_id);

    view! {
        <div class="property-reviews">
            {if reviews.is_empty() {
                view! { <p class="no-reviews">{ "まだ口コミがありません。" }</p> }.into_view()
            } else {
                reviews.into_iter().map(|review| view! {
                    <div class="property-review">
                        <div class="property-review-head">
                            <span class="author">{review.author}</span>
                            <span class="rating">{format!("評価: {}/5", review.rating)}</span>
                            <span class="date">{review.date}</span>
                        </div>
                        <p>{review.comment}</p>
                    </div>
                }).collect::<Vec<_>>().into_view()
            }}
        </div>
    }
}
