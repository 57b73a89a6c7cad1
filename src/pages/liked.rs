use crate::api;
use crate::app::AppState;
use crate::components::star_rating::StarRating;
use leptos::*;

/// Shows every property the user has liked. Fed by the like tracker's
/// broadcast, so removing a like here or on the listing page updates the
/// view without shared in-memory state.
#[component]
pub fn LikedReviewsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let liked_ids = state.liked_ids;

    let all_reviews = api::fetch_reviews();
    let liked_reviews = create_memo(move |_| {
        let ids = liked_ids.get();
        all_reviews
            .iter()
            .filter(|review| ids.contains(&review.id))
            .cloned()
            .collect::<Vec<_>>()
    });

    let likes = state.likes.clone();
    let remove_like = Callback::new(move |id: u32| {
        likes.borrow_mut().toggle(id);
    });

    view! {
        <div class="liked-reviews">
            <h2>{ "いいねした物件" }</h2>
            {move || {
                let reviews = liked_reviews.get();
                if reviews.is_empty() {
                    view! { <p class="no-likes">{ "いいねした物件はまだありません。" }</p> }.into_view()
                } else {
                    reviews.into_iter().map(|review| {
                        let id = review.id;
                        view! {
                            <div class="liked-review-card">
                                <img
                                    src=review.property_images.first().cloned().unwrap_or_default()
                                    alt=review.property_name.clone()
                                />
                                <div class="liked-review-body">
                                    <h3>{review.property_name}</h3>
                                    <div class="review-rating">
                                        <StarRating rating=review.rating/>
                                        <span class="rating-count">{format!("({}件の口コミ)", review.review_count)}</span>
                                    </div>
                                    <button class="like-button liked" on:click=move |_| remove_like.call(id)>
                                        { "♥ いいねを外す" }
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>().into_view()
                }
            }}
        </div>
    }
}
