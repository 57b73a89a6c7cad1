/// Component to display the property listing.
/// Seeds the working set once, hydrates liked flags from storage, and renders
/// the sorted/filtered cards with per-property image carousels, like buttons
/// and the view/add review modals.
use crate::api;
use crate::app::AppState;
use crate::carousel::CarouselState;
use crate::components::add_review_modal::AddReviewModal;
use crate::components::property_reviews::PropertyReviews;
use crate::components::sort_filter_dialog::SortFilterDialog;
use crate::components::star_rating::StarRating;
use crate::filters::{apply_sort_filters, FilterOption, SortOption};
use leptos::*;

#[component]
pub fn ReviewList() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Seed once per page load, then overwrite liked flags from the
    // persisted like-set.
    let initial = {
        let mut reviews = api::fetch_reviews();
        state.likes.borrow().hydrate(&mut reviews);
        reviews
    };
    let (reviews, set_reviews) = create_signal(initial);

    let sort_option = create_rw_signal(SortOption::default());
    let filter_options = create_rw_signal(Vec::<FilterOption>::new());
    let (carousel, set_carousel) = create_signal(CarouselState::new());

    let dialog_open = create_rw_signal(false);
    let viewing = create_rw_signal(None::<(u32, String)>);
    let adding = create_rw_signal(None::<(u32, String)>);

    // The displayed list is a pure function of the working set, the sort
    // key and the active filters.
    let displayed = create_memo(move |_| {
        apply_sort_filters(&reviews.get(), sort_option.get(), &filter_options.get())
    });

    let likes = state.likes.clone();
    let toggle_like = Callback::new(move |id: u32| {
        let liked_ids = likes.borrow_mut().toggle(id);
        set_reviews.update(|all| {
            for review in all.iter_mut() {
                review.liked = liked_ids.contains(&review.id);
            }
        });
    });

    view! {
        <div class="review-list">
            <div class="review-list-head">
                <h2>{ "物件一覧" }</h2>
                <button class="outline" on:click=move |_| dialog_open.set(true)>
                    { "並び替え・絞り込み" }
                </button>
            </div>

            <SortFilterDialog sort=sort_option filters=filter_options open=dialog_open/>

            {move || displayed.get().into_iter().map(|review| {
                let id = review.id;
                let liked = review.liked;
                let image_count = review.property_images.len();
                let images = review.property_images.clone();
                let alt_name = review.property_name.clone();
                let view_name = review.property_name.clone();
                let add_name = review.property_name.clone();

                view! {
                    <div class="review-card">
                        <div class="review-card-image">
                            <img
                                src=move || {
                                    let index = carousel.with(|c| c.current(id));
                                    images.get(index).cloned().unwrap_or_default()
                                }
                                alt=alt_name
                            />
                            {(image_count > 1).then(|| view! {
                                <button
                                    class="carousel-button prev"
                                    aria-label="前の画像"
                                    on:click=move |_| set_carousel.update(|c| c.retreat(id, image_count))
                                >
                                    { "‹" }
                                </button>
                                <button
                                    class="carousel-button next"
                                    aria-label="次の画像"
                                    on:click=move |_| set_carousel.update(|c| c.advance(id, image_count))
                                >
                                    { "›" }
                                </button>
                            })}
                        </div>
                        <div class="review-card-body">
                            <h2>{review.property_name.clone()}</h2>
                            <div class="review-rating">
                                <StarRating rating=review.rating/>
                                <span class="rating-value">{format!("{:.1}", review.rating)}</span>
                                <span class="rating-count">{format!("({}件の口コミ)", review.review_count)}</span>
                            </div>
                            {review.details.clone().map(|details| view! {
                                <div class="review-details">
                                    <h3>{ "物件詳細" }</h3>
                                    <ul>
                                        <li><span class="label">{ "家賃: " }</span>{format!("{}円", details.rent)}</li>
                                        <li><span class="label">{ "広さ: " }</span>{details.size}</li>
                                        <li><span class="label">{ "立地: " }</span>{details.location}</li>
                                        <li>
                                            <span class="label">{ "特徴:" }</span>
                                            <ul class="features">
                                                {details.features.into_iter().map(|feature| view! {
                                                    <li>{feature}</li>
                                                }).collect::<Vec<_>>()}
                                            </ul>
                                        </li>
                                    </ul>
                                </div>
                            })}
                            <div class="review-card-actions">
                                <button
                                    class=if liked { "like-button liked" } else { "like-button" }
                                    on:click=move |_| toggle_like.call(id)
                                >
                                    {if liked { "♥ いいね済み" } else { "♡ いいね" }}
                                </button>
                                <div class="review-card-buttons">
                                    <button class="outline" on:click=move |_| viewing.set(Some((id, view_name.clone())))>
                                        { "口コミを見る" }
                                    </button>
                                    <button class="outline" on:click=move |_| adding.set(Some((id, add_name.clone())))>
                                        { "口コミを投稿" }
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}

            {move || viewing.get().map(|(property_id, property_name)| view! {
                <div class="modal-overlay">
                    <div class="modal property-reviews-modal">
                        <h2>{format!("{}の口コミ", property_name)}</h2>
                        <p>{ "この物件に関する全ての口コミを表示しています。" }</p>
                        <PropertyReviews property_id=property_id/>
                        <button class="close-button" on:click=move |_| viewing.set(None)>{ "閉じる" }</button>
                    </div>
                </div>
            })}

            {move || adding.get().map(|(property_id, property_name)| view! {
                <AddReviewModal
                    property_id=property_id
                    property_name=property_name
                    on_close=Callback::new(move |_| adding.set(None))
                />
            })}
        </div>
    }
}
