use leptos::*;

/// Five-star row for an average rating; stars below the floor of the
/// rating are filled.
#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    view! {
        <span class="star-rating">
            {(0..5).map(|i| {
                let filled = (i as f64) < rating.floor();
                view! {
                    <span class=if filled { "star filled" } else { "star" }>
                        {if filled { "★" } else { "☆" }}
                    </span>
                }
            }).collect::<Vec<_>>()}
        </span>
    }
}
