use crate::app::AppState;
use crate::models::property_review::PropertyReview;
use leptos::ev::SubmitEvent;
use leptos::*;

/// Form for submitting a new review for one property. The submission is
/// appended to the property's persisted list as-is.
#[component]
pub fn AddReviewModal(
    property_id: u32,
    property_name: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let (author, set_author) = create_signal(String::new());
    let (rating, set_rating) = create_signal(5u8); // Default rating to 5
    let (comment, set_comment) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.submissions.add_review(
            property_id,
            PropertyReview {
                author: author.get(),
                rating: rating.get(),
                comment: comment.get(),
                date: chrono::Local::now().format("%Y/%m/%d").to_string(),
            },
        );
        on_close.call(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal add-review-modal">
                <h2>{format!("{}の口コミを投稿", property_name)}</h2>
                <form on:submit=handle_submit>
                    <input
                        type="text"
                        placeholder="お名前"
                        on:input=move |e| set_author.set(event_target_value(&e))
                    />
                    <h3>{ "評価 (1-5)" }</h3>
                    <input
                        type="number"
                        min="1"
                        max="5"
                        value={rating.get_untracked()}
                        on:input=move |e| set_rating.set(event_target_value(&e).parse::<u8>().unwrap_or(5))
                    />
                    <textarea
                        placeholder="口コミを書く"
                        on:input=move |e| set_comment.set(event_target_value(&e))
                    />
                    <div class="modal-actions">
                        <button type="submit">{ "投稿する" }</button>
                        <button type="button" on:click=move |_| on_close.call(())>{ "キャンセル" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
