use crate::api;
use crate::components::search_form::SearchForm;
use crate::components::search_results::SearchResults;
use crate::models::review::Review;
use leptos::*;
use leptos_router::A;

/// Landing page: brand, a link into the listing and the property search.
#[component]
pub fn HomePage() -> impl IntoView {
    let (results, set_results) = create_signal(Vec::<Review>::new());

    let handle_search = Callback::new(move |term: String| {
        set_results.set(api::search_reviews(&term));
    });

    view! {
        <div class="home">
            <div class="home-title">
                <h1>
                    <span class="accent">{ "会津" }</span>{ "の賃貸の" }
                    <span class="accent bold">{ "Real" }</span>
                </h1>
                <div class="home-subtitle">
                    <div>{ "IoA" }</div>
                    <div class="tagline">{ "Information Of Aizu apartment" }</div>
                </div>
            </div>

            <A href="/reviews" class="cta-button">{ "物件一覧を見る" }</A>

            <SearchForm on_search=handle_search/>

            {move || (!results.get().is_empty()).then(|| view! {
                <SearchResults results=results/>
            })}
        </div>
    }
}
