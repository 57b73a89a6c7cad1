use leptos::ev::SubmitEvent;
use leptos::*;

/// Home-page search box. Invokes the callback with the trimmed term on
/// submit; an empty term is ignored.
#[component]
pub fn SearchForm(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (term, set_term) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let term = term.get().trim().to_string();
        if !term.is_empty() {
            on_search.call(term);
        }
    };

    view! {
        <form class="search-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder="物件名・エリアで検索"
                on:input=move |e| set_term.set(event_target_value(&e))
            />
            <button type="submit">{ "検索" }</button>
        </form>
    }
}
