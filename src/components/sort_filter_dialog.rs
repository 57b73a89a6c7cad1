use crate::filters::{FilterOption, SortOption};
use leptos::*;

const SORT_CHOICES: [SortOption; 3] = [
    SortOption::Rating,
    SortOption::ReviewCount,
    SortOption::Rent,
];

/// Modal dialog with the sort radio group and the feature filter checkboxes.
#[component]
pub fn SortFilterDialog(
    sort: RwSignal<SortOption>,
    filters: RwSignal<Vec<FilterOption>>,
    open: RwSignal<bool>,
) -> impl IntoView {
    // Toggles one filter in or out of the active set.
    let toggle_filter = move |option: FilterOption| {
        filters.update(|active| {
            if active.contains(&option) {
                active.retain(|&f| f != option);
            } else {
                active.push(option);
            }
        });
    };

    view! {
        {move || open.get().then(|| view! {
            <div class="modal-overlay">
                <div class="modal sort-filter-dialog">
                    <h2>{ "並び替え・絞り込み" }</h2>
                    <div class="dialog-section">
                        <h3>{ "並び替え" }</h3>
                        {SORT_CHOICES.into_iter().map(|choice| view! {
                            <label class="dialog-option">
                                <input
                                    type="radio"
                                    name="sort"
                                    prop:checked=move || sort.get() == choice
                                    on:change=move |_| sort.set(choice)
                                />
                                <span>{choice.label()}</span>
                            </label>
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="dialog-section">
                        <h3>{ "絞り込み" }</h3>
                        {FilterOption::ALL.into_iter().map(|option| view! {
                            <label class="dialog-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.get().contains(&option)
                                    on:change=move |_| toggle_filter(option)
                                />
                                <span>{option.label()}</span>
                            </label>
                        }).collect::<Vec<_>>()}
                    </div>
                    <button class="close-button" on:click=move |_| open.set(false)>{ "閉じる" }</button>
                </div>
            </div>
        })}
    }
}
