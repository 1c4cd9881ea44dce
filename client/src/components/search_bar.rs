//! Submit-on-enter search input.

use leptos::prelude::*;

/// Search box that reports its trimmed text on submit.
#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
    #[prop(optional, into)] button_label: Option<String>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(text.get_untracked().trim().to_owned());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button class="search-bar__button" type="submit">
                {button_label.unwrap_or_else(|| "Buscar".to_owned())}
            </button>
        </form>
    }
}
