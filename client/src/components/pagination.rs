//! Pager controls shared by the list views.

use leptos::prelude::*;

use crate::util::pagination::page_window;

#[component]
pub fn Pager(page: RwSignal<u32>, #[prop(into)] total: Signal<u64>, page_size: u32) -> impl IntoView {
    let window = move || page_window(page.get(), page_size, total.get());

    view! {
        <div class="pager">
            <span class="pager__range">
                {move || {
                    let w = window();
                    format!("{}–{} de {}", w.from, w.to, total.get())
                }}
            </span>
            <button
                class="pager__prev"
                disabled=move || !window().has_prev()
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Anterior"
            </button>
            <span class="pager__page">
                {move || {
                    let w = window();
                    format!("Página {} de {}", w.page, w.total_pages)
                }}
            </span>
            <button
                class="pager__next"
                disabled=move || !window().has_next()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Siguiente"
            </button>
        </div>
    }
}
