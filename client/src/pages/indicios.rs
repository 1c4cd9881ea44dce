//! Indicios of one expediente, chosen by its code.

use leptos::prelude::*;

use super::{activo_label, or_dash};
use crate::components::pagination::Pager;
use crate::components::search_bar::SearchBar;
use crate::net::api::PAGE_SIZE;
use crate::net::types::Indicio;
use crate::state::resources::ListState;
use crate::state::session::SessionStore;

#[component]
pub fn IndiciosPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let list = RwSignal::new(ListState::<Indicio>::default());
    let expediente = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let codigo = expediente.get();
        let query = crate::net::api::ListQuery {
            page: page.get(),
            search: search.get(),
            ..crate::net::api::ListQuery::default()
        };
        if codigo.is_empty() {
            list.set(ListState::default());
            return;
        }
        let client = super::api_client(store.clone());
        super::spawn_list_load(list, async move { client.list_indicios(&codigo, &query).await });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    let on_expediente = Callback::new(move |codigo: String| {
        expediente.set(codigo);
        search.set(String::new());
        page.set(1);
    });
    let on_search = Callback::new(move |text: String| {
        search.set(text);
        page.set(1);
    });

    let rows = move || {
        list.get()
            .rows
            .into_iter()
            .map(|ind| {
                view! {
                    <tr>
                        <td>{ind.codigo}</td>
                        <td>{ind.descripcion}</td>
                        <td>{or_dash(ind.color.as_deref())}</td>
                        <td>{or_dash(ind.tamano.as_deref())}</td>
                        <td>{ind.peso.map_or_else(|| "—".to_owned(), |p| p.to_string())}</td>
                        <td>{or_dash(ind.fecha_registro.as_deref())}</td>
                        <td>{activo_label(ind.activo)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="resource">
            <h1>"Registro de Indicios"</h1>
            <SearchBar placeholder="Código de expediente" button_label="Abrir" on_search=on_expediente/>
            <Show
                when=move || !expediente.get().is_empty()
                fallback=|| view! { <p class="resource__hint">"Ingresa el código de un expediente."</p> }
            >
                <h2>"Expediente " {move || expediente.get()}</h2>
                <SearchBar placeholder="Buscar indicio" on_search=on_search/>
                <Show when=move || list.get().error.is_some()>
                    <p class="resource__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <table class="resource__table">
                    <thead>
                        <tr>
                            <th>"Código"</th>
                            <th>"Descripción"</th>
                            <th>"Color"</th>
                            <th>"Tamaño"</th>
                            <th>"Peso"</th>
                            <th>"Registro"</th>
                            <th>"Activo"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Show when=move || list.get().is_empty()>
                    <p class="resource__empty">"Sin indicios."</p>
                </Show>
                <Pager page=page total=Signal::derive(move || list.get().total) page_size=PAGE_SIZE/>
            </Show>
        </section>
    }
}
