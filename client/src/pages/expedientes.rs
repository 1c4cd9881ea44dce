//! Technician view of expedientes: search, filter by state, paginate.

use leptos::prelude::*;

use super::{activo_label, or_dash};
use crate::components::pagination::Pager;
use crate::components::search_bar::SearchBar;
use crate::net::api::PAGE_SIZE;
use crate::net::types::{Estado, Expediente};
use crate::state::resources::ListState;
use crate::state::session::SessionStore;

#[component]
pub fn ExpedientesPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let list = RwSignal::new(ListState::<Expediente>::default());
    let page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let estado = RwSignal::new(None::<Estado>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let query = crate::net::api::ListQuery {
            page: page.get(),
            search: search.get(),
            estado: estado.get(),
            ..crate::net::api::ListQuery::default()
        };
        let client = super::api_client(store.clone());
        super::spawn_list_load(list, async move { client.list_expedientes(&query).await });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    let on_search = Callback::new(move |text: String| {
        search.set(text);
        page.set(1);
    });
    let on_estado = move |ev: leptos::ev::Event| {
        estado.set(Estado::parse(&event_target_value(&ev)));
        page.set(1);
    };

    let rows = move || {
        list.get()
            .rows
            .into_iter()
            .map(|exp| {
                view! {
                    <tr>
                        <td>{exp.codigo}</td>
                        <td>{exp.descripcion}</td>
                        <td>{or_dash(exp.fecha_registro.as_deref())}</td>
                        <td class=format!("estado estado--{}", exp.estado.as_str())>{exp.estado.label()}</td>
                        <td>{or_dash(exp.aprobador_nombre.as_deref())}</td>
                        <td>{or_dash(exp.justificacion.as_deref())}</td>
                        <td>{activo_label(exp.activo)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="resource">
            <h1>"Registro de Expedientes"</h1>
            <div class="resource__filters">
                <SearchBar placeholder="Código o descripción" on_search=on_search/>
                <select class="resource__select" on:change=on_estado>
                    <option value="">"Todos los estados"</option>
                    {Estado::ALL
                        .into_iter()
                        .map(|e| view! { <option value=e.as_str()>{e.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || list.get().error.is_some()>
                <p class="resource__error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="resource__table">
                <thead>
                    <tr>
                        <th>"Código"</th>
                        <th>"Descripción"</th>
                        <th>"Registro"</th>
                        <th>"Estado"</th>
                        <th>"Aprobador"</th>
                        <th>"Justificación"</th>
                        <th>"Activo"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || list.get().loading>
                <p class="resource__loading">"Cargando..."</p>
            </Show>
            <Show when=move || list.get().is_empty()>
                <p class="resource__empty">"Sin expedientes."</p>
            </Show>
            <Pager page=page total=Signal::derive(move || list.get().total) page_size=PAGE_SIZE/>
        </section>
    }
}
