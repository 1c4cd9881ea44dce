//! Coordinator listing of user accounts.

#[cfg(test)]
#[path = "usuarios_test.rs"]
mod usuarios_test;

use leptos::prelude::*;

use super::{activo_label, or_dash};
use crate::components::pagination::Pager;
use crate::components::search_bar::SearchBar;
use crate::net::api::PAGE_SIZE;
use crate::net::types::Usuario;
use crate::state::resources::ListState;
use crate::state::session::{Role, SessionStore};

fn parse_activo(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn rol_label(rol: &str) -> &str {
    match Role::parse(rol) {
        Some(role) => role.label(),
        None => rol,
    }
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let list = RwSignal::new(ListState::<Usuario>::default());
    let page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let activo = RwSignal::new(None::<bool>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let query = crate::net::api::ListQuery {
            page: page.get(),
            search: search.get(),
            activo: activo.get(),
            ..crate::net::api::ListQuery::default()
        };
        let client = super::api_client(store.clone());
        super::spawn_list_load(list, async move { client.list_usuarios(&query).await });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    let on_search = Callback::new(move |text: String| {
        search.set(text);
        page.set(1);
    });
    let on_activo = move |ev: leptos::ev::Event| {
        activo.set(parse_activo(&event_target_value(&ev)));
        page.set(1);
    };

    let rows = move || {
        list.get()
            .rows
            .into_iter()
            .map(|user| {
                view! {
                    <tr>
                        <td>{user.nombre}</td>
                        <td>{user.email}</td>
                        <td>{rol_label(&user.rol).to_owned()}</td>
                        <td>{activo_label(user.activo)}</td>
                        <td>{or_dash(user.creado_en.as_deref())}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="resource">
            <h1>"Listado de Usuarios"</h1>
            <div class="resource__filters">
                <SearchBar placeholder="Nombre o correo" on_search=on_search/>
                <select class="resource__select" on:change=on_activo>
                    <option value="">"Todos"</option>
                    <option value="true">"Activos"</option>
                    <option value="false">"Inactivos"</option>
                </select>
            </div>
            <Show when=move || list.get().error.is_some()>
                <p class="resource__error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="resource__table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Correo"</th>
                        <th>"Rol"</th>
                        <th>"Activo"</th>
                        <th>"Creado"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || list.get().is_empty()>
                <p class="resource__empty">"Sin usuarios."</p>
            </Show>
            <Pager page=page total=Signal::derive(move || list.get().total) page_size=PAGE_SIZE/>
        </section>
    }
}
