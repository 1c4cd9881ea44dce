//! Coordinator review queue: approve or reject expedientes.
//!
//! Rejections need a justification; the form stays open with the backend
//! message when a review fails. A successful review reloads the page of
//! results so the row reflects its new state.

use leptos::prelude::*;

use super::or_dash;
use crate::components::pagination::Pager;
use crate::components::search_bar::SearchBar;
use crate::net::api::{PAGE_SIZE, ReviewDecision};
use crate::net::types::{Estado, Expediente};
use crate::state::resources::{ListState, Notice};
use crate::state::session::SessionStore;

/// Review request for one row, built from the UI inputs.
fn decision_for(reject: bool, justificacion: &str) -> Result<ReviewDecision, &'static str> {
    if reject { ReviewDecision::reject(justificacion) } else { Ok(ReviewDecision::Approve) }
}

#[component]
pub fn RevisarPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let list = RwSignal::new(ListState::<Expediente>::default());
    let page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let estado = RwSignal::new(Some(Estado::Pendiente));
    let reload = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<Notice>);
    let rejecting = RwSignal::new(None::<String>);
    let justificacion = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        Effect::new(move || {
            reload.track();
            let query = crate::net::api::ListQuery {
                page: page.get(),
                search: search.get(),
                estado: estado.get(),
                ..crate::net::api::ListQuery::default()
            };
            let client = super::api_client(store.clone());
            super::spawn_list_load(list, async move { client.list_expedientes(&query).await });
        });
    }

    let submit_review = move |codigo: String, reject: bool| {
        if busy.get_untracked() {
            return;
        }
        let decision = match decision_for(reject, &justificacion.get_untracked()) {
            Ok(decision) => decision,
            Err(message) => {
                notice.set(Some(Notice::Failure(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = super::api_client(store.clone());
            leptos::task::spawn_local(async move {
                match client.review_expediente(&codigo, &decision).await {
                    Ok(()) => {
                        let verb = if reject { "rechazado" } else { "aprobado" };
                        notice.set(Some(Notice::Success(format!("Expediente {codigo} {verb}."))));
                        rejecting.set(None);
                        justificacion.set(String::new());
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        leptos::logging::warn!("review of {codigo} failed: {e}");
                        notice.set(Some(Notice::Failure(e.to_string())));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, codigo, decision, reload);
            busy.set(false);
        }
    };
    let submit_review = StoredValue::new_local(submit_review);

    let on_search = Callback::new(move |text: String| {
        search.set(text);
        page.set(1);
    });
    let on_estado = move |ev: leptos::ev::Event| {
        estado.set(Estado::parse(&event_target_value(&ev)));
        page.set(1);
    };

    let row_view = move |exp: Expediente| {
        let codigo = exp.codigo.clone();
        let approve_codigo = codigo.clone();
        let reject_codigo = codigo.clone();
        let confirm_codigo = codigo.clone();
        let is_pending = exp.estado == Estado::Pendiente;
        let is_rejecting = {
            let codigo = codigo.clone();
            move || rejecting.get().as_deref() == Some(codigo.as_str())
        };
        view! {
            <tr>
                <td>{exp.codigo}</td>
                <td>{exp.descripcion}</td>
                <td>{or_dash(exp.tecnico_nombre.as_deref())}</td>
                <td class=format!("estado estado--{}", exp.estado.as_str())>{exp.estado.label()}</td>
                <td>{or_dash(exp.fecha_estado.as_deref())}</td>
                <td class="resource__actions">
                    <button
                        disabled=move || !is_pending || busy.get()
                        on:click=move |_| submit_review.with_value(|f| f(approve_codigo.clone(), false))
                    >
                        "Aprobar"
                    </button>
                    <button
                        disabled=move || !is_pending || busy.get()
                        on:click=move |_| {
                            justificacion.set(String::new());
                            rejecting.set(Some(reject_codigo.clone()));
                        }
                    >
                        "Rechazar"
                    </button>
                    <div class="resource__reject" hidden=move || !is_rejecting()>
                        <textarea
                            placeholder="Justificación"
                            prop:value=move || justificacion.get()
                            on:input=move |ev| justificacion.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            disabled=move || busy.get()
                            on:click=move |_| submit_review.with_value(|f| f(confirm_codigo.clone(), true))
                        >
                            "Confirmar rechazo"
                        </button>
                        <button on:click=move |_| rejecting.set(None)>"Cancelar"</button>
                    </div>
                </td>
            </tr>
        }
    };

    view! {
        <section class="resource">
            <h1>"Revisar Expedientes"</h1>
            <div class="resource__filters">
                <SearchBar placeholder="Código o descripción" on_search=on_search/>
                <select class="resource__select" on:change=on_estado>
                    {Estado::ALL
                        .into_iter()
                        .map(|e| {
                            view! {
                                <option value=e.as_str() selected=e == Estado::Pendiente>
                                    {e.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                    <option value="">"Todos los estados"</option>
                </select>
            </div>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let class = if n.is_failure() { "notice notice--error" } else { "notice notice--ok" };
                        view! { <p class=class>{n.message().to_owned()}</p> }
                    })
            }}
            <Show when=move || list.get().error.is_some()>
                <p class="resource__error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="resource__table">
                <thead>
                    <tr>
                        <th>"Código"</th>
                        <th>"Descripción"</th>
                        <th>"Técnico"</th>
                        <th>"Estado"</th>
                        <th>"Fecha de estado"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || list.get().rows.into_iter().map(row_view).collect_view()}
                </tbody>
            </table>
            <Show when=move || list.get().is_empty()>
                <p class="resource__empty">"No hay expedientes para revisar."</p>
            </Show>
            <Pager page=page total=Signal::derive(move || list.get().total) page_size=PAGE_SIZE/>
        </section>
    }
}
