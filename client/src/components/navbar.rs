//! Top navigation bar with role-filtered entries.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::LOGIN_PATH;
use crate::util::nav::{NavItem, role_badge, visible_items};

/// Navigation bar; hidden while no session is present.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let logout_store = store.clone();
    let on_logout = move |_| {
        logout_store.clear_session();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let session = Signal::derive(move || store.session());

    view! {
        <nav class="navbar" hidden=move || !session.get().is_authenticated()>
            <a class="navbar__brand" href="/">"Gestiones"</a>
            <ul class="navbar__items">
                {move || render_items(visible_items(session.get().role))}
            </ul>
            <div class="navbar__user">
                <span class="navbar__name">
                    {move || session.get().display_name.unwrap_or_default()}
                </span>
                <span class="navbar__badge">{move || role_badge(session.get().role)}</span>
                <button class="navbar__logout" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </div>
        </nav>
    }
}

fn render_items(items: Vec<NavItem>) -> impl IntoView {
    let (grouped, top): (Vec<_>, Vec<_>) = items.into_iter().partition(|item| item.group.is_some());
    let heading = grouped.first().and_then(|item| item.group);

    let top = top
        .into_iter()
        .map(|item| view! { <li><a href=item.href>{item.label}</a></li> })
        .collect_view();
    let submenu = heading.map(|heading| {
        let entries = grouped
            .into_iter()
            .map(|item| view! { <li><a href=item.href>{item.label}</a></li> })
            .collect_view();
        view! {
            <li class="navbar__group">
                <details>
                    <summary>{heading}</summary>
                    <ul>{entries}</ul>
                </details>
            </li>
        }
    });

    view! { {top} {submenu} }
}
