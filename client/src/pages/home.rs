//! Landing page for any signed-in user.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::nav::{role_badge, visible_items};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = Signal::derive(move || store.session());

    let greeting = move || match session.get().display_name {
        Some(name) => format!("Bienvenido, {name}"),
        None => "Bienvenido".to_owned(),
    };
    let shortcuts = move || {
        visible_items(session.get().role)
            .into_iter()
            .filter(|item| item.href != "/")
            .map(|item| {
                view! {
                    <li class="home__shortcut">
                        <a href=item.href>{item.label}</a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="home">
            <h1>{greeting}</h1>
            <p class="home__role">"Rol: " {move || role_badge(session.get().role)}</p>
            <ul class="home__shortcuts">{shortcuts}</ul>
        </section>
    }
}
