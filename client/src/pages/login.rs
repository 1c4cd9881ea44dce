//! Login page: email and password against the backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Shown when either field is blank.
pub const MISSING_FIELDS: &str = "Por favor completa correo y contraseña.";

/// Require both fields to be non-blank.
///
/// The email is trimmed; the password is returned exactly as typed.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when either trimmed value is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::config::ApiBase;
            use crate::net::auth::AuthGateway;
            use crate::net::transport::BrowserTransport;

            let gateway = AuthGateway::new(BrowserTransport, ApiBase::from_build(), store.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match gateway.login(&email_value, &password_value).await {
                    Ok(()) => {
                        busy.set(false);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gestión de Expedientes"</h1>
                <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="correo@ejemplo.com"
                        autocomplete="username"
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        autocomplete="current-password"
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
