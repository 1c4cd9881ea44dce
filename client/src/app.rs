//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{FallbackRedirect, RequireAuth, RequireRole};
use crate::components::navbar::Navbar;
use crate::pages::{
    expedientes::ExpedientesPage, home::HomePage, indicios::IndiciosPage, login::LoginPage,
    revisar::RevisarPage, usuarios::UsuariosPage,
};
use crate::state::session::SessionStore;
use crate::util::auth::{COORDINATOR_ONLY, TECHNICIAN_ONLY};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing. The store is
/// restored from browser storage once hydration has run; guards wait for it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(BrowserStorage);
    provide_context(session.clone());

    Effect::new(move || {
        session.restore();
        leptos::logging::log!("session restored: authenticated={}", session.get_session().is_authenticated());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gestiones.css"/>
        <Title text="Gestión de Expedientes"/>

        <Router>
            <Navbar/>
            <main class="content">
                <Routes fallback=|| view! { <FallbackRedirect/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("expediente")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <RequireRole allowed=TECHNICIAN_ONLY>
                                        <ExpedientesPage/>
                                    </RequireRole>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("indicio")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <RequireRole allowed=TECHNICIAN_ONLY>
                                        <IndiciosPage/>
                                    </RequireRole>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("revisar")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <RequireRole allowed=COORDINATOR_ONLY>
                                        <RevisarPage/>
                                    </RequireRole>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("usuarios")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <RequireRole allowed=COORDINATOR_ONLY>
                                        <UsuariosPage/>
                                    </RequireRole>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
