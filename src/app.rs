//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth;
use crate::pages::{board::BoardPage, login::LoginPage, register::RegisterPage};
use crate::storage::BrowserStore;

/// Root component.
///
/// Restores the persisted session once at mount, provides it as a shared
/// signal, and sets up client-side routing. The root route is protected;
/// the auth forms are public.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One-shot startup restore: a persisted token re-enters the
    // authenticated state with an unknown identity.
    let session = RwSignal::new(auth::restore(&BrowserStore));
    provide_context(session);

    view! {
        <Title text="Mural"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
