//! The protected message board page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth;
use crate::components::message_panel::MessagePanel;
use crate::components::require_auth::RequireAuth;
use crate::state::session::SessionState;
use crate::storage::BrowserStore;

/// Protected root view: a header with the signed-in identity and a
/// logout button, plus the message panel.
#[component]
pub fn BoardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // A session restored from the persisted token has no identity.
    let who = move || {
        session
            .get()
            .identity
            .map_or_else(|| "signed in".to_owned(), |identity| identity.email)
    };

    let on_logout = move |_| {
        session.set(auth::logout(&BrowserStore));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <RequireAuth>
            <div class="board-page">
                <header class="board-page__header">
                    <h1>"Mural"</h1>
                    <div class="board-page__session">
                        <span class="board-page__who">{who.clone()}</span>
                        <button class="btn" on:click=on_logout.clone()>
                            "Sign out"
                        </button>
                    </div>
                </header>
                <MessagePanel/>
            </div>
        </RequireAuth>
    }
}
