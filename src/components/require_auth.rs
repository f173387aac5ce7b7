//! Route guard for protected views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Renders its children only while the session is authenticated;
/// otherwise redirects to `/login`.
///
/// Re-evaluated whenever the session signal changes, so a logout
/// anywhere retires the protected view immediately. The redirect is the
/// only side effect.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated()>
            {children()}
        </Show>
    }
}
