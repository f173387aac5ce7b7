//! Login page: email + password form calling the auth session manager.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

/// Login form.
///
/// On success the shared session signal is replaced and the user is sent
/// to the board; on failure the user stays here and the error is shown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let email_value = email.get();
        let senha_value = senha.get();
        if email_value.trim().is_empty() || senha_value.is_empty() {
            error.set(Some("email and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::auth::login(
                    &crate::net::api::RemoteApi,
                    &crate::storage::BrowserStore,
                    email_value.trim(),
                    &senha_value,
                )
                .await;
                match result {
                    Ok(next) => {
                        session.set(next);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, email_value, senha_value);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Mural"</h1>
            <p class="auth-page__subtitle">"Sign in to the message board"</p>

            <form class="auth-form" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>

            <p class="auth-page__switch">
                "No account yet? " <A href="/register">"Create one"</A>
            </p>
        </div>
    }
}
