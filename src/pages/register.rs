//! Registration page: name + email + password form.
//!
//! A successful signup signs the user in with the same credentials, so
//! the happy path lands on the board already authenticated.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

/// Registration form. Mirrors the login page's error handling.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let nome_value = nome.get();
        let email_value = email.get();
        let senha_value = senha.get();
        if nome_value.trim().is_empty() || email_value.trim().is_empty() || senha_value.is_empty()
        {
            error.set(Some("name, email, and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::auth::register(
                    &crate::net::api::RemoteApi,
                    &crate::storage::BrowserStore,
                    nome_value.trim(),
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
            let _ = (session, nome_value, email_value, senha_value);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Mural"</h1>
            <p class="auth-page__subtitle">"Create an account"</p>

            <form class="auth-form" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </label>
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
                    "Sign up"
                </button>
            </form>

            <p class="auth-page__switch">
                "Already registered? " <A href="/login">"Sign in"</A>
            </p>
        </div>
    }
}
