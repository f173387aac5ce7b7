//! Message list and composer for the board.
//!
//! The list is a `LocalResource` re-fetched after every successful post;
//! each message row can expand its comment thread.

use leptos::prelude::*;

use crate::board;
use crate::components::comment_thread::CommentThread;
use crate::net::api::RemoteApi;
use crate::net::types::Message;
use crate::state::session::SessionState;

/// Message panel showing the board history and an input for new posts.
#[component]
pub fn MessagePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let messages = LocalResource::new(move || {
        let current = session.get();
        async move { board::messages(&RemoteApi, &current).await }
    });

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let do_send = move || {
        let text = input.get();

        #[cfg(feature = "csr")]
        {
            let current = session.get_untracked();
            let messages = messages.clone();
            leptos::task::spawn_local(async move {
                match board::submit_message(&RemoteApi, &current, &text).await {
                    Ok(true) => {
                        input.set(String::new());
                        error.set(None);
                        messages.refetch();
                    }
                    Ok(false) => {}
                    Err(err) => {
                        leptos::logging::warn!("message post failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="message-panel">
            <div class="message-panel__list">
                <Suspense fallback=move || {
                    view! { <p class="message-panel__loading">"Loading messages..."</p> }
                }>
                    {move || {
                        messages
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <div class="message-panel__empty">"No messages yet"</div>
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    list.into_iter()
                                        .map(|message| view! { <MessageCard message=message/> })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="message-panel__error">{err.to_string()}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            {move || error.get().map(|msg| view! { <p class="message-panel__error">{msg}</p> })}

            <div class="message-panel__input-row">
                <input
                    class="message-panel__input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Post"
                </button>
            </div>
        </div>
    }
}

/// One message row with a toggle for its comment thread.
#[component]
fn MessageCard(message: Message) -> impl IntoView {
    let show_comments = RwSignal::new(false);
    let message_id = message.id.clone();

    view! {
        <div class="message-card">
            <p class="message-card__text">{message.text}</p>
            <button
                class="message-card__toggle"
                on:click=move |_| show_comments.update(|v| *v = !*v)
            >
                {move || if show_comments.get() { "Hide comments" } else { "Comments" }}
            </button>
            <Show when=move || show_comments.get()>
                <CommentThread message_id=message_id.clone()/>
            </Show>
        </div>
    }
}
