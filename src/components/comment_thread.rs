//! Comment thread under a single message: list plus composer.
//!
//! Same list+compose contract as the message panel, scoped to one
//! message id. The thread is created on expand and discarded on
//! collapse, so the list is rebuilt on every fetch.

use leptos::prelude::*;

use crate::board;
use crate::net::api::RemoteApi;
use crate::state::session::SessionState;

/// Comments for one message, re-fetched after each successful post.
#[component]
pub fn CommentThread(message_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let id_for_fetch = message_id.clone();
    let comments = LocalResource::new(move || {
        let current = session.get();
        let id = id_for_fetch.clone();
        async move { board::comments(&RemoteApi, &current, &id).await }
    });

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let do_send = move || {
        let text = input.get();

        #[cfg(feature = "csr")]
        {
            let current = session.get_untracked();
            let id = message_id.clone();
            let comments = comments.clone();
            leptos::task::spawn_local(async move {
                match board::submit_comment(&RemoteApi, &current, &id, &text).await {
                    Ok(true) => {
                        input.set(String::new());
                        error.set(None);
                        comments.refetch();
                    }
                    Ok(false) => {}
                    Err(err) => {
                        leptos::logging::warn!("comment post failed: {err}");
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
        <div class="comment-thread">
            <Suspense fallback=move || {
                view! { <p class="comment-thread__loading">"Loading comments..."</p> }
            }>
                {move || {
                    comments
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="comment-thread__empty">"No comments yet"</div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                list.into_iter()
                                    .map(|comment| {
                                        view! {
                                            <p class="comment-thread__item">{comment.text}</p>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="comment-thread__error">{err.to_string()}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || error.get().map(|msg| view! { <p class="comment-thread__error">{msg}</p> })}

            <div class="comment-thread__input-row">
                <input
                    class="comment-thread__input"
                    type="text"
                    placeholder="Reply..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn comment-thread__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Reply"
                </button>
            </div>
        </div>
    }
}
