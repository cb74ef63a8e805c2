//! Agricultural assistant chat view.

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::ApiConfig;
use crate::net::remote::RemoteAction;
use crate::net::types::ChatResponse;
use crate::state::chat::{ChatState, Sender};
use crate::state::toast::{Toast, ToastState};

/// Chat transcript with optimistic sends. The transcript is component-local
/// so every mount starts from the canned greeting.
///
/// A rejected round signals twice, through independent observers: a
/// destructive toast and a permanent apology entry in the transcript.
#[component]
pub fn Chatbot() -> impl IntoView {
    let cfg = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let chat = RwSignal::new(ChatState::seeded(crate::util::clock::now_ms()));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let action: RemoteAction<String, ChatResponse> = RemoteAction::new({
        let cfg = cfg.clone();
        move |message: String| {
            let cfg = cfg.clone();
            async move { api::chat(&cfg, &message).await }
        }
    });
    action.on_fulfilled(move |resp: &ChatResponse| {
        chat.update(|c| c.fulfill_round(resp.response.as_deref(), crate::util::clock::now_ms()));
    });
    action.on_rejected(move |_| {
        toasts.update(|t| {
            t.push(Toast::destructive(
                "Chat error",
                "Unable to connect to the chatbot service. Please try again.",
            ));
        });
    });
    action.on_rejected(move |_| {
        chat.update(|c| c.reject_round(crate::util::clock::now_ms()));
    });

    // Keep the transcript scrolled to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = {
        let action = action.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let text = input.get();
            let mut opened = false;
            chat.update(|c| opened = c.begin_round(&text, crate::util::clock::now_ms()));
            if !opened {
                return;
            }
            input.set(String::new());
            action.dispatch(text);
        }
    };

    let pending = move || chat.with(ChatState::is_pending);
    let can_send = move || !pending() && !input.get().trim().is_empty();

    view! {
        <div class="card chatbot">
            <div class="card__header">
                <h2>"Agricultural Assistant"</h2>
                <p class="card__description">
                    "Ask questions about farming, crops, weather, and agricultural best practices"
                </p>
            </div>

            <div class="chatbot__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let from_user = msg.sender == Sender::User;
                            let text = msg.text.clone();
                            view! {
                                <div class="chatbot__message" class:chatbot__message--user=from_user>
                                    <span class="chatbot__avatar">
                                        {if from_user { "\u{1F464}" } else { "\u{1F916}" }}
                                    </span>
                                    <p class="chatbot__bubble">{text}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    pending()
                        .then(|| view! { <div class="chatbot__typing">"..."</div> })
                }}
            </div>

            <form class="chatbot__input-row" on:submit=on_submit>
                <input
                    class="chatbot__input"
                    type="text"
                    placeholder="Ask me anything about farming..."
                    disabled=pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
