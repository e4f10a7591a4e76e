//! Chat Page

use std::rc::Rc;

use chat_client::HttpAnswerService;
use chat_core::{QueryDispatcher, RenderedMessage};
use leptos::{html, prelude::*};

use crate::components::MessageBubble;
use crate::config::WidgetConfig;
use crate::input::SignalInput;
use crate::transcript::DomTranscript;

/// Enter submits, Shift+Enter does not, and neither does the Enter that
/// commits an IME composition.
fn submits_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[component]
pub fn ChatPage(config: WidgetConfig) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let transcript = DomTranscript::new(container);
    let input = SignalInput::new();
    let service = HttpAnswerService::from_config(config.client_config());
    let dispatcher = Rc::new(QueryDispatcher::new(transcript, input, service));
    let dispatcher = StoredValue::new_local(dispatcher);

    let send = move || {
        let dispatcher = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let submission = dispatcher.submit().await;
            tracing::debug!(?submission, "Submission settled");
        });
    };

    let WidgetConfig {
        avatar_src,
        input_placeholder,
        ..
    } = config;

    view! {
        <div class="chat">
            <div class="chat-messages" node_ref=container>
                <For
                    each=move || transcript.entries()
                    key=|entry| entry.handle
                    children=move |entry| {
                        let RenderedMessage { handle, message, .. } = entry;
                        let fresh = Signal::derive(move || transcript.is_fresh(handle));
                        let avatar_src = avatar_src.clone();
                        view! { <MessageBubble message=message fresh=fresh avatar_src=avatar_src /> }
                    }
                />
            </div>

            <div class="input-area">
                <input
                    type="text"
                    id="user-input"
                    placeholder=input_placeholder
                    prop:value=move || input.value.get()
                    readonly=move || input.busy.get()
                    on:input=move |ev| input.value.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if submits_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button id="send-button" on:click=move |_| send() disabled=move || input.busy.get()>
                    {move || if input.busy.get() { "..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
