//! UI Components

use chat_core::{Message, Role};
use leptos::prelude::*;

/// Row classes: user messages sit on the right, assistant messages on the left
pub const fn row_class(role: Role) -> &'static str {
    match role {
        Role::User => "d-flex mb-2 justify-content-end",
        Role::Assistant => "d-flex mb-2 justify-content-start",
    }
}

/// Bubble classes for a message in the given state
pub fn bubble_class(role: Role, pending: bool, fresh: bool) -> String {
    let mut class = String::from("msg-bubble");
    class.push_str(match role {
        Role::User => " user-bubble",
        Role::Assistant => " bot-bubble",
    });
    if pending {
        class.push_str(" pending");
    }
    if fresh {
        class.push_str(" new");
    }
    class
}

/// Message bubble component
#[component]
pub fn MessageBubble(
    message: Message,
    #[prop(into)] fresh: Signal<bool>,
    avatar_src: String,
) -> impl IntoView {
    let Message { role, text, pending } = message;
    let row = row_class(role);
    let class = move || bubble_class(role, pending, fresh.get());

    view! {
        <div class=row>
            {role
                .has_avatar()
                .then(|| view! { <img class="chat-avatar me-2" src=avatar_src alt="" /> })}
            <div class=class>{text}</div>
        </div>
    }
}
