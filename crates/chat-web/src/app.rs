//! Main App Component

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::pages::ChatPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <ChatPage config=WidgetConfig::from_window() />
        </main>
    }
}
