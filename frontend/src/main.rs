mod api;
mod clipboard;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use state::ChatState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = ChatState::provide();

    // Greet on mount
    state.greet();

    view! {
        <div class="app-container">
            <header class="chat-header">
                <h1>"JUGAAD"</h1>
                <p>"JUGAAD se hi to duniya chalti hai"</p>
            </header>
            <ChatArea />
        </div>
    }
}

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    mount_to_body(App);
}
