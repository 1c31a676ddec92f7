use crate::config::EnvConfig;
use crate::navigation::NavigationManager;
use crate::state::{NavContext, NavState};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = EnvConfig::new();
    log!(
        "menu editor: {} seeded items, save delay {}ms, failure rate {}",
        config.menu.len(),
        config.save_delay_ms,
        config.save_failure_rate
    );
    provide_context(NavContext(NavState::new(config)));

    view! {
        <main class="container mx-auto py-8 px-4">
            <NavigationManager />
        </main>
    }
}
