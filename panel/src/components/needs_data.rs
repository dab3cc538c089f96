//! Placeholder shown while the panel has no data rows.

use leptos::prelude::*;

/// "No data" placeholder sized like the scene it replaces.
#[component]
pub fn NeedsData(#[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <div class="live-scene__needs-data" style=move || style.get()>
            <p class="live-scene__needs-data-title">"No data"</p>
            <p class="live-scene__needs-data-hint">"Run a query that returns at least one row to show the scene."</p>
        </div>
    }
}
