//! Transient confirmation banner.

use leptos::prelude::*;

/// Banner pinned to the top of the page while `show` is true.
#[component]
pub fn Alert(message: &'static str, #[prop(into)] show: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <aside class="alert" role="status">
                <div class="alert__body">{message}</div>
            </aside>
        </Show>
    }
}
