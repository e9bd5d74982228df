//! Top navigation bar with the signed-in role and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::guard::{LOGIN_ROUTE, PROJECTS_ROUTE};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let client = expect_context::<crate::net::AppClient>();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        client.session().clear();
        session.set(SessionState::loaded(None));
        log::info!("session cleared");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href=PROJECTS_ROUTE>"Projects"</A>
            <span class="navbar__spacer"></span>
            <span class="navbar__role">{move || session.with(SessionState::role_label)}</span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
