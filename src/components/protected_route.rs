//! Route wrapper that only renders its children for a signed-in session.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;
use crate::util::guard::{self, AppRoute, GuardDecision};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let route = AppRoute::parse(&location.pathname.get());
        session.with(|state| guard::check(&route, state))
    });

    move || match decision.get() {
        GuardDecision::Admit => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Pending => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
    }
}
