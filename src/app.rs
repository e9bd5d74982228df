//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{login::LoginPage, project_show::ProjectShowPage, projects::ProjectsPage, signup::SignupPage};
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides config, the API client and the session context, then sets up
/// client-side routing. The session starts pending and resolves from storage
/// in the first effect pass, so guarded pages never act on a half-read session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(SessionState::pending());

    #[cfg(feature = "csr")]
    {
        use crate::net::AppClient;
        use crate::net::transport::GlooTransport;
        use crate::state::session::{LocalStorage, SessionStore};

        let client = AppClient::new(config.api_base_url.clone(), GlooTransport, SessionStore::new(LocalStorage));
        let store = client.session().clone();
        provide_context(client);
        Effect::new(move || session.set(SessionState::loaded(store.get())));
    }

    log::debug!("api base url: {}", config.api_base_url);
    provide_context(config);
    provide_context(session);

    view! {
        <Title text="Projects"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=GuardedProjects/>
                <Route path=StaticSegment("projects") view=GuardedProjects/>
                <Route path=(StaticSegment("projects"), ParamSegment("id")) view=GuardedProjectShow/>
            </Routes>
        </Router>
    }
}

#[component]
fn GuardedProjects() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <ProjectsPage/>
        </ProtectedRoute>
    }
}

#[component]
fn GuardedProjectShow() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <ProjectShowPage/>
        </ProtectedRoute>
    }
}
