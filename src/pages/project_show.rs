//! Read-only detail view for a single project.
//!
//! The API has no single-record read, so the page loads the list and picks
//! the record matching the `:id` route segment.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::types::parse_project_id;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;
use crate::util::guard::PROJECTS_ROUTE;

#[component]
pub fn ProjectShowPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.with(|p| p.get("id").as_deref().and_then(parse_project_id)));
    let projects = RwSignal::new(ProjectsState::default());
    #[cfg(feature = "csr")]
    let client = expect_context::<crate::net::AppClient>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || session.with(|s| s.loading) {
            return;
        }
        requested.set(true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::projects::list_projects(&client).await;
                if let Some(Err(e)) = projects.try_update(|s| s.apply_list(result)) {
                    log::error!("Error fetching projects: {e}");
                }
            });
        }
    });

    let current = move || project_id.get().and_then(|id| projects.with(|s| s.find(id).cloned()));

    view! {
        <Show
            when=move || !projects.with(|s| s.loading)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <NavBar/>
            <main class="project-show">
                {move || match current() {
                    Some(project) => {
                        view! {
                            <h1>{project.name}</h1>
                            <p class="project-show__description">{project.description}</p>
                        }
                            .into_any()
                    }
                    None => view! { <p class="project-show__missing">"Project not found"</p> }.into_any(),
                }}
                <A href=PROJECTS_ROUTE>"Back to projects"</A>
            </main>
        </Show>
    }
}
