//! Project list page with add/edit modal and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It waits for the session to load
//! with a known role, fetches the list once, and then keeps it in sync:
//! add/edit re-fetch after the mutation, delete prunes locally. Outcomes are
//! applied to the signal in place after each await, never from a copy taken
//! before it. Failures are logged only; the table keeps the last known state.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::project_modal::ProjectModal;
use crate::net::types::ProjectId;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;
use crate::util::guard::project_route;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = RwSignal::new(ProjectsState::default());
    #[cfg(feature = "csr")]
    let client = expect_context::<crate::net::AppClient>();

    // Initial list, once the session is loaded and carries a role.
    let requested_list = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let list_client = client.clone();
    Effect::new(move || {
        if requested_list.get_untracked() {
            return;
        }
        if session.with(|s| s.loading || s.role().is_none()) {
            return;
        }
        requested_list.set(true);

        #[cfg(feature = "csr")]
        {
            let client = list_client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::projects::list_projects(&client).await;
                if let Some(Err(e)) = projects.try_update(|s| s.apply_list(result)) {
                    log::error!("Error fetching projects: {e}");
                }
            });
        }
    });

    #[cfg(feature = "csr")]
    let submit_client = client.clone();
    let on_submit = Callback::new(move |()| {
        let Some((mode, draft)) = projects.with_untracked(|s| s.modal.mode().map(|mode| (mode, s.draft.clone())))
        else {
            return;
        };
        if !draft.is_complete() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let client = submit_client.clone();
            leptos::task::spawn_local(async move {
                let saved = crate::net::projects::save_draft(&client, mode, &draft).await;
                match projects.try_update(|s| s.apply_saved(mode, saved)) {
                    Some(Ok(())) => log::debug!("project saved"),
                    Some(Err(e)) => {
                        log::error!("Error saving project: {e}");
                        return;
                    }
                    None => return,
                }
                let listed = crate::net::projects::list_projects(&client).await;
                if let Some(Err(e)) = projects.try_update(|s| s.apply_list(listed)) {
                    log::error!("Error fetching projects: {e}");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (mode, draft);
        }
    });

    let on_delete = Callback::new(move |id: ProjectId| {
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::projects::delete_project(&client, id).await;
                match projects.try_update(|s| s.apply_delete(id, result)) {
                    Some(Err(e)) => log::error!("Error deleting project {id}: {e}"),
                    Some(Ok(())) => log::debug!("project {id} deleted"),
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let rows = move || {
        let items = projects.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="3" class="projects-table__empty">"No projects found"</td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|project| {
                let id = project.id;
                let editable = project.clone();
                view! {
                    <tr>
                        <td>
                            <A href=project_route(id)>{project.name}</A>
                        </td>
                        <td>{project.description}</td>
                        <td class="projects-table__actions">
                            <button
                                class="btn btn--edit"
                                title="Edit"
                                on:click=move |_| projects.update(|s| s.open_edit(&editable))
                            >
                                "Edit"
                            </button>
                            <button class="btn btn--danger" title="Delete" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Show
            when=move || !projects.with(|s| s.loading)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <NavBar/>
            <main class="projects-page">
                <header class="projects-page__header">
                    <h1>"Projects"</h1>
                    <button
                        class="btn btn--primary"
                        title="Add Project"
                        on:click=move |_| projects.update(ProjectsState::open_add)
                    >
                        "+ Add Project"
                    </button>
                </header>
                <table class="projects-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </main>
            <Show when=move || projects.with(|s| s.modal.is_open())>
                <ProjectModal projects=projects on_submit=on_submit/>
            </Show>
        </Show>
    }
}
