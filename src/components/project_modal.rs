//! Add/edit project dialog.

use leptos::prelude::*;

use crate::state::projects::ProjectsState;

/// Modal editor bound to `projects.draft`. Clicking the backdrop or Cancel
/// closes it and discards the draft; submitting hands off to `on_submit`.
#[component]
pub fn ProjectModal(projects: RwSignal<ProjectsState>, on_submit: Callback<()>) -> impl IntoView {
    let on_cancel = move || projects.update(ProjectsState::close_modal);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || projects.with(ProjectsState::modal_title)}</h2>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <label class="dialog__label">
                        "Project Name"
                        <input
                            class="dialog__input"
                            type="text"
                            name="name"
                            required=true
                            prop:value=move || projects.with(|s| s.draft.name.clone())
                            on:input=move |ev| {
                                projects.update(|s| s.draft.name = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            name="description"
                            rows="4"
                            required=true
                            prop:value=move || projects.with(|s| s.draft.description.clone())
                            on:input=move |ev| {
                                projects.update(|s| s.draft.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            {move || projects.with(ProjectsState::submit_label)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
