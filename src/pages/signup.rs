//! Signup page: name, email, password and role against `POST /signup`.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::state::auth_form::{AuthFormState, ROLE_OPTIONS, SIGNUP_SUCCESS, SignupDraft};
use crate::state::session::SessionState;
use crate::util::guard::LOGIN_ROUTE;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(SignupDraft::default());
    let form = RwSignal::new(AuthFormState::default());
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let client = expect_context::<crate::net::AppClient>();
    #[cfg(feature = "csr")]
    let redirect_delay = expect_context::<crate::config::ClientConfig>().redirect_delay;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = draft.get_untracked();
        if !values.is_complete() || !form.try_update(AuthFormState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::signup(&client, &values).await {
                    Ok(signed_in) => {
                        session.set(SessionState::loaded(Some(signed_in)));
                        form.update(AuthFormState::succeed);
                        gloo_timers::future::sleep(redirect_delay).await;
                        form.update(AuthFormState::dismiss_alert);
                        navigate(crate::util::guard::PROJECTS_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("signup failed: {e}");
                        form.update(|f| f.fail(crate::state::auth_form::SIGNUP_FAILED));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (values, session, &navigate);
        }
    };

    view! {
        <Alert message=SIGNUP_SUCCESS show=Signal::derive(move || form.with(|f| f.show_alert))/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Signup"</h1>
                <p class="auth-card__subtitle">"Please fill the form below."</p>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="auth-card__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <label class="auth-label">
                    "Name"
                    <input
                        class="auth-input"
                        type="text"
                        name="name"
                        placeholder="Enter name"
                        required=true
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="auth-label">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        name="email"
                        placeholder="Enter email"
                        required=true
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                </label>
                <label class="auth-label">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Enter password"
                        required=true
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                </label>
                <label class="auth-label">
                    "Role"
                    <select
                        class="auth-input"
                        name="role"
                        required=true
                        prop:value=move || draft.with(|d| d.role.clone())
                        on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        {ROLE_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="auth-card__actions">
                    <button class="auth-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        "Sign up"
                    </button>
                    <p class="auth-card__footer">
                        "Already have an account? "
                        <A href=LOGIN_ROUTE>"Log in"</A>
                        "."
                    </p>
                </div>
            </form>
        </div>
    }
}
