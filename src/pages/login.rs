//! Login page: email + password against `POST /login`.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::state::auth_form::{AuthFormState, LOGIN_SUCCESS, LoginDraft};
use crate::state::session::SessionState;
use crate::util::guard::SIGNUP_ROUTE;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(LoginDraft::default());
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
                match crate::net::auth::login(&client, &values).await {
                    Ok(signed_in) => {
                        session.set(SessionState::loaded(Some(signed_in)));
                        form.update(AuthFormState::succeed);
                        gloo_timers::future::sleep(redirect_delay).await;
                        form.update(AuthFormState::dismiss_alert);
                        navigate(crate::util::guard::PROJECTS_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        form.update(|f| f.fail(crate::state::auth_form::LOGIN_FAILED));
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
        <Alert message=LOGIN_SUCCESS show=Signal::derive(move || form.with(|f| f.show_alert))/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <p class="auth-card__subtitle">"Please fill the form below."</p>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="auth-card__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
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
                <div class="auth-card__actions">
                    <button class="auth-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        "Sign in"
                    </button>
                    <p class="auth-card__footer">
                        "Don't have an account? "
                        <A href=SIGNUP_ROUTE>"Sign up"</A>
                        "."
                    </p>
                </div>
            </form>
        </div>
    }
}
