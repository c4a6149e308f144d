use elective_types::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{use_toasts, ToastLevel};
use crate::store::use_auth_store;

/// Checks `token` against the configured access token and hands it back on success.
#[server]
async fn verify_token(token: String) -> Result<String, ServerFnError> {
    use elective_types::AccessToken;

    let accessToken = use_context::<AccessToken>()
        .ok_or_else(|| ServerFnError::new("auth context unavailable"))?;

    let token = accessToken.verify(&token).map_err(|e| {
        tracing::warn!("rejected login attempt: {e}");
        ServerFnError::new(e.to_string())
    })?;

    tracing::debug!("login accepted");
    Ok(token)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let verifyAction = ServerAction::<VerifyToken>::new();
    let verifyValue = verifyAction.value();

    Effect::new(move |_| match verifyValue.get() {
        Some(Ok(token)) => {
            auth.login(token);
            toasts.push("Signed in".into(), ToastLevel::Success);
            navigate(&AppRoute::Electives.href(), Default::default());
        }
        Some(Err(e)) => toasts.push(format!("Sign in failed: {e}"), ToastLevel::Error),
        None => {}
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"E"</div>
                    <h1>"Electives"</h1>
                    <p>"Enter your access token to continue"</p>
                </div>

                {move || {
                    auth.is_logged_in()
                        .then(|| {
                            view! { <div class="login-notice">"You are already signed in."</div> }
                        })
                }}

                <ActionForm action=verifyAction>
                    <div class="form-group">
                        <label for="token">"Access Token"</label>
                        <input
                            type="password"
                            id="token"
                            name="token"
                            placeholder="Enter your token"
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Sign In"
                    </button>
                </ActionForm>
            </div>
        </div>
    }
}
