//! Login page backed by the session collaborator stub.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, User};

/// Login page. The real identity provider is an external collaborator; here
/// sign-in stores a session for the typed address and the guard effect
/// forwards to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in (or just signed in) -> straight to the dashboard.
    Effect::new(move || {
        if auth.get().signed_in() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if address.trim().is_empty() || password.get().is_empty() {
            return;
        }
        let user = User::from_email(address.trim());
        crate::util::session::store_session(&user);
        auth.update(|a| {
            a.user = Some(user);
            a.loading = false;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"\u{1F33E} AgroPredictor"</h1>
                <p class="login-page__subtitle">"Smart Farming Assistant"</p>
                <form class="login-page__form" on:submit=on_submit>
                    <label class="login-page__label">
                        "Email"
                        <input
                            class="login-page__input"
                            type="email"
                            placeholder="your.email@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-page__label">
                        "Password"
                        <input
                            class="login-page__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
