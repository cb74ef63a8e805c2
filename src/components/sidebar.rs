//! Dashboard navigation sidebar with sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Crop & Fertilizer", "/dashboard"),
    ("Weather", "/dashboard/weather"),
    ("Forecast", "/dashboard/forecast"),
    ("Chatbot", "/dashboard/chatbot"),
    ("Contact", "/dashboard/contact"),
];

/// Navigation sidebar. Collapses with the dashboard trigger; the sign-out
/// button clears the session and lets the route guard do the redirect.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let collapsed = move || ui.get().sidebar_collapsed;

    let sign_out = move |_| {
        crate::util::session::clear_session();
        auth.update(|a| a.user = None);
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <p class="sidebar__label">"Navigation"</p>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(title, href)| {
                        view! {
                            <A href=href exact=true attr:class="sidebar__link">
                                {title}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <button class="btn sidebar__sign-out" on:click=sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
