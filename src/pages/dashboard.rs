//! Authenticated dashboard shell: sidebar, header, routed outlet, footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Dashboard layout hosting the five view components under a common shell.
/// Redirects to `/login` whenever the session predicate fails.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Route guard: unauthenticated users never see the dashboard tree.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let toggle_sidebar = move |_| {
        ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
    };

    view! {
        <div class="dashboard" class:dashboard--collapsed=move || ui.get().sidebar_collapsed>
            <Sidebar/>

            <div class="dashboard__main">
                <header class="dashboard__header">
                    <button class="dashboard__sidebar-trigger" on:click=toggle_sidebar title="Toggle sidebar">
                        "\u{2630}"
                    </button>
                    <div class="dashboard__brand">
                        <h1>"\u{1F33E} AgroPredictor"</h1>
                        <p>"Smart Farming Assistant - Crop, Fertilizer & Weather"</p>
                    </div>
                </header>

                <main class="dashboard__content">
                    <Outlet/>
                </main>

                <Footer/>
            </div>
        </div>
    }
}
