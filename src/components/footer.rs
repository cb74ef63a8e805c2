//! Dashboard footer with brand line and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Footer with the brand, copyright year, and the dark mode toggle.
#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let year = crate::util::clock::current_year();

    let toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = crate::util::dark_mode::toggle(u.dark_mode));
    };

    view! {
        <footer class="footer">
            <div class="footer__brand">
                <p class="footer__title">"\u{1F33E} AgroPredictor"</p>
                <p class="footer__subtitle">"Smart Farming Assistant"</p>
            </div>
            <div class="footer__meta">
                <p class="footer__copyright">
                    {format!("\u{a9} {year} AgroPredictor. All rights reserved.")}
                </p>
                <button class="footer__theme-toggle" on:click=toggle_theme title="Toggle theme">
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{1F319}" }}
                </button>
            </div>
        </footer>
    }
}
