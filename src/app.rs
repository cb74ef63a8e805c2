//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::chatbot::Chatbot;
use crate::components::contact_form::ContactForm;
use crate::components::forecast_card::ForecastCard;
use crate::components::prediction_form::PredictionForm;
use crate::components::toaster::Toaster;
use crate::components::weather_card::WeatherCard;
use crate::net::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};

/// Root application component.
///
/// Provides the shared contexts (auth session, UI chrome, toast queue, API
/// config) and sets up client-side routing. The dashboard route tree is
/// guarded by `DashboardPage` itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore collaborator-held state before the first render.
    let dark_mode = crate::util::dark_mode::read_preference();
    crate::util::dark_mode::apply(dark_mode);

    let auth = RwSignal::new(AuthState {
        user: crate::util::session::read_session(),
        loading: false,
    });
    let ui = RwSignal::new(UiState {
        dark_mode,
        ..UiState::default()
    });
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(ApiConfig::default());

    view! {
        <Title text="AgroPredictor"/>
        <Toaster/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardPage>
                    <Route path=StaticSegment("") view=PredictionForm/>
                    <Route path=StaticSegment("weather") view=WeatherCard/>
                    <Route path=StaticSegment("forecast") view=ForecastCard/>
                    <Route path=StaticSegment("chatbot") view=Chatbot/>
                    <Route path=StaticSegment("contact") view=ContactForm/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
