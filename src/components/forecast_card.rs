//! Standing 7-day forecast, fetched on mount.

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::ApiConfig;
use crate::net::remote::{RemoteAction, RemoteState};
use crate::net::types::ForecastDay;

/// Forecast grid loaded once per mount with no parameters. Failures are
/// logged only; the grid simply stays empty.
#[component]
pub fn ForecastCard() -> impl IntoView {
    let cfg = expect_context::<ApiConfig>();

    let action: RemoteAction<(), Vec<ForecastDay>> = RemoteAction::new({
        let cfg = cfg.clone();
        move |()| {
            let cfg = cfg.clone();
            async move { api::forecast_week(&cfg).await }
        }
    });
    action.on_rejected(|error| {
        leptos::logging::warn!("forecast fetch failed: {error}");
    });
    action.dispatch(());

    let state = action.state();
    let pending = move || state.with(RemoteState::is_pending);

    view! {
        <div class="card forecast-card">
            <div class="card__header">
                <h2>"\u{1F324} 7-Day Weather Forecast"</h2>
            </div>
            {move || {
                if pending() {
                    view! {
                        <div class="forecast-card__loading">
                            <span class="spinner spinner--large"></span>
                        </div>
                    }
                        .into_any()
                } else {
                    let days = state.get().value.unwrap_or_default();
                    view! {
                        <div class="forecast-grid">
                            {days
                                .into_iter()
                                .map(|day| {
                                    view! {
                                        <div class="forecast-grid__cell">
                                            <h3>{day.date}</h3>
                                            <p>{format!("Temp Max: {}\u{b0}C", day.predicted_tempmax)}</p>
                                            <p>
                                                {day
                                                    .humidity
                                                    .map(|h| format!("Humidity: {h}%"))
                                                    .unwrap_or_default()}
                                            </p>
                                            <p>
                                                {day
                                                    .wind_speed
                                                    .map(|w| format!("Wind: {w} km/h"))
                                                    .unwrap_or_default()}
                                            </p>
                                            <p>{format!("Weather: {}", day.predicted_weather)}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
