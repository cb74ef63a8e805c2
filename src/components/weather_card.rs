//! Weather view: current conditions plus the forecast keyed on them.

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::ApiConfig;
use crate::net::error::FetchError;
use crate::net::remote::{RemoteAction, RemoteState};
use crate::net::types::WeatherBundle;
use crate::state::toast::{Toast, ToastState};

/// City lookup with the two-stage weather-then-forecast fetch. Display
/// state is cleared at every dispatch, so nothing renders until both stages
/// of the new round complete.
#[component]
pub fn WeatherCard() -> impl IntoView {
    let cfg = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let city = RwSignal::new(String::new());

    let action: RemoteAction<String, WeatherBundle> = RemoteAction::new({
        let cfg = cfg.clone();
        move |name: String| {
            let cfg = cfg.clone();
            async move { api::weather_bundle(&cfg, &name).await }
        }
    })
    .clear_value_on_dispatch();

    action.on_fulfilled(move |bundle: &WeatherBundle| {
        toasts.update(|t| {
            t.push(Toast::success(
                "Weather data retrieved!",
                &format!("Weather and 7-day forecast for {} available.", bundle.city),
            ));
        });
    });
    action.on_rejected(move |error: &FetchError| {
        toasts.update(|t| {
            // An in-body error from stage 1 means the city is unknown; every
            // other failure gets the generic connectivity message.
            match error {
                FetchError::Api(_) => t.push(Toast::destructive(
                    "City not found",
                    "Please check the city name and try again.",
                )),
                _ => t.push(Toast::destructive(
                    "Fetch failed",
                    "Check backend connection and try again.",
                )),
            };
        });
    });

    let state = action.state();
    let pending = move || state.with(RemoteState::is_pending);

    let on_submit = {
        let action = action.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let name = city.get();
            if name.trim().is_empty() {
                return;
            }
            action.dispatch(name.trim().to_owned());
        }
    };

    view! {
        <div class="weather-card">
            <div class="card">
                <div class="card__header">
                    <h2>"Weather Information"</h2>
                    <p class="card__description">
                        "Get current weather and 7-day forecast to plan your farming"
                    </p>
                </div>
                <form class="weather-card__form" on:submit=on_submit>
                    <label class="field">
                        "City Name"
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Enter city name"
                            required
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--full" type="submit" disabled=pending>
                        {move || pending().then(|| view! { <span class="spinner"></span> })}
                        "Get Weather"
                    </button>
                </form>
            </div>

            {move || {
                state
                    .get()
                    .value
                    .map(|bundle| {
                        view! {
                            <div class="card weather-card__current">
                                <div class="card__header">
                                    <h2>{format!("Weather Report for {}", bundle.city)}</h2>
                                </div>
                                <div class="weather-card__readings">
                                    <div class="weather-card__reading">
                                        <h3>"Temperature"</h3>
                                        <p class="weather-card__value">
                                            {format!("{}\u{b0}C", bundle.current.temperature)}
                                        </p>
                                    </div>
                                    <div class="weather-card__reading">
                                        <h3>"Humidity"</h3>
                                        <p class="weather-card__value">
                                            {format!("{}%", bundle.current.humidity)}
                                        </p>
                                    </div>
                                </div>
                                <div class="weather-card__description">
                                    <h3>"Weather Description"</h3>
                                    <p>{bundle.current.description.clone()}</p>
                                </div>
                            </div>

                            <div class="card weather-card__forecast">
                                <div class="card__header">
                                    <h2>"7-Day Forecast"</h2>
                                </div>
                                <div class="forecast-grid">
                                    {bundle
                                        .forecast
                                        .into_iter()
                                        .map(|day| {
                                            view! {
                                                <div class="forecast-grid__cell">
                                                    <h4>{day.date}</h4>
                                                    <p>{format!("Temperature: {}\u{b0}C", day.predicted_tempmax)}</p>
                                                    <p>{format!("Condition: {}", day.predicted_weather)}</p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
