//! Crop and fertilizer prediction form.

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::ApiConfig;
use crate::net::remote::{RemoteAction, RemoteState};
use crate::net::types::{PredictRequest, PredictionResult, SOIL_TYPES};
use crate::state::toast::{Toast, ToastState};

/// Seven-field soil/environment form posting to the recommendation endpoint.
///
/// A failed round keeps the previous recommendation visible; only a newer
/// successful round replaces it.
#[component]
pub fn PredictionForm() -> impl IntoView {
    let cfg = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let temperature = RwSignal::new(String::new());
    let humidity = RwSignal::new(String::new());
    let moisture = RwSignal::new(String::new());
    let soil_type = RwSignal::new(String::new());
    let nitrogen = RwSignal::new(String::new());
    let potassium = RwSignal::new(String::new());
    let phosphorous = RwSignal::new(String::new());

    let action: RemoteAction<PredictRequest, PredictionResult> = RemoteAction::new({
        let cfg = cfg.clone();
        move |req: PredictRequest| {
            let cfg = cfg.clone();
            async move { api::predict(&cfg, &req).await }
        }
    });
    action.on_fulfilled(move |_| {
        toasts.update(|t| {
            t.push(Toast::success(
                "Prediction successful!",
                "Your crop and fertilizer recommendations are ready.",
            ));
        });
    });
    action.on_rejected(move |_| {
        toasts.update(|t| {
            t.push(Toast::destructive(
                "Prediction failed",
                "Unable to connect to the prediction service. Please try again.",
            ));
        });
    });

    let state = action.state();
    let pending = move || state.with(RemoteState::is_pending);

    let on_submit = {
        let action = action.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let req = PredictRequest {
                temperature: temperature.get(),
                humidity: humidity.get(),
                moisture: moisture.get(),
                soil_type: soil_type.get(),
                nitrogen: nitrogen.get(),
                potassium: potassium.get(),
                phosphorous: phosphorous.get(),
            };
            if !req.is_complete() {
                return;
            }
            action.dispatch(req);
        }
    };

    view! {
        <div class="prediction-form">
            <div class="card">
                <div class="card__header">
                    <h2>"Crop & Fertilizer Prediction"</h2>
                    <p class="card__description">
                        "Enter your soil and environmental data to get crop and fertilizer recommendations"
                    </p>
                </div>
                <form class="prediction-form__form" on:submit=on_submit>
                    <div class="prediction-form__grid">
                        <NumberField label="Temperature (\u{b0}C)" placeholder="25" value=temperature/>
                        <NumberField label="Humidity (%)" placeholder="80" value=humidity/>
                        <NumberField label="Moisture (%)" placeholder="70" value=moisture/>
                        <label class="field">
                            "Soil Type"
                            <select
                                class="field__input"
                                required
                                prop:value=move || soil_type.get()
                                on:change=move |ev| soil_type.set(event_target_value(&ev))
                            >
                                <option value="" disabled selected>
                                    "Select soil type"
                                </option>
                                {SOIL_TYPES
                                    .into_iter()
                                    .map(|soil| view! { <option value=soil>{soil}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <NumberField label="Nitrogen (N)" placeholder="90" value=nitrogen/>
                        <NumberField label="Potassium (K)" placeholder="43" value=potassium/>
                        <NumberField label="Phosphorous (P)" placeholder="20" value=phosphorous/>
                    </div>
                    <button class="btn btn--primary btn--full" type="submit" disabled=pending>
                        {move || pending().then(|| view! { <span class="spinner"></span> })}
                        "Get Prediction"
                    </button>
                </form>
            </div>

            {move || {
                state
                    .get()
                    .value
                    .map(|prediction| {
                        view! {
                            <div class="card prediction-form__result">
                                <div class="card__header">
                                    <h2>"Prediction Results"</h2>
                                </div>
                                <div class="prediction-form__result-grid">
                                    <div class="prediction-form__result-cell">
                                        <h3>"Recommended Crop"</h3>
                                        <p class="prediction-form__crop">{prediction.crop}</p>
                                    </div>
                                    <div class="prediction-form__result-cell">
                                        <h3>"Recommended Fertilizer"</h3>
                                        <p class="prediction-form__fertilizer">{prediction.fertilizer}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// One labelled numeric input bound to a string signal.
#[component]
fn NumberField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <input
                class="field__input"
                type="number"
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
