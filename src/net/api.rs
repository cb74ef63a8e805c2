//! REST calls to the external advisory service.
//!
//! Client-side (`csr`): real HTTP via `gloo-net`, each request wrapped in the
//! configured timeout. Native: stubs returning `Transport` errors since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses map to `FetchError::Status`, rejected transports to
//! `Transport`, undecodable bodies to `Decode`, and our own deadline to
//! `Timeout`. The weather endpoint's in-body `error` field becomes
//! `FetchError::Api` so callers can tell "unknown city" from "service down".

#![allow(clippy::unused_async)]

use crate::net::config::ApiConfig;
use crate::net::error::FetchError;
use crate::net::types::{
    ChatResponse, ForecastDay, PredictRequest, PredictionResult, WeatherBundle, WeatherSnapshot,
};
#[cfg(feature = "csr")]
use crate::net::types::{ChatRequest, ForecastResponse, PredictResponse};
#[cfg(feature = "csr")]
use std::future::Future;

#[cfg(not(feature = "csr"))]
const OFF_BROWSER: &str = "not available outside the browser";

/// Race a request future against the configured deadline.
#[cfg(feature = "csr")]
async fn with_timeout<T>(
    cfg: &ApiConfig,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    use futures::future::{Either, select};

    let limit = cfg.timeout();
    match select(
        Box::pin(fut),
        Box::pin(gloo_timers::future::sleep(limit)),
    )
    .await
    {
        Either::Left((out, _)) => out,
        Either::Right(((), _)) => Err(FetchError::Timeout(limit)),
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(
    cfg: &ApiConfig,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    let url = cfg.url(path);
    let request = gloo_net::http::Request::get(&url)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())));
    with_timeout(cfg, async move {
        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    })
    .await
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    cfg: &ApiConfig,
    path: &str,
    body: &B,
) -> Result<T, FetchError> {
    let url = cfg.url(path);
    let request = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    with_timeout(cfg, async move {
        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    })
    .await
}

/// `POST /predict` — crop and fertilizer recommendation.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, timeout, non-2xx status, or
/// an undecodable body.
pub async fn predict(
    cfg: &ApiConfig,
    req: &PredictRequest,
) -> Result<PredictionResult, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp: PredictResponse = post_json(cfg, "/predict", req).await?;
        Ok(resp.into())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, req);
        Err(FetchError::Transport(OFF_BROWSER.to_owned()))
    }
}

/// `GET /weather?city=...` — current conditions for a city.
///
/// # Errors
///
/// Besides the usual transport/status/decode kinds, an in-body `error`
/// (unknown city) is returned as `FetchError::Api`.
pub async fn current_weather(cfg: &ApiConfig, city: &str) -> Result<WeatherSnapshot, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp: crate::net::types::WeatherResponse =
            get_json(cfg, "/weather", &[("city", city.to_owned())]).await?;
        resp.into_snapshot()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, city);
        Err(FetchError::Transport(OFF_BROWSER.to_owned()))
    }
}

/// `GET /forecast?temperature=..&humidity=..` — forecast keyed on current
/// readings.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, timeout, non-2xx status, or
/// an undecodable body.
pub async fn forecast_for(
    cfg: &ApiConfig,
    temperature: f64,
    humidity: f64,
) -> Result<Vec<ForecastDay>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp: ForecastResponse = get_json(
            cfg,
            "/forecast",
            &[
                ("temperature", temperature.to_string()),
                ("humidity", humidity.to_string()),
            ],
        )
        .await?;
        Ok(resp.forecast)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, temperature, humidity);
        Err(FetchError::Transport(OFF_BROWSER.to_owned()))
    }
}

/// `GET /forecast` — the standing 7-day forecast.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, timeout, non-2xx status, or
/// an undecodable body.
pub async fn forecast_week(cfg: &ApiConfig) -> Result<Vec<ForecastDay>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp: ForecastResponse = get_json(cfg, "/forecast", &[]).await?;
        Ok(resp.forecast)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cfg;
        Err(FetchError::Transport(OFF_BROWSER.to_owned()))
    }
}

/// Two-stage weather fetch: current conditions first, then the forecast
/// keyed on the readings just returned. Sequential by design; a stage-1
/// failure (including an unknown city) aborts before stage 2 is issued.
///
/// # Errors
///
/// Propagates the first failing stage unchanged.
pub async fn weather_bundle(cfg: &ApiConfig, city: &str) -> Result<WeatherBundle, FetchError> {
    let current = current_weather(cfg, city).await?;
    let forecast = forecast_for(cfg, current.temperature, current.humidity).await?;
    Ok(WeatherBundle {
        city: city.to_owned(),
        current,
        forecast,
    })
}

/// `POST /chat` — one chatbot round trip.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, timeout, non-2xx status, or
/// an undecodable body. An absent `response` field is not an error; the
/// caller substitutes a canned fallback.
pub async fn chat(cfg: &ApiConfig, message: &str) -> Result<ChatResponse, FetchError> {
    #[cfg(feature = "csr")]
    {
        let req = ChatRequest {
            message: message.to_owned(),
        };
        post_json(cfg, "/chat", &req).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cfg, message);
        Err(FetchError::Transport(OFF_BROWSER.to_owned()))
    }
}
