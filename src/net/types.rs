#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::net::error::FetchError;

/// Soil types the prediction model was trained on.
pub const SOIL_TYPES: [&str; 5] = ["Sandy", "Loamy", "Black", "Red", "Clayey"];

/// Body for `POST /predict`. Fields are sent as the user typed them; the
/// service does its own numeric coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PredictRequest {
    pub temperature: String,
    pub humidity: String,
    pub moisture: String,
    pub soil_type: String,
    pub nitrogen: String,
    pub potassium: String,
    pub phosphorous: String,
}

impl PredictRequest {
    /// True when every field has non-blank content. The browser's `required`
    /// attribute already blocks empty submits; this is the in-code gate.
    pub fn is_complete(&self) -> bool {
        [
            &self.temperature,
            &self.humidity,
            &self.moisture,
            &self.soil_type,
            &self.nitrogen,
            &self.potassium,
            &self.phosphorous,
        ]
        .iter()
        .all(|f| !f.trim().is_empty())
    }
}

/// Success body for `POST /predict`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PredictResponse {
    pub predicted_crop: String,
    pub predicted_fertilizer: String,
}

/// Recommendation shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionResult {
    pub crop: String,
    pub fertilizer: String,
}

impl From<PredictResponse> for PredictionResult {
    fn from(resp: PredictResponse) -> Self {
        Self {
            crop: resp.predicted_crop,
            fertilizer: resp.predicted_fertilizer,
        }
    }
}

/// Body for `GET /weather?city=...`. A 2xx body may still carry an
/// application-level `error` instead of readings.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Current conditions for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
}

impl WeatherResponse {
    /// Resolve the body into a snapshot, surfacing an embedded `error` as
    /// `FetchError::Api` and a readings-free body as `Decode`.
    pub fn into_snapshot(self) -> Result<WeatherSnapshot, FetchError> {
        if let Some(message) = self.error {
            return Err(FetchError::Api(message));
        }
        match (self.temperature, self.humidity) {
            (Some(temperature), Some(humidity)) => Ok(WeatherSnapshot {
                temperature,
                humidity,
                description: self.description.unwrap_or_default(),
            }),
            _ => Err(FetchError::Decode(
                "weather body missing temperature/humidity".to_owned(),
            )),
        }
    }
}

/// One day of forecast. The service uses `date`/`predicted_tempmax`/
/// `predicted_weather` on the unparameterized endpoint and `day`/
/// `temperature`/`condition` on the parameterized one; aliases absorb both.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ForecastDay {
    #[serde(alias = "day")]
    pub date: String,
    #[serde(alias = "temperature")]
    pub predicted_tempmax: f64,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(alias = "condition")]
    pub predicted_weather: String,
}

/// Body for both `GET /forecast` variants.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastDay>,
}

/// Everything the weather view renders after its two-stage fetch completes.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherBundle {
    pub city: String,
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastDay>,
}

/// Body for `POST /chat`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body for the chat response; `response` may be absent, in which case the
/// UI substitutes a canned fallback.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}
