use super::*;

fn full_request() -> PredictRequest {
    PredictRequest {
        temperature: "25".to_owned(),
        humidity: "80".to_owned(),
        moisture: "70".to_owned(),
        soil_type: "Loamy".to_owned(),
        nitrogen: "90".to_owned(),
        potassium: "43".to_owned(),
        phosphorous: "20".to_owned(),
    }
}

// =============================================================
// PredictRequest completeness gate
// =============================================================

#[test]
fn complete_request_passes_gate() {
    assert!(full_request().is_complete());
}

#[test]
fn blank_field_fails_gate() {
    let mut req = full_request();
    req.soil_type = "   ".to_owned();
    assert!(!req.is_complete());
}

#[test]
fn request_serializes_fields_as_typed() {
    let json = serde_json::to_value(full_request()).expect("serialize");
    assert_eq!(json["temperature"], "25");
    assert_eq!(json["soil_type"], "Loamy");
    assert_eq!(json["phosphorous"], "20");
}

// =============================================================
// Prediction response conversion
// =============================================================

#[test]
fn predict_response_maps_to_result() {
    let resp: PredictResponse = serde_json::from_value(serde_json::json!({
        "predicted_crop": "Rice",
        "predicted_fertilizer": "Urea"
    }))
    .expect("decode");
    let result = PredictionResult::from(resp);
    assert_eq!(result.crop, "Rice");
    assert_eq!(result.fertilizer, "Urea");
}

// =============================================================
// Weather body resolution
// =============================================================

#[test]
fn weather_body_with_readings_becomes_snapshot() {
    let resp: WeatherResponse = serde_json::from_value(serde_json::json!({
        "temperature": 31.5,
        "humidity": 62.0,
        "description": "scattered clouds"
    }))
    .expect("decode");
    let snap = resp.into_snapshot().expect("snapshot");
    assert_eq!(snap.temperature, 31.5);
    assert_eq!(snap.humidity, 62.0);
    assert_eq!(snap.description, "scattered clouds");
}

#[test]
fn weather_body_error_surfaces_as_api_error() {
    let resp: WeatherResponse =
        serde_json::from_value(serde_json::json!({ "error": "city not found" })).expect("decode");
    assert_eq!(
        resp.into_snapshot(),
        Err(crate::net::error::FetchError::Api("city not found".to_owned()))
    );
}

#[test]
fn weather_body_without_readings_is_a_decode_error() {
    let resp: WeatherResponse =
        serde_json::from_value(serde_json::json!({ "description": "hazy" })).expect("decode");
    assert!(matches!(
        resp.into_snapshot(),
        Err(crate::net::error::FetchError::Decode(_))
    ));
}

// =============================================================
// Forecast field aliases
// =============================================================

#[test]
fn forecast_decodes_unparameterized_shape() {
    let resp: ForecastResponse = serde_json::from_value(serde_json::json!({
        "forecast": [{
            "date": "2025-06-01",
            "predicted_tempmax": 34.2,
            "humidity": 58.0,
            "wind_speed": 12.4,
            "predicted_weather": "Sunny"
        }]
    }))
    .expect("decode");
    assert_eq!(resp.forecast.len(), 1);
    assert_eq!(resp.forecast[0].date, "2025-06-01");
    assert_eq!(resp.forecast[0].wind_speed, Some(12.4));
}

#[test]
fn forecast_decodes_parameterized_shape() {
    let resp: ForecastResponse = serde_json::from_value(serde_json::json!({
        "forecast": [{
            "day": "Monday",
            "temperature": 29.0,
            "condition": "Rain"
        }]
    }))
    .expect("decode");
    assert_eq!(resp.forecast[0].date, "Monday");
    assert_eq!(resp.forecast[0].predicted_tempmax, 29.0);
    assert_eq!(resp.forecast[0].predicted_weather, "Rain");
    assert_eq!(resp.forecast[0].humidity, None);
}

// =============================================================
// Chat response
// =============================================================

#[test]
fn chat_response_reply_may_be_absent() {
    let resp: ChatResponse = serde_json::from_value(serde_json::json!({})).expect("decode");
    assert!(resp.response.is_none());

    let resp: ChatResponse =
        serde_json::from_value(serde_json::json!({ "response": "Use drip irrigation." }))
            .expect("decode");
    assert_eq!(resp.response.as_deref(), Some("Use drip irrigation."));
}
