use super::*;

// =============================================================
// ApiConfig defaults
// =============================================================

#[test]
fn default_points_at_local_service() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.timeout(), Duration::from_secs(15));
}

// =============================================================
// URL joining
// =============================================================

#[test]
fn url_joins_with_single_slash() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url("predict"), "http://127.0.0.1:5000/predict");
    assert_eq!(cfg.url("/predict"), "http://127.0.0.1:5000/predict");
}

#[test]
fn url_tolerates_trailing_slash_on_base() {
    let cfg = ApiConfig {
        base_url: "http://10.0.0.4:5000/".to_owned(),
        ..ApiConfig::default()
    };
    assert_eq!(cfg.url("/weather"), "http://10.0.0.4:5000/weather");
}
