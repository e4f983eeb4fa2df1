use serde::Deserialize;

/// Backend sends null where an empty list is meant.
fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Option<Vec<f64>> = Option::deserialize(deserializer)?;
    Ok(values.unwrap_or_default())
}

/// Prediction payload returned by the stock-agent backend.
///
/// Every field is optional: the dashboard renders a placeholder for
/// anything the backend omitted instead of rejecting the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResult {
    pub ticker: Option<String>,
    pub current_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub model_price: Option<f64>,
    pub predicted_return: Option<f64>,
    pub decision: Option<String>,
    pub used_baseline: Option<bool>,
    pub blend_weight: Option<f64>,
    pub confidence: Option<String>,
    pub recent_volatility: Option<f64>,
    pub model_trained: Option<bool>,
    pub trained_at: Option<String>,
    pub target_horizon_days: Option<u32>,
    pub metrics: Option<ValidationMetrics>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub recent_close_prices: Vec<f64>,
    pub data_source: Option<String>,
    pub data_period: Option<String>,
    pub data_rows: Option<u64>,
    pub data_start: Option<String>,
    pub data_end: Option<String>,
    pub model_file: Option<String>,
}

/// Validation metrics stored alongside the trained model artifact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationMetrics {
    pub mae: Option<f64>,
    pub baseline_mae: Option<f64>,
    pub rmse: Option<f64>,
    pub r2: Option<f64>,
    pub quality_ratio: Option<f64>,
    pub target: Option<String>,
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// `GET /health` response.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model_ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_prediction_payload() {
        let json = r#"{
            "ticker": "AAPL",
            "current_price": 189.95,
            "predicted_price": 191.2,
            "model_price": 191.2,
            "predicted_return": 0.0066,
            "decision": "BUY",
            "used_baseline": false,
            "blend_weight": 1.0,
            "confidence": "high",
            "recent_volatility": 0.0132,
            "model_trained": true,
            "trained_at": "2026-08-01T09:30:00Z",
            "target_horizon_days": 1,
            "metrics": {
                "mae": 1.84,
                "rmse": 2.41,
                "r2": 0.93,
                "baseline_mae": 1.91,
                "quality_ratio": 1.04,
                "target": "next_close_price"
            },
            "recent_close_prices": [188.1, 188.7, 189.95],
            "data_source": "Yahoo Finance (yfinance)",
            "data_period": "5y",
            "data_rows": 1258,
            "data_start": "2021-08-02",
            "data_end": "2026-08-01",
            "model_file": "models/model_AAPL.pkl"
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ticker.as_deref(), Some("AAPL"));
        assert_eq!(result.current_price, Some(189.95));
        assert_eq!(result.decision.as_deref(), Some("BUY"));
        assert_eq!(result.used_baseline, Some(false));
        assert_eq!(result.recent_close_prices.len(), 3);
        assert_eq!(result.data_rows, Some(1258));
        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.mae, Some(1.84));
        assert_eq!(metrics.target.as_deref(), Some("next_close_price"));
    }

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let result: PredictionResult = serde_json::from_str("{}").unwrap();
        assert!(result.current_price.is_none());
        assert!(result.decision.is_none());
        assert!(result.metrics.is_none());
        assert!(result.recent_close_prices.is_empty());
    }

    #[test]
    fn null_metrics_tolerated() {
        let json = r#"{"ticker": "MSFT", "metrics": null, "trained_at": null}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ticker.as_deref(), Some("MSFT"));
        assert!(result.metrics.is_none());
        assert!(result.trained_at.is_none());
    }

    #[test]
    fn null_close_prices_become_empty() {
        let json = r#"{"recent_close_prices": null}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.recent_close_prices.is_empty());
    }

    #[test]
    fn unknown_fields_ignored() {
        let json = r#"{"current_price": 10.0, "some_future_field": {"a": 1}}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.current_price, Some(10.0));
    }

    #[test]
    fn deserialize_health_response() {
        let json = r#"{"status": "ok", "model_ready": true}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.model_ready);
    }
}
