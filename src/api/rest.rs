use url::form_urlencoded;

use crate::error::ApiError;

use super::types::{ApiErrorResponse, HealthResponse, PredictionResult};

/// REST client for the stock-agent prediction backend.
///
/// One best-effort request per call: no retry, no caching. Without a
/// configured base address every call fails fast with
/// `ApiError::Unconfigured` before any network I/O.
pub struct AgentClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl AgentClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn endpoint_url(&self, path_and_query: &str) -> Result<String, ApiError> {
        match &self.base_url {
            Some(base) => Ok(format!("{}{}", base, path_and_query)),
            None => Err(ApiError::Unconfigured),
        }
    }

    fn ticker_query(ticker: &str) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("ticker", ticker)
            .finish()
    }

    async fn call(
        &self,
        method: reqwest::Method,
        path_and_query: &str,
    ) -> Result<PredictionResult, ApiError> {
        let url = self.endpoint_url(path_and_query)?;
        tracing::debug!(method = %method, url = %url, "Calling backend");

        let resp = self.http.request(method, &url).send().await?;
        let status = resp.status();
        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let payload: Option<serde_json::Value> = if is_json {
            Some(resp.json().await?)
        } else {
            None
        };

        if !status.is_success() {
            let message = payload
                .clone()
                .and_then(|p| serde_json::from_value::<ApiErrorResponse>(p).ok())
                .map(|e| e.error)
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            tracing::warn!(status = status.as_u16(), message = %message, "Backend request failed");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let Some(payload) = payload else {
            tracing::warn!(url = %url, "Success status without JSON body");
            return Err(ApiError::BadResponse);
        };

        Ok(serde_json::from_value(payload)?)
    }

    pub async fn predict(&self, ticker: &str) -> Result<PredictionResult, ApiError> {
        tracing::info!(ticker, "Requesting prediction");
        let path = format!("/predict?{}", Self::ticker_query(ticker));
        self.call(reqwest::Method::GET, &path).await
    }

    pub async fn retrain(&self, ticker: &str) -> Result<PredictionResult, ApiError> {
        tracing::info!(ticker, "Requesting retrain");
        let path = format!("/train?{}", Self::ticker_query(ticker));
        self.call(reqwest::Method::POST, &path).await
    }

    /// Startup connectivity probe. Not part of the predict/retrain flow.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.endpoint_url("/health")?;
        let resp = self.http.get(&url).send().await?;
        Ok(resp.error_for_status()?.json::<HealthResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let client = AgentClient::new(Some("https://api.example.com".to_string()));
        assert_eq!(
            client.endpoint_url("/predict?ticker=AAPL").unwrap(),
            "https://api.example.com/predict?ticker=AAPL"
        );
    }

    #[test]
    fn endpoint_url_without_base_is_unconfigured() {
        let client = AgentClient::new(None);
        assert!(matches!(
            client.endpoint_url("/predict"),
            Err(ApiError::Unconfigured)
        ));
    }

    #[test]
    fn ticker_query_percent_encodes_values() {
        assert_eq!(AgentClient::ticker_query("AAPL"), "ticker=AAPL");
        assert_eq!(AgentClient::ticker_query("BRK.B"), "ticker=BRK.B");
        assert_eq!(AgentClient::ticker_query("A&B"), "ticker=A%26B");
    }
}
