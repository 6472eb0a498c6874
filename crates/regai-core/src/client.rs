//! HTTP client for the advisor endpoint.
//!
//! Every call is a single request: no retry, no backoff, no timeout. The
//! server answers errors with the same `{success: false, error}` envelope
//! and a 4xx/5xx status, so bodies are classified regardless of status.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RegaiError, RegaiResult};
use crate::plan::{PlanEndpoint, PlanReply, PlanRequest, WeatherSummary};

/// Path of the plan-generation call.
pub const GENERATE_PLAN_PATH: &str = "generate-plan";

/// `/health` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub gemini_available: bool,
    #[serde(default)]
    pub weather_available: bool,
}

/// Split a `{success, ...}` envelope into its payload or its error text.
///
/// A missing `success` field counts as failure. The error text is taken
/// from `error`, falling back to `tips` (the quick-tips call reports its
/// failures there).
fn split_envelope(body: &str) -> RegaiResult<Result<Value, String>> {
    let value: Value = serde_json::from_str(body)?;
    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if success {
        return Ok(Ok(value));
    }
    let message = ["error", "tips"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .unwrap_or("request was not successful")
        .to_string();
    Ok(Err(message))
}

fn take_field<T: serde::de::DeserializeOwned>(mut value: Value, field: &str) -> RegaiResult<T> {
    let inner = value
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| RegaiError::Decode(format!("response is missing `{}`", field)))?;
    Ok(serde_json::from_value(inner)?)
}

/// Client for the plan endpoint and its companion calls.
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AdvisorClient {
    /// Create a client for `endpoint` (e.g. `http://localhost:5000`).
    ///
    /// A cookie store is kept so the chat call sees its server-side history.
    pub fn new(endpoint: &str) -> RegaiResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| RegaiError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(RegaiError::Config(format!(
                "endpoint '{}' cannot carry a path",
                endpoint
            )));
        }
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read_body(resp: reqwest::Response) -> RegaiResult<(reqwest::StatusCode, String)> {
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(%status, bytes = body.len(), "Advisor response");
        Ok((status, body))
    }

    /// `POST /generate-plan`.
    pub async fn generate_plan(&self, request: &PlanRequest) -> RegaiResult<PlanReply> {
        let url = self.url(&[GENERATE_PLAN_PATH]);
        let resp = self.http.post(url).json(request).send().await?;
        let (status, body) = Self::read_body(resp).await?;
        match PlanReply::from_json(&body) {
            Ok(reply) => Ok(reply),
            Err(RegaiError::Decode(_)) if !status.is_success() => Err(
                RegaiError::PlanRequestFailure(format!("endpoint answered {}", status)),
            ),
            Err(e) => Err(e),
        }
    }

    /// `GET /api/weather/<county>`.
    pub async fn weather(&self, county: &str) -> RegaiResult<WeatherSummary> {
        let url = self.url(&["api", "weather", county]);
        let resp = self.http.get(url).send().await?;
        let (_, body) = Self::read_body(resp).await?;
        let payload = split_envelope(&body)?.map_err(RegaiError::Rejected)?;
        take_field(payload, "weather")
    }

    /// `POST /api/quick-tips`.
    pub async fn quick_tips(&self, crop: &str, soil: &str) -> RegaiResult<String> {
        let url = self.url(&["api", "quick-tips"]);
        let body = serde_json::json!({ "crop": crop, "soil": soil });
        let resp = self.http.post(url).json(&body).send().await?;
        let (_, body) = Self::read_body(resp).await?;
        let payload = split_envelope(&body)?.map_err(RegaiError::Rejected)?;
        take_field(payload, "tips")
    }

    /// `POST /api/chat`. Conversation history lives in the server session.
    pub async fn chat(&self, message: &str) -> RegaiResult<String> {
        let url = self.url(&["api", "chat"]);
        let body = serde_json::json!({ "message": message });
        let resp = self.http.post(url).json(&body).send().await?;
        let (_, body) = Self::read_body(resp).await?;
        let payload = split_envelope(&body)?.map_err(RegaiError::Rejected)?;
        take_field(payload, "response")
    }

    /// `GET /health`.
    pub async fn health(&self) -> RegaiResult<HealthReport> {
        let url = self.url(&["health"]);
        let resp = self.http.get(url).send().await?;
        let (_, body) = Self::read_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PlanEndpoint for AdvisorClient {
    async fn generate_plan(&self, request: &PlanRequest) -> RegaiResult<PlanReply> {
        AdvisorClient::generate_plan(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = AdvisorClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.url(&[GENERATE_PLAN_PATH]).as_str(),
            "http://localhost:5000/generate-plan"
        );

        let nested = AdvisorClient::new("http://example.com/advisor/").unwrap();
        assert_eq!(
            nested.url(&["api", "weather", "uasin gishu"]).as_str(),
            "http://example.com/advisor/api/weather/uasin%20gishu"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            AdvisorClient::new("not a url"),
            Err(RegaiError::Config(_))
        ));
        assert!(matches!(
            AdvisorClient::new("mailto:farmer@example.com"),
            Err(RegaiError::Config(_))
        ));
    }

    #[test]
    fn test_split_envelope() {
        let ok = split_envelope(r#"{"success": true, "tips": "mulch"}"#).unwrap();
        assert_eq!(ok.unwrap()["tips"], "mulch");

        let err = split_envelope(r#"{"success": false, "error": "nope"}"#).unwrap();
        assert_eq!(err.unwrap_err(), "nope");

        let tips = split_envelope(r#"{"tips": "Service temporarily unavailable"}"#).unwrap();
        assert_eq!(tips.unwrap_err(), "Service temporarily unavailable");
    }

    #[test]
    fn test_take_field_missing() {
        let err = take_field::<String>(serde_json::json!({"success": true}), "response").unwrap_err();
        assert!(err.to_string().contains("`response`"));
    }
}
