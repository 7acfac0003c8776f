//! [`OptimizationService`] over HTTP with JSON bodies and bearer-key auth.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{
    MaintenancePredictionRequest, OptimizationService, OptimizerError, OptimizerHealth,
    PerformanceAnalysisRequest, RouteOptimizationRequest,
};
use crate::config::AiSettings;
use crate::models::{AiReasonCode, MaintenancePriority, MaintenanceRecommendation, VoyagePlan};

pub const AI_SOURCE: &str = "ai_service";

/// Client for the external optimization API.
#[derive(Debug, Clone)]
pub struct HttpOptimizer {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    recommendations: Vec<PredictedMaintenance>,
}

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    #[serde(default)]
    insights: Vec<String>,
}

/// Recommendation as sent by the service. Everything but component and date
/// is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictedMaintenance {
    component: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: MaintenancePriority,
    suggested_date: DateTime<Utc>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    reason_code: Option<AiReasonCode>,
    #[serde(default, alias = "aiConfidence")]
    confidence: Option<f64>,
}

impl HttpOptimizer {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, OptimizerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OptimizerError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// `None` when no base URL is configured.
    pub fn from_settings(settings: &AiSettings) -> Result<Option<Self>, OptimizerError> {
        match settings.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Self::new(
                url.trim(),
                settings.api_key.clone(),
                Duration::from_secs(settings.timeout_secs),
            )
            .map(Some),
            _ => Ok(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, OptimizerError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .authorize(self.client.post(self.endpoint(path)))
            .json(body)
            .send()
            .await
            .map_err(|e| OptimizerError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| OptimizerError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(OptimizerError::Status {
                status: status.as_u16(),
                body: text.trim().to_string(),
            });
        }

        serde_json::from_str(&text).map_err(|e| OptimizerError::Decode(e.to_string()))
    }
}

#[async_trait]
impl OptimizationService for HttpOptimizer {
    async fn optimize_route(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<VoyagePlan, OptimizerError> {
        self.post_json("optimize-route", request).await
    }

    async fn predict_maintenance(
        &self,
        request: &MaintenancePredictionRequest,
    ) -> Result<Vec<MaintenanceRecommendation>, OptimizerError> {
        let response: PredictionResponse = self.post_json("predict-maintenance", request).await?;
        let ship_id = request.ship.id;

        Ok(response
            .recommendations
            .into_iter()
            .map(|r| MaintenanceRecommendation {
                ship_id,
                description: r
                    .description
                    .unwrap_or_else(|| format!("{} maintenance recommended", r.component)),
                component: r.component,
                priority: r.priority,
                suggested_date: r.suggested_date,
                reason: r.reason.unwrap_or_else(|| "Predicted by optimization service".to_string()),
                reason_code: r.reason_code.unwrap_or(AiReasonCode::FailurePrediction),
                ai_confidence: r.confidence.unwrap_or(0.5),
                source: AI_SOURCE.to_string(),
            })
            .collect())
    }

    async fn analyze_performance(
        &self,
        request: &PerformanceAnalysisRequest,
    ) -> Result<Vec<String>, OptimizerError> {
        let response: AnalysisResponse = self.post_json("analyze-performance", request).await?;
        Ok(response.insights)
    }

    async fn health(&self) -> OptimizerHealth {
        let result = self
            .authorize(self.client.get(self.endpoint("health")))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => OptimizerHealth::healthy(),
            Ok(response) => OptimizerHealth::unhealthy(format!("status {}", response.status())),
            Err(e) => OptimizerHealth::unhealthy(e.to_string()),
        }
    }
}
