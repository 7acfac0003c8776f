use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::{
    MaintenancePredictionRequest, OptimizationService, OptimizerError, OptimizerHealth,
    PerformanceAnalysisRequest, RouteOptimizationRequest,
};
use crate::config::AiSettings;
use crate::models::{
    ActualMetrics, EngineType, FuelLog, MaintenanceRecommendation, PlannedMetrics, Ship,
    ShipSummary, VoyagePlan,
};
use crate::services::insights::generate_insights;
use crate::services::recommendations::basic_recommendations;
use crate::services::voyage_plan::create_basic_plan;

/// Fallback chain in front of an optional [`OptimizationService`].
///
/// Every method yields a result: the service answer when it succeeds, the
/// deterministic computation otherwise.
#[derive(Clone, Default)]
pub struct Advisor {
    service: Option<Arc<dyn OptimizationService>>,
}

impl std::fmt::Debug for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Advisor")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Advisor {
    /// Deterministic computations only.
    pub fn basic() -> Self {
        Self { service: None }
    }

    pub fn with_service(service: Arc<dyn OptimizationService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// HTTP-backed advisor when a base URL is configured, basic otherwise.
    pub fn from_settings(settings: &AiSettings) -> Result<Self, OptimizerError> {
        #[cfg(feature = "ai-service")]
        {
            if let Some(client) = super::HttpOptimizer::from_settings(settings)? {
                log::info!("Optimization service enabled at {}", client.base_url());
                return Ok(Self::with_service(Arc::new(client)));
            }
        }
        #[cfg(not(feature = "ai-service"))]
        {
            if settings.base_url.is_some() {
                log::warn!("AI_API_URL set but the ai-service feature is disabled");
            }
        }
        Ok(Self::basic())
    }

    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    pub async fn plan_route(
        &self,
        engine: EngineType,
        request: &RouteOptimizationRequest,
    ) -> VoyagePlan {
        if let Some(service) = &self.service {
            match service.optimize_route(request).await {
                Ok(plan) => return plan,
                Err(e) => log::warn!("Route optimization failed, using basic plan: {}", e),
            }
        }
        create_basic_plan(
            engine,
            &request.voyage.origin,
            &request.voyage.destination,
            request.voyage.departure_time,
        )
    }

    /// Recommendations for `ship` from its recent usage (newest first).
    pub async fn recommend_maintenance(
        &self,
        ship: &Ship,
        usage: &[FuelLog],
        now: DateTime<Utc>,
    ) -> Vec<MaintenanceRecommendation> {
        if let Some(service) = &self.service {
            let request =
                MaintenancePredictionRequest::new(ShipSummary::from(ship), usage.to_vec());
            match service.predict_maintenance(&request).await {
                Ok(recommendations) => return recommendations,
                Err(e) => log::warn!(
                    "Maintenance prediction failed for ship {}, using basic analysis: {}",
                    ship.id,
                    e
                ),
            }
        }
        basic_recommendations(ship, usage, now)
    }

    pub async fn analyze_performance(&self, request: &PerformanceAnalysisRequest) -> Vec<String> {
        if let Some(service) = &self.service {
            match service.analyze_performance(request).await {
                Ok(insights) if !insights.is_empty() => return insights,
                Ok(_) => log::warn!(
                    "Performance analysis for voyage {} returned no insights, using basic insights",
                    request.voyage.id
                ),
                Err(e) => log::warn!(
                    "Performance analysis failed for voyage {}, using basic insights: {}",
                    request.voyage.id,
                    e
                ),
            }
        }
        let planned = request.planned.as_ref().map(PlannedMetrics::from);
        let actual = request.actuals.as_ref().map(ActualMetrics::from);
        generate_insights(planned.as_ref(), actual.as_ref())
    }

    pub async fn health(&self) -> OptimizerHealth {
        match &self.service {
            Some(service) => service.health().await,
            None => OptimizerHealth::disabled(),
        }
    }
}
