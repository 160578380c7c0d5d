//! Health check gRPC service implementation.
//!
//! Health checks for monitoring and load balancers.

use std::sync::Arc;

use chrono::Utc;
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::proto::{
    health_check_response::ServingStatus, health_service_server::HealthService,
    HealthCheckRequest, HealthCheckResponse, Timestamp as ProtoTimestamp,
};
use crate::AppState;

/// Health service implementation.
pub struct HealthServiceImpl {
    state: Arc<AppState>,
}

impl HealthServiceImpl {
    /// Create a new health service.
    pub fn new(state: Arc<AppState>) -> Self {
        HealthServiceImpl { state }
    }

    /// Check the health of a specific service or overall system.
    async fn check_health(&self, service: &str) -> HealthCheckResponse {
        let (status, message) = match service {
            "" | "overall" => {
                let (status, message) = self.check_database_health().await;
                if status == ServingStatus::Serving {
                    (status, "All systems operational".to_string())
                } else {
                    (status, format!("Database unhealthy: {}", message))
                }
            }
            "database" => self.check_database_health().await,
            _ => (ServingStatus::Unknown, format!("Unknown service: {}", service)),
        };

        HealthCheckResponse {
            status: status as i32,
            message,
            server_time: Some(ProtoTimestamp {
                value: Utc::now().to_rfc3339(),
            }),
        }
    }

    /// Check database health.
    async fn check_database_health(&self) -> (ServingStatus, String) {
        match self.state.store.ping().await {
            Ok(()) => (ServingStatus::Serving, "Database connected".to_string()),
            Err(e) => (ServingStatus::NotServing, format!("Database error: {}", e)),
        }
    }
}

#[tonic::async_trait]
impl HealthService for HealthServiceImpl {
    /// Simple health check.
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let req = request.into_inner();
        let response = self.check_health(&req.service).await;
        debug!(service = %req.service, status = response.status, "Health check");
        Ok(Response::new(response))
    }
}
