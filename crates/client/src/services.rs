//! Service contracts between the route editor and the console.
//!
//! The editor depends on these traits rather than on [`ConsoleClient`]
//! directly, so tests and alternative transports can substitute their own
//! implementations.

use async_trait::async_trait;

use meridian_core::models::{DataCenter, Route};

use crate::api::{ConsoleClient, ServiceError, UpdateOutcome};

/// Cluster-scoped reads plus the designated-route replacement.
#[async_trait]
pub trait ClusterService: Send + Sync {
    /// All data centers the cluster is deployed in.
    async fn data_centers(&self, cluster_name: &str) -> Result<Vec<DataCenter>, ServiceError>;

    /// The designated-route set currently stored for the (dc, cluster)
    /// pair.
    async fn designated_routes(
        &self,
        dc_name: &str,
        cluster_name: &str,
    ) -> Result<Vec<Route>, ServiceError>;

    /// Atomically replace the designated-route set for the (cluster, dc)
    /// pair with `routes`.
    async fn replace_designated_routes(
        &self,
        cluster_name: &str,
        dc_name: &str,
        routes: &[Route],
    ) -> Result<UpdateOutcome, ServiceError>;
}

/// Route-inventory reads.
#[async_trait]
pub trait RouteService: Send + Sync {
    /// Active routes originating in the given data center.
    async fn active_routes_from(&self, src_dc_name: &str) -> Result<Vec<Route>, ServiceError>;
}

#[async_trait]
impl ClusterService for ConsoleClient {
    async fn data_centers(&self, cluster_name: &str) -> Result<Vec<DataCenter>, ServiceError> {
        ConsoleClient::data_centers(self, cluster_name).await
    }

    async fn designated_routes(
        &self,
        dc_name: &str,
        cluster_name: &str,
    ) -> Result<Vec<Route>, ServiceError> {
        ConsoleClient::designated_routes(self, dc_name, cluster_name).await
    }

    async fn replace_designated_routes(
        &self,
        cluster_name: &str,
        dc_name: &str,
        routes: &[Route],
    ) -> Result<UpdateOutcome, ServiceError> {
        ConsoleClient::replace_designated_routes(self, cluster_name, dc_name, routes).await
    }
}

#[async_trait]
impl RouteService for ConsoleClient {
    async fn active_routes_from(&self, src_dc_name: &str) -> Result<Vec<Route>, ServiceError> {
        ConsoleClient::active_routes_from(self, src_dc_name).await
    }
}
