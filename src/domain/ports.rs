use crate::domain::model::{FixRequest, PortRecord, RouteDetail, RouteSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary contract to the route/port service. The core only ever
/// reads snapshots through this trait; an alias fix travels back as a
/// request, never as a local mutation of fetched data.
#[async_trait]
pub trait RouteApi: Send + Sync {
    async fn fetch_routes(&self, limit: usize) -> Result<Vec<RouteSummary>>;
    async fn fetch_route_detail(&self, route_idx: i64) -> Result<RouteDetail>;
    async fn fetch_ports(&self, limit: usize) -> Result<Vec<PortRecord>>;
    async fn submit_fix(&self, fix: &FixRequest) -> Result<()>;
}
