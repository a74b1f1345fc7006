use crate::domain::model::{FixRequest, PortRecord, RouteDetail, RouteSummary};
use crate::domain::ports::RouteApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// [`RouteApi`] over the REST service, rooted at something like
/// `http://localhost:8000/api`. Non-2xx responses become errors; the
/// caller decides what last-good state to keep showing.
#[derive(Debug, Clone)]
pub struct HttpRouteApi {
    base_url: String,
    client: Client,
}

impl HttpRouteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RouteApi for HttpRouteApi {
    async fn fetch_routes(&self, limit: usize) -> Result<Vec<RouteSummary>> {
        let url = self.url(&format!("/routes?limit={}", limit));
        tracing::debug!("GET {}", url);
        let routes: Vec<RouteSummary> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!("Fetched {} route summaries", routes.len());
        Ok(routes)
    }

    async fn fetch_route_detail(&self, route_idx: i64) -> Result<RouteDetail> {
        let url = self.url(&format!("/routes/{}", route_idx));
        tracing::debug!("GET {}", url);
        let detail = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }

    async fn fetch_ports(&self, limit: usize) -> Result<Vec<PortRecord>> {
        let url = self.url(&format!("/ports?limit={}", limit));
        tracing::debug!("GET {}", url);
        let ports: Vec<PortRecord> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!("Fetched {} reference ports", ports.len());
        Ok(ports)
    }

    async fn submit_fix(&self, fix: &FixRequest) -> Result<()> {
        let url = self.url("/fix-port-mismatch");
        tracing::debug!(
            "POST {} ('{}' -> {})",
            url,
            fix.bad_port_name,
            fix.correct_port_code
        );
        self.client
            .post(&url)
            .json(fix)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
