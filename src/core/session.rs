use crate::core::geometry::offset_geometry;
use crate::core::matcher::match_rotation_str;
use crate::domain::model::{GeoPoint, MatchResult, PortRecord, RouteDetail, RouteSummary};
use crate::domain::ports::RouteApi;
use crate::utils::error::Result;

/// Tag handed out when a route is selected. A detail response is only
/// applied while its token is still the latest selection; responses
/// for superseded selections are discarded, never cancelled at the
/// transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// What the map renders right now for the selected route.
#[derive(Debug, Clone, Default)]
pub struct RouteView {
    pub summary: Option<RouteSummary>,
    pub detail: Option<RouteDetail>,
    pub match_result: MatchResult,
    pub display_geometry: Vec<GeoPoint>,
}

impl RouteView {
    /// Rotation text driving the match pipeline: the detail record
    /// when loaded, the summary-level text until then (and as the
    /// fallback when the detail fetch failed).
    fn rotation(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .map(|d| d.summary.port_rotation.as_str())
            .or_else(|| self.summary.as_ref().map(|s| s.port_rotation.as_str()))
    }
}

/// Holds the port snapshot, the current selection, and everything
/// derived from them.
///
/// All derived state (match result, offset geometry) is rebuilt
/// wholesale from the latest inputs on every change; nothing is
/// patched incrementally, so a half-applied update cannot exist. I/O
/// failures never empty the view: the last good summary-level state
/// stays up and the failure is kept as a dismissible notice.
#[derive(Debug, Default)]
pub struct RouteSession {
    ports: Vec<PortRecord>,
    view: RouteView,
    version: u64,
    notice: Option<String>,
}

impl RouteSession {
    pub fn new(ports: Vec<PortRecord>) -> Self {
        Self {
            ports,
            view: RouteView::default(),
            version: 0,
            notice: None,
        }
    }

    pub fn view(&self) -> &RouteView {
        &self.view
    }

    pub fn ports(&self) -> &[PortRecord] {
        &self.ports
    }

    /// Pending user-facing I/O failure notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replaces the reference snapshot and recomputes the view.
    pub fn set_ports(&mut self, ports: Vec<PortRecord>) {
        self.ports = ports;
        self.recompute();
    }

    /// Starts a new selection. The summary is shown immediately; the
    /// returned token must accompany the eventual detail response.
    pub fn select(&mut self, summary: RouteSummary) -> SelectionToken {
        self.version += 1;
        tracing::debug!(
            "Selected route {} (selection version {})",
            summary.route_idx,
            self.version
        );
        self.view = RouteView {
            summary: Some(summary),
            ..RouteView::default()
        };
        self.recompute();
        SelectionToken(self.version)
    }

    /// Feeds back the outcome of a detail fetch. Returns `false` when
    /// the response belonged to a superseded selection and was
    /// discarded. A failed fetch keeps the summary-level view and
    /// records a notice instead of blocking anything.
    pub fn apply_detail(
        &mut self,
        token: SelectionToken,
        outcome: Result<RouteDetail>,
    ) -> bool {
        if token.0 != self.version {
            tracing::debug!(
                "Discarding stale detail response (version {} != {})",
                token.0,
                self.version
            );
            return false;
        }

        match outcome {
            Ok(detail) => {
                self.view.detail = Some(detail);
            }
            Err(e) => {
                tracing::warn!("Route detail fetch failed, keeping summary view: {}", e);
                self.notice = Some(format!("Could not load route detail: {}", e));
            }
        }
        self.recompute();
        true
    }

    /// Select + fetch + apply in one call for callers that do not
    /// interleave selections themselves.
    pub async fn select_and_load<A: RouteApi>(&mut self, api: &A, summary: RouteSummary) {
        let route_idx = summary.route_idx;
        let token = self.select(summary);
        let outcome = api.fetch_route_detail(route_idx).await;
        self.apply_detail(token, outcome);
    }

    /// Re-fetches the port snapshot and the current route's detail,
    /// then recomputes. Called after the service acknowledged a fix;
    /// only the recomputed match result tells whether the repaired
    /// token actually resolves now.
    pub async fn refresh<A: RouteApi>(&mut self, api: &A, ports_limit: usize) {
        match api.fetch_ports(ports_limit).await {
            Ok(ports) => self.ports = ports,
            Err(e) => {
                tracing::warn!("Port refresh failed, keeping previous snapshot: {}", e);
                self.notice = Some(format!("Could not refresh ports: {}", e));
            }
        }

        if let Some(route_idx) = self.view.summary.as_ref().map(|s| s.route_idx) {
            self.version += 1;
            let token = SelectionToken(self.version);
            let outcome = api.fetch_route_detail(route_idx).await;
            self.apply_detail(token, outcome);
        } else {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.view.match_result = match_rotation_str(self.view.rotation(), &self.ports);
        self.view.display_geometry = self
            .view
            .detail
            .as_ref()
            .map(|d| offset_geometry(&d.line_geometry))
            .unwrap_or_default();
    }
}
