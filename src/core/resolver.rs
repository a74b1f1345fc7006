use crate::domain::model::{FixRequest, MatchResult, PortRecord};
use crate::domain::ports::RouteApi;
use crate::utils::error::{Result, VizError};

/// Cap on the "correct port" picker result set. The reference set runs
/// to thousands of entries; the picker never shows more than this.
pub const MAX_CANDIDATES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Idle,
    ListingUnmatched,
    AwaitingSelection,
    Submitting,
    Applied,
    SubmitFailed,
}

/// Workflow for mapping an unmatched rotation token to the port the
/// user says it should have been.
///
/// The resolver owns nothing but the current unmatched list and the
/// user's two selections. A successful submit only means the service
/// acknowledged the fix: the caller must refresh route detail and the
/// port snapshot and feed the recomputed [`MatchResult`] back through
/// [`sync`](Self::sync) before the entry actually disappears. Rapid
/// repeated submits for the same token are not deduplicated here; the
/// service sees both.
#[derive(Debug)]
pub struct MismatchResolver {
    state: ResolverState,
    unmatched: Vec<String>,
    selected_bad: Option<String>,
    selected_port_code: Option<String>,
    last_error: Option<String>,
}

impl Default for MismatchResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MismatchResolver {
    pub fn new() -> Self {
        Self {
            state: ResolverState::Idle,
            unmatched: Vec::new(),
            selected_bad: None,
            selected_port_code: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn selected_bad(&self) -> Option<&str> {
        self.selected_bad.as_deref()
    }

    pub fn selected_port_code(&self) -> Option<&str> {
        self.selected_port_code.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Takes the latest recomputed match result. With no unmatched
    /// tokens the resolver goes idle; otherwise the first unmatched
    /// entry is preselected as the bad token, matching what the picker
    /// shows by default. A selection that no longer appears in the
    /// list is dropped.
    pub fn sync(&mut self, result: &MatchResult) {
        self.unmatched = result.unmatched.clone();

        if self.unmatched.is_empty() {
            self.selected_bad = None;
            self.selected_port_code = None;
            self.last_error = None;
            self.state = ResolverState::Idle;
            return;
        }

        match &self.selected_bad {
            Some(bad) if self.unmatched.contains(bad) => {}
            _ => self.selected_bad = self.unmatched.first().cloned(),
        }
        self.refresh_selection_state();
    }

    /// Picks the unmatched token to repair. Rejected when the token is
    /// not currently listed.
    pub fn select_bad(&mut self, token: &str) -> Result<()> {
        if !self.unmatched.iter().any(|t| t == token) {
            return Err(VizError::ValidationError {
                message: format!("'{}' is not an unmatched token of the current route", token),
            });
        }
        self.selected_bad = Some(token.to_string());
        self.refresh_selection_state();
        Ok(())
    }

    /// Picks the correct port by code.
    pub fn select_port(&mut self, port_code: &str) {
        self.selected_port_code = Some(port_code.to_string());
        self.refresh_selection_state();
    }

    pub fn can_submit(&self) -> bool {
        self.selected_bad.is_some() && self.selected_port_code.is_some()
    }

    /// Sends the fix to the service. Without both selections this is
    /// rejected locally and no request goes out. On acknowledgment the
    /// state becomes `Applied` and the caller is expected to refresh;
    /// on failure it becomes `SubmitFailed` with both selections kept
    /// so the user can retry as-is.
    pub async fn submit<A: RouteApi>(&mut self, api: &A, route_idx: i64) -> Result<()> {
        let (Some(bad), Some(code)) = (self.selected_bad.clone(), self.selected_port_code.clone())
        else {
            return Err(VizError::ValidationError {
                message: "both an unmatched token and a correct port must be selected".to_string(),
            });
        };

        self.state = ResolverState::Submitting;
        let fix = FixRequest {
            route_idx,
            bad_port_name: bad,
            correct_port_code: code,
        };

        tracing::debug!(
            "Submitting fix for route {}: '{}' -> {}",
            fix.route_idx,
            fix.bad_port_name,
            fix.correct_port_code
        );

        match api.submit_fix(&fix).await {
            Ok(()) => {
                tracing::info!(
                    "Fix accepted: '{}' mapped to {}",
                    fix.bad_port_name,
                    fix.correct_port_code
                );
                self.last_error = None;
                self.state = ResolverState::Applied;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Fix submission failed: {}", e);
                self.last_error = Some(e.to_string());
                self.state = ResolverState::SubmitFailed;
                Err(e)
            }
        }
    }

    /// A refresh is due once the service has acknowledged a fix.
    pub fn needs_refresh(&self) -> bool {
        self.state == ResolverState::Applied
    }

    /// Dismisses a surfaced submission failure and returns to the
    /// selection step, selections intact.
    pub fn dismiss_error(&mut self) {
        if self.state == ResolverState::SubmitFailed {
            self.last_error = None;
            self.refresh_selection_state();
        }
    }

    fn refresh_selection_state(&mut self) {
        self.state = if self.can_submit() {
            ResolverState::AwaitingSelection
        } else {
            ResolverState::ListingUnmatched
        };
    }
}

/// Candidate search for the "correct port" picker: case-insensitive
/// substring match on `port_name` or `port_code`, capped at
/// [`MAX_CANDIDATES`] however large the snapshot is. Re-run on every
/// filter keystroke, so it stays a single linear pass.
pub fn search_candidates<'a>(ports: &'a [PortRecord], filter: &str) -> Vec<&'a PortRecord> {
    let needle = filter.trim().to_lowercase();
    ports
        .iter()
        .filter(|p| {
            p.port_name.to_lowercase().contains(&needle)
                || p.port_code.to_lowercase().contains(&needle)
        })
        .take(MAX_CANDIDATES)
        .collect()
}
