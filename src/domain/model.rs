use serde::{Deserialize, Deserializer, Serialize};

/// Reference port record as served by `GET /ports`.
///
/// `lat`/`lng` arrive in whatever shape the upstream crawler left them
/// in: numbers, numeric strings, null, or missing entirely. Anything
/// that does not parse to a finite float collapses to `None` so a
/// malformed record degrades to "no coordinates" instead of failing
/// the decode of the whole port set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRecord {
    pub port_code: String,
    pub port_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub nation_name: String,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lng: Option<f64>,
}

impl PortRecord {
    /// Both coordinates present and finite.
    pub fn has_valid_coordinates(&self) -> bool {
        matches!((self.lat, self.lng), (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite())
    }
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|f| f.is_finite()))
}

/// Summary row from `GET /routes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub route_idx: i64,
    #[serde(default)]
    pub svc: String,
    #[serde(default)]
    pub route_name: String,
    #[serde(default)]
    pub carriers: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub ships: String,
    #[serde(default)]
    pub port_rotation: String,
    #[serde(default)]
    pub consortium: String,
}

/// Full record from `GET /routes/{id}`: the summary fields plus the
/// drawable geometry and the per-call proforma schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDetail {
    #[serde(flatten)]
    pub summary: RouteSummary,
    #[serde(default)]
    pub line_geometry: Vec<GeoPoint>,
    #[serde(default)]
    pub proforma: Vec<TerminalCall>,
}

/// A (lat, lng) pair. On the wire this is a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lng)
    }
}

/// One scheduled terminal call along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalCall {
    pub terminal_name: String,
    pub seq: u32,
    #[serde(default)]
    pub wtp: Option<f64>,
    #[serde(default)]
    pub sch: Option<String>,
}

/// A rotation token resolved to a reference port. `token` keeps the
/// original rotation text for display next to the canonical record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedPort {
    pub port: PortRecord,
    pub token: String,
}

/// Outcome of matching one rotation against one port snapshot.
///
/// `matched` and `unmatched` both preserve rotation order, and
/// `matched_count + unmatched.len() == total` always holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<MatchedPort>,
    pub unmatched: Vec<String>,
    pub total: usize,
    pub matched_count: usize,
}

impl MatchResult {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Body of `POST /fix-port-mismatch`. `bad_port_name` is the raw,
/// unnormalized rotation token the user picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixRequest {
    pub route_idx: i64,
    pub bad_port_name: String,
    pub correct_port_code: String,
}
