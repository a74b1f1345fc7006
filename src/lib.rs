pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpRouteApi;
pub use config::CliConfig;
pub use core::resolver::MismatchResolver;
pub use core::session::RouteSession;
pub use domain::model::{
    FixRequest, GeoPoint, MatchResult, MatchedPort, PortRecord, RouteDetail, RouteSummary,
};
pub use domain::ports::RouteApi;
pub use utils::error::{Result, VizError};
