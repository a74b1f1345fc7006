pub mod geometry;
pub mod matcher;
pub mod proforma;
pub mod resolver;
pub mod rotation;
pub mod session;

pub use crate::domain::model::{MatchResult, MatchedPort};
pub use crate::domain::ports::RouteApi;
pub use crate::utils::error::Result;
