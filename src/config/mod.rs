use crate::utils::error::Result;
use crate::utils::validation::{validate_limit, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "searoute-viz")]
#[command(about = "Check maritime port rotations against the route service's reference ports")]
pub struct CliConfig {
    /// Base URL of the route/port service.
    #[arg(long, default_value = "http://localhost:8000/api")]
    pub api_base_url: String,

    #[arg(long, default_value = "1000")]
    pub routes_limit: usize,

    /// High enough to cover the full reference set (~6000 ports).
    #[arg(long, default_value = "10000")]
    pub ports_limit: usize,

    /// Check a single route instead of the whole list.
    #[arg(long)]
    pub route_idx: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_limit("routes_limit", self.routes_limit)?;
        validate_limit("ports_limit", self.ports_limit)?;
        Ok(())
    }
}
