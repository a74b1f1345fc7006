use clap::Parser;
use searoute_viz::core::matcher::match_rotation_str;
use searoute_viz::utils::{logger, validation::Validate};
use searoute_viz::{CliConfig, HttpRouteApi, RouteApi};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting searoute-viz rotation check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let api = HttpRouteApi::new(config.api_base_url.clone());

    let ports = api.fetch_ports(config.ports_limit).await?;
    tracing::info!("Loaded {} reference ports", ports.len());

    let mut routes = api.fetch_routes(config.routes_limit).await?;
    if let Some(route_idx) = config.route_idx {
        routes.retain(|r| r.route_idx == route_idx);
        if routes.is_empty() {
            tracing::error!("Route {} not found", route_idx);
            eprintln!("Route {} not found", route_idx);
            std::process::exit(1);
        }
    }
    tracing::info!("Checking {} route(s)", routes.len());

    let mut unmatched_counts: HashMap<String, usize> = HashMap::new();
    let mut clean_routes = 0usize;

    for route in &routes {
        let result = match_rotation_str(Some(&route.port_rotation), &ports);
        if result.is_complete() {
            clean_routes += 1;
            tracing::debug!(
                "Route {} ({}): {}/{} ports matched",
                route.route_idx,
                route.route_name,
                result.matched_count,
                result.total
            );
        } else {
            tracing::warn!(
                "Route {} ({}): {}/{} ports matched, unmatched: {:?}",
                route.route_idx,
                route.route_name,
                result.matched_count,
                result.total,
                result.unmatched
            );
            for token in &result.unmatched {
                *unmatched_counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }

    println!("Checked {} route(s), {} fully matched", routes.len(), clean_routes);

    if unmatched_counts.is_empty() {
        println!("All rotation names resolved against the reference port set");
        return Ok(());
    }

    let mut by_frequency: Vec<(String, usize)> = unmatched_counts.into_iter().collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("\nUnknown port names by frequency:");
    for (name, count) in &by_frequency {
        println!("  {:>4}  {}", count, name);
    }
    println!(
        "\n{} unknown name(s). Review the list and register aliases via the fix endpoint.",
        by_frequency.len()
    );

    std::process::exit(1);
}
