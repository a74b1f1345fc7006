// Domain layer: wire models and the service-boundary trait. Nothing in
// here depends on reqwest or tokio beyond the async trait signatures.

pub mod model;
pub mod ports;
