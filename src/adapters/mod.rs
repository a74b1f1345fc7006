// Adapters: concrete implementations of the domain boundary traits.

pub mod http;
