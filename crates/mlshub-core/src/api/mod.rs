//! HTTP access to the remote stats feed.
//!
//! - `Endpoint` / `StatsEndpoint`: describe a resource and build its request
//! - `HttpTransport` / `ReqwestTransport`: execute requests
//! - `NetworkService`: fetch + status check + JSON decode, one attempt

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{HttpTransport, NetworkService, RawResponse, ReqwestTransport};
pub use endpoint::{Endpoint, StatsEndpoint, STATS_BASE_URL, STATS_PATH};
pub use error::NetworkError;
