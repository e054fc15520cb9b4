//! citydb-server - HTTP/JSON API over a `citydb-core` city store
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /city/{id}` - City by GeoNames id, or `{"error": "City not found"}`
//! - `GET /city/compare/{name1}/{name2}` - Compare two cities by name
//!   (`?format=text` returns the legacy one-line verdict as a JSON string)
//! - `GET /cities?page=1&per_page=5` - Paginated listing in file order
//! - `GET /suggest?name=` - Case-insensitive name-prefix suggestions
//! - `GET /health` - Liveness and dataset stats
//!
//! Lookups that find nothing still answer `200`; the failure is carried in
//! an `error` field. Invalid pagination answers `400`, unknown paths `404`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, init_tracing, start_server};
pub use state::ServerState;
