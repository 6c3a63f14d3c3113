//! # GE Nexus — Grand Exchange data proxy
//!
//! ```text
//!  ┌──────────────┐   GET /api/ge/*                ┌──────────────────────┐   catalogue API
//!  │  Terminal /  │ ──────────────────────────────▶│                      │ ─────────────────▶
//!  │  Dashboard   │   GET /api/flip/opportunities  │   Axum router        │   wiki /mapping
//!  │              │   GET /api/{skill}/profits     │   (routes/*)         │   wiki /latest
//!  │              │ ◀──────────────────────────────│   engine/* aggregate │ ─────────────────▶
//!  └──────────────┘   { success, data | error }    └──────────────────────┘   Weird Gloop
//! ```
//!
//! The server keeps no state between requests: every call is validated,
//! fetched from upstream, aggregated in [`engine`] and returned wrapped in
//! [`models::ApiResponse`].

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod request_id;
pub mod routes;
pub mod state;
pub mod upstream;

pub use routes::build_router;
