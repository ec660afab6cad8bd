//! HTTP facade for databin.
//!
//! Exposes the stored JSON document as a single network resource: GET
//! fetches the whole document, POST/PUT replace it entirely. Every other
//! path is served from a static asset directory. Permissive CORS headers
//! and request tracing are applied to every response.
//!
//! All document semantics live in `databin-store`; this crate only maps
//! methods to store calls and store errors to status codes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::StatusEnvelope;
pub use router::{build_router, AppState};
pub use server::DatabinServer;
