//! HTTP API for the SDG Club project portal.
//!
//! Public intake and tracking endpoints, a credentialed admin API for the
//! submission workflow, and the middleware stack shared between the
//! production binary and the integration tests.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notify;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
