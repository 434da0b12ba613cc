//! Domain vocabulary and rules for the SDG Club project portal.
//!
//! This crate has no I/O dependencies. It defines:
//!
//! - [`error::CoreError`] — the domain error type shared by the DB and API layers.
//! - [`status`] — the submission status machine and its tracker projection.
//! - [`vocab`] — enumerated form vocabularies (SDG tags, branches, years, timelines).
//! - [`intake`] — stepwise validation of incoming submissions and mentor applications.
//! - [`paging`] — limit/offset clamping shared by all list queries.

pub mod error;
pub mod intake;
pub mod paging;
pub mod roles;
pub mod status;
pub mod types;
pub mod vocab;

pub use error::CoreError;
pub use status::SubmissionStatus;
