//! Outbound email for the SDG Club project portal.
//!
//! A thin SMTP delivery layer. All sends are best-effort from the caller's
//! perspective: intake and status transitions spawn a send and log the
//! outcome, never failing the request over it.

pub mod email;

pub use email::{EmailConfig, EmailError, EmailKind, Mailer};
