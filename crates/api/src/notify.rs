//! Fire-and-forget email glue.
//!
//! Intake and transition handlers call [`send_email`]; the actual SMTP
//! round-trip runs on a spawned task so a slow or failing mail server never
//! affects the HTTP response. Failures are logged and nothing else.

use std::sync::Arc;

use sdgclub_notify::EmailKind;

use crate::state::AppState;

/// Spawn a best-effort email send. No-op when SMTP is not configured.
pub fn send_email(
    state: &AppState,
    to_email: String,
    kind: EmailKind,
    name: String,
    project_title: String,
    submission_id: String,
    message: Option<String>,
) {
    let Some(mailer) = state.mailer.as_ref().map(Arc::clone) else {
        tracing::debug!(kind = ?kind, "Email delivery not configured, skipping send");
        return;
    };

    tokio::spawn(async move {
        if let Err(err) = mailer
            .send(
                &to_email,
                kind,
                &name,
                &project_title,
                &submission_id,
                message.as_deref(),
            )
            .await
        {
            tracing::warn!(
                to = %to_email,
                kind = ?kind,
                submission_id = %submission_id,
                error = %err,
                "Applicant email delivery failed"
            );
        }
    });
}
