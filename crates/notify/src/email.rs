//! Applicant email delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send plain-text
//! emails for submission events. Configuration is loaded from environment
//! variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns
//! `None` and no mailer should be constructed.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@mitblrsdg.club";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                   |
    /// |-----------------|----------|---------------------------|
    /// | `SMTP_HOST`     | yes      | —                         |
    /// | `SMTP_PORT`     | no       | `587`                     |
    /// | `SMTP_FROM`     | no       | `noreply@mitblrsdg.club`  |
    /// | `SMTP_USER`     | no       | —                         |
    /// | `SMTP_PASSWORD` | no       | —                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailKind
// ---------------------------------------------------------------------------

/// Which applicant email to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    /// Intake confirmation, sent once on successful submission.
    Confirmation,
    /// Generic status update carrying a message from the review team.
    Update,
    /// The project was selected for the next stage.
    Selected,
    /// The project was marked completed.
    Completed,
}

impl EmailKind {
    fn subject(self, project_title: &str, submission_id: &str) -> String {
        match self {
            EmailKind::Confirmation => {
                format!("Project Submission Confirmed - {submission_id}")
            }
            EmailKind::Update => format!("Project Update - {project_title}"),
            EmailKind::Selected => {
                format!("Congratulations! Your project has been selected - {project_title}")
            }
            EmailKind::Completed => {
                format!("Project Completed Successfully - {project_title}")
            }
        }
    }

    fn body(self, name: &str, project_title: &str, submission_id: &str, message: Option<&str>) -> String {
        let mut body = format!("Hi {name},\n\n");
        match self {
            EmailKind::Confirmation => {
                body.push_str(&format!(
                    "Thank you for pitching your idea '{project_title}' to the MIT-BLR SDG Club. \
                     We're excited to review your proposal!\n\n\
                     Submission details:\n\
                     - Project ID: {submission_id}\n\
                     - Project title: {project_title}\n\
                     - Status: Received\n\n\
                     Our evaluation team will review your submission within 2 weeks. \
                     You can track your progress anytime using your Project ID."
                ));
            }
            EmailKind::Update => {
                body.push_str(&format!(
                    "There is an update on your project '{project_title}' (ID {submission_id})."
                ));
            }
            EmailKind::Selected => {
                body.push_str(&format!(
                    "Congratulations! Your project '{project_title}' (ID {submission_id}) has been \
                     selected for the next stage. Our team will contact you within 3-5 days to \
                     discuss next steps."
                ));
            }
            EmailKind::Completed => {
                body.push_str(&format!(
                    "Your project '{project_title}' (ID {submission_id}) has been completed \
                     successfully. Thank you for being part of our sustainability journey!"
                ));
            }
        }
        if let Some(message) = message {
            body.push_str(&format!("\n\nMessage from the team:\n{message}"));
        }
        body.push_str("\n\nBest regards,\nMIT-BLR SDG Club Team");
        body
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends applicant emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send one submission email.
    pub async fn send(
        &self,
        to_email: &str,
        kind: EmailKind,
        name: &str,
        project_title: &str,
        submission_id: &str,
        message: Option<&str>,
    ) -> Result<(), EmailError> {
        let subject = kind.subject(project_title, submission_id);
        let body = kind.body(name, project_title, submission_id, message);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, kind = ?kind, submission_id, "Applicant email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
