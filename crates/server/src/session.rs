//! Session-scoped state shared between requests of the same browser.

use models::validation::{FormErrors, ValidationError};
use tower_sessions::{Session, session::Error};
use uuid::Uuid;

pub const DEPARTMENT1: &str = "department1";
pub const DEPARTMENT2: &str = "department2";
pub const COURSE_INFO: &str = "course_info";
pub const COURSE: &str = "course";
pub const TITLE: &str = "title";

const FLASHES: &str = "_flashes";
const CSRF_TOKEN: &str = "csrf_token";

/// Name of the hidden form field carrying the CSRF token
pub const CSRF_FIELD: &str = "csrf_token";

/// Queue a message for the next rendered page
pub async fn flash(session: &Session, message: impl Into<String>) -> Result<(), Error> {
    let mut flashes: Vec<String> = session.get(FLASHES).await?.unwrap_or_default();
    flashes.push(message.into());
    session.insert(FLASHES, flashes).await
}

/// Drain the queued messages
pub async fn take_flashes(session: &Session) -> Result<Vec<String>, Error> {
    Ok(session
        .remove::<Vec<String>>(FLASHES)
        .await?
        .unwrap_or_default())
}

/// The session's CSRF token, created on first use
pub async fn csrf_token(session: &Session) -> Result<String, Error> {
    if let Some(token) = session.get::<String>(CSRF_TOKEN).await? {
        return Ok(token);
    }

    let token = Uuid::new_v4().simple().to_string();
    session.insert(CSRF_TOKEN, &token).await?;
    Ok(token)
}

/// Check a submitted token against the session's, returning any form errors
pub async fn verify_csrf(
    session: &Session,
    submitted: Option<&str>,
    enabled: bool,
) -> Result<FormErrors, Error> {
    let mut errors = FormErrors::new();
    if !enabled {
        return Ok(errors);
    }

    let submitted = match submitted {
        Some(token) if !token.is_empty() => token,
        _ => {
            errors.add(CSRF_FIELD, ValidationError::CsrfMissing);
            return Ok(errors);
        }
    };

    let expected = session.get::<String>(CSRF_TOKEN).await?;
    if expected.as_deref() != Some(submitted) {
        errors.add(CSRF_FIELD, ValidationError::CsrfInvalid);
    }

    Ok(errors)
}
