//! The session manager: current-user state plus the auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Operations return `Result<(), String>` where the error is the exact text
//! shown next to the triggering control. Credential rejections collapse to a
//! fixed message so the service's own text never reveals which half of the
//! pair was wrong.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::client::Client;
use crate::net::error::{ApiError, CONFLICT, UNAUTHORIZED};
use crate::net::types::User;

/// Validation message for a submitted empty password.
pub const EMPTY_PASSWORD: &str = "Please enter a password";

/// Fixed message for rejected credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Fixed message for a duplicate registration.
pub const ACCOUNT_EXISTS: &str = "An account with this email already exists";

/// Guidance shown when the backend is unreachable or misconfigured.
pub const CONNECTION_HELP: &str = "Connection error. Check SETUP.md for backend configuration.";

/// Whether the startup session probe has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Probe still in flight; protected views must not render yet.
    #[default]
    Loading,
    /// Probe finished; `user` is authoritative.
    Resolved,
}

/// Client-local authentication state. One per running client, owned by the
/// root component and provided to pages via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: SessionStatus,
}

impl SessionState {
    /// Record a probe or login outcome. Absence of a user is a normal
    /// resolved state, not a failure.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.status = SessionStatus::Resolved;
    }

    #[must_use]
    pub fn resolved(&self) -> bool {
        self.status == SessionStatus::Resolved
    }

    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Resolve the current session once per page load.
///
/// Any failure resolves to "no user" without surfacing an error: an absent
/// session is the expected steady state for a fresh visitor.
pub async fn initialize(client: &Client, session: RwSignal<SessionState>) {
    let user = client.get_account().await.ok();
    session.update(|s| s.resolve(user));
}

/// Email/password login.
///
/// An empty password fails fast without touching the network.
///
/// # Errors
///
/// The user-facing message per the error taxonomy: fixed text for rejected
/// credentials and connectivity problems, the service's message otherwise.
pub async fn login(
    client: &Client,
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    if password.is_empty() {
        return Err(EMPTY_PASSWORD.to_owned());
    }

    client
        .create_email_session(email, password)
        .await
        .map_err(|e| login_error(&e))?;

    // The session endpoint does not echo the account; fetch it to fill state.
    let user = client.get_account().await.map_err(|e| login_error(&e))?;
    session.update(|s| s.resolve(Some(user)));
    Ok(())
}

/// Register a new account, then establish a session with the same
/// credentials.
///
/// # Errors
///
/// Duplicate accounts map to [`ACCOUNT_EXISTS`]; everything else as in
/// [`login`].
pub async fn register(
    client: &Client,
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), String> {
    if password.is_empty() {
        return Err(EMPTY_PASSWORD.to_owned());
    }

    client
        .create_account(email, password, name)
        .await
        .map_err(|e| register_error(&e))?;

    login(client, session, email, password).await
}

/// Invalidate every session for the current account, then clear local state.
///
/// # Errors
///
/// The service's message when invalidation fails; local state is only
/// cleared after the call succeeds.
pub async fn logout(client: &Client, session: RwSignal<SessionState>) -> Result<(), String> {
    client.delete_sessions().await.map_err(|e| e.to_string())?;
    session.update(|s| s.resolve(None));
    Ok(())
}

fn login_error(err: &ApiError) -> String {
    if err.status() == Some(UNAUTHORIZED) {
        INVALID_CREDENTIALS.to_owned()
    } else if err.is_connectivity() {
        CONNECTION_HELP.to_owned()
    } else {
        err.to_string()
    }
}

fn register_error(err: &ApiError) -> String {
    if err.status() == Some(CONFLICT) {
        ACCOUNT_EXISTS.to_owned()
    } else if err.is_connectivity() {
        CONNECTION_HELP.to_owned()
    } else {
        err.to_string()
    }
}
