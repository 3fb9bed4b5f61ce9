//! Staff session management
//!
//! Owns the [`HttpClient`] and the authenticated flag. A session is either
//! unauthenticated (no token) or authenticated (token present and assumed
//! valid until a probe says otherwise). Any failed probe logs out.

use serde::de::IgnoredAny;

use crate::http::HttpClient;

/// Protected endpoint used to check that the token is still accepted
const VALIDATE_PATH: &str = "/api/staff/orders";

/// Staff session bound to one HTTP client
#[derive(Debug)]
pub struct SessionManager {
    http: HttpClient,
    authenticated: bool,
}

impl SessionManager {
    /// Create a session from the token the client restored from storage.
    ///
    /// Nothing is written back and no request is made.
    pub fn new(http: HttpClient) -> Self {
        let authenticated = http.token().is_some();

        tracing::debug!(authenticated, "Session created");
        Self {
            http,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the current token, if available.
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn http_mut(&mut self) -> &mut HttpClient {
        &mut self.http
    }

    /// Start an authenticated session with `token`.
    ///
    /// Returns `false` if the token could not be stored; the session is then
    /// left unchanged.
    pub fn login(&mut self, token: impl Into<String>) -> bool {
        match self.http.set_token(token) {
            Ok(()) => {
                self.authenticated = true;
                tracing::info!("Staff session started");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to login");
                false
            }
        }
    }

    /// Clear the token from the client and storage. Idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = self.http.clear_token() {
            tracing::warn!(error = %e, "Failed to remove persisted token");
        }
        if self.authenticated {
            tracing::info!("Staff session ended");
        }
        self.authenticated = false;
    }

    /// Probe the backend with the current token.
    ///
    /// Unauthenticated sessions return `false` without a request. Any error
    /// from the probe, 401 or otherwise, logs the session out.
    pub async fn validate_token(&mut self) -> bool {
        if !self.authenticated {
            return false;
        }

        let response = self.http.get::<IgnoredAny>(VALIDATE_PATH).await;
        match response.error {
            None => true,
            Some(error) => {
                if error.is_unauthorized() {
                    tracing::info!("Token rejected by server");
                } else {
                    tracing::warn!(status = error.status, message = %error.message, "Token validation failed");
                }
                self.logout();
                false
            }
        }
    }
}
