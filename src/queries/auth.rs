//! Login against `/auth/login`.

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{Credentials, LoginResponse};

/// Query interface for the authentication endpoint.
pub struct AuthQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token.
    ///
    /// Rejected credentials and network failures are indistinguishable to the
    /// caller; both yield [`StorefrontError::Auth`]. A success response without
    /// a non-empty `token` is treated the same way.
    pub fn login(&self, credentials: &Credentials) -> Result<String> {
        let data = self
            .client
            .post_json(config::login_path(), credentials)
            .map_err(|e| {
                warn!(username = %credentials.username, error = %e, "login request failed");
                login_failed()
            })?;

        let resp: LoginResponse = serde_json::from_value(data).map_err(|e| {
            warn!(error = %e, "login response did not decode");
            login_failed()
        })?;

        match resp.token {
            Some(token) if !token.is_empty() => {
                info!(username = %credentials.username, "logged in");
                Ok(token)
            }
            _ => {
                warn!("login response carried no token");
                Err(login_failed())
            }
        }
    }
}

fn login_failed() -> StorefrontError {
    StorefrontError::Auth(config::LOGIN_FAILED_MESSAGE.to_string())
}
