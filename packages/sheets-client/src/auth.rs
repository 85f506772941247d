//! Access tokens for the Sheets and Drive calls.
//!
//! Service account keys go through a `yup-oauth2` authenticator, which
//! performs the JWT bearer grant and caches the token until it expires.

use std::path::Path;

use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::ServiceAccountAuthenticator;

pub use yup_oauth2::ServiceAccountKey;

use crate::error::{Result, SheetsError};

/// Scopes needed to resolve spreadsheets by title and edit their cells.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.readonly",
];

/// Where access tokens come from.
pub enum Credentials {
    ServiceAccount(DefaultAuthenticator),
    /// A pre-issued token, used as-is.
    AccessToken(String),
}

impl Credentials {
    pub async fn service_account(key: ServiceAccountKey) -> Result<Self> {
        let auth = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| SheetsError::Config(format!("failed to create authenticator: {}", e)))?;
        Ok(Self::ServiceAccount(auth))
    }

    /// Read a service account key file and build an authenticator from it.
    pub async fn from_key_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let key = yup_oauth2::read_service_account_key(path)
            .await
            .map_err(|e| SheetsError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::service_account(key).await
    }

    pub(crate) async fn access_token(&self) -> Result<String> {
        let auth = match self {
            Credentials::AccessToken(token) => return Ok(token.clone()),
            Credentials::ServiceAccount(auth) => auth,
        };

        let token = auth
            .token(SCOPES)
            .await
            .map_err(|e| SheetsError::Auth(e.to_string()))?;

        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| SheetsError::Auth("authenticator returned no access token".into()))
    }
}
