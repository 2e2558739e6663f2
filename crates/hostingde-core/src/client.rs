//! hosting.de API client handle
//!
//! The handle captures resolved credentials and the endpoint. Building it is
//! pure data capture: no connection is opened and nothing can fail. Resource
//! handlers hold it behind an `Arc` and only ever read from it.

use crate::config::{REDACTED, ResolvedConfig, without_userinfo};
use std::fmt;

/// Shared, read-only client handle for one configure cycle
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the auth token.
#[derive(Clone, PartialEq, Eq)]
pub struct HostingdeClient {
    account_id: String,

    /// ⚠️ NEVER log this value
    auth_token: String,

    base_url: String,
}

impl HostingdeClient {
    /// Create a client handle from resolved configuration
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            account_id: config.account_id().to_string(),
            auth_token: config.auth_token().to_string(),
            base_url: config.base_url().to_string(),
        }
    }

    /// Account ID to act on behalf of (empty for the token owner's account)
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// API auth token
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// API endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl From<ResolvedConfig> for HostingdeClient {
    fn from(config: ResolvedConfig) -> Self {
        Self::new(config)
    }
}

impl fmt::Debug for HostingdeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostingdeClient")
            .field("account_id", &self.account_id)
            .field("auth_token", &REDACTED)
            .field("base_url", &without_userinfo(&self.base_url))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    fn client(token: &str) -> HostingdeClient {
        HostingdeClient::new(ResolvedConfig::new(
            "acc1".to_string(),
            token.to_string(),
            DEFAULT_BASE_URL.to_string(),
        ))
    }

    #[test]
    fn test_captures_resolved_values() {
        let client = client("tok1");

        assert_eq!(client.account_id(), "acc1");
        assert_eq!(client.auth_token(), "tok1");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_auth_token_not_exposed_in_debug() {
        let debug_str = format!("{:?}", client("secret_token_12345"));

        assert!(!debug_str.contains("secret_token_12345"));
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("HostingdeClient"));
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HostingdeClient>();
    }
}
