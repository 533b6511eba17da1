//! Request authentication
//!
//! An [`Authenticator`] supplies the `Authorization` header of each request.
//! Token issuance lives outside this crate: [`CachingAuthenticator`] only
//! caches what a [`TokenProvider`] hands out.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

pub const AUTHTYPE_NOAUTH: &str = "noauth";
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearertoken";

/// Refresh tokens this much before they expire.
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// TTL assumed when a provider does not report one.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Produces the `Authorization` header for outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn auth_type(&self) -> &str;

    /// Header value to send, or `None` for unauthenticated requests.
    async fn authorization(&self) -> Result<Option<String>>;
}

/// Sends no credentials.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> &str {
        AUTHTYPE_NOAUTH
    }

    async fn authorization(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Sends a fixed bearer token obtained elsewhere.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::MissingArgument("bearer_token"));
        }
        Ok(Self { token })
    }
}

// Never print the token.
impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> &str {
        AUTHTYPE_BEARER_TOKEN
    }

    async fn authorization(&self) -> Result<Option<String>> {
        Ok(Some(format!("Bearer {}", self.token)))
    }
}

/// A token handed out by a [`TokenProvider`].
#[derive(Clone)]
pub struct AccessToken {
    pub token: String,
    /// Remaining lifetime, if the issuer reported one.
    pub expires_in: Option<Duration>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_in: Option<Duration>) -> Self {
        Self {
            token: token.into(),
            expires_in,
        }
    }
}

/// Source of access tokens, e.g. an IAM API-key exchange.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    fn auth_type(&self) -> &str {
        "token"
    }

    async fn fetch_token(&self) -> Result<AccessToken>;
}

struct CachedToken {
    token: String,
    /// When this token expires, buffer already subtracted.
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Bearer authentication with a token cached until shortly before it
/// expires. Clones share the cache.
pub struct CachingAuthenticator<P> {
    provider: Arc<P>,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

impl<P> Clone for CachingAuthenticator<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            token_cache: Arc::clone(&self.token_cache),
        }
    }
}

impl<P> fmt::Debug for CachingAuthenticator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingAuthenticator").finish_non_exhaustive()
    }
}

impl<P: TokenProvider> CachingAuthenticator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Current token, fetching a new one when the cached token is stale.
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let fetched = self.provider.fetch_token().await?;
        if fetched.token.is_empty() {
            return Err(Error::Auth("token provider returned an empty token".to_string()));
        }

        let ttl = fetched
            .expires_in
            .unwrap_or(DEFAULT_TOKEN_TTL)
            .saturating_sub(TOKEN_EXPIRY_BUFFER);
        let expires_at = Instant::now() + ttl;

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: fetched.token.clone(),
                expires_at,
            });
        }

        tracing::debug!("New token cached, expires in ~{} seconds", ttl.as_secs());

        Ok(fetched.token)
    }

    /// Drop the cached token and fetch a fresh one.
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }
        self.get_token().await
    }
}

#[async_trait]
impl<P: TokenProvider + 'static> Authenticator for CachingAuthenticator<P> {
    fn auth_type(&self) -> &str {
        self.provider.auth_type()
    }

    async fn authorization(&self) -> Result<Option<String>> {
        let token = self.get_token().await?;
        Ok(Some(format!("Bearer {token}")))
    }
}
