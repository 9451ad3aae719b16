use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{config, error::CatalogError, spotify, types::Token};

/// Supplies a bearer credential for catalog requests.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn bearer(&self) -> Result<String, CatalogError>;
}

/// A fixed access token, typically from `SPOTIFY_ACCESS_TOKEN`.
pub struct StaticToken(pub String);

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn bearer(&self) -> Result<String, CatalogError> {
        Ok(self.0.clone())
    }
}

/// Cached OAuth token with refresh-on-expiry.
///
/// The token lives in `<data_local_dir>/fairshuffle/cache/token.json`. It is
/// treated as expired four minutes before its real expiry so a long playlist
/// load never starts with a token about to lapse.
pub struct TokenManager {
    token: Mutex<Token>,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager {
            token: Mutex::new(token),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(token))
    }

    async fn write(token: &Token) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= token.obtained_at + token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}

#[async_trait]
impl CredentialProvider for TokenManager {
    async fn bearer(&self) -> Result<String, CatalogError> {
        let mut token = self.token.lock().await;
        if Self::is_expired(&token) {
            debug!("cached token expired, refreshing");
            let mut fresh = spotify::auth::refresh_token(&token.refresh_token)
                .await
                .map_err(CatalogError::Credential)?;
            // the token endpoint may omit the refresh token when it is not rotated
            if fresh.refresh_token.is_empty() {
                fresh.refresh_token = token.refresh_token.clone();
            }
            *token = fresh;
            if let Err(e) = Self::write(&token).await {
                warn!("failed to persist refreshed token: {}", e);
            }
        }

        Ok(token.access_token.clone())
    }
}

/// Picks the credential source: `SPOTIFY_ACCESS_TOKEN` wins over the token cache.
pub async fn load_credentials() -> Result<Arc<dyn CredentialProvider>, String> {
    if let Some(token) = config::spotify_access_token() {
        debug!("using access token from environment");
        return Ok(Arc::new(StaticToken(token)));
    }

    let manager = TokenManager::load().await?;
    Ok(Arc::new(manager))
}
