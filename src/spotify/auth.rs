use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges the refresh token at the configured token endpoint
/// (`SPOTIFY_API_TOKEN_URL`) with the `refresh_token` grant. Requires
/// `SPOTIFY_API_AUTH_CLIENT_ID`.
///
/// # Returns
///
/// - `Ok(Token)` - fresh access token; `refresh_token` is empty when the
///   endpoint did not rotate it
/// - `Err(String)` - missing client id, network failure, rejected refresh
///   token, or a response without an access token
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()
        .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set to refresh tokens".to_string())?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!("token endpoint answered with {}", res.status()));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| "token response carries no access_token".to_string())?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
