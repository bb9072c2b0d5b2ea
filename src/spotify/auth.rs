use reqwest::{Client, header::ACCEPT};

use crate::{
    Res,
    errors::SpotlikeError,
    types::{Credentials, Token},
};

/// Exchanges the long-lived refresh token for a fresh access token.
///
/// Posts a `refresh_token` grant to the token endpoint, authenticating the
/// application with HTTP basic auth built from the client id and secret.
///
/// # Arguments
///
/// * `client` - HTTP client reused for the rest of the run
/// * `token_url` - Spotify's token endpoint, see [`crate::config::spotify_apitoken_url`]
/// * `credentials` - Client id, client secret and refresh token
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token for every later call of the run
/// - `Err(SpotlikeError::Auth)` - The endpoint answered with a non-2xx status
/// - `Err(SpotlikeError::Http)` - Network failure or a malformed response
///
/// # Example
///
/// ```
/// let client = reqwest::Client::new();
/// let token = refresh_access_token(&client, config::DEFAULT_TOKEN_URL, &credentials).await?;
/// assert!(!token.access_token.is_empty());
/// ```
pub async fn refresh_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<Token> {
    log::debug!("POST {}", token_url);
    let res = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .header(ACCEPT, "application/json")
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(SpotlikeError::Auth {
            status: status.as_u16(),
            body,
        });
    }

    Ok(res.json::<Token>().await?)
}
