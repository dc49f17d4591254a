//! Steam OpenID login and Steam Web API lookups.

use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::server::error::{auth::AuthError, AppError};

const OPENID_NS: &str = "http://specs.openid.net/auth/2.0";
const OPENID_IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

#[derive(Debug, Deserialize)]
struct PlayerSummariesResponse {
    response: PlayerSummaries,
}

#[derive(Debug, Deserialize)]
struct PlayerSummaries {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummary {
    personaname: Option<String>,
}

pub struct SteamService<'a> {
    http_client: &'a reqwest::Client,
    openid_url: &'a str,
    api_url: &'a str,
    api_secret: &'a str,
}

impl<'a> SteamService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        openid_url: &'a str,
        api_url: &'a str,
        api_secret: &'a str,
    ) -> Self {
        Self {
            http_client,
            openid_url,
            api_url,
            api_secret,
        }
    }

    /// Builds the URL the browser is sent to for a Steam login.
    ///
    /// # Arguments
    /// - `return_url` - Where Steam redirects after the login
    /// - `realm` - OpenID realm, the JWT issuer
    ///
    /// # Returns
    /// - `Ok(String)` - Login URL with the OpenID query parameters
    /// - `Err(AppError::InternalError)` - Configured OpenID URL is not a valid URL
    pub fn login_url(&self, return_url: &str, realm: &str) -> Result<String, AppError> {
        let url = Url::parse_with_params(
            self.openid_url,
            &[
                ("openid.ns", OPENID_NS),
                ("openid.mode", "checkid_setup"),
                ("openid.return_to", return_url),
                ("openid.realm", realm),
                ("openid.identity", OPENID_IDENTIFIER_SELECT),
                ("openid.claimed_id", OPENID_IDENTIFIER_SELECT),
            ],
        )
        .map_err(|e| AppError::InternalError(format!("Invalid Steam OpenID URL: {}", e)))?;

        Ok(url.to_string())
    }

    /// Verifies a Steam OpenID callback and extracts the Steam ID.
    ///
    /// Re-posts the callback parameters to Steam with `openid.mode=check_authentication`
    /// and requires `is_valid:true` in the response body.
    ///
    /// # Arguments
    /// - `callback_url` - URL Steam redirected to, including the query string
    ///
    /// # Returns
    /// - `Ok(String)` - The 64-bit Steam ID
    /// - `Err(AuthError::SteamVerificationFailed)` - Malformed callback or Steam rejected it
    pub async fn verify(&self, callback_url: &str) -> Result<String, AppError> {
        let url = Url::parse(callback_url)
            .map_err(|e| AuthError::SteamVerificationFailed(format!("invalid URL: {}", e)))?;

        let mut params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let Some(claimed_id) = params
            .iter()
            .find(|(k, _)| k == "openid.claimed_id")
            .map(|(_, v)| v.clone())
        else {
            return Err(
                AuthError::SteamVerificationFailed("missing openid.claimed_id".to_string()).into(),
            );
        };

        params.retain(|(k, _)| k != "openid.mode");
        params.push(("openid.mode".to_string(), "check_authentication".to_string()));

        let body = self
            .http_client
            .post(self.openid_url)
            .form(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::SteamVerificationFailed(e.to_string()))?
            .text()
            .await
            .map_err(|e| AuthError::SteamVerificationFailed(e.to_string()))?;

        if !body.contains("is_valid:true") {
            return Err(AuthError::SteamVerificationFailed(
                "Steam rejected the assertion".to_string(),
            )
            .into());
        }

        steam_id_from_claimed_id(&claimed_id).ok_or_else(|| {
            AuthError::SteamVerificationFailed(format!("unexpected claimed id {}", claimed_id))
                .into()
        })
    }

    /// Looks up the Steam persona name, falling back to `User<last 6 digits>`.
    pub async fn player_nickname(&self, steam_id: &str) -> String {
        match self.fetch_persona_name(steam_id).await {
            Ok(Some(name)) => name,
            Ok(None) => fallback_nickname(steam_id),
            Err(e) => {
                tracing::warn!("Failed to fetch Steam player summary for {}: {}", steam_id, e);
                fallback_nickname(steam_id)
            }
        }
    }

    async fn fetch_persona_name(&self, steam_id: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v0002/", self.api_url);

        let summaries: PlayerSummariesResponse = self
            .http_client
            .get(url)
            .query(&[
                ("key", self.api_secret),
                ("steamids", steam_id),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(summaries
            .response
            .players
            .into_iter()
            .next()
            .and_then(|p| p.personaname))
    }
}

/// Extracts the Steam ID from `https://steamcommunity.com/openid/id/<digits>`.
pub fn steam_id_from_claimed_id(claimed_id: &str) -> Option<String> {
    let re = Regex::new(r"^https?://steamcommunity\.com/openid/id/(\d+)$").ok()?;

    re.captures(claimed_id)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Nickname given to new users when Steam doesn't return one.
pub fn fallback_nickname(steam_id: &str) -> String {
    let start = steam_id.len().saturating_sub(6);
    format!("User{}", &steam_id[start..])
}
