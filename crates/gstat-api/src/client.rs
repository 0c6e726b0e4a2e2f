use std::time::Duration;

use async_trait::async_trait;
use gstat_types::{PlayerCard, SeasonId};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::model::{Envelope, PlayerHit};
use crate::{ApiError, PlayerStatsApi};

/// API-Football v3 client (RapidAPI edition).
///
/// The key and host ride on every request as static headers; the timeout is
/// fixed at construction and there is no retry.
#[derive(Clone)]
pub struct ApiFootballClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiFootballClient {
    pub fn new(
        key: &str,
        host: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-RapidAPI-Key",
            HeaderValue::from_str(key).map_err(|_| ApiError::Auth)?,
        );
        headers.insert(
            "X-RapidAPI-Host",
            HeaderValue::from_str(host).map_err(|_| ApiError::Auth)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_players(&self, query: &[(&str, String)]) -> Result<Envelope, ApiError> {
        let response = self
            .client
            .get(format!("{}/players", self.base_url))
            .query(query)
            .send()
            .await?;

        // the provider's own view of the daily budget, for log comparison
        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-requests-remaining")
            .and_then(|v| v.to_str().ok())
        {
            tracing::debug!("provider reports {remaining} requests remaining today");
        }

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Auth);
        }
        if !status.is_success() {
            return Err(ApiError::Api(format!("HTTP {status}")));
        }

        response
            .json::<Envelope>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PlayerStatsApi for ApiFootballClient {
    async fn search_players(
        &self,
        name: &str,
        league: u32,
        season: SeasonId,
    ) -> Result<Vec<PlayerHit>, ApiError> {
        let envelope = self
            .get_players(&[
                ("search", name.to_string()),
                ("league", league.to_string()),
                ("season", season.to_string()),
            ])
            .await?;

        tracing::debug!("search '{}' returned {} hits", name, envelope.response.len());
        Ok(envelope.response.iter().map(|entry| entry.hit()).collect())
    }

    async fn season_statistics(
        &self,
        player_id: u64,
        league: u32,
        season: SeasonId,
    ) -> Result<Option<PlayerCard>, ApiError> {
        let envelope = self
            .get_players(&[
                ("id", player_id.to_string()),
                ("league", league.to_string()),
                ("season", season.to_string()),
            ])
            .await?;

        Ok(envelope
            .response
            .into_iter()
            .next()
            .and_then(|entry| entry.into_card(season)))
    }
}
