use gstat_api::{ApiError, PlayerStatsApi};
use gstat_config::lookup::LookupConfig;
use gstat_core::{normalize_query, rank};
use gstat_quota::{QuotaError, QuotaLedger, Reservation};
use gstat_types::{PlayerCard, QuotaStatus, SeasonId};

/// What one submitted query produced, ready for rendering.
#[derive(Debug)]
pub enum LookupOutcome {
    Found { card: PlayerCard },
    NotFound { query: String, seasons: Vec<SeasonId> },
    QuotaExhausted { status: QuotaStatus },
}

/// Runs the whole pipeline for one submitted name: normalize, resolve the
/// name to a player id, then walk the season candidates newest-first until
/// one has statistics. Every provider call reserves a slot in the daily
/// budget before it is made; the slot is refunded only when the request
/// never reached the provider.
pub async fn run_lookup(
    api: &dyn PlayerStatsApi,
    quota: &QuotaLedger,
    config: &LookupConfig,
    raw_query: &str,
    pinned_season: Option<SeasonId>,
) -> anyhow::Result<LookupOutcome> {
    let query = normalize_query(raw_query);

    let seasons: Vec<SeasonId> = match pinned_season {
        Some(season) => vec![season],
        None => config.seasons.clone(),
    };

    if query.is_empty() {
        // nothing searchable left after normalization, skip the provider
        return Ok(LookupOutcome::NotFound { query, seasons });
    }

    let Some(&search_season) = seasons.first() else {
        anyhow::bail!("no season candidates configured");
    };

    let reservation = match quota.reserve().await {
        Ok(reservation) => reservation,
        Err(QuotaError::Exhausted { .. }) => {
            return Ok(LookupOutcome::QuotaExhausted {
                status: quota.status().await,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let hits = match api.search_players(&query, config.league, search_season).await {
        Ok(hits) => hits,
        Err(e) => return failed_call(quota, reservation, e).await,
    };

    let names: Vec<String> = hits.iter().map(|hit| hit.name.clone()).collect();
    let ranked = rank(&query, &names, config.min_score);

    let Some(best) = ranked.first() else {
        tracing::info!("no candidate matched '{query}'");
        return Ok(LookupOutcome::NotFound { query, seasons });
    };
    let player_id = hits[best.index].id;
    tracing::debug!(
        "best match for '{query}': {} (id {player_id}, score {:.2})",
        best.name,
        best.score
    );

    for &season in &seasons {
        let reservation = match quota.reserve().await {
            Ok(reservation) => reservation,
            Err(QuotaError::Exhausted { .. }) => {
                return Ok(LookupOutcome::QuotaExhausted {
                    status: quota.status().await,
                });
            }
            Err(e) => return Err(e.into()),
        };

        match api.season_statistics(player_id, config.league, season).await {
            Ok(Some(card)) => return Ok(LookupOutcome::Found { card }),
            Ok(None) => {
                tracing::debug!("season {season}: no statistics for player {player_id}");
            }
            Err(e) => return failed_call(quota, reservation, e).await,
        }
    }

    Ok(LookupOutcome::NotFound { query, seasons })
}

/// A provider call failed: transport errors refund the reservation and
/// bubble up, the provider's own limiter renders like an exhausted budget,
/// anything else bubbles up with the slot kept.
async fn failed_call(
    quota: &QuotaLedger,
    reservation: Reservation,
    error: ApiError,
) -> anyhow::Result<LookupOutcome> {
    if error.is_transport() {
        quota.release(reservation).await?;
        return Err(anyhow::Error::new(error).context("provider unreachable"));
    }
    if matches!(error, ApiError::RateLimited) {
        tracing::warn!("provider-side rate limit hit");
        return Ok(LookupOutcome::QuotaExhausted {
            status: quota.status().await,
        });
    }
    Err(error.into())
}
