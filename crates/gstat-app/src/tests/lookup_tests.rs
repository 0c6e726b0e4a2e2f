use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gstat_api::{ApiError, PlayerHit, PlayerStatsApi};
use gstat_config::lookup::LookupConfig;
use gstat_quota::QuotaLedger;
use gstat_types::{PlayerCard, SeasonId};

use crate::lookup::{LookupOutcome, run_lookup};

#[derive(Default)]
struct FakeApi {
    hits: Vec<PlayerHit>,
    search_error: Mutex<Option<ApiError>>,
    stats: HashMap<SeasonId, PlayerCard>,
    stats_error: Mutex<Option<ApiError>>,
    search_calls: AtomicUsize,
    stats_calls: Mutex<Vec<SeasonId>>,
}

#[async_trait]
impl PlayerStatsApi for FakeApi {
    async fn search_players(
        &self,
        _name: &str,
        _league: u32,
        _season: SeasonId,
    ) -> Result<Vec<PlayerHit>, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.search_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.hits.clone())
    }

    async fn season_statistics(
        &self,
        _player_id: u64,
        _league: u32,
        season: SeasonId,
    ) -> Result<Option<PlayerCard>, ApiError> {
        self.stats_calls.lock().unwrap().push(season);
        if let Some(error) = self.stats_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.stats.get(&season).cloned())
    }
}

fn salah_hit() -> PlayerHit {
    PlayerHit {
        id: 306,
        name: "Mohamed Salah".to_string(),
    }
}

fn salah_card(season: SeasonId) -> PlayerCard {
    PlayerCard {
        name: "Mohamed Salah".to_string(),
        team: Some("Liverpool".to_string()),
        position: Some("Attacker".to_string()),
        appearances: Some(32),
        goals: Some(5),
        rating: Some("7.51".to_string()),
        season,
    }
}

fn test_config() -> LookupConfig {
    LookupConfig {
        league: 39,
        seasons: vec![2023, 2022, 2021],
        min_score: 0.5,
    }
}

async fn test_ledger(limit: u32) -> QuotaLedger {
    let path = std::env::temp_dir().join(format!("gstat-app-{}.json", uuid::Uuid::new_v4()));
    QuotaLedger::load(path, limit).await.unwrap()
}

#[tokio::test]
async fn test_found_on_newest_season() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        stats: HashMap::from([(2023, salah_card(2023))]),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    match outcome {
        LookupOutcome::Found { card } => assert_eq!(card, salah_card(2023)),
        other => panic!("expected Found, got {other:?}"),
    }
    assert_eq!(*api.stats_calls.lock().unwrap(), vec![2023]);
    assert_eq!(quota.status().await.used, 2);
}

#[tokio::test]
async fn test_falls_through_to_older_season() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        stats: HashMap::from([(2021, salah_card(2021))]),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    match outcome {
        LookupOutcome::Found { card } => assert_eq!(card.season, 2021),
        other => panic!("expected Found, got {other:?}"),
    }
    // newest first, stopping at the first season with data
    assert_eq!(*api.stats_calls.lock().unwrap(), vec![2023, 2022, 2021]);
}

#[tokio::test]
async fn test_not_found_when_every_season_is_empty() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    match outcome {
        LookupOutcome::NotFound { seasons, .. } => {
            assert_eq!(seasons, vec![2023, 2022, 2021]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(api.stats_calls.lock().unwrap().len(), 3);
    assert_eq!(quota.status().await.used, 4);
}

#[tokio::test]
async fn test_no_matching_candidate_skips_statistics() {
    let api = FakeApi {
        hits: vec![PlayerHit {
            id: 9,
            name: "Darwin Nunez".to_string(),
        }],
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "Zzzzzz", None)
        .await
        .unwrap();

    assert!(matches!(outcome, LookupOutcome::NotFound { .. }));
    assert!(api.stats_calls.lock().unwrap().is_empty());
    assert_eq!(quota.status().await.used, 1);
}

#[tokio::test]
async fn test_quota_blocks_before_any_call() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        stats: HashMap::from([(2023, salah_card(2023))]),
        ..Default::default()
    };
    let quota = test_ledger(0).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    assert!(matches!(outcome, LookupOutcome::QuotaExhausted { .. }));
    assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_quota_blocks_mid_iteration() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        ..Default::default()
    };
    let quota = test_ledger(2).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    match outcome {
        LookupOutcome::QuotaExhausted { status } => {
            assert_eq!(status.used, 2);
            assert_eq!(status.limit, 2);
        }
        other => panic!("expected QuotaExhausted, got {other:?}"),
    }
    assert_eq!(*api.stats_calls.lock().unwrap(), vec![2023]);
}

#[tokio::test]
async fn test_transport_failure_refunds_the_slot() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        search_error: Mutex::new(Some(ApiError::Network("connection reset".to_string()))),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let result = run_lookup(&api, &quota, &test_config(), "salah", None).await;

    assert!(result.is_err());
    assert_eq!(quota.status().await.used, 0);
}

#[tokio::test]
async fn test_provider_error_keeps_the_slot() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        search_error: Mutex::new(Some(ApiError::Api("HTTP 500 Internal Server Error".to_string()))),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let result = run_lookup(&api, &quota, &test_config(), "salah", None).await;

    assert!(result.is_err());
    assert_eq!(quota.status().await.used, 1);
}

#[tokio::test]
async fn test_provider_rate_limit_renders_as_exhausted_quota() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        search_error: Mutex::new(Some(ApiError::RateLimited)),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", None)
        .await
        .unwrap();

    assert!(matches!(outcome, LookupOutcome::QuotaExhausted { .. }));
    assert_eq!(quota.status().await.used, 1);
}

#[tokio::test]
async fn test_transport_failure_during_statistics_refunds_only_that_slot() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        stats_error: Mutex::new(Some(ApiError::Network("timed out".to_string()))),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let result = run_lookup(&api, &quota, &test_config(), "salah", None).await;

    assert!(result.is_err());
    // the completed search call stays counted
    assert_eq!(quota.status().await.used, 1);
}

#[tokio::test]
async fn test_pinned_season_is_the_only_candidate() {
    let api = FakeApi {
        hits: vec![salah_hit()],
        stats: HashMap::from([(2023, salah_card(2023)), (2022, salah_card(2022))]),
        ..Default::default()
    };
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "salah", Some(2022))
        .await
        .unwrap();

    match outcome {
        LookupOutcome::Found { card } => assert_eq!(card.season, 2022),
        other => panic!("expected Found, got {other:?}"),
    }
    assert_eq!(*api.stats_calls.lock().unwrap(), vec![2022]);
}

#[tokio::test]
async fn test_unsearchable_input_costs_nothing() {
    let api = FakeApi::default();
    let quota = test_ledger(100).await;

    let outcome = run_lookup(&api, &quota, &test_config(), "99 -- !?", None)
        .await
        .unwrap();

    assert!(matches!(outcome, LookupOutcome::NotFound { .. }));
    assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(quota.status().await.used, 0);
}
