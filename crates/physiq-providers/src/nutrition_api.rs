// ABOUTME: REST client for the external nutrition lookup service
// ABOUTME: TTL-cached, rate-limited food search with cooking-method fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! Nutrition lookup client
//!
//! Queries an api-ninjas-style nutrition endpoint and normalizes result rows
//! into [`FoodSearchResult`]s. Lookups are best-effort: every failure mode
//! (missing key, HTTP error, decode error, rate limit) logs and returns an
//! empty result set so the nutrition panel degrades instead of erroring.

use futures_util::future;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::errors::{AppError, AppResult};
use crate::food_recognition::{capitalize, food_icon};
use crate::http_client::shared_client;
use crate::models::FoodSearchResult;

/// Default public endpoint for the nutrition lookup service
pub const NUTRITION_API_BASE_URL: &str = "https://api.api-ninjas.com";

/// Environment variable holding the API key
pub const ENV_NUTRITION_API_KEY: &str = "NUTRITION_API_KEY";

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default cache TTL in seconds
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default outgoing search budget per minute
const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 30;

/// Sliding window length for the rate limiter
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

/// Maximum cached queries before eviction kicks in
const MAX_CACHE_ENTRIES: usize = 256;

/// Minimum query length before the fan-out search is considered
const EXTENDED_SEARCH_MIN_QUERY_LEN: usize = 3;

/// How many common foods the fan-out search combines with the query
const EXTENDED_SEARCH_FANOUT: usize = 5;

/// Serving grams assumed when the service reports none
const DEFAULT_SERVING_G: u32 = 100;

/// Cooking-method words that trigger the fan-out search
const COOKING_METHODS: [&str; 10] = [
    "boiled",
    "fried",
    "grilled",
    "baked",
    "steamed",
    "roasted",
    "scrambled",
    "poached",
    "raw",
    "cooked",
];

/// Common foods combined with a cooking-method query during fan-out
const COMMON_FOODS: [&str; 10] = [
    "egg", "eggs", "chicken", "rice", "potato", "bread", "fish", "beef", "pork", "salad",
];

/// Settings for the nutrition lookup client
///
/// The API key is deliberately not part of this struct so it never lands in
/// a serialized config file; it is read from `NUTRITION_API_KEY` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NutritionApiConfig {
    /// Service base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// How long query results stay cached, in seconds
    pub cache_ttl_secs: u64,
    /// Outgoing search budget per minute
    pub rate_limit_per_minute: u32,
}

impl Default for NutritionApiConfig {
    fn default() -> Self {
        Self {
            base_url: NUTRITION_API_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
        }
    }
}

/// Sliding-window rate limiter for outgoing lookups
///
/// Tracks request instants in a window; a poisoned lock fails open since the
/// limiter protects the remote quota, not correctness.
#[derive(Debug)]
pub struct RateLimiter {
    max_per_window: usize,
    window: Duration,
    stamps: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Limiter allowing `max_per_window` acquisitions per `window`
    #[must_use]
    pub const fn new(max_per_window: usize, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            stamps: Mutex::new(VecDeque::new()),
        }
    }

    /// Take one permit if the window has room
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        let now = Instant::now();
        let Ok(mut stamps) = self.stamps.lock() else {
            return true;
        };
        while stamps
            .front()
            .is_some_and(|stamp| now.duration_since(*stamp) >= self.window)
        {
            stamps.pop_front();
        }
        if stamps.len() >= self.max_per_window {
            return false;
        }
        stamps.push_back(now);
        true
    }

    /// Permits left in the current window
    #[must_use]
    pub fn remaining(&self) -> usize {
        let now = Instant::now();
        let Ok(stamps) = self.stamps.lock() else {
            return self.max_per_window;
        };
        let in_window = stamps
            .iter()
            .filter(|stamp| now.duration_since(**stamp) < self.window)
            .count();
        self.max_per_window.saturating_sub(in_window)
    }
}

/// Cached result set for one normalized query
#[derive(Debug, Clone)]
struct CachedSearch {
    results: Vec<FoodSearchResult>,
    cached_at: Instant,
}

impl CachedSearch {
    fn new(results: Vec<FoodSearchResult>) -> Self {
        Self {
            results,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }
}

/// Raw result row as the lookup service reports it
#[derive(Debug, Clone, Deserialize)]
struct ApiRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    protein_g: Option<f64>,
    #[serde(default)]
    carbohydrates_total_g: Option<f64>,
    #[serde(default)]
    fat_total_g: Option<f64>,
    #[serde(default)]
    serving_size_g: Option<f64>,
}

/// Client for the external nutrition lookup service
///
/// Wraps the shared HTTP client with an in-memory TTL cache and a sliding
/// window rate limiter. One limiter permit covers a whole search including
/// its fan-out requests.
#[derive(Debug)]
pub struct NutritionClient {
    config: NutritionApiConfig,
    api_key: Option<String>,
    cache: RwLock<HashMap<String, CachedSearch>>,
    limiter: RateLimiter,
}

impl NutritionClient {
    /// Build a client with the API key taken from `NUTRITION_API_KEY`
    #[must_use]
    pub fn new(config: NutritionApiConfig) -> Self {
        let api_key = std::env::var(ENV_NUTRITION_API_KEY).ok();
        Self::with_api_key(config, api_key)
    }

    /// Build a client with an explicit API key (or none)
    #[must_use]
    pub fn with_api_key(config: NutritionApiConfig, api_key: Option<String>) -> Self {
        let limiter = RateLimiter::new(config.rate_limit_per_minute as usize, RATE_LIMIT_WINDOW);
        Self {
            config,
            api_key,
            cache: RwLock::new(HashMap::new()),
            limiter,
        }
    }

    /// Whether an API key is available for outgoing lookups
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search the nutrition service for a food query
    ///
    /// Returns normalized, deduplicated results. Every failure mode logs a
    /// warning and yields an empty set; callers treat "no results" and
    /// "lookup unavailable" identically.
    #[instrument(skip(self), fields(provider = "nutrition-api", api_call = "search", query = %query))]
    pub async fn search(&self, query: &str) -> Vec<FoodSearchResult> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        if let Some(hit) = self.cached(&normalized).await {
            tracing::debug!(results = hit.len(), "nutrition cache hit");
            return hit;
        }

        if !self.limiter.try_acquire() {
            tracing::warn!("nutrition lookup rate limit reached, returning empty");
            return Vec::new();
        }

        match self.search_uncached(query).await {
            Ok(results) => {
                self.store(normalized, results.clone()).await;
                results
            }
            Err(error) => {
                tracing::warn!(error = %error, "nutrition lookup failed, returning empty");
                Vec::new()
            }
        }
    }

    /// Run the query against the service, fanning out when it looks like a
    /// bare cooking method and the direct hit came back empty
    async fn search_uncached(&self, query: &str) -> AppResult<Vec<FoodSearchResult>> {
        let mut rows = self.fetch_rows(query).await?;

        if rows.is_empty() && should_extend(query) {
            let queries = extended_queries(query);
            tracing::debug!(fanout = queries.len(), "extending cooking-method search");
            let fetches = queries.iter().map(|extended| self.rows_or_empty(extended));
            rows = future::join_all(fetches)
                .await
                .into_iter()
                .flatten()
                .collect();
        }

        Ok(normalize_rows(rows))
    }

    /// One GET against the nutrition endpoint
    async fn fetch_rows(&self, query: &str) -> AppResult<Vec<ApiRow>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::config(format!(
                "{ENV_NUTRITION_API_KEY} is not set; nutrition lookup disabled"
            )));
        };

        let url = format!("{}/v1/nutrition", self.config.base_url);
        let response = shared_client()
            .get(&url)
            .query(&[("query", query)])
            .header(API_KEY_HEADER, api_key)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| AppError::external_service("nutrition-api", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                "nutrition-api",
                format!("HTTP {status}"),
            ));
        }

        response
            .json::<Vec<ApiRow>>()
            .await
            .map_err(|e| AppError::external_service("nutrition-api", format!("decode failed: {e}")))
    }

    /// Fan-out fetch; individual failures collapse to no rows
    async fn rows_or_empty(&self, query: &str) -> Vec<ApiRow> {
        match self.fetch_rows(query).await {
            Ok(rows) => rows,
            Err(error) => {
                tracing::debug!(error = %error, query = %query, "fan-out fetch failed");
                Vec::new()
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<Vec<FoodSearchResult>> {
        let ttl = self.cache_ttl();
        let cache = self.cache.read().await;
        cache
            .get(key)
            .filter(|entry| !entry.is_expired(ttl))
            .map(|entry| entry.results.clone())
    }

    async fn store(&self, key: String, results: Vec<FoodSearchResult>) {
        let ttl = self.cache_ttl();
        let mut cache = self.cache.write().await;

        // Evict before inserting a new key at capacity: expired first,
        // then the oldest entry
        if cache.len() >= MAX_CACHE_ENTRIES && !cache.contains_key(&key) {
            cache.retain(|_, entry| !entry.is_expired(ttl));
            if cache.len() >= MAX_CACHE_ENTRIES {
                let oldest = cache
                    .iter()
                    .min_by_key(|(_, entry)| entry.cached_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    cache.remove(&oldest);
                }
            }
        }

        cache.insert(key, CachedSearch::new(results));
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_secs)
    }
}

/// Whether a query qualifies for the cooking-method fan-out
fn should_extend(query: &str) -> bool {
    if query.len() < EXTENDED_SEARCH_MIN_QUERY_LEN {
        return false;
    }
    let lower = query.to_lowercase();
    COOKING_METHODS.iter().any(|method| lower.contains(method))
}

/// Fan-out queries combining the original with common foods
fn extended_queries(query: &str) -> Vec<String> {
    COMMON_FOODS
        .iter()
        .take(EXTENDED_SEARCH_FANOUT)
        .map(|food| format!("{query} {food}"))
        .collect()
}

/// Normalize raw rows: drop nameless entries, dedupe by lowercase name
/// keeping the first occurrence, round macros, and synthesize the portion
fn normalize_rows(rows: Vec<ApiRow>) -> Vec<FoodSearchResult> {
    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(name) = row.name else { continue };
        if name.is_empty() || !seen.insert(name.to_lowercase()) {
            continue;
        }

        let grams = row.serving_size_g.unwrap_or(0.0).round() as u32;
        let grams = if grams == 0 { DEFAULT_SERVING_G } else { grams };

        results.push(FoodSearchResult {
            icon: food_icon(&name).to_owned(),
            name: capitalize(&name),
            calories: row.calories.unwrap_or(0.0).round(),
            protein_g: row.protein_g.unwrap_or(0.0).round(),
            carbs_g: row.carbohydrates_total_g.unwrap_or(0.0).round(),
            fat_g: row.fat_total_g.unwrap_or(0.0).round(),
            portion: format!("{grams}g serving"),
        });
    }

    results
}
