// ABOUTME: External adapters for the Physiq engine: pose model, food classifier, nutrition lookup
// ABOUTME: Adapter traits with canned fixtures plus the rate-limited REST lookup client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Physiq Providers
//!
//! Everything that crosses the engine boundary lives here: adapter traits
//! over the external pose and food-classification models, and the REST
//! client for the nutrition lookup service. The engine core never talks to
//! a model or a network directly.
//!
//! ## Modules
//!
//! - **`http_client`**: shared pooled `reqwest` client
//! - **`pose`**: pose detector trait, model config, fixture detector
//! - **`food_recognition`**: food classifier trait, label cleanup, icons
//! - **`nutrition_api`**: TTL-cached, rate-limited food search client

// Re-export physiq-core modules so adapters keep `use crate::errors::*` etc.
pub use physiq_core::constants;
pub use physiq_core::errors;
pub use physiq_core::models;

/// Shared pooled HTTP client for lookup API calls
pub mod http_client;

/// Pose detector adapter trait, model config, and fixtures
pub mod pose;

/// Food classifier adapter, label cleanup, and icon lookup
pub mod food_recognition;

/// Rate-limited, TTL-cached nutrition lookup client
pub mod nutrition_api;

// Re-export key types for convenience

pub use food_recognition::{
    clean_label, food_icon, interpret_predictions, unknown_food, CannedClassifier,
    ConfidenceLevel, DetectedFood, FoodClassifier, FoodModelConfig, FoodPrediction,
    TOP_PREDICTIONS,
};
pub use http_client::{initialize_shared_client, shared_client};
pub use nutrition_api::{
    NutritionApiConfig, NutritionClient, RateLimiter, ENV_NUTRITION_API_KEY,
    NUTRITION_API_BASE_URL,
};
pub use pose::{standing_frame, FixtureDetector, PoseDetector, PoseModelConfig};
