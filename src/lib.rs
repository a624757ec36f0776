// ABOUTME: Main library entry point for the Physiq analysis engine
// ABOUTME: Session flow, scoring, projections, and planning behind one embeddable facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

// Crate-level attributes:
// - deny(unsafe_code): the engine is pure state and arithmetic; nothing here
//   justifies unsafe
#![deny(unsafe_code)]

//! # Physiq Engine
//!
//! Headless engine behind the Physiq body-analysis flow: a full-body photo
//! plus stated height and weight becomes a scored report, projected physique
//! outcomes, and training and nutrition plans. The engine owns session state
//! and the math only; rendering, camera I/O, and pose-model inference stay
//! with the embedding host.
//!
//! ## Features
//!
//! - **Seven-screen session flow**: upload gating, staged analysis,
//!   backward-only navigation, gender confirmation
//! - **Body scoring**: BMI category bands with per-run jitter, muscle tone,
//!   posture, and zone labels from landmark geometry
//! - **Projection simulator**: lifestyle scenarios interpolated over a
//!   five-stop timeline
//! - **Planning**: weekly training routines, guided workout player, macro
//!   targets, and daily meal plans
//! - **Host adapters**: pose detection and nutrition lookup behind traits,
//!   with offline fixtures included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use physiq_engine::errors::AppResult;
//! use physiq_engine::models::{FitnessGoal, ImageData, ImageSource, Measurements};
//! use physiq_engine::pose::FixtureDetector;
//! use physiq_engine::session::Session;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let mut session = Session::new();
//!     session.attach_image(ImageData::new(
//!         "image/jpeg",
//!         vec![0xff, 0xd8],
//!         ImageSource::Upload,
//!     )?);
//!     session.set_measurements(Measurements {
//!         height_cm: 170.0,
//!         weight_kg: 70.0,
//!     })?;
//!     session.select_goal(FitnessGoal::BuildMuscle);
//!
//!     let detector = FixtureDetector::standing();
//!     let mut rng = StdRng::from_entropy();
//!     let resolution = session.run_analysis(&detector, &mut rng).await?;
//!     println!("analysis resolved: {resolution:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Three member crates sit under this facade:
//! - **`physiq-core`**: data models, BMI math, error types, constants
//! - **`physiq-intelligence`**: scoring, projections, workout and meal
//!   planning
//! - **`physiq-providers`**: adapter traits for pose detection, food
//!   recognition, and the nutrition lookup API
//!
//! The facade adds what only the application layer owns: the session state
//! machine, engine configuration, durable preferences, and logging setup.

// ── Facade modules ──────────────────────────────────────────────────────

/// Engine configuration with YAML file load and environment overrides
pub mod config;

/// Structured logging setup for embedded use
pub mod logging;

/// Durable user preferences (theme, experience level, workout streak)
pub mod preferences;

/// Session state machine and the staged analysis pipeline
pub mod session;

// ── Member-crate surface ────────────────────────────────────────────────
// Hosts depend on this crate alone; the member crates re-export here.

/// BMI computation and category bands
pub use physiq_core::bmi;

/// Landmark indices, score bands, and measurement constants
pub use physiq_core::constants;

/// Unified error handling with standard error codes
pub use physiq_core::errors;

/// Shared data models (images, landmarks, profiles, reports)
pub use physiq_core::models;

/// Macro targets and daily meal planning
pub use physiq_intelligence::nutrition;

/// Composite body scoring over BMI and landmark geometry
pub use physiq_intelligence::scoring;

/// Future-physique projections across lifestyle scenarios
pub use physiq_intelligence::simulator;

/// Goal configuration, guided player, and weekly routine generation
pub use physiq_intelligence::workout;

/// Packaged-food recognition adapter
pub use physiq_providers::food_recognition;

/// Nutrition lookup client with caching and rate limiting
pub use physiq_providers::nutrition_api;

/// Pose detector adapter and offline fixtures
pub use physiq_providers::pose;

// Re-export key types for convenience
pub use config::EngineConfig;
pub use physiq_core::bmi::{Bmi, BmiCategory};
pub use physiq_core::errors::{AppError, AppResult};
pub use physiq_core::models::AnalysisReport;
pub use preferences::PreferenceStore;
pub use session::{AnalysisResolution, AnalysisStage, Screen, Session};
