// ABOUTME: Analysis intelligence for the Physiq engine: scoring, projections, planning
// ABOUTME: Turns pose geometry into reports and drives the simulator, workout, and nutrition panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Physiq Intelligence
//!
//! Analysis engine built on [`physiq_core`]: turns BMI plus pose landmarks
//! into a scored [`AnalysisReport`](physiq_core::models::AnalysisReport),
//! projects it across lifestyle scenarios, and plans training weeks and
//! meal days around it.
//!
//! ## Modules
//!
//! - **`scoring_constants`**: hand-tuned weights and thresholds
//! - **`body_analysis`**: geometry ratios measured off the landmark frame
//! - **`recommendation_engine`**: per-category recommendation sets
//! - **`scoring`**: the composite analyzer producing full reports
//! - **`simulator`**: timeline projections across lifestyle scenarios
//! - **`workout`**: goal configs, guided player, weekly routine generator
//! - **`nutrition`**: macro targets and the daily meal planner

/// Hand-tuned weights and thresholds behind the scoring ladders
pub mod scoring_constants;

/// Geometry ratios measured off a landmark frame
pub mod body_analysis;

/// Per-category recommendation sets keyed by BMI category and posture
pub mod recommendation_engine;

/// Composite analyzer producing scored reports
pub mod scoring;

/// Timeline projections across lifestyle scenarios
pub mod simulator;

/// Goal configuration, guided player, and weekly routine generation
pub mod workout;

/// Macro targets and daily meal planning
pub mod nutrition;

// Error types are shared with the core crate
pub use physiq_core::errors;
