// ABOUTME: Core types and constants for the Physiq analysis engine
// ABOUTME: Foundation crate with error handling, domain models, and the BMI classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

#![deny(unsafe_code)]

//! # Physiq Core
//!
//! Foundation crate providing shared types and constants for the Physiq
//! body-composition analysis engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine-wide constants organized by domain
//! - **bmi**: BMI computation and the six-bucket category classifier
//! - **models**: Core data models (landmarks, images, reports, meals, profiles)

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine-wide constants organized by domain
pub mod constants;

/// BMI computation and category classification
pub mod bmi;

/// Core data models (`LandmarkFrame`, `ImageData`, `AnalysisReport`, etc.)
pub mod models;
