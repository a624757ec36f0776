// ABOUTME: Core data models for the Physiq analysis engine
// ABOUTME: Re-exports profile, landmark, image, report, and meal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Data Models
//!
//! Core data structures shared across the engine crates.
//!
//! ## Design Principles
//!
//! - **Adapter Agnostic**: landmark and image types abstract away the
//!   concrete model backends producing them
//! - **Serializable**: every model supports JSON for host embedding
//! - **Type Safe**: goals, levels, and slots are enums, not strings

// Domain modules
mod image;
mod landmarks;
mod meal;
mod profile;
mod report;

// Re-export all public types for convenience
// Image intake
pub use image::{CameraFacing, CaptureFailure, ImageData, ImageSource};

// Pose landmarks
pub use landmarks::{LandmarkFrame, PoseLandmark};

// Meals and nutrition
pub use meal::{FoodItem, FoodSearchResult, MacroTotals, MealSlot, NutritionTargets, PlannedMeal};

// User profile
pub use profile::{
    ActivityLevel, DietType, ExperienceLevel, FitnessGoal, Gender, GenderConfidence,
    GenderEstimate, Measurements, NutritionGoal, Theme,
};

// Analysis report
pub use report::{
    AnalysisReport, BodyComposition, BodyZones, Grade, MetricRating, MuscleTone, Overview,
    PostureAssessment,
};
