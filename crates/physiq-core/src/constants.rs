// ABOUTME: Engine-wide constants for landmark indexing, detection, and scoring bounds
// ABOUTME: Grouped by domain so thresholds are defined once and referenced everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! Engine-wide constants organized by domain
//!
//! Threshold values mirror the tuned behavior of the production analysis
//! flow. Change them here, never inline at call sites.

/// Landmark indices in the 33-point pose model output
///
/// The pose model emits keypoints in a fixed order; these indices name the
/// ones the analysis actually reads.
pub mod landmark {
    /// Nose tip (head position reference)
    pub const NOSE: usize = 0;
    /// Left shoulder
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left elbow
    pub const LEFT_ELBOW: usize = 13;
    /// Right elbow
    pub const RIGHT_ELBOW: usize = 14;
    /// Left wrist
    pub const LEFT_WRIST: usize = 15;
    /// Right wrist
    pub const RIGHT_WRIST: usize = 16;
    /// Left hip
    pub const LEFT_HIP: usize = 23;
    /// Right hip
    pub const RIGHT_HIP: usize = 24;
    /// Left knee
    pub const LEFT_KNEE: usize = 25;
    /// Right knee
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle
    pub const RIGHT_ANKLE: usize = 28;

    /// Full landmark count emitted by the pose model
    pub const FULL_BODY_COUNT: usize = 33;
}

/// Human-detection thresholds
pub mod detection {
    /// Minimum landmark count for a frame to be considered at all
    pub const MIN_LANDMARK_COUNT: usize = 25;

    /// Visibility confidence a key landmark must exceed to count as seen
    pub const MIN_KEY_VISIBILITY: f64 = 0.3;

    /// How many of the four key landmarks (shoulders, hips) must be seen
    pub const MIN_VISIBLE_KEY_LANDMARKS: usize = 3;

    /// Visibility assumed when a landmark carries no confidence value
    pub const DEFAULT_VISIBILITY: f64 = 0.5;
}

/// Measurement plausibility bounds for user-entered values
pub mod measurement {
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 280.0;
    /// Minimum accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 10.0;
    /// Maximum accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;

    /// Kilograms to pounds conversion factor
    pub const KG_TO_LBS: f64 = 2.205;
}

/// Score bounds shared by every sub-score
pub mod score {
    /// Lowest score any metric can report
    pub const MIN: f64 = 0.0;
    /// Highest score any metric can report
    pub const MAX: f64 = 100.0;

    /// Neutral score used by the degraded (no-landmark) fallback report
    pub const FALLBACK: f64 = 50.0;
}
