// ABOUTME: Pose detector adapter trait over the external landmark model
// ABOUTME: Model configuration knobs and a canned fixture detector for tests and offline use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! Pose model adapter
//!
//! The engine never runs pose inference itself. A [`PoseDetector`] wraps
//! whatever model backend the host embeds and hands back a raw
//! [`LandmarkFrame`] for the metrics calculator. The [`FixtureDetector`]
//! ships alongside so the full analysis pipeline can run without a model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{ImageData, LandmarkFrame, PoseLandmark};
use physiq_core::constants::landmark;

/// Default model complexity tier (0 = lite, 1 = full, 2 = heavy)
const DEFAULT_MODEL_COMPLEXITY: u8 = 1;

/// Default minimum confidence for initial person detection
const DEFAULT_MIN_DETECTION_CONFIDENCE: f64 = 0.5;

/// Default minimum confidence for landmark tracking between frames
const DEFAULT_MIN_TRACKING_CONFIDENCE: f64 = 0.5;

/// Configuration knobs forwarded to the pose model backend
///
/// Field names and defaults mirror the upstream landmark runtime. Segmentation
/// stays off; the analysis only consumes the skeleton points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoseModelConfig {
    /// Model complexity tier; 1 trades a little accuracy for speed
    pub model_complexity: u8,
    /// Smooth landmark positions across frames
    pub smooth_landmarks: bool,
    /// Emit a segmentation mask alongside landmarks
    pub enable_segmentation: bool,
    /// Minimum confidence for initial person detection
    pub min_detection_confidence: f64,
    /// Minimum confidence for landmark tracking
    pub min_tracking_confidence: f64,
}

impl Default for PoseModelConfig {
    fn default() -> Self {
        Self {
            model_complexity: DEFAULT_MODEL_COMPLEXITY,
            smooth_landmarks: true,
            enable_segmentation: false,
            min_detection_confidence: DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_MIN_TRACKING_CONFIDENCE,
        }
    }
}

/// Adapter over an external pose landmark model
///
/// Implementations run inference on one still image and return the raw
/// landmark frame. Whether the frame actually contains a person is judged
/// downstream by the detection invariant, not by the adapter.
#[async_trait]
pub trait PoseDetector: Send + Sync {
    /// Adapter name for logging and error messages
    fn name(&self) -> &'static str;

    /// Model configuration in effect for this adapter
    fn config(&self) -> &PoseModelConfig;

    /// Run pose inference on one image
    ///
    /// # Errors
    ///
    /// Returns a model-inference error when the backend fails outright.
    /// Callers degrade to an estimated report rather than aborting the
    /// session.
    async fn detect(&self, image: &ImageData) -> AppResult<LandmarkFrame>;
}

/// Canned pose detector for tests and offline runs
///
/// Returns a fixed frame, or a fixed failure when one was injected.
#[derive(Debug, Clone)]
pub struct FixtureDetector {
    config: PoseModelConfig,
    frame: LandmarkFrame,
    failure: Option<String>,
}

impl FixtureDetector {
    /// Detector that always returns the given frame
    #[must_use]
    pub fn returning(frame: LandmarkFrame) -> Self {
        Self {
            config: PoseModelConfig::default(),
            frame,
            failure: None,
        }
    }

    /// Detector that returns a plausible standing full-body frame
    #[must_use]
    pub fn standing() -> Self {
        Self::returning(standing_frame())
    }

    /// Detector whose inference always fails with the given message
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            config: PoseModelConfig::default(),
            frame: LandmarkFrame::default(),
            failure: Some(message.into()),
        }
    }

    /// Override the model configuration reported by this fixture
    #[must_use]
    pub const fn with_config(mut self, config: PoseModelConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl PoseDetector for FixtureDetector {
    fn name(&self) -> &'static str {
        "fixture-pose"
    }

    fn config(&self) -> &PoseModelConfig {
        &self.config
    }

    async fn detect(&self, _image: &ImageData) -> AppResult<LandmarkFrame> {
        self.failure.as_ref().map_or_else(
            || Ok(self.frame.clone()),
            |message| Err(AppError::model_inference(self.name(), message.clone())),
        )
    }
}

/// A full 33-point frame posed like a person standing square to the camera
///
/// Key joints are placed at plausible normalized coordinates; filler points
/// sit at frame center. The proportions read as a typical male skeleton with
/// level shoulders and hips.
#[must_use]
pub fn standing_frame() -> LandmarkFrame {
    fn point(x: f64, y: f64, visibility: f64) -> PoseLandmark {
        PoseLandmark {
            x,
            y,
            z: 0.0,
            visibility: Some(visibility),
        }
    }

    let mut points = vec![point(0.5, 0.5, 0.85); landmark::FULL_BODY_COUNT];
    points[landmark::NOSE] = point(0.5, 0.10, 0.98);
    points[landmark::LEFT_SHOULDER] = point(0.40, 0.27, 0.95);
    points[landmark::RIGHT_SHOULDER] = point(0.60, 0.27, 0.95);
    points[landmark::LEFT_HIP] = point(0.42, 0.52, 0.95);
    points[landmark::RIGHT_HIP] = point(0.58, 0.52, 0.95);
    points[landmark::LEFT_ANKLE] = point(0.44, 0.92, 0.90);
    points[landmark::RIGHT_ANKLE] = point(0.56, 0.92, 0.90);
    LandmarkFrame::new(points)
}
