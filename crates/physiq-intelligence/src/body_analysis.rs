// ABOUTME: Body geometry extraction from pose landmarks and gender inference
// ABOUTME: Turns a raw landmark frame into the ratios the scoring ladders consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use physiq_core::constants::landmark;
use physiq_core::models::{Gender, GenderConfidence, GenderEstimate, LandmarkFrame, PoseLandmark};

use crate::errors::{AppError, AppResult};
use crate::scoring_constants::gender;

/// Skeleton proportions measured from one landmark frame
///
/// All values are fractions of the normalized image frame. Ratios are left
/// unguarded against degenerate zero widths: the pose model does not emit
/// coincident joints for a detected body, and an infinite ratio would land
/// in an extreme ladder bucket rather than corrupt state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyGeometry {
    /// Horizontal distance between the shoulder joints
    pub shoulder_width: f64,
    /// Horizontal distance between the hip joints
    pub hip_width: f64,
    /// Vertical span from nose to left ankle
    pub body_height: f64,
    /// Vertical span from left shoulder to left hip
    pub torso_length: f64,
    /// Hip width over shoulder width; under 1.0 means a V-taper
    pub waist_hip_indicator: f64,
    /// Hip width over body height
    pub hip_to_height: f64,
    /// Left/right shoulder height offset
    pub shoulder_offset: f64,
    /// Left/right hip height offset
    pub hip_offset: f64,
    /// Signed horizontal nose offset from the shoulder midpoint
    pub head_forward: f64,
}

impl BodyGeometry {
    /// Measure skeleton proportions from a landmark frame
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when any of the required landmarks
    /// (nose, shoulders, hips, left ankle) is missing from the frame.
    pub fn from_frame(frame: &LandmarkFrame) -> AppResult<Self> {
        let nose = required(frame, landmark::NOSE)?;
        let left_shoulder = required(frame, landmark::LEFT_SHOULDER)?;
        let right_shoulder = required(frame, landmark::RIGHT_SHOULDER)?;
        let left_hip = required(frame, landmark::LEFT_HIP)?;
        let right_hip = required(frame, landmark::RIGHT_HIP)?;
        let left_ankle = required(frame, landmark::LEFT_ANKLE)?;

        let shoulder_width = (right_shoulder.x - left_shoulder.x).abs();
        let hip_width = (right_hip.x - left_hip.x).abs();
        let body_height = (left_ankle.y - nose.y).abs();
        let torso_length = (left_hip.y - left_shoulder.y).abs();

        let shoulder_mid_x = (left_shoulder.x + right_shoulder.x) / 2.0;

        let geometry = Self {
            shoulder_width,
            hip_width,
            body_height,
            torso_length,
            waist_hip_indicator: hip_width / shoulder_width,
            hip_to_height: hip_width / body_height,
            shoulder_offset: (left_shoulder.y - right_shoulder.y).abs(),
            hip_offset: (left_hip.y - right_hip.y).abs(),
            head_forward: nose.x - shoulder_mid_x,
        };

        tracing::debug!(
            shoulder_width = format!("{shoulder_width:.4}"),
            hip_width = format!("{hip_width:.4}"),
            body_height = format!("{body_height:.4}"),
            torso_length = format!("{torso_length:.4}"),
            waist_hip_indicator = format!("{:.4}", geometry.waist_hip_indicator),
            hip_to_height = format!("{:.4}", geometry.hip_to_height),
            "measured body geometry"
        );

        Ok(geometry)
    }
}

fn required(frame: &LandmarkFrame, index: usize) -> AppResult<&PoseLandmark> {
    frame.get(index).ok_or_else(|| {
        AppError::invalid_input(format!(
            "pose frame is missing landmark {index} required for body geometry"
        ))
    })
}

/// Infer gender from the shoulder/hip width ratio
///
/// Joint positions do not capture body contours, so skeleton frames show
/// shoulders wider than hips for most people. The bands compensate by
/// defaulting the ambiguous middle to female at low confidence; the
/// confirmation step downstream lets the user correct the call.
#[must_use]
pub fn infer_gender(shoulder_width: f64, hip_width: f64) -> GenderEstimate {
    let ratio = shoulder_width / hip_width;

    let (detected, confidence) = if ratio > gender::MALE_HIGH_RATIO {
        (Gender::Male, GenderConfidence::High)
    } else if ratio > gender::MALE_MEDIUM_RATIO {
        (Gender::Male, GenderConfidence::Medium)
    } else if ratio < gender::FEMALE_HIGH_RATIO {
        (Gender::Female, GenderConfidence::High)
    } else if ratio < gender::FEMALE_MEDIUM_RATIO {
        (Gender::Female, GenderConfidence::Medium)
    } else {
        (Gender::Female, GenderConfidence::Low)
    };

    tracing::debug!(
        ratio = format!("{ratio:.3}"),
        gender = detected.as_str(),
        confidence = ?confidence,
        "inferred gender from shoulder/hip ratio"
    );

    GenderEstimate {
        gender: detected,
        confidence,
    }
}
