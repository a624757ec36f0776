// ABOUTME: Pose landmark types and the human-detection invariant
// ABOUTME: PoseLandmark points and the ordered LandmarkFrame with key-point accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use serde::{Deserialize, Serialize};

use crate::constants::{detection, landmark};

/// A single tracked body keypoint from the pose model
///
/// Coordinates are normalized to the image: x and y in [0,1] with the origin
/// at the top-left, z relative to the hip midpoint. Visibility is the model's
/// confidence that the point is actually in frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmark {
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position
    pub y: f64,
    /// Depth relative to the hip midpoint
    #[serde(default)]
    pub z: f64,
    /// Visibility confidence in [0,1]; absent for some model backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl PoseLandmark {
    /// Visibility with the documented default applied when the model
    /// reported none
    #[must_use]
    pub fn visibility_or_default(&self) -> f64 {
        self.visibility.unwrap_or(detection::DEFAULT_VISIBILITY)
    }
}

/// An ordered set of body keypoints produced by one inference call
///
/// Produced once per analysis attempt and consumed immediately by the
/// metrics calculator; kept on the session only for redisplay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Landmarks in pose-model index order
    pub points: Vec<PoseLandmark>,
}

impl LandmarkFrame {
    /// Wrap a raw landmark list
    #[must_use]
    pub const fn new(points: Vec<PoseLandmark>) -> Self {
        Self { points }
    }

    /// Landmark at a pose-model index, if the frame is long enough
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PoseLandmark> {
        self.points.get(index)
    }

    /// The four key landmarks driving human detection: shoulders and hips
    #[must_use]
    pub fn key_points(&self) -> [Option<&PoseLandmark>; 4] {
        [
            self.get(landmark::LEFT_SHOULDER),
            self.get(landmark::RIGHT_SHOULDER),
            self.get(landmark::LEFT_HIP),
            self.get(landmark::RIGHT_HIP),
        ]
    }

    /// Whether the frame contains a detectable person
    ///
    /// True iff the frame carries at least the minimum landmark count and at
    /// least 3 of the 4 key landmarks (shoulders, hips) exceed the visibility
    /// threshold. A key landmark with no reported visibility does not count
    /// toward detection. Anything less and the analysis must not produce a
    /// report.
    #[must_use]
    pub fn is_human_detected(&self) -> bool {
        if self.points.len() < detection::MIN_LANDMARK_COUNT {
            return false;
        }
        let visible = self
            .key_points()
            .iter()
            .flatten()
            .filter(|p| {
                p.visibility
                    .is_some_and(|v| v > detection::MIN_KEY_VISIBILITY)
            })
            .count();
        visible >= detection::MIN_VISIBLE_KEY_LANDMARKS
    }

    /// Mean visibility across every landmark in the frame, with the
    /// documented default applied per missing value
    ///
    /// Feeds the muscle-tone score as a proxy for overall tracking quality.
    #[must_use]
    pub fn average_visibility(&self) -> f64 {
        if self.points.is_empty() {
            return detection::DEFAULT_VISIBILITY;
        }
        let sum: f64 = self.points.iter().map(PoseLandmark::visibility_or_default).sum();
        sum / self.points.len() as f64
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    fn landmark_at(x: f64, y: f64, visibility: f64) -> PoseLandmark {
        PoseLandmark {
            x,
            y,
            z: 0.0,
            visibility: Some(visibility),
        }
    }

    /// Full 33-point frame with the key landmarks at given visibilities
    fn frame_with_key_visibility(vis: [f64; 4]) -> LandmarkFrame {
        let mut points = vec![landmark_at(0.5, 0.5, 0.9); landmark::FULL_BODY_COUNT];
        points[landmark::LEFT_SHOULDER] = landmark_at(0.4, 0.3, vis[0]);
        points[landmark::RIGHT_SHOULDER] = landmark_at(0.6, 0.3, vis[1]);
        points[landmark::LEFT_HIP] = landmark_at(0.45, 0.6, vis[2]);
        points[landmark::RIGHT_HIP] = landmark_at(0.55, 0.6, vis[3]);
        LandmarkFrame::new(points)
    }

    #[test]
    fn test_human_detected_with_all_key_points() {
        let frame = frame_with_key_visibility([0.9, 0.9, 0.9, 0.9]);
        assert!(frame.is_human_detected());
    }

    #[test]
    fn test_human_detected_with_three_of_four() {
        let frame = frame_with_key_visibility([0.9, 0.9, 0.9, 0.1]);
        assert!(frame.is_human_detected());
    }

    #[test]
    fn test_not_detected_with_two_of_four() {
        let frame = frame_with_key_visibility([0.9, 0.9, 0.1, 0.1]);
        assert!(!frame.is_human_detected());
    }

    #[test]
    fn test_not_detected_below_minimum_count() {
        // 10 points is nowhere near a full skeleton
        let points = vec![landmark_at(0.5, 0.5, 0.9); 10];
        assert!(!LandmarkFrame::new(points).is_human_detected());
    }

    #[test]
    fn test_visibility_threshold_is_exclusive() {
        // exactly 0.3 does not count as visible
        let frame = frame_with_key_visibility([0.3, 0.3, 0.9, 0.9]);
        assert!(!frame.is_human_detected());
    }

    #[test]
    fn test_missing_visibility_does_not_count_at_detection() {
        let mut frame = frame_with_key_visibility([0.9, 0.9, 0.9, 0.9]);
        frame.points[landmark::LEFT_SHOULDER].visibility = None;
        frame.points[landmark::RIGHT_SHOULDER].visibility = None;
        assert!(!frame.is_human_detected());
    }

    #[test]
    fn test_missing_visibility_uses_default() {
        let p = PoseLandmark {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: None,
        };
        assert_eq!(p.visibility_or_default(), detection::DEFAULT_VISIBILITY);
    }

    #[test]
    fn test_average_visibility_empty_frame() {
        assert_eq!(
            LandmarkFrame::default().average_visibility(),
            detection::DEFAULT_VISIBILITY
        );
    }

    #[test]
    fn test_average_visibility_mixes_defaults() {
        let mut points = vec![landmark_at(0.5, 0.5, 1.0); 2];
        points[1].visibility = None;
        // (1.0 + 0.5) / 2
        assert_eq!(LandmarkFrame::new(points).average_visibility(), 0.75);
    }
}
