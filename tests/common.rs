// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and ready-made session/frame builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `physiq_engine`
//!
//! Common setup and fixture builders to reduce duplication across
//! integration tests.

use physiq_engine::constants::landmark;
use physiq_engine::models::{
    FitnessGoal, ImageData, ImageSource, LandmarkFrame, Measurements, PoseLandmark,
};
use physiq_engine::session::Session;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable raises the level for debugging
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Minimal valid JPEG payload for intake tests
pub fn test_image() -> ImageData {
    ImageData::new(
        "image/jpeg",
        vec![0xff, 0xd8, 0xff, 0xe0],
        ImageSource::Upload,
    )
    .unwrap()
}

/// Session with photo, 170cm/70kg, and a muscle-building goal: gate clear
pub fn ready_session() -> Session {
    init_test_logging();
    let mut session = Session::new();
    session.attach_image(test_image());
    session
        .set_measurements(Measurements {
            height_cm: 170.0,
            weight_kg: 70.0,
        })
        .unwrap();
    session.select_goal(FitnessGoal::BuildMuscle);
    session
}

/// Full 33-point frame with an adjustable shoulder/hip width ratio
///
/// Hips stay 0.10 wide around center; shoulders widen to `ratio * 0.10`.
/// Everything is highly visible, so the detection gate always passes.
pub fn frame_with_ratio(ratio: f64) -> LandmarkFrame {
    fn point(x: f64, y: f64, visibility: f64) -> PoseLandmark {
        PoseLandmark {
            x,
            y,
            z: 0.0,
            visibility: Some(visibility),
        }
    }

    let half_shoulder = ratio * 0.10 / 2.0;
    let mut points = vec![point(0.5, 0.5, 0.85); landmark::FULL_BODY_COUNT];
    points[landmark::NOSE] = point(0.5, 0.10, 0.98);
    points[landmark::LEFT_SHOULDER] = point(0.5 - half_shoulder, 0.27, 0.95);
    points[landmark::RIGHT_SHOULDER] = point(0.5 + half_shoulder, 0.27, 0.95);
    points[landmark::LEFT_HIP] = point(0.45, 0.52, 0.95);
    points[landmark::RIGHT_HIP] = point(0.55, 0.52, 0.95);
    points[landmark::LEFT_ANKLE] = point(0.46, 0.92, 0.90);
    points[landmark::RIGHT_ANKLE] = point(0.54, 0.92, 0.90);
    LandmarkFrame::new(points)
}

/// Frame where only the left shoulder clears the visibility threshold
pub fn invisible_frame() -> LandmarkFrame {
    let mut frame = frame_with_ratio(1.25);
    for index in [
        landmark::RIGHT_SHOULDER,
        landmark::LEFT_HIP,
        landmark::RIGHT_HIP,
    ] {
        frame.points[index].visibility = Some(0.1);
    }
    frame
}
