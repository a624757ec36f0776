// ABOUTME: Four-stage analysis pipeline from still image to scored report
// ABOUTME: Degrades to an estimated report on inference failure, no-human on gate failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use physiq_core::bmi::Bmi;
use physiq_core::models::{AnalysisReport, ImageData, LandmarkFrame};
use physiq_intelligence::scoring::BodyAnalyzer;
use physiq_providers::pose::PoseDetector;

/// Progress stage reported while an analysis runs
///
/// Stages surface as the pipeline actually reaches them; the engine does not
/// sleep between stages. Pacing is the presenter's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Running pose inference on the still
    PoseDetection,
    /// Reading landmark geometry out of the inference result
    LandmarkExtraction,
    /// Scoring body metrics against the session BMI
    BodyAnalysis,
    /// Assembling the final report
    ReportGeneration,
}

impl AnalysisStage {
    /// Every stage in pipeline order
    pub const ALL: [Self; 4] = [
        Self::PoseDetection,
        Self::LandmarkExtraction,
        Self::BodyAnalysis,
        Self::ReportGeneration,
    ];

    /// Progress label for this stage
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PoseDetection => "Detecting Pose",
            Self::LandmarkExtraction => "Extracting Landmarks",
            Self::BodyAnalysis => "Analyzing Body Metrics",
            Self::ReportGeneration => "Generating Report",
        }
    }
}

/// What one pipeline run produced
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// Inference succeeded and the frame scored
    Scored {
        /// Full scored report
        report: AnalysisReport,
        /// Landmark frame the report was scored from
        frame: LandmarkFrame,
    },
    /// Inference failed outright; a low-confidence placeholder stands in
    Estimated {
        /// Degraded report with fallback scores
        report: AnalysisReport,
    },
    /// Inference ran but the frame did not read as a person
    NoHuman,
}

/// Runs one still image through detection, gating, and scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisPipeline {
    analyzer: BodyAnalyzer,
}

impl AnalysisPipeline {
    /// Create a pipeline
    #[must_use]
    pub const fn new() -> Self {
        Self {
            analyzer: BodyAnalyzer::new(),
        }
    }

    /// Run one analysis attempt
    ///
    /// `on_stage` fires as each stage begins. Failure paths skip the stages
    /// they bypass: a failed inference jumps straight to generating the
    /// estimated report, and a frame that fails the human-detection gate
    /// produces no report at all. A geometry error during scoring is treated
    /// the same as a failed detection.
    pub async fn run<R, F>(
        &self,
        detector: &dyn PoseDetector,
        image: &ImageData,
        bmi: Option<Bmi>,
        rng: &mut R,
        mut on_stage: F,
    ) -> PipelineOutcome
    where
        R: Rng,
        F: FnMut(AnalysisStage),
    {
        on_stage(AnalysisStage::PoseDetection);
        let frame = match detector.detect(image).await {
            Ok(frame) => frame,
            Err(err) => {
                warn!(
                    detector = detector.name(),
                    error = %err,
                    "pose inference failed, falling back to estimated report"
                );
                on_stage(AnalysisStage::ReportGeneration);
                return PipelineOutcome::Estimated {
                    report: self.analyzer.estimated_report(),
                };
            }
        };

        on_stage(AnalysisStage::LandmarkExtraction);
        if !frame.is_human_detected() {
            debug!(
                points = frame.points.len(),
                "frame failed the human-detection gate"
            );
            return PipelineOutcome::NoHuman;
        }

        on_stage(AnalysisStage::BodyAnalysis);
        let report = match self.analyzer.analyze(bmi, &frame, rng) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "body geometry unavailable, treating as failed detection");
                return PipelineOutcome::NoHuman;
            }
        };

        on_stage(AnalysisStage::ReportGeneration);
        PipelineOutcome::Scored { report, frame }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use physiq_core::models::ImageSource;
    use physiq_providers::pose::FixtureDetector;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_image() -> ImageData {
        ImageData::new("image/jpeg", vec![0xff, 0xd8], ImageSource::Upload).unwrap()
    }

    fn test_bmi() -> Bmi {
        Bmi::compute(170.0, 70.0).unwrap()
    }

    #[tokio::test]
    async fn test_standing_frame_scores() {
        let detector = FixtureDetector::standing();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut stages = Vec::new();

        let outcome = AnalysisPipeline::new()
            .run(&detector, &test_image(), Some(test_bmi()), &mut rng, |s| {
                stages.push(s);
            })
            .await;

        match outcome {
            PipelineOutcome::Scored { report, frame } => {
                assert!(!report.estimated);
                assert!(report.detected_gender.is_some());
                assert!(frame.is_human_detected());
            }
            other => panic!("expected scored outcome, got {other:?}"),
        }
        assert_eq!(stages, AnalysisStage::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_inference_failure_degrades_to_estimate() {
        let detector = FixtureDetector::failing("backend offline");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut stages = Vec::new();

        let outcome = AnalysisPipeline::new()
            .run(&detector, &test_image(), Some(test_bmi()), &mut rng, |s| {
                stages.push(s);
            })
            .await;

        match outcome {
            PipelineOutcome::Estimated { report } => {
                assert!(report.estimated);
                assert!(report.detected_gender.is_none());
                assert!(report.bmi.is_none());
            }
            other => panic!("expected estimated outcome, got {other:?}"),
        }
        // bypassed stages are not reported
        assert_eq!(
            stages,
            vec![
                AnalysisStage::PoseDetection,
                AnalysisStage::ReportGeneration
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_frame_fails_the_gate() {
        let detector = FixtureDetector::returning(LandmarkFrame::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let outcome = AnalysisPipeline::new()
            .run(&detector, &test_image(), Some(test_bmi()), &mut rng, |_| {})
            .await;

        assert!(matches!(outcome, PipelineOutcome::NoHuman));
    }

    #[tokio::test]
    async fn test_scoring_without_bmi_still_scores() {
        let detector = FixtureDetector::standing();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let outcome = AnalysisPipeline::new()
            .run(&detector, &test_image(), None, &mut rng, |_| {})
            .await;

        match outcome {
            PipelineOutcome::Scored { report, .. } => {
                assert!(report.bmi.is_none());
                assert_eq!(report.body_composition.category, "Unknown");
            }
            other => panic!("expected scored outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(AnalysisStage::PoseDetection.label(), "Detecting Pose");
        assert_eq!(AnalysisStage::ReportGeneration.label(), "Generating Report");
    }
}
