// ABOUTME: Analysis report models: the immutable snapshot produced by one analysis run
// ABOUTME: Five groups: body composition, muscle tone, posture, overview, and body zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::bmi::Bmi;

use super::profile::GenderEstimate;

/// Letter grade over the body-composition score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    /// Score 80+
    A,
    /// Score 70-79
    BPlus,
    /// Score 60-69
    B,
    /// Score 50-59
    C,
    /// Score 40-49
    D,
    /// Score below 40
    F,
}

impl Grade {
    /// Grade bucket for a body-composition score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::A
        } else if score >= 70.0 {
            Self::BPlus
        } else if score >= 60.0 {
            Self::B
        } else if score >= 50.0 {
            Self::C
        } else if score >= 40.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(s)
    }
}

/// Coarse rating for a single breakdown metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricRating {
    /// Score 75+
    Good,
    /// Score 50-74
    Fair,
    /// Score below 50
    Poor,
}

impl MetricRating {
    /// Rating bucket for a 0-100 metric score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Body-composition group of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyComposition {
    /// 0-100 score drawn from the BMI category band
    pub score: f64,
    /// Composition label (Healthy, Overweight, ...)
    pub category: String,
    /// Somatotype label (Ectomorph, Mesomorph, Endomorph)
    pub body_type: String,
    /// Lean-mass ladder label over the score
    pub lean_mass: String,
}

/// Muscle-tone group of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleTone {
    /// 0-100 score blending composition and landmark confidence
    pub score: f64,
    /// Upper-body development label
    pub upper_body: String,
    /// Core development label
    pub core: String,
    /// Lower-body development label
    pub lower_body: String,
}

/// Posture group of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostureAssessment {
    /// 40-95 posture score from shoulder and head offsets
    pub score: f64,
    /// Shoulder alignment label
    pub shoulder_alignment: String,
    /// Spine label from forward/backward head lean
    pub spine_assessment: String,
    /// Hip alignment label
    pub hip_alignment: String,
}

/// Overview group of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    /// Composition score scaled to a 0-10 index, one decimal
    pub fitness_index: f64,
    /// Cosmetic age estimate derived from the score
    pub visual_age: u32,
    /// Letter grade over the composition score
    pub grade: Grade,
    /// 50-98 left/right symmetry score from landmark offsets
    pub symmetry_score: f64,
}

/// Per-zone labels shown on the body map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyZones {
    /// Shoulder-zone label
    pub shoulders: String,
    /// Chest/torso taper label
    pub chest: String,
    /// Core-zone label
    pub core: String,
    /// Leg-zone label
    pub legs: String,
}

/// Immutable snapshot produced by one analysis run
///
/// Created once per run and overwritten wholesale by the next run; nothing
/// mutates a report in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Unique id of the producing analysis run
    pub id: Uuid,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// BMI driving the scores, when measurements were available
    pub bmi: Option<Bmi>,
    /// Body-composition group
    pub body_composition: BodyComposition,
    /// Muscle-tone group
    pub muscle_tone: MuscleTone,
    /// Posture group
    pub posture: PostureAssessment,
    /// Overview group; absent when the run fell back to estimated output
    pub overview: Option<Overview>,
    /// Per-zone labels
    pub body_zones: BodyZones,
    /// Recommendation strings, capped at three for scored runs
    pub recommendations: Vec<String>,
    /// Gender inferred from body proportions, when geometry allowed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_gender: Option<GenderEstimate>,
    /// True when landmarks were unusable and scores are neutral placeholders
    pub estimated: bool,
}

impl AnalysisReport {
    /// True when the run had both usable landmarks and a BMI to score from
    #[must_use]
    pub fn is_high_confidence(&self) -> bool {
        self.bmi.is_some() && !self.estimated
    }

    /// Coarse rating shown on the posture metric card
    #[must_use]
    pub fn posture_rating(&self) -> MetricRating {
        MetricRating::from_score(self.posture.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ladder() {
        assert_eq!(Grade::from_score(85.0), Grade::A);
        assert_eq!(Grade::from_score(80.0), Grade::A);
        assert_eq!(Grade::from_score(79.9), Grade::BPlus);
        assert_eq!(Grade::from_score(65.0), Grade::B);
        assert_eq!(Grade::from_score(50.0), Grade::C);
        assert_eq!(Grade::from_score(45.0), Grade::D);
        assert_eq!(Grade::from_score(10.0), Grade::F);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::BPlus.to_string(), "B+");
        assert_eq!(Grade::A.to_string(), "A");
    }

    #[test]
    fn test_metric_rating_ladder() {
        assert_eq!(MetricRating::from_score(80.0), MetricRating::Good);
        assert_eq!(MetricRating::from_score(74.9), MetricRating::Fair);
        assert_eq!(MetricRating::from_score(49.9), MetricRating::Poor);
    }
}
