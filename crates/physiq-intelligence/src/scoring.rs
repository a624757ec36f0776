// ABOUTME: The body-metrics calculator: (BMI, landmark frame) to a scored analysis report
// ABOUTME: Band-sampled composition score, posture/symmetry penalties, and label ladders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use chrono::Utc;
use physiq_core::bmi::Bmi;
use physiq_core::constants::score;
use physiq_core::models::{
    AnalysisReport, BodyComposition, BodyZones, Grade, LandmarkFrame, MuscleTone, Overview,
    PostureAssessment,
};
use rand::Rng;
use uuid::Uuid;

use crate::body_analysis::{infer_gender, BodyGeometry};
use crate::errors::AppResult;
use crate::recommendation_engine::RecommendationEngine;
use crate::scoring_constants::{lean_mass, muscle, overview, posture, symmetry, zones};

/// The body-metrics calculator
///
/// BMI is the primary signal: the composition score is drawn from the BMI
/// category's band, and every downstream label ladders off that score or
/// off raw landmark geometry. The landmark frame never moves the score
/// itself; it only feeds posture, symmetry, and the regional labels.
///
/// The jitter inside the band is deliberate product behavior: repeated runs
/// on the same photo show slightly different numbers. Callers own the RNG,
/// so tests seed it and get reproducible reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyAnalyzer {
    recommendations: RecommendationEngine,
}

impl BodyAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recommendations: RecommendationEngine::new(),
        }
    }

    /// Score one landmark frame against the session BMI
    ///
    /// # Errors
    ///
    /// Returns an error when the frame lacks the landmarks needed for body
    /// geometry. Callers treat that the same as a failed detection.
    pub fn analyze<R: Rng>(
        &self,
        bmi: Option<Bmi>,
        frame: &LandmarkFrame,
        rng: &mut R,
    ) -> AppResult<AnalysisReport> {
        let geometry = BodyGeometry::from_frame(frame)?;

        let (composition_score, category_label, body_type) = bmi.map_or_else(
            || (score::FALLBACK, "Unknown".to_owned(), "Unknown".to_owned()),
            |b| {
                let (floor, ceiling) = b.category.score_band();
                let score = (ceiling - floor).mul_add(rng.gen::<f64>(), floor).round();
                (
                    score,
                    b.category.composition_label().to_owned(),
                    b.category.body_type().to_owned(),
                )
            },
        );

        let posture_score = (100.0
            - (geometry.shoulder_offset * posture::SHOULDER_OFFSET_WEIGHT).round()
            - (geometry.head_forward.abs() * posture::HEAD_FORWARD_WEIGHT).round())
        .clamp(posture::MIN_SCORE, posture::MAX_SCORE);

        let symmetry_score = (100.0
            - (geometry.shoulder_offset * symmetry::OFFSET_WEIGHT).round()
            - (geometry.hip_offset * symmetry::OFFSET_WEIGHT).round())
        .clamp(symmetry::MIN_SCORE, symmetry::MAX_SCORE);

        let muscle_score = frame
            .average_visibility()
            .mul_add(
                muscle::VISIBILITY_WEIGHT,
                (composition_score * muscle::COMPOSITION_WEIGHT).min(muscle::COMPOSITION_CAP),
            )
            .round();

        let fitness_index =
            (composition_score * overview::FITNESS_INDEX_SCALE * 10.0).round() / 10.0;
        let visual_age = (overview::VISUAL_AGE_PIVOT - composition_score)
            .mul_add(overview::VISUAL_AGE_SLOPE, overview::VISUAL_AGE_BASE)
            .round() as u32;

        let recommendations = self.recommendations.generate(
            bmi.map(|b| b.category),
            composition_score,
            posture_score,
        );

        tracing::debug!(
            composition_score,
            muscle_score,
            posture_score,
            symmetry_score,
            category = %category_label,
            "scored analysis run"
        );

        Ok(AnalysisReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            bmi,
            body_composition: BodyComposition {
                score: composition_score,
                category: category_label,
                body_type,
                lean_mass: lean_mass_label(composition_score).to_owned(),
            },
            muscle_tone: MuscleTone {
                score: muscle_score,
                upper_body: upper_body_label(&geometry, composition_score).to_owned(),
                core: core_label(composition_score).to_owned(),
                lower_body: lower_body_label(&geometry).to_owned(),
            },
            posture: PostureAssessment {
                score: posture_score,
                shoulder_alignment: shoulder_alignment_label(&geometry).to_owned(),
                spine_assessment: spine_assessment_label(&geometry).to_owned(),
                hip_alignment: hip_alignment_label(&geometry).to_owned(),
            },
            overview: Some(Overview {
                fitness_index,
                visual_age,
                grade: Grade::from_score(composition_score),
                symmetry_score,
            }),
            body_zones: BodyZones {
                shoulders: shoulders_zone_label(&geometry).to_owned(),
                chest: chest_zone_label(&geometry).to_owned(),
                core: core_zone_label(composition_score).to_owned(),
                legs: legs_zone_label(&geometry).to_owned(),
            },
            recommendations,
            detected_gender: Some(infer_gender(geometry.shoulder_width, geometry.hip_width)),
            estimated: false,
        })
    }

    /// Degraded placeholder report for a failed inference
    ///
    /// Used when the pose model could not produce usable landmarks at all;
    /// every score is neutral and the recommendations tell the user how to
    /// retake the photo.
    #[must_use]
    pub fn estimated_report(&self) -> AnalysisReport {
        AnalysisReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            bmi: None,
            body_composition: BodyComposition {
                score: score::FALLBACK,
                category: "Unable to Analyze".to_owned(),
                body_type: "Unknown".to_owned(),
                lean_mass: "Unable to determine".to_owned(),
            },
            muscle_tone: MuscleTone {
                score: score::FALLBACK,
                upper_body: "Unable to assess".to_owned(),
                core: "Unable to assess".to_owned(),
                lower_body: "Unable to assess".to_owned(),
            },
            posture: PostureAssessment {
                score: score::FALLBACK,
                shoulder_alignment: "Unable to detect".to_owned(),
                spine_assessment: "Unable to detect".to_owned(),
                hip_alignment: "Unable to detect".to_owned(),
            },
            overview: None,
            body_zones: BodyZones {
                shoulders: "Not detected".to_owned(),
                chest: "Not detected".to_owned(),
                core: "Not detected".to_owned(),
                legs: "Not detected".to_owned(),
            },
            recommendations: vec![
                "Ensure your FULL BODY is visible (head to feet)".to_owned(),
                "Stand facing the camera with arms slightly away from body".to_owned(),
                "Use good lighting and a plain background".to_owned(),
                "Try a different photo with clearer body visibility".to_owned(),
            ],
            detected_gender: None,
            estimated: true,
        }
    }
}

fn lean_mass_label(score: f64) -> &'static str {
    if score >= lean_mass::HIGH {
        "High"
    } else if score >= lean_mass::ABOVE_AVERAGE {
        "Above Average"
    } else if score >= lean_mass::AVERAGE {
        "Average"
    } else if score >= lean_mass::BELOW_AVERAGE {
        "Below Average"
    } else {
        "Low"
    }
}

fn upper_body_label(geometry: &BodyGeometry, score: f64) -> &'static str {
    if geometry.waist_hip_indicator < muscle::UPPER_TAPER_THRESHOLD
        && score >= muscle::UPPER_DEVELOPED_SCORE
    {
        "Well Developed"
    } else if score >= muscle::UPPER_MODERATE_SCORE {
        "Moderate"
    } else {
        "Needs Development"
    }
}

fn core_label(score: f64) -> &'static str {
    if score >= muscle::CORE_DEFINED_SCORE {
        "Defined"
    } else if score >= muscle::CORE_MODERATE_SCORE {
        "Moderate"
    } else {
        "Needs Work"
    }
}

fn lower_body_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.hip_to_height < muscle::LOWER_LEAN_RATIO {
        "Lean"
    } else if geometry.hip_to_height < muscle::LOWER_MODERATE_RATIO {
        "Moderate"
    } else {
        "Heavy"
    }
}

fn shoulder_alignment_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.shoulder_offset < posture::ALIGNED_THRESHOLD {
        "Aligned"
    } else if geometry.shoulder_offset < posture::SLIGHT_IMBALANCE_THRESHOLD {
        "Slight Imbalance"
    } else {
        "Noticeable Imbalance"
    }
}

fn spine_assessment_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.head_forward.abs() < posture::HEAD_NEUTRAL_THRESHOLD {
        "Good"
    } else if geometry.head_forward > 0.0 {
        "Minor Forward"
    } else {
        "Minor Backward"
    }
}

fn hip_alignment_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.hip_offset < posture::HIP_BALANCED_THRESHOLD {
        "Balanced"
    } else {
        "Slight Tilt"
    }
}

fn shoulders_zone_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.shoulder_offset < zones::SHOULDER_BALANCED {
        "Balanced"
    } else {
        "Slight asymmetry"
    }
}

fn chest_zone_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.waist_hip_indicator < zones::CHEST_V_TAPER {
        "V-Taper"
    } else if geometry.waist_hip_indicator < zones::CHEST_STRAIGHT {
        "Straight"
    } else {
        "Wide"
    }
}

fn core_zone_label(score: f64) -> &'static str {
    if score >= zones::CORE_DEFINED {
        "Defined"
    } else if score >= zones::CORE_SOFT {
        "Soft"
    } else {
        "Large"
    }
}

fn legs_zone_label(geometry: &BodyGeometry) -> &'static str {
    if geometry.hip_to_height < zones::LEGS_LEAN {
        "Lean"
    } else if geometry.hip_to_height < zones::LEGS_AVERAGE {
        "Average"
    } else {
        "Heavy"
    }
}
