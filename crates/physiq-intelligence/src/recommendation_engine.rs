// ABOUTME: Rule table producing up to three coaching recommendations per report
// ABOUTME: Keyed on the composition category the scorer actually emits, plus a posture rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use physiq_core::bmi::BmiCategory;

use crate::scoring_constants::posture;

/// Maximum recommendations attached to a report
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Composition score at which a Normal-range body reads as athletic
const ATHLETIC_SCORE_THRESHOLD: f64 = 85.0;

const POSTURE_ADVICE: &str =
    "Prioritize posture correction - try wall angels and chin tucks daily";

const WEIGHT_LOSS_ADVICE: [&str; 3] = [
    "Start with low-impact cardio like walking or swimming 30 min daily",
    "Focus on creating a caloric deficit through balanced nutrition",
    "Incorporate strength training 2-3x per week to build lean muscle",
];

const BUILD_UP_ADVICE: [&str; 3] = [
    "Add cardio exercises 3-4x per week to improve body composition",
    "Consider a structured resistance training program",
    "Focus on protein intake to support muscle development",
];

const FIT_ADVICE: [&str; 3] = [
    "Continue current training with progressive overload",
    "Add HIIT sessions for enhanced fat burning",
    "Focus on weak muscle groups for balanced development",
];

const ATHLETIC_ADVICE: [&str; 3] = [
    "Maintain current training routine to preserve muscle mass",
    "Consider periodization to prevent plateaus",
    "Focus on mobility and recovery for longevity",
];

/// Coaching recommendation generator
///
/// Stateless; the rule table is fixed product copy. The posture rule runs
/// first so a real postural problem is never crowded out by category
/// advice, then category entries fill the remaining slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Create the engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the recommendation list for one analysis run
    ///
    /// `category` is absent when no BMI was available; only the posture rule
    /// can fire in that case.
    #[must_use]
    pub fn generate(
        &self,
        category: Option<BmiCategory>,
        composition_score: f64,
        posture_score: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::with_capacity(MAX_RECOMMENDATIONS);

        if posture_score < posture::CORRECTION_ADVICE_THRESHOLD {
            recommendations.push(POSTURE_ADVICE.to_owned());
        }

        if let Some(category) = category {
            let entries = match category {
                BmiCategory::Underweight => &BUILD_UP_ADVICE,
                BmiCategory::Normal => {
                    if composition_score >= ATHLETIC_SCORE_THRESHOLD {
                        &ATHLETIC_ADVICE
                    } else {
                        &FIT_ADVICE
                    }
                }
                BmiCategory::Overweight
                | BmiCategory::ObeseClassI
                | BmiCategory::ObeseClassII
                | BmiCategory::ObeseClassIII => &WEIGHT_LOSS_ADVICE,
            };
            for entry in entries {
                recommendations.push((*entry).to_owned());
            }
        }

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}
