// ABOUTME: BMI computation and the six-bucket category classifier
// ABOUTME: Each category carries its baseline score, score band, and body-type label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # BMI & Category Classifier
//!
//! Body Mass Index is the primary scoring signal of the analysis pipeline.
//!
//! Formula: `BMI = weight_kg / (height_cm / 100)^2`
//!
//! Categories follow WHO-style breakpoints at 18.5, 25, 30, 35, and 40.
//! Every interval is closed-open, so a BMI of exactly 25.0 is Overweight,
//! not Normal.

use crate::constants::measurement;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI category buckets over closed-open intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI in [0, 18.5)
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI in [30, 35)
    ObeseClassI,
    /// BMI in [35, 40)
    ObeseClassII,
    /// BMI in [40, inf)
    ObeseClassIII,
}

impl BmiCategory {
    /// Classify a BMI value into its category bucket
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObeseClassI
        } else if bmi < 40.0 {
            Self::ObeseClassII
        } else {
            Self::ObeseClassIII
        }
    }

    /// Baseline fitness score for this category
    #[must_use]
    pub const fn baseline_score(&self) -> f64 {
        match self {
            Self::Underweight | Self::Overweight => 45.0,
            Self::Normal => 85.0,
            Self::ObeseClassI => 30.0,
            Self::ObeseClassII => 22.0,
            Self::ObeseClassIII => 15.0,
        }
    }

    /// Body-composition score band (inclusive floor, inclusive ceiling)
    ///
    /// The metrics calculator draws the composition score from this band:
    /// floor plus a bounded random jitter up to the ceiling.
    #[must_use]
    pub const fn score_band(&self) -> (f64, f64) {
        match self {
            Self::Underweight => (45.0, 55.0),
            Self::Normal => (78.0, 90.0),
            Self::Overweight => (42.0, 52.0),
            Self::ObeseClassI => (28.0, 36.0),
            Self::ObeseClassII => (18.0, 26.0),
            Self::ObeseClassIII => (10.0, 18.0),
        }
    }

    /// Somatotype label shown on the report
    #[must_use]
    pub const fn body_type(&self) -> &'static str {
        match self {
            Self::Underweight => "Ectomorph",
            Self::Normal => "Mesomorph",
            Self::Overweight | Self::ObeseClassI | Self::ObeseClassII | Self::ObeseClassIII => {
                "Endomorph"
            }
        }
    }

    /// Composition label shown on the report
    #[must_use]
    pub const fn composition_label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Healthy",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese",
            Self::ObeseClassII => "Severely Obese",
            Self::ObeseClassIII => "Morbidly Obese",
        }
    }

    /// Display name of the category itself
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A computed BMI value with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// BMI value, kg/m^2
    pub value: f64,
    /// Category bucket for this value
    pub category: BmiCategory,
}

impl Bmi {
    /// Compute BMI from height in centimeters and weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `AppError::out_of_range` when either measurement is missing,
    /// non-positive, or outside plausibility bounds. Callers that allowed
    /// partial form state get an explicit error instead of a NaN.
    pub fn compute(height_cm: f64, weight_kg: f64) -> AppResult<Self> {
        if !height_cm.is_finite()
            || !(measurement::MIN_HEIGHT_CM..=measurement::MAX_HEIGHT_CM).contains(&height_cm)
        {
            return Err(AppError::out_of_range(
                "height_cm",
                format!(
                    "got {height_cm}, expected {}..={}",
                    measurement::MIN_HEIGHT_CM,
                    measurement::MAX_HEIGHT_CM
                ),
            ));
        }
        if !weight_kg.is_finite()
            || !(measurement::MIN_WEIGHT_KG..=measurement::MAX_WEIGHT_KG).contains(&weight_kg)
        {
            return Err(AppError::out_of_range(
                "weight_kg",
                format!(
                    "got {weight_kg}, expected {}..={}",
                    measurement::MIN_WEIGHT_KG,
                    measurement::MAX_WEIGHT_KG
                ),
            ));
        }

        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        Ok(Self {
            value,
            category: BmiCategory::from_bmi(value),
        })
    }

    /// BMI value rounded to one decimal, as shown to the user
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }
}
