// ABOUTME: User profile enumerations and measurements for analysis sessions
// ABOUTME: FitnessGoal, Gender, ExperienceLevel, ActivityLevel, DietType, Theme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Training goal selected on the upload screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Caloric deficit, fat loss focus
    LoseWeight,
    /// Caloric surplus, hypertrophy focus
    BuildMuscle,
    /// Caloric balance, general fitness
    Maintain,
    /// Body recomposition (balance with high protein)
    Recomp,
}

impl FitnessGoal {
    /// Map the training goal onto its nutrition goal
    #[must_use]
    pub const fn nutrition_goal(&self) -> NutritionGoal {
        match self {
            Self::LoseWeight => NutritionGoal::FatLoss,
            Self::BuildMuscle => NutritionGoal::MuscleGain,
            Self::Maintain | Self::Recomp => NutritionGoal::Maintenance,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LoseWeight => "lose-weight",
            Self::BuildMuscle => "build-muscle",
            Self::Maintain => "maintain",
            Self::Recomp => "recomp",
        };
        f.write_str(s)
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose-weight" => Ok(Self::LoseWeight),
            "build-muscle" => Ok(Self::BuildMuscle),
            "maintain" => Ok(Self::Maintain),
            "recomp" => Ok(Self::Recomp),
            other => Err(AppError::invalid_input(format!(
                "unknown fitness goal: {other} (expected lose-weight, build-muscle, maintain, or recomp)"
            ))),
        }
    }
}

/// Nutrition goal driving calorie targets and macro splits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NutritionGoal {
    /// Caloric deficit
    FatLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

/// Gender used for calorie baselines and report presentation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male presentation
    Male,
    /// Female presentation
    Female,
}

impl Gender {
    /// Lowercase label used in logs and persisted state
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Confidence attached to an inferred gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GenderConfidence {
    /// Ratio fell inside the ambiguous band
    Low,
    /// Ratio cleared the soft threshold only
    Medium,
    /// Ratio cleared the hard threshold
    High,
}

/// Gender inferred from body geometry, pending user confirmation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenderEstimate {
    /// Inferred gender
    pub gender: Gender,
    /// How confident the inference is
    pub confidence: GenderConfidence,
}

/// Workout experience level, persisted as a preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Consistent training history
    #[default]
    Intermediate,
    /// Years of structured training
    Advanced,
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "unknown experience level: {other}"
            ))),
        }
    }
}

/// Weekly activity level for energy-expenditure estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
    /// Twice-daily training
    Athlete,
}

/// Dietary preference applied to macro splits and meal plans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    /// No restriction, default split
    #[default]
    Standard,
    /// Protein-forward split
    HighProtein,
    /// Carbohydrate-restricted split
    LowCarb,
    /// No meat; plant-forward meal substitutions
    Vegetarian,
}

/// UI theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette (product default)
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User-entered body measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Standing height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl Measurements {
    /// Body weight converted to pounds
    #[must_use]
    pub fn weight_lbs(&self) -> f64 {
        self.weight_kg * crate::constants::measurement::KG_TO_LBS
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_fitness_goal_round_trip() {
        for (s, goal) in [
            ("lose-weight", FitnessGoal::LoseWeight),
            ("build-muscle", FitnessGoal::BuildMuscle),
            ("maintain", FitnessGoal::Maintain),
            ("recomp", FitnessGoal::Recomp),
        ] {
            assert_eq!(FitnessGoal::from_str(s).unwrap(), goal);
            assert_eq!(goal.to_string(), s);
        }
        assert!(FitnessGoal::from_str("bulk").is_err());
    }

    #[test]
    fn test_goal_maps_to_nutrition_goal() {
        assert_eq!(
            FitnessGoal::LoseWeight.nutrition_goal(),
            NutritionGoal::FatLoss
        );
        assert_eq!(
            FitnessGoal::BuildMuscle.nutrition_goal(),
            NutritionGoal::MuscleGain
        );
        assert_eq!(
            FitnessGoal::Recomp.nutrition_goal(),
            NutritionGoal::Maintenance
        );
    }

    #[test]
    fn test_weight_conversion() {
        let m = Measurements {
            height_cm: 170.0,
            weight_kg: 70.0,
        };
        assert!((m.weight_lbs() - 154.35).abs() < 0.01);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(GenderConfidence::Low < GenderConfidence::Medium);
        assert!(GenderConfidence::Medium < GenderConfidence::High);
    }
}
