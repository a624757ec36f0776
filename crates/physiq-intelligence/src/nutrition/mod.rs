// ABOUTME: Nutrition panel calculators: goal-based calorie/macro targets and copy
// ABOUTME: Submodule carries the daily meal-plan generator over the static library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Nutrition Advisor & Meal Planner
//!
//! Two target calculators feed the panel:
//!
//! - [`NutritionAdvisor::goal_targets`] works from body weight and activity
//!   level, applying the per-goal calorie adjustment and protein factor from
//!   [`GoalConfig`]
//! - [`NutritionAdvisor::daily_targets`] works from gender, nutrition goal,
//!   and diet preference; the [`meal_plan`] generator builds its day around
//!   these targets

pub mod meal_plan;

pub use meal_plan::{DailyMealPlan, MealPlanConfig, MealPlanner};

use physiq_core::constants::measurement;
use physiq_core::models::{
    ActivityLevel, DietType, FitnessGoal, Gender, NutritionGoal, NutritionTargets,
};

use crate::workout::GoalConfig;

/// Simplified daily energy expenditure base, calories per kilogram
const BASE_CALORIES_PER_KG: f64 = 24.0;

/// Calories per gram of protein
const PROTEIN_CALORIES_PER_GRAM: f64 = 4.0;

/// Calories per gram of carbohydrate
const CARB_CALORIES_PER_GRAM: f64 = 4.0;

/// Calories per gram of fat
const FAT_CALORIES_PER_GRAM: f64 = 9.0;

/// Activity multiplier applied to the calorie base
const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Very => 1.725,
        ActivityLevel::Athlete => 1.9,
    }
}

/// Calorie and macro calculators behind the nutrition panel
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionAdvisor;

impl NutritionAdvisor {
    /// Daily targets from body weight, activity level, and the fitness goal
    ///
    /// Calories start from a weight-scaled expenditure estimate, shifted by
    /// the goal's adjustment. Protein is fixed in grams per pound; the
    /// remaining calories split between carbs and fat at the goal's ratios.
    #[must_use]
    pub fn goal_targets(
        goal: FitnessGoal,
        weight_kg: f64,
        activity: ActivityLevel,
    ) -> NutritionTargets {
        let config = GoalConfig::for_goal(goal);
        let weight_lbs = weight_kg * measurement::KG_TO_LBS;

        let base_calories =
            (weight_kg * BASE_CALORIES_PER_KG * activity_multiplier(activity)).round();
        let calories = base_calories + f64::from(config.calorie_adjustment);

        let protein_g = (weight_lbs * config.protein_per_lb).round();
        let protein_calories = protein_g * PROTEIN_CALORIES_PER_GRAM;
        let remaining = calories - protein_calories;
        let carb_calories =
            (remaining * (config.carb_ratio / (config.carb_ratio + config.fat_ratio))).round();
        let fat_calories = remaining - carb_calories;

        let targets = NutritionTargets {
            calories,
            protein_g,
            carbs_g: (carb_calories / CARB_CALORIES_PER_GRAM).round(),
            fat_g: (fat_calories / FAT_CALORIES_PER_GRAM).round(),
        };
        tracing::debug!(
            goal = %goal,
            calories = targets.calories,
            protein_g = targets.protein_g,
            "computed goal-based nutrition targets"
        );
        targets
    }

    /// Daily targets from gender, nutrition goal, and diet preference
    ///
    /// Used by the meal-plan generator; works from fixed calorie baselines
    /// rather than measured weight.
    #[must_use]
    pub fn daily_targets(gender: Gender, goal: NutritionGoal, diet: DietType) -> NutritionTargets {
        let calories = match (goal, gender) {
            (NutritionGoal::FatLoss, Gender::Male) => 1900.0,
            (NutritionGoal::FatLoss, Gender::Female) => 1500.0,
            (NutritionGoal::MuscleGain, Gender::Male) => 2800.0,
            (NutritionGoal::MuscleGain, Gender::Female) => 2200.0,
            (NutritionGoal::Maintenance, Gender::Male) => 2400.0,
            (NutritionGoal::Maintenance, Gender::Female) => 1900.0,
        };

        let (protein_ratio, carb_ratio, fat_ratio) = match diet {
            DietType::HighProtein => (0.4, 0.35, 0.25),
            DietType::LowCarb => (0.35, 0.2, 0.45),
            DietType::Vegetarian => (0.25, 0.5, 0.25),
            DietType::Standard => match goal {
                NutritionGoal::FatLoss => (0.35, 0.35, 0.3),
                NutritionGoal::MuscleGain => (0.35, 0.45, 0.2),
                NutritionGoal::Maintenance => (0.3, 0.4, 0.3),
            },
        };

        NutritionTargets {
            calories,
            protein_g: (calories * protein_ratio / PROTEIN_CALORIES_PER_GRAM).round(),
            carbs_g: (calories * carb_ratio / CARB_CALORIES_PER_GRAM).round(),
            fat_g: (calories * fat_ratio / FAT_CALORIES_PER_GRAM).round(),
        }
    }

    /// Headline shown above the goal-based targets
    #[must_use]
    pub const fn goal_title(goal: FitnessGoal) -> &'static str {
        match goal {
            FitnessGoal::LoseWeight => "Caloric Deficit for Fat Loss",
            FitnessGoal::BuildMuscle => "Caloric Surplus for Muscle Growth",
            FitnessGoal::Maintain => "Balanced Nutrition for Maintenance",
            FitnessGoal::Recomp => "High Protein for Body Recomposition",
        }
    }

    /// Explanatory line under the headline
    #[must_use]
    pub fn goal_message(goal: FitnessGoal) -> String {
        let config = GoalConfig::for_goal(goal);
        match goal {
            FitnessGoal::LoseWeight => format!(
                "Based on your {} goal, we recommend a {} calorie deficit while maintaining high protein to preserve muscle mass.",
                config.name,
                config.calorie_adjustment.abs()
            ),
            FitnessGoal::BuildMuscle => format!(
                "For {}, you need a {} calorie surplus with emphasis on protein ({}g per lb) for optimal muscle growth.",
                config.name, config.calorie_adjustment, config.protein_per_lb
            ),
            FitnessGoal::Maintain => {
                "For weight maintenance, we've calculated your daily needs to keep your current \
                 physique while supporting overall health."
                    .to_owned()
            }
            FitnessGoal::Recomp => {
                "Body recomposition requires precise nutrition - high protein to build muscle \
                 while eating at maintenance to gradually lose fat."
                    .to_owned()
            }
        }
    }
}
