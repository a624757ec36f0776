// ABOUTME: Workout planning: per-goal configuration, difficulty presets, and roster filters
// ABOUTME: Submodules carry the guided player and the weekly routine generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Workout Planner & Player
//!
//! Three layers build on each other:
//!
//! - [`GoalConfig`] holds the per-goal tuning shared by the workout and
//!   nutrition panels (calorie adjustment, protein factor, macro ratios,
//!   focus tags, featured exercises)
//! - [`DifficultyParams`] scales every exercise card by experience level
//! - [`player`] runs a guided session over a roster; [`routine`] generates
//!   a full training week from split templates

pub mod player;
pub mod routine;

pub use player::{PlayerExercise, PlayerPhase, WorkoutPlayer, WorkoutSummary};
pub use routine::{
    DayPlan, ExerciseTemplate, MuscleGroup, PlannedExercise, RoutineConfig, RoutineGenerator,
    SplitKind, TrainingGoal, WeeklyPlan,
};

use physiq_core::models::{ExperienceLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

/// Per-goal tuning shared by the workout and nutrition panels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalConfig {
    /// Display name of the goal program
    pub name: &'static str,
    /// Daily calorie adjustment relative to maintenance (kcal)
    pub calorie_adjustment: i32,
    /// Protein target in grams per pound of body weight
    pub protein_per_lb: f64,
    /// Share of non-protein calories going to carbohydrate
    pub carb_ratio: f64,
    /// Share of non-protein calories going to fat
    pub fat_ratio: f64,
    /// Training-style focus tags
    pub workout_focus: [&'static str; 3],
    /// Suggested training frequency
    pub weekly_frequency: &'static str,
    /// One-line program guidance
    pub primary_message: &'static str,
    /// Featured exercises shown on the workout panel
    pub featured_exercises: [&'static str; 6],
}

impl GoalConfig {
    /// Configuration table entry for a fitness goal
    #[must_use]
    pub const fn for_goal(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::LoseWeight => Self {
                name: "Weight Loss",
                calorie_adjustment: -500,
                protein_per_lb: 1.0,
                carb_ratio: 0.35,
                fat_ratio: 0.30,
                workout_focus: ["cardio", "hiit", "full-body"],
                weekly_frequency: "4-5 days/week",
                primary_message: "Focus on caloric deficit while maintaining muscle mass",
                featured_exercises: [
                    "Jumping Jacks",
                    "Burpees",
                    "Mountain Climbers",
                    "High Knees",
                    "Bodyweight Squats",
                    "Lunges",
                ],
            },
            FitnessGoal::BuildMuscle => Self {
                name: "Muscle Building",
                calorie_adjustment: 300,
                protein_per_lb: 1.2,
                carb_ratio: 0.45,
                fat_ratio: 0.25,
                workout_focus: ["strength", "hypertrophy", "compound"],
                weekly_frequency: "4-5 days/week",
                primary_message: "Focus on progressive overload and protein intake",
                featured_exercises: [
                    "Push-ups",
                    "Pull-ups",
                    "Squats",
                    "Deadlifts",
                    "Bench Press",
                    "Rows",
                ],
            },
            FitnessGoal::Maintain => Self {
                name: "Maintenance",
                calorie_adjustment: 0,
                protein_per_lb: 0.8,
                carb_ratio: 0.40,
                fat_ratio: 0.30,
                workout_focus: ["balanced", "flexibility", "endurance"],
                weekly_frequency: "3-4 days/week",
                primary_message: "Maintain current physique with balanced nutrition",
                featured_exercises: [
                    "Walking",
                    "Yoga",
                    "Swimming",
                    "Cycling",
                    "Light Weights",
                    "Stretching",
                ],
            },
            FitnessGoal::Recomp => Self {
                name: "Body Recomposition",
                calorie_adjustment: 0,
                protein_per_lb: 1.1,
                carb_ratio: 0.35,
                fat_ratio: 0.30,
                workout_focus: ["strength", "hiit", "compound"],
                weekly_frequency: "5-6 days/week",
                primary_message: "Build muscle while losing fat - prioritize protein",
                featured_exercises: [
                    "Compound Lifts",
                    "HIIT",
                    "Resistance Training",
                    "Circuit Training",
                    "Core Work",
                    "Plyometrics",
                ],
            },
        }
    }
}

/// Set/rep/rest preset applied to every exercise card at a given level
///
/// Display strings carry the user-facing ranges; the numeric fields are the
/// values the player actually counts with (the first number of each range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyParams {
    /// Sets shown on the card, e.g. "4-5"
    pub sets_display: &'static str,
    /// Reps shown on the card, e.g. "15-20"
    pub reps_display: &'static str,
    /// Rest shown on the card, e.g. "45s"
    pub rest_display: &'static str,
    /// Sets counted by the player
    pub sets: u32,
    /// Reps counted by the player
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

impl DifficultyParams {
    /// Preset table entry for an experience level
    #[must_use]
    pub const fn for_level(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Self {
                sets_display: "2",
                reps_display: "8-10",
                rest_display: "90s",
                sets: 2,
                reps: 8,
                rest_seconds: 90,
            },
            ExperienceLevel::Intermediate => Self {
                sets_display: "3",
                reps_display: "12-15",
                rest_display: "60s",
                sets: 3,
                reps: 12,
                rest_seconds: 60,
            },
            ExperienceLevel::Advanced => Self {
                sets_display: "4-5",
                reps_display: "15-20",
                rest_display: "45s",
                sets: 4,
                reps: 15,
                rest_seconds: 45,
            },
        }
    }
}

/// Exercise-roster filter on the workout panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutFilter {
    /// Every exercise
    #[default]
    All,
    /// Only exercises flagged as weak-point focus areas
    WeakPoints,
    /// Bodyweight/home exercises
    Home,
    /// Equipment-based exercises
    Gym,
}

impl WorkoutFilter {
    /// Whether an exercise passes this filter
    #[must_use]
    pub fn admits(&self, exercise: &PlayerExercise) -> bool {
        match self {
            Self::All => true,
            Self::WeakPoints => exercise.is_weak_point,
            Self::Home => matches!(exercise.location, player::WorkoutLocation::Home),
            Self::Gym => matches!(exercise.location, player::WorkoutLocation::Gym),
        }
    }
}
