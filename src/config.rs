// ABOUTME: Engine configuration: adapter settings and planning defaults with YAML and env loading
// ABOUTME: Defaults restate the stock tables so running without a config file changes nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use physiq_core::errors::{AppError, AppResult};
use physiq_intelligence::nutrition::MealPlanConfig;
use physiq_intelligence::simulator::{Scenario, ScenarioTargets, SimulatorBaseline};
use physiq_intelligence::workout::RoutineConfig;
use physiq_providers::food_recognition::FoodModelConfig;
use physiq_providers::nutrition_api::NutritionApiConfig;
use physiq_providers::pose::PoseModelConfig;

/// Long-run target metrics per lifestyle scenario
///
/// Defaults restate the stock scenario table; a config file can retune
/// individual scenarios without touching the projection math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioTable {
    /// Active-lifestyle targets
    pub active: ScenarioTargets,
    /// Sedentary targets
    pub sedentary: ScenarioTargets,
    /// Intensive-training targets
    pub intensive: ScenarioTargets,
    /// Nutrition-focus targets
    pub nutrition: ScenarioTargets,
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self {
            active: Scenario::Active.targets(),
            sedentary: Scenario::Sedentary.targets(),
            intensive: Scenario::Intensive.targets(),
            nutrition: Scenario::Nutrition.targets(),
        }
    }
}

impl ScenarioTable {
    /// Configured targets for a scenario
    #[must_use]
    pub const fn targets_for(&self, scenario: Scenario) -> ScenarioTargets {
        match scenario {
            Scenario::Active => self.active,
            Scenario::Sedentary => self.sedentary,
            Scenario::Intensive => self.intensive,
            Scenario::Nutrition => self.nutrition,
        }
    }
}

/// Projection simulator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Baseline used when the session carries no scored report
    pub baseline: SimulatorBaseline,
    /// Per-scenario long-run targets
    pub scenarios: ScenarioTable,
}

/// Engine-wide configuration
///
/// Every section defaults to the stock tables, so `EngineConfig::default()`
/// is always a valid runtime configuration. Loading order mirrors the
/// fitness loader convention: built-in defaults, then an optional YAML
/// file, then environment variable overrides on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Pose model knobs handed to the detector adapter
    pub pose: PoseModelConfig,
    /// Food classifier knobs handed to the classifier adapter
    pub food_model: FoodModelConfig,
    /// Nutrition lookup client settings
    pub nutrition_api: NutritionApiConfig,
    /// Simulator baseline and scenario targets
    pub simulator: SimulatorConfig,
    /// Weekly routine generation defaults
    pub routine: RoutineConfig,
    /// Daily meal plan defaults
    pub meal_plan: MealPlanConfig,
}

impl EngineConfig {
    /// Load configuration from built-in defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override produces an invalid configuration,
    /// such as a malformed nutrition base URL.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();
        config.apply_environment_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file plus environment overrides
    ///
    /// A missing file is not an error; the defaults apply as if no path
    /// had been given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, fails to
    /// parse as YAML, or fails validation.
    pub fn load_from_file(path: &Path) -> AppResult<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                AppError::config(format!(
                    "Failed to read config file {}: {e}",
                    path.display()
                ))
            })?;
            Self::from_yaml_str(&content)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config.apply_environment_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML document
    ///
    /// Absent sections keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or validation fails.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| AppError::config(format!("Invalid engine configuration YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    fn validate(&self) -> AppResult<()> {
        Url::parse(&self.nutrition_api.base_url).map_err(|e| {
            AppError::config(format!(
                "Invalid nutrition API base URL {}: {e}",
                self.nutrition_api.base_url
            ))
        })?;
        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    fn apply_environment_overrides(&mut self) {
        Self::apply_pose_overrides(&mut self.pose);
        Self::apply_nutrition_api_overrides(&mut self.nutrition_api);
        Self::apply_planning_overrides(&mut self.routine, &mut self.meal_plan);
    }

    /// Apply environment variable overrides for the pose model
    fn apply_pose_overrides(pose: &mut PoseModelConfig) {
        Self::parse_env("PHYSIQ_POSE_MODEL_COMPLEXITY", &mut pose.model_complexity);
        Self::parse_env("PHYSIQ_POSE_SMOOTH_LANDMARKS", &mut pose.smooth_landmarks);
        Self::parse_env(
            "PHYSIQ_POSE_MIN_DETECTION_CONFIDENCE",
            &mut pose.min_detection_confidence,
        );
        Self::parse_env(
            "PHYSIQ_POSE_MIN_TRACKING_CONFIDENCE",
            &mut pose.min_tracking_confidence,
        );
    }

    /// Apply environment variable overrides for the nutrition lookup client
    fn apply_nutrition_api_overrides(api: &mut NutritionApiConfig) {
        Self::parse_env("PHYSIQ_NUTRITION_BASE_URL", &mut api.base_url);
        Self::parse_env("PHYSIQ_NUTRITION_TIMEOUT_SECS", &mut api.timeout_secs);
        Self::parse_env("PHYSIQ_NUTRITION_CACHE_TTL_SECS", &mut api.cache_ttl_secs);
        Self::parse_env(
            "PHYSIQ_NUTRITION_RATE_LIMIT_PER_MINUTE",
            &mut api.rate_limit_per_minute,
        );
    }

    /// Apply environment variable overrides for planning defaults
    fn apply_planning_overrides(routine: &mut RoutineConfig, meal_plan: &mut MealPlanConfig) {
        Self::parse_env("PHYSIQ_ROUTINE_GOAL", &mut routine.goal);
        Self::parse_env("PHYSIQ_ROUTINE_SPLIT", &mut routine.split);
        Self::parse_env("PHYSIQ_ROUTINE_SESSION_MINUTES", &mut routine.session_minutes);
        Self::parse_env("PHYSIQ_MEALS_PER_DAY", &mut meal_plan.meals_per_day);
    }

    /// Parse an environment variable and update the target if valid
    fn parse_env<T: FromStr>(env_var: &str, target: &mut T) {
        if let Ok(value) = std::env::var(env_var) {
            if let Ok(parsed) = value.parse::<T>() {
                *target = parsed;
            }
        }
    }
}
