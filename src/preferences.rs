// ABOUTME: Flat JSON preference store in the platform config directory
// ABOUTME: Theme, experience level, workout streak, and the saved weekly plan survive restarts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use physiq_core::errors::{AppError, AppResult};
use physiq_core::models::{ExperienceLevel, Theme};
use physiq_intelligence::workout::WeeklyPlan;

/// Directory under the platform config root
const APP_DIR: &str = "physiq";

/// Preference file name inside [`APP_DIR`]
const PREFERENCES_FILE: &str = "preferences.json";

/// Everything the engine persists between runs
///
/// Key names keep the original browser-storage spelling so an export from
/// the web build reads back unchanged. No schema version: unknown keys are
/// ignored, missing keys default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Color theme
    #[serde(rename = "physiq-theme", default)]
    pub theme: Theme,
    /// Workout experience level
    #[serde(rename = "physiq-experience-level", default)]
    pub experience_level: ExperienceLevel,
    /// Consecutive completed-workout counter
    #[serde(rename = "physiq-workout-streak", default)]
    pub workout_streak: u32,
    /// Saved weekly training plan, if the user kept one
    #[serde(
        rename = "physiq-weekly-plan",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_plan: Option<WeeklyPlan>,
}

/// JSON-file preference store
///
/// Reads never fail: missing or unreadable files fall back to the defaults
/// so a corrupt preference file cannot block a session.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at the platform config location, e.g. `~/.config/physiq/preferences.json`
    ///
    /// # Errors
    ///
    /// Returns an error when the platform exposes no config directory.
    pub fn new() -> AppResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| AppError::storage("No platform config directory available"))?;
        Ok(Self::at(base.join(APP_DIR).join(PREFERENCES_FILE)))
    }

    /// Store at an explicit file path
    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path the store reads and writes
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable
    #[must_use]
    pub fn load(&self) -> Preferences {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "preference file unreadable, using defaults"
                    );
                }
                return Preferences::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "preference file corrupt, using defaults"
            );
            Preferences::default()
        })
    }

    /// Persist preferences, creating the parent directory on first save
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, preferences: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "Failed to create preference directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(preferences)
            .map_err(|e| AppError::serialization(format!("Failed to encode preferences: {e}")))?;

        std::fs::write(&self.path, json).map_err(|e| {
            AppError::storage(format!(
                "Failed to write preference file {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    /// Flip the persisted theme and return the new value
    ///
    /// # Errors
    ///
    /// Returns an error when the updated preferences cannot be written.
    pub fn toggle_theme(&self) -> AppResult<Theme> {
        let mut preferences = self.load();
        preferences.theme = preferences.theme.toggled();
        self.save(&preferences)?;
        Ok(preferences.theme)
    }

    /// Persist a new experience level
    ///
    /// # Errors
    ///
    /// Returns an error when the updated preferences cannot be written.
    pub fn set_experience_level(&self, level: ExperienceLevel) -> AppResult<()> {
        let mut preferences = self.load();
        preferences.experience_level = level;
        self.save(&preferences)
    }

    /// Bump the workout streak after a completed session and return the
    /// new count
    ///
    /// # Errors
    ///
    /// Returns an error when the updated preferences cannot be written.
    pub fn record_workout_completion(&self) -> AppResult<u32> {
        let mut preferences = self.load();
        preferences.workout_streak = preferences.workout_streak.saturating_add(1);
        self.save(&preferences)?;
        Ok(preferences.workout_streak)
    }

    /// Persist the generated weekly plan
    ///
    /// # Errors
    ///
    /// Returns an error when the updated preferences cannot be written.
    pub fn save_weekly_plan(&self, plan: &WeeklyPlan) -> AppResult<()> {
        let mut preferences = self.load();
        preferences.weekly_plan = Some(plan.clone());
        self.save(&preferences)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn temp_store() -> (tempfile::TempDir, PreferenceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::at(dir.path().join("preferences.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_dir, store) = temp_store();
        let preferences = store.load();
        assert_eq!(preferences.theme, Theme::Dark);
        assert_eq!(preferences.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(preferences.workout_streak, 0);
        assert!(preferences.weekly_plan.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (_dir, store) = temp_store();
        let preferences = Preferences {
            theme: Theme::Light,
            experience_level: ExperienceLevel::Advanced,
            workout_streak: 7,
            weekly_plan: None,
        };
        store.save(&preferences).unwrap();
        assert_eq!(store.load(), preferences);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn test_file_keeps_browser_storage_keys() {
        let (_dir, store) = temp_store();
        store.save(&Preferences::default()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("physiq-theme"));
        assert!(raw.contains("physiq-experience-level"));
        assert!(raw.contains("physiq-workout-streak"));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (_dir, store) = temp_store();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(store.load().theme, Theme::Light);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_streak_increments_per_completion() {
        let (_dir, store) = temp_store();
        assert_eq!(store.record_workout_completion().unwrap(), 1);
        assert_eq!(store.record_workout_completion().unwrap(), 2);
        assert_eq!(store.load().workout_streak, 2);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_dir, store) = temp_store();
        std::fs::write(
            store.path(),
            r#"{"physiq-workout-streak": 3, "physiq-legacy-flag": true}"#,
        )
        .unwrap();
        let preferences = store.load();
        assert_eq!(preferences.workout_streak, 3);
        assert_eq!(preferences.theme, Theme::Dark);
    }
}
