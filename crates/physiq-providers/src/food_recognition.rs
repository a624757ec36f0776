// ABOUTME: Food image classifier adapter with label cleanup and confidence banding
// ABOUTME: Emoji icon lookup table and a canned classifier for tests and offline use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! Food recognition adapter
//!
//! A [`FoodClassifier`] wraps an external image classifier and returns raw
//! labels with probabilities. [`interpret_predictions`] turns the top label
//! into a [`DetectedFood`] the nutrition panel shows for user confirmation;
//! actual macros come from the lookup client after the user confirms.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::ImageData;

/// Number of label predictions requested per classification
pub const TOP_PREDICTIONS: usize = 5;

/// Probabilities below this band as low confidence
const LOW_CONFIDENCE_MAX: f64 = 0.3;

/// Probabilities below this (and above the low band) read as medium
const MEDIUM_CONFIDENCE_MAX: f64 = 0.6;

/// Icon shown when no rule matches the food name
const DEFAULT_FOOD_ICON: &str = "🍽️";

/// Name reported when classification fails outright
const UNKNOWN_FOOD_NAME: &str = "Unknown Food";

/// Substring rules mapping food names to emoji icons, first match wins
const FOOD_ICON_RULES: [(&[&str], &str); 17] = [
    (&["egg"], "🥚"),
    (&["chicken"], "🍗"),
    (&["beef", "steak"], "🥩"),
    (&["fish", "salmon"], "🐟"),
    (&["rice"], "🍚"),
    (&["bread"], "🍞"),
    (&["salad"], "🥗"),
    (&["fruit", "apple"], "🍎"),
    (&["banana"], "🍌"),
    (&["orange"], "🍊"),
    (&["vegetable", "broccoli"], "🥦"),
    (&["pizza"], "🍕"),
    (&["burger"], "🍔"),
    (&["pasta", "spaghetti"], "🍝"),
    (&["soup"], "🍜"),
    (&["coffee"], "☕"),
    (&["milk"], "🥛"),
];

/// Configuration knobs forwarded to the classifier backend
///
/// Mirrors the upstream image-classification runtime loader arguments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FoodModelConfig {
    /// Classifier architecture version
    pub version: u8,
    /// Width multiplier; 1.0 is the full network
    pub alpha: f64,
}

impl Default for FoodModelConfig {
    fn default() -> Self {
        Self {
            version: 2,
            alpha: 1.0,
        }
    }
}

/// Confidence band derived from the top prediction probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below 0.3, the user should verify or search manually
    Low,
    /// Between 0.3 and 0.6
    Medium,
    /// 0.6 and above
    High,
}

impl ConfidenceLevel {
    /// Band a raw classifier probability
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < LOW_CONFIDENCE_MAX {
            Self::Low
        } else if probability < MEDIUM_CONFIDENCE_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Lowercase label used in display strings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One raw label prediction from the classifier backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodPrediction {
    /// Raw class label, possibly comma-separated synonyms
    pub label: String,
    /// Probability in [0,1]
    pub probability: f64,
}

/// Classified food shown for user confirmation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedFood {
    /// Cleaned, capitalized food name
    pub name: String,
    /// Emoji icon matched from the name
    pub icon: String,
    /// Raw probability of the top prediction
    pub probability: f64,
    /// Confidence band for display
    pub confidence: ConfidenceLevel,
}

/// Adapter over an external food image classifier
#[async_trait]
pub trait FoodClassifier: Send + Sync {
    /// Adapter name for logging and error messages
    fn name(&self) -> &'static str;

    /// Top-k raw label predictions for one image, best first
    ///
    /// # Errors
    ///
    /// Returns a model-inference error when the backend fails. Callers fall
    /// back to [`unknown_food`] and let the user search manually.
    async fn classify(&self, image: &ImageData, top_k: usize) -> AppResult<Vec<FoodPrediction>>;
}

/// Interpret raw predictions into the confirmation-panel shape
///
/// Only the top prediction matters; the rest are kept for debugging by the
/// caller. An empty prediction list degrades to [`unknown_food`].
#[must_use]
pub fn interpret_predictions(predictions: &[FoodPrediction]) -> DetectedFood {
    predictions.first().map_or_else(unknown_food, |top| {
        let name = clean_label(&top.label);
        tracing::debug!(
            label = %top.label,
            name = %name,
            probability = format!("{:.3}", top.probability),
            "interpreted food prediction"
        );
        DetectedFood {
            icon: food_icon(&name).to_owned(),
            probability: top.probability,
            confidence: ConfidenceLevel::from_probability(top.probability),
            name,
        }
    })
}

/// Fallback detection when the classifier fails or returns nothing
#[must_use]
pub fn unknown_food() -> DetectedFood {
    DetectedFood {
        name: UNKNOWN_FOOD_NAME.to_owned(),
        icon: DEFAULT_FOOD_ICON.to_owned(),
        probability: 0.0,
        confidence: ConfidenceLevel::Low,
    }
}

/// Clean a raw classifier label: first comma segment, trimmed, capitalized
#[must_use]
pub fn clean_label(label: &str) -> String {
    let segment = label.split(',').next().unwrap_or(label).trim();
    capitalize(segment)
}

/// Uppercase the first character, leaving the rest untouched
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Emoji icon for a food name, matched case-insensitively
#[must_use]
pub fn food_icon(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    FOOD_ICON_RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|pattern| lower.contains(pattern)))
        .map_or(DEFAULT_FOOD_ICON, |(_, icon)| icon)
}

/// Canned classifier for tests and offline runs
#[derive(Debug, Clone)]
pub struct CannedClassifier {
    predictions: Vec<FoodPrediction>,
    failure: Option<String>,
}

impl CannedClassifier {
    /// Classifier that always returns the given predictions
    #[must_use]
    pub const fn returning(predictions: Vec<FoodPrediction>) -> Self {
        Self {
            predictions,
            failure: None,
        }
    }

    /// Classifier whose inference always fails with the given message
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            predictions: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl FoodClassifier for CannedClassifier {
    fn name(&self) -> &'static str {
        "canned-classifier"
    }

    async fn classify(&self, _image: &ImageData, top_k: usize) -> AppResult<Vec<FoodPrediction>> {
        self.failure.as_ref().map_or_else(
            || Ok(self.predictions.iter().take(top_k).cloned().collect()),
            |message| Err(AppError::model_inference(self.name(), message.clone())),
        )
    }
}
