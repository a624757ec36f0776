// ABOUTME: Nutrition models: foods, meal slots, planned meals, and daily macro targets
// ABOUTME: Shared by the meal-plan generator and the nutrition lookup client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use serde::{Deserialize, Serialize};

/// A single food with its portion and macro contribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Portion description, e.g. "200g" or "2 tbsp"
    pub portion: String,
    /// Emoji icon shown next to the food
    #[serde(default)]
    pub icon: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

/// Macro totals accumulated over foods or a whole day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl MacroTotals {
    /// Sum the macro contributions of a food list
    #[must_use]
    pub fn from_foods(foods: &[FoodItem]) -> Self {
        foods.iter().fold(Self::default(), |mut acc, f| {
            acc.calories += f.calories;
            acc.protein_g += f.protein_g;
            acc.carbs_g += f.carbs_g;
            acc.fat_g += f.fat_g;
            acc
        })
    }
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
}

/// Named meal slot in the daily schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Mid-morning snack
    MorningSnack,
    /// Midday meal
    Lunch,
    /// Mid-afternoon snack
    AfternoonSnack,
    /// Evening meal
    Dinner,
    /// Late snack
    EveningSnack,
}

impl MealSlot {
    /// Slot order used when filling a day: mains first, snacks appended
    ///
    /// A plan with N meals per day takes the first N slots of this order,
    /// so a 4-meal day is three mains plus a morning snack.
    #[must_use]
    pub const fn plan_order() -> [Self; 6] {
        [
            Self::Breakfast,
            Self::Lunch,
            Self::Dinner,
            Self::MorningSnack,
            Self::AfternoonSnack,
            Self::EveningSnack,
        ]
    }

    /// Display name for the slot
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MorningSnack => "Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
            Self::EveningSnack => "Evening Snack",
        }
    }

    /// Scheduled time shown next to the slot
    #[must_use]
    pub const fn scheduled_time(&self) -> &'static str {
        match self {
            Self::Breakfast => "7:00 AM",
            Self::MorningSnack => "10:00 AM",
            Self::Lunch => "12:30 PM",
            Self::AfternoonSnack => "3:30 PM",
            Self::Dinner => "7:00 PM",
            Self::EveningSnack => "9:00 PM",
        }
    }

    /// Whether the slot is a snack rather than a main meal
    #[must_use]
    pub const fn is_snack(&self) -> bool {
        matches!(
            self,
            Self::MorningSnack | Self::AfternoonSnack | Self::EveningSnack
        )
    }

    /// Emoji icon for the slot header
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Breakfast => "🌅",
            Self::MorningSnack => "🍎",
            Self::Lunch => "☀️",
            Self::AfternoonSnack => "🥤",
            Self::Dinner => "🌙",
            Self::EveningSnack => "🌰",
        }
    }
}

/// One generated meal in a daily plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedMeal {
    /// Slot this meal fills
    pub slot: MealSlot,
    /// Name of the selected meal option
    pub name: String,
    /// Emoji icon of the meal option
    #[serde(default)]
    pub icon: String,
    /// Share of the daily calorie target assigned to this slot
    pub target_calories: f64,
    /// Foods on the plate
    pub foods: Vec<FoodItem>,
    /// Macro totals of the plate
    pub totals: MacroTotals,
}

/// Normalized result row from the nutrition lookup service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodSearchResult {
    /// Capitalized food name
    pub name: String,
    /// Calories (kcal), rounded
    pub calories: f64,
    /// Protein (grams), rounded
    pub protein_g: f64,
    /// Carbohydrates (grams), rounded
    pub carbs_g: f64,
    /// Fat (grams), rounded
    pub fat_g: f64,
    /// Portion description, e.g. "100g serving"
    pub portion: String,
    /// Emoji icon matched from the name
    #[serde(default)]
    pub icon: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_macro_totals_sum() {
        let foods = vec![
            FoodItem {
                name: "Oatmeal".into(),
                portion: "1 cup".into(),
                icon: "🥣".into(),
                calories: 150.0,
                protein_g: 5.0,
                carbs_g: 27.0,
                fat_g: 3.0,
            },
            FoodItem {
                name: "Eggs".into(),
                portion: "2 large".into(),
                icon: "🥚".into(),
                calories: 140.0,
                protein_g: 12.0,
                carbs_g: 1.0,
                fat_g: 10.0,
            },
        ];
        let totals = MacroTotals::from_foods(&foods);
        assert_eq!(totals.calories, 290.0);
        assert_eq!(totals.protein_g, 17.0);
        assert_eq!(totals.carbs_g, 28.0);
        assert_eq!(totals.fat_g, 13.0);
    }

    #[test]
    fn test_meal_slot_schedule() {
        assert_eq!(MealSlot::Breakfast.scheduled_time(), "7:00 AM");
        assert_eq!(MealSlot::Lunch.scheduled_time(), "12:30 PM");
        assert_eq!(MealSlot::EveningSnack.scheduled_time(), "9:00 PM");
        assert!(MealSlot::MorningSnack.is_snack());
        assert!(!MealSlot::Dinner.is_snack());
    }

    #[test]
    fn test_plan_order_puts_mains_first() {
        let order = MealSlot::plan_order();
        assert_eq!(order[0], MealSlot::Breakfast);
        assert_eq!(order[1], MealSlot::Lunch);
        assert_eq!(order[2], MealSlot::Dinner);
        assert!(order[3..].iter().all(MealSlot::is_snack));
    }
}
