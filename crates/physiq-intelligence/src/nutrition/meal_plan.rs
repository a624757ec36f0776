// ABOUTME: Daily meal-plan generation over a static meal library with diet swaps
// ABOUTME: Random option per slot, calorie shares per plan size, macro totals per plate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use physiq_core::models::{
    DietType, FoodItem, Gender, MacroTotals, MealSlot, NutritionGoal, NutritionTargets, PlannedMeal,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::NutritionAdvisor;

/// Fewest meals the planner will schedule
const MIN_MEALS_PER_DAY: usize = 3;

/// Most meals the planner will schedule
const MAX_MEALS_PER_DAY: usize = 6;

/// Meals scheduled when the user has not picked a count
const DEFAULT_MEALS_PER_DAY: usize = 4;

/// Library food entry with a fixed portion and macros
#[derive(Debug, Clone, Copy)]
struct FoodSpec {
    name: &'static str,
    portion: &'static str,
    icon: &'static str,
    protein: f64,
    carbs: f64,
    fats: f64,
    calories: f64,
}

impl FoodSpec {
    fn to_item(self) -> FoodItem {
        FoodItem {
            name: self.name.to_owned(),
            portion: self.portion.to_owned(),
            icon: self.icon.to_owned(),
            calories: self.calories,
            protein_g: self.protein,
            carbs_g: self.carbs,
            fat_g: self.fats,
        }
    }
}

const fn food(
    name: &'static str,
    portion: &'static str,
    icon: &'static str,
    protein: f64,
    carbs: f64,
    fats: f64,
    calories: f64,
) -> FoodSpec {
    FoodSpec {
        name,
        portion,
        icon,
        protein,
        carbs,
        fats,
        calories,
    }
}

/// One option in the meal library
#[derive(Debug, Clone, Copy)]
struct MealOption {
    name: &'static str,
    icon: &'static str,
    foods: &'static [FoodSpec],
}

const BREAKFAST_OPTIONS: [MealOption; 3] = [
    MealOption {
        name: "Greek Yogurt Parfait",
        icon: "🥣",
        foods: &[
            food("Greek Yogurt", "200g", "🥛", 20.0, 8.0, 5.0, 157.0),
            food("Mixed Berries", "100g", "🍓", 1.0, 14.0, 0.0, 57.0),
            food("Granola", "40g", "🌾", 4.0, 28.0, 6.0, 180.0),
        ],
    },
    MealOption {
        name: "Protein Oatmeal Bowl",
        icon: "🥣",
        foods: &[
            food("Oatmeal", "80g dry", "🥣", 10.0, 54.0, 6.0, 304.0),
            food("Banana", "1 medium", "🍌", 1.0, 27.0, 0.0, 105.0),
            food("Almond Butter", "2 tbsp", "🥜", 7.0, 6.0, 18.0, 196.0),
        ],
    },
    MealOption {
        name: "Eggs & Avocado Toast",
        icon: "🍳",
        foods: &[
            food("Scrambled Eggs", "3 large", "🥚", 18.0, 2.0, 15.0, 210.0),
            food("Whole Grain Toast", "2 slices", "🍞", 8.0, 26.0, 2.0, 160.0),
            food("Avocado", "½ medium", "🥑", 2.0, 6.0, 15.0, 160.0),
        ],
    },
];

const LUNCH_OPTIONS: [MealOption; 3] = [
    MealOption {
        name: "Grilled Chicken Salad",
        icon: "🥗",
        foods: &[
            food("Grilled Chicken Breast", "150g", "🍗", 46.0, 0.0, 5.0, 248.0),
            food("Mixed Greens", "100g", "🥬", 2.0, 4.0, 0.0, 20.0),
            food("Olive Oil Dressing", "2 tbsp", "🫒", 0.0, 0.0, 28.0, 240.0),
            food("Cherry Tomatoes", "80g", "🍅", 1.0, 4.0, 0.0, 18.0),
        ],
    },
    MealOption {
        name: "Salmon Rice Bowl",
        icon: "🍱",
        foods: &[
            food("Grilled Salmon", "140g", "🐟", 28.0, 0.0, 18.0, 290.0),
            food("Brown Rice", "150g cooked", "🍚", 4.0, 36.0, 2.0, 168.0),
            food("Steamed Broccoli", "100g", "🥦", 3.0, 7.0, 0.0, 34.0),
        ],
    },
    MealOption {
        name: "Turkey Wrap",
        icon: "🌯",
        foods: &[
            food("Turkey Breast", "120g", "🦃", 36.0, 0.0, 2.0, 162.0),
            food("Whole Wheat Wrap", "1 large", "🫓", 6.0, 36.0, 4.0, 200.0),
            food("Hummus", "40g", "🥣", 3.0, 6.0, 4.0, 66.0),
            food("Mixed Vegetables", "80g", "🥒", 2.0, 8.0, 0.0, 35.0),
        ],
    },
];

const DINNER_OPTIONS: [MealOption; 3] = [
    MealOption {
        name: "Steak & Sweet Potato",
        icon: "🥩",
        foods: &[
            food("Lean Beef Steak", "180g", "🥩", 50.0, 0.0, 14.0, 330.0),
            food("Sweet Potato", "200g", "🍠", 4.0, 40.0, 0.0, 172.0),
            food("Asparagus", "100g", "🌿", 2.0, 4.0, 0.0, 20.0),
        ],
    },
    MealOption {
        name: "Chicken Stir-Fry",
        icon: "🍳",
        foods: &[
            food("Chicken Thigh", "160g", "🍗", 38.0, 0.0, 12.0, 264.0),
            food("Jasmine Rice", "150g cooked", "🍚", 4.0, 45.0, 1.0, 195.0),
            food("Stir-Fry Vegetables", "150g", "🥦", 4.0, 12.0, 2.0, 60.0),
            food("Teriyaki Sauce", "30ml", "🥢", 1.0, 8.0, 0.0, 35.0),
        ],
    },
    MealOption {
        name: "Baked Fish & Quinoa",
        icon: "🐟",
        foods: &[
            food("Baked Cod", "170g", "🐟", 35.0, 0.0, 2.0, 160.0),
            food("Quinoa", "150g cooked", "🌾", 6.0, 30.0, 3.0, 180.0),
            food("Roasted Vegetables", "150g", "🥕", 3.0, 18.0, 5.0, 120.0),
        ],
    },
];

const SNACK_OPTIONS: [MealOption; 3] = [
    MealOption {
        name: "Protein Shake",
        icon: "🥤",
        foods: &[
            food("Whey Protein", "1 scoop", "🥛", 25.0, 3.0, 2.0, 130.0),
            food("Banana", "1 small", "🍌", 1.0, 20.0, 0.0, 80.0),
        ],
    },
    MealOption {
        name: "Nuts & Fruit",
        icon: "🥜",
        foods: &[
            food("Mixed Nuts", "30g", "🌰", 6.0, 6.0, 16.0, 180.0),
            food("Apple", "1 medium", "🍎", 0.0, 25.0, 0.0, 95.0),
        ],
    },
    MealOption {
        name: "Cottage Cheese Bowl",
        icon: "🧀",
        foods: &[
            food("Cottage Cheese", "150g", "🧀", 17.0, 5.0, 6.0, 147.0),
            food("Pineapple", "80g", "🍍", 0.0, 11.0, 0.0, 40.0),
        ],
    },
];

const VEGETARIAN_LUNCH_OPTIONS: [MealOption; 1] = [MealOption {
    name: "Buddha Bowl",
    icon: "🥗",
    foods: &[
        food("Chickpeas", "150g", "🫘", 15.0, 40.0, 4.0, 246.0),
        food("Quinoa", "150g cooked", "🌾", 6.0, 30.0, 3.0, 180.0),
        food("Roasted Vegetables", "150g", "🥕", 3.0, 18.0, 5.0, 120.0),
        food("Tahini Dressing", "30g", "🥜", 3.0, 3.0, 9.0, 100.0),
    ],
}];

const VEGETARIAN_DINNER_OPTIONS: [MealOption; 1] = [MealOption {
    name: "Tofu Stir-Fry",
    icon: "🍳",
    foods: &[
        food("Firm Tofu", "200g", "🧈", 20.0, 4.0, 12.0, 190.0),
        food("Brown Rice", "150g cooked", "🍚", 4.0, 36.0, 2.0, 168.0),
        food("Mixed Vegetables", "200g", "🥦", 6.0, 16.0, 2.0, 80.0),
    ],
}];

/// Options a slot draws from; vegetarian swaps the main-meal lists
fn options_for(slot: MealSlot, diet: DietType) -> &'static [MealOption] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_OPTIONS,
        MealSlot::Lunch => {
            if diet == DietType::Vegetarian {
                &VEGETARIAN_LUNCH_OPTIONS
            } else {
                &LUNCH_OPTIONS
            }
        }
        MealSlot::Dinner => {
            if diet == DietType::Vegetarian {
                &VEGETARIAN_DINNER_OPTIONS
            } else {
                &DINNER_OPTIONS
            }
        }
        MealSlot::MorningSnack | MealSlot::AfternoonSnack | MealSlot::EveningSnack => {
            &SNACK_OPTIONS
        }
    }
}

/// Calorie share per slot; four meals is also the fallback shape
fn distribution(meals_per_day: usize) -> &'static [f64] {
    match meals_per_day {
        3 => &[0.3, 0.4, 0.3],
        5 => &[0.2, 0.1, 0.3, 0.25, 0.15],
        6 => &[0.2, 0.1, 0.25, 0.1, 0.25, 0.1],
        _ => &[0.25, 0.3, 0.3, 0.15],
    }
}

/// Meal-plan modal selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Gender driving the calorie baseline
    pub gender: Gender,
    /// Nutrition goal driving calories and macro ratios
    pub goal: NutritionGoal,
    /// Dietary preference; vegetarian swaps the main-meal library
    pub diet: DietType,
    /// Meals per day, clamped to the supported 3..=6 range
    pub meals_per_day: usize,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            goal: NutritionGoal::MuscleGain,
            diet: DietType::default(),
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

/// One generated day of meals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMealPlan {
    /// Daily calorie and macro targets the plan was built against
    pub targets: NutritionTargets,
    /// Generated meals, mains first
    pub meals: Vec<PlannedMeal>,
    /// Macro totals actually on the day's plates
    pub totals: MacroTotals,
}

/// Builds daily meal plans from the static meal library
#[derive(Debug, Clone, Copy, Default)]
pub struct MealPlanner;

impl MealPlanner {
    /// Generate one day of meals; the option picked within each slot is random
    ///
    /// Every regeneration rerolls the whole day, which is also how a single
    /// meal gets swapped.
    pub fn daily_plan<R: Rng>(config: &MealPlanConfig, rng: &mut R) -> DailyMealPlan {
        let targets = NutritionAdvisor::daily_targets(config.gender, config.goal, config.diet);
        let meal_count = config
            .meals_per_day
            .clamp(MIN_MEALS_PER_DAY, MAX_MEALS_PER_DAY);
        let shares = distribution(meal_count);

        let mut meals = Vec::with_capacity(meal_count);
        for (slot, share) in MealSlot::plan_order().into_iter().zip(shares.iter().copied()) {
            let Some(option) = options_for(slot, config.diet).choose(rng) else {
                continue;
            };
            let foods: Vec<FoodItem> =
                option.foods.iter().copied().map(FoodSpec::to_item).collect();
            let totals = MacroTotals::from_foods(&foods);
            meals.push(PlannedMeal {
                slot,
                name: option.name.to_owned(),
                icon: option.icon.to_owned(),
                target_calories: (targets.calories * share).round(),
                foods,
                totals,
            });
        }

        let totals = meals.iter().fold(MacroTotals::default(), |mut acc, meal| {
            acc.calories += meal.totals.calories;
            acc.protein_g += meal.totals.protein_g;
            acc.carbs_g += meal.totals.carbs_g;
            acc.fat_g += meal.totals.fat_g;
            acc
        });

        tracing::debug!(
            meal_count = meals.len(),
            target_calories = targets.calories,
            "generated daily meal plan"
        );

        DailyMealPlan {
            targets,
            meals,
            totals,
        }
    }
}
