// ABOUTME: Future-physique projection: scenario targets blended toward a baseline over a timeline
// ABOUTME: Timeline multipliers saturate so long horizons approach targets instead of overshooting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use physiq_core::constants::score;
use physiq_core::models::AnalysisReport;
use serde::{Deserialize, Serialize};

/// Timeline factor cap; beyond this the projection saturates at the target
const MULTIPLIER_CAP: f64 = 1.5;

/// Youngest visual age a projection may claim
const MIN_VISUAL_AGE: f64 = 18.0;

/// Fitness index ceiling (0-10 scale)
const MAX_FITNESS_INDEX: f64 = 10.0;

/// Baseline used when the session carries no scored report
const DEFAULT_FITNESS_INDEX: f64 = 7.2;
const DEFAULT_MUSCLE_SCORE: f64 = 68.0;
const DEFAULT_POSTURE_SCORE: f64 = 78.0;
const DEFAULT_VISUAL_AGE: f64 = 28.0;

/// Lifestyle scenario driving a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Regular activity, leaner and more toned
    #[default]
    Active,
    /// Little activity, gradual decline
    Sedentary,
    /// Structured training, significant muscle gain
    Intensive,
    /// Diet-first improvements
    Nutrition,
}

impl Scenario {
    /// Every scenario in card order
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Sedentary,
        Self::Intensive,
        Self::Nutrition,
    ];

    /// Card title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Active => "Active Lifestyle",
            Self::Sedentary => "Sedentary",
            Self::Intensive => "Intensive Training",
            Self::Nutrition => "Nutrition Focus",
        }
    }

    /// Whether the scenario trends toward improvement
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        !matches!(self, Self::Sedentary)
    }

    /// Long-run target metrics for this scenario
    #[must_use]
    pub const fn targets(&self) -> ScenarioTargets {
        match self {
            Self::Active => ScenarioTargets {
                fitness_index: 8.1,
                muscle_score: 78.0,
                posture_score: 88.0,
                visual_age: 25.0,
            },
            Self::Sedentary => ScenarioTargets {
                fitness_index: 6.4,
                muscle_score: 60.0,
                posture_score: 70.0,
                visual_age: 31.0,
            },
            Self::Intensive => ScenarioTargets {
                fitness_index: 8.8,
                muscle_score: 88.0,
                posture_score: 93.0,
                visual_age: 23.0,
            },
            Self::Nutrition => ScenarioTargets {
                fitness_index: 7.8,
                muscle_score: 75.0,
                posture_score: 80.0,
                visual_age: 26.0,
            },
        }
    }
}

/// Metric values a scenario converges toward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTargets {
    /// Target fitness index, 0-10
    pub fitness_index: f64,
    /// Target muscle score, 0-100
    pub muscle_score: f64,
    /// Target posture score, 0-100
    pub posture_score: f64,
    /// Target visual age, years
    pub visual_age: f64,
}

/// Projection horizon positions on the five-stop timeline control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimelineHorizon {
    /// One month out
    OneMonth,
    /// Six months out; the default view
    #[default]
    SixMonths,
    /// One year out
    OneYear,
    /// Two years out
    TwoYears,
    /// Five years out
    FiveYears,
}

impl TimelineHorizon {
    /// Every horizon in slider order
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::FiveYears,
    ];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
            Self::FiveYears => "5 Years",
        }
    }

    /// Raw progress multiplier for this horizon
    ///
    /// Capped at [`MULTIPLIER_CAP`] during projection; the raw values encode
    /// relative spacing on the timeline control.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::OneMonth => 0.15,
            Self::SixMonths => 1.0,
            Self::OneYear => 1.8,
            Self::TwoYears => 2.5,
            Self::FiveYears => 3.5,
        }
    }

    /// Horizon at a 1-based slider position
    #[must_use]
    pub fn from_slider(position: u8) -> Option<Self> {
        match position {
            1 => Some(Self::OneMonth),
            2 => Some(Self::SixMonths),
            3 => Some(Self::OneYear),
            4 => Some(Self::TwoYears),
            5 => Some(Self::FiveYears),
            _ => None,
        }
    }

    /// 1-based slider position of this horizon
    #[must_use]
    pub const fn slider_position(&self) -> u8 {
        match self {
            Self::OneMonth => 1,
            Self::SixMonths => 2,
            Self::OneYear => 3,
            Self::TwoYears => 4,
            Self::FiveYears => 5,
        }
    }
}

/// Current-state metrics a projection starts from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorBaseline {
    /// Current fitness index, 0-10
    pub fitness_index: f64,
    /// Current muscle score, 0-100
    pub muscle_score: f64,
    /// Current posture score, 0-100
    pub posture_score: f64,
    /// Current visual age, years
    pub visual_age: f64,
}

impl Default for SimulatorBaseline {
    fn default() -> Self {
        Self {
            fitness_index: DEFAULT_FITNESS_INDEX,
            muscle_score: DEFAULT_MUSCLE_SCORE,
            posture_score: DEFAULT_POSTURE_SCORE,
            visual_age: DEFAULT_VISUAL_AGE,
        }
    }
}

impl SimulatorBaseline {
    /// Baseline for a session's report
    ///
    /// Scored reports seed the baseline with their real metrics. Estimated
    /// reports carry no overview, so those fall back to the stock baseline
    /// rather than projecting from placeholder scores.
    #[must_use]
    pub fn from_report(report: &AnalysisReport) -> Self {
        report.overview.as_ref().map_or_else(Self::default, |overview| Self {
            fitness_index: overview.fitness_index,
            muscle_score: report.muscle_tone.score,
            posture_score: report.posture.score,
            visual_age: f64::from(overview.visual_age),
        })
    }
}

/// One projected outcome: a scenario applied to a baseline at a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Scenario that produced this outcome
    pub scenario: Scenario,
    /// Horizon the outcome is projected at
    pub horizon: TimelineHorizon,
    /// Projected fitness index, one decimal, clamped to [0, 10]
    pub fitness_index: f64,
    /// Projected muscle score, whole number, clamped to [0, 100]
    pub muscle_score: f64,
    /// Projected posture score, whole number, clamped to [0, 100]
    pub posture_score: f64,
    /// Projected visual age, floored at 18
    pub visual_age: u32,
    /// Raw fitness-index shift before rounding
    pub fitness_delta: f64,
    /// Raw muscle-score shift before rounding
    pub muscle_delta: f64,
    /// Raw posture-score shift before rounding
    pub posture_delta: f64,
    /// Raw visual-age shift before rounding; negative means younger
    pub age_delta: f64,
}

/// Scenario-over-timeline projection calculator
pub struct ProjectionSimulator;

impl ProjectionSimulator {
    /// Project a scenario's stock targets from a baseline
    #[must_use]
    pub fn project(
        scenario: Scenario,
        baseline: &SimulatorBaseline,
        horizon: TimelineHorizon,
    ) -> Projection {
        Self::project_targets(scenario, &scenario.targets(), baseline, horizon)
    }

    /// Project explicit targets from a baseline
    ///
    /// Each metric moves from the baseline toward the target by the capped
    /// timeline factor, then rounds and clamps to its displayable range.
    #[must_use]
    pub fn project_targets(
        scenario: Scenario,
        targets: &ScenarioTargets,
        baseline: &SimulatorBaseline,
        horizon: TimelineHorizon,
    ) -> Projection {
        let factor = horizon.multiplier().min(MULTIPLIER_CAP);

        let fitness_delta = (targets.fitness_index - baseline.fitness_index) * factor;
        let muscle_delta = (targets.muscle_score - baseline.muscle_score) * factor;
        let posture_delta = (targets.posture_score - baseline.posture_score) * factor;
        let age_delta = (targets.visual_age - baseline.visual_age) * factor;

        let fitness_index = (((baseline.fitness_index + fitness_delta) * 10.0).round() / 10.0)
            .clamp(0.0, MAX_FITNESS_INDEX);
        let muscle_score =
            (baseline.muscle_score + muscle_delta).round().clamp(score::MIN, score::MAX);
        let posture_score =
            (baseline.posture_score + posture_delta).round().clamp(score::MIN, score::MAX);
        let visual_age = (baseline.visual_age + age_delta).round().max(MIN_VISUAL_AGE) as u32;

        tracing::debug!(
            scenario = scenario.title(),
            horizon = horizon.label(),
            factor,
            fitness_index,
            muscle_score,
            posture_score,
            visual_age,
            "projected physique outcome"
        );

        Projection {
            scenario,
            horizon,
            fitness_index,
            muscle_score,
            posture_score,
            visual_age,
            fitness_delta,
            muscle_delta,
            posture_delta,
            age_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use crate::scoring::BodyAnalyzer;
    use physiq_core::bmi::Bmi;
    use physiq_core::constants::landmark;
    use physiq_core::models::{LandmarkFrame, PoseLandmark};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_horizon_reaches_target_exactly() {
        // six-month factor is 1.0, so the projection lands on the target
        let baseline = SimulatorBaseline::default();
        let p =
            ProjectionSimulator::project(Scenario::Active, &baseline, TimelineHorizon::SixMonths);
        assert_eq!(p.fitness_index, 8.1);
        assert_eq!(p.muscle_score, 78.0);
        assert_eq!(p.posture_score, 88.0);
        assert_eq!(p.visual_age, 25);
    }

    #[test]
    fn test_one_month_moves_a_fraction() {
        let baseline = SimulatorBaseline::default();
        let p =
            ProjectionSimulator::project(Scenario::Active, &baseline, TimelineHorizon::OneMonth);
        // 7.2 + 0.9 * 0.15 = 7.335 -> 7.3
        assert_eq!(p.fitness_index, 7.3);
        // 68 + 10 * 0.15 = 69.5 -> 70
        assert_eq!(p.muscle_score, 70.0);
        assert_eq!(p.posture_score, 80.0);
        assert_eq!(p.visual_age, 28);
    }

    #[test]
    fn test_long_horizons_saturate_at_cap() {
        let baseline = SimulatorBaseline::default();
        let two = ProjectionSimulator::project(
            Scenario::Sedentary,
            &baseline,
            TimelineHorizon::TwoYears,
        );
        let five = ProjectionSimulator::project(
            Scenario::Sedentary,
            &baseline,
            TimelineHorizon::FiveYears,
        );
        // both factors exceed the cap, so the outcomes are identical
        assert_eq!(two.muscle_score, five.muscle_score);
        assert_eq!(two.posture_score, five.posture_score);
        // 68 + (60 - 68) * 1.5 = 56
        assert_eq!(five.muscle_score, 56.0);
        assert_eq!(five.posture_score, 66.0);
        assert_eq!(five.fitness_index, 6.0);
        assert_eq!(five.visual_age, 33);
    }

    #[test]
    fn test_scores_clamp_to_displayable_range() {
        let weak = SimulatorBaseline {
            fitness_index: 3.0,
            muscle_score: 40.0,
            posture_score: 96.0,
            visual_age: 42.0,
        };
        let p =
            ProjectionSimulator::project(Scenario::Intensive, &weak, TimelineHorizon::FiveYears);
        // 40 + (88 - 40) * 1.5 = 112, clamped
        assert_eq!(p.muscle_score, 100.0);
        // 42 + (23 - 42) * 1.5 = 13.5, floored at the age minimum
        assert_eq!(p.visual_age, 18);
        assert!(p.fitness_index <= 10.0);
    }

    #[test]
    fn test_negative_scenario_is_flagged() {
        assert!(!Scenario::Sedentary.is_positive());
        assert!(Scenario::Active.is_positive());
        assert!(Scenario::Intensive.is_positive());
        assert!(Scenario::Nutrition.is_positive());
    }

    #[test]
    fn test_slider_positions_round_trip() {
        for horizon in TimelineHorizon::ALL {
            assert_eq!(
                TimelineHorizon::from_slider(horizon.slider_position()),
                Some(horizon)
            );
        }
        assert_eq!(TimelineHorizon::from_slider(0), None);
        assert_eq!(TimelineHorizon::from_slider(6), None);
        assert_eq!(TimelineHorizon::default(), TimelineHorizon::SixMonths);
    }

    #[test]
    fn test_baseline_follows_scored_report() {
        let mut points = vec![
            PoseLandmark {
                x: 0.5,
                y: 0.5,
                z: 0.0,
                visibility: Some(0.9),
            };
            landmark::FULL_BODY_COUNT
        ];
        points[landmark::NOSE].y = 0.1;
        points[landmark::LEFT_SHOULDER].x = 0.4;
        points[landmark::LEFT_SHOULDER].y = 0.25;
        points[landmark::RIGHT_SHOULDER].x = 0.6;
        points[landmark::RIGHT_SHOULDER].y = 0.25;
        points[landmark::LEFT_HIP].x = 0.45;
        points[landmark::RIGHT_HIP].x = 0.55;
        points[landmark::LEFT_ANKLE].y = 0.9;
        let frame = LandmarkFrame::new(points);

        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let report = BodyAnalyzer::new()
            .analyze(Some(Bmi::compute(170.0, 70.0).unwrap()), &frame, &mut rng)
            .unwrap();

        let baseline = SimulatorBaseline::from_report(&report);
        let overview = report.overview.unwrap();
        assert_eq!(baseline.fitness_index, overview.fitness_index);
        assert_eq!(baseline.muscle_score, report.muscle_tone.score);
        assert_eq!(baseline.posture_score, report.posture.score);
        assert_eq!(baseline.visual_age, f64::from(overview.visual_age));
    }

    #[test]
    fn test_baseline_falls_back_for_estimated_report() {
        let report = BodyAnalyzer::new().estimated_report();
        assert_eq!(
            SimulatorBaseline::from_report(&report),
            SimulatorBaseline::default()
        );
    }
}
