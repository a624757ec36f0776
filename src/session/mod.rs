// ABOUTME: Session state machine driving the seven-screen analysis flow
// ABOUTME: Gates the upload screen, routes pipeline outcomes, feeds the panel calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

//! # Session engine
//!
//! One [`Session`] per user flow: a linear state machine over seven screens
//! accumulating everything the flow collects (photo, measurements, goal,
//! inferred gender, the latest report). All mutation is synchronous; the only
//! suspension point is the pose inference awaited inside
//! [`Session::run_analysis`]. There is no cancellation: a pipeline finishing
//! after the user navigated away is applied or discarded based on which
//! screen is current when the result lands.

pub mod pipeline;

pub use pipeline::{AnalysisPipeline, AnalysisStage, PipelineOutcome};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use physiq_core::bmi::Bmi;
use physiq_core::errors::{AppError, AppResult};
use physiq_core::models::{
    ActivityLevel, AnalysisReport, CaptureFailure, DietType, ExperienceLevel, FitnessGoal, Gender,
    GenderEstimate, ImageData, LandmarkFrame, Measurements, NutritionTargets,
};
use physiq_intelligence::nutrition::{DailyMealPlan, MealPlanner, NutritionAdvisor};
use physiq_intelligence::simulator::{
    Projection, ProjectionSimulator, Scenario, SimulatorBaseline, TimelineHorizon,
};
use physiq_intelligence::workout::{
    DifficultyParams, GoalConfig, PlayerExercise, RoutineGenerator, WeeklyPlan, WorkoutPlayer,
};
use physiq_providers::pose::PoseDetector;

use crate::config::EngineConfig;

/// Blocking alert shown when no person could be read out of the photo
const NO_HUMAN_ALERT: &str = "No Human Body Detected\n\n\
The AI could not detect a human body in your photo.\n\n\
Please ensure:\n\
\u{2022} Your FULL BODY is visible (head to feet)\n\
\u{2022} You are facing the camera\n\
\u{2022} Good lighting with minimal shadows\n\
\u{2022} Plain background if possible\n\
\u{2022} Photo is not blurry\n\n\
Please try again with a different photo.";

/// Action-button label once the upload gate is clear
const ANALYZE_READY_LABEL: &str = "Analyze Photo";

/// The seven screens of the flow, in order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Photo intake plus height/weight/goal form
    #[default]
    Upload,
    /// Staged analysis progress
    Analysis,
    /// Scored gauges and the overview card
    Results,
    /// Per-metric breakdown with reasoning toggles
    Breakdown,
    /// Future-physique projection panel
    Simulator,
    /// Workout plan and guided player
    Workout,
    /// Macro targets and meal planning
    Nutrition,
}

impl Screen {
    /// Every screen in flow order
    pub const ALL: [Self; 7] = [
        Self::Upload,
        Self::Analysis,
        Self::Results,
        Self::Breakdown,
        Self::Simulator,
        Self::Workout,
        Self::Nutrition,
    ];

    /// 1-based position in the flow
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Analysis => 2,
            Self::Results => 3,
            Self::Breakdown => 4,
            Self::Simulator => 5,
            Self::Workout => 6,
            Self::Nutrition => 7,
        }
    }

    /// Screen at a 1-based position
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Upload),
            2 => Some(Self::Analysis),
            3 => Some(Self::Results),
            4 => Some(Self::Breakdown),
            5 => Some(Self::Simulator),
            6 => Some(Self::Workout),
            7 => Some(Self::Nutrition),
            _ => None,
        }
    }

    /// Nav-step title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Analysis => "Analysis",
            Self::Results => "Results",
            Self::Breakdown => "Breakdown",
            Self::Simulator => "Simulator",
            Self::Workout => "Workout",
            Self::Nutrition => "Nutrition",
        }
    }
}

/// How a nav step renders relative to the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavMarker {
    /// Lower-numbered than the current screen; clickable
    Completed,
    /// The current screen
    Active,
    /// Not reached yet
    Upcoming,
}

/// Photo angle the user says the still shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewAngle {
    /// Facing the camera; the angle the scoring expects
    #[default]
    Front,
    /// Side profile
    Side,
    /// Facing away
    Back,
}

/// Photo intake mode on the upload screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// File picker / drag-drop
    #[default]
    Upload,
    /// Live camera capture
    Camera,
}

/// Why the upload screen refuses to start an analysis
///
/// At most one blocker is reported at a time, in the order the form wants
/// them fixed: photo, then measurements, then goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadBlocker {
    /// No photo attached yet
    NoImage,
    /// Height/weight missing or invalid, so no BMI
    NoMeasurements,
    /// No fitness goal selected
    NoGoal,
}

impl UploadBlocker {
    /// Action-button label while this blocker applies
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        match self {
            Self::NoImage => "Upload Photo First",
            Self::NoMeasurements => "Enter Height & Weight",
            Self::NoGoal => "Select Fitness Goal",
        }
    }
}

/// How an applied pipeline outcome resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisResolution {
    /// Scored report stored; the flow pauses for gender confirmation
    AwaitingGenderConfirmation,
    /// Report stored and the flow moved to Results
    Completed,
    /// No person in frame; the alert was raised and the flow reset to Upload
    NoHumanDetected,
    /// Result landed after the user navigated away; dropped silently
    Discarded,
}

/// One user's pass through the seven-screen flow
#[derive(Debug, Clone)]
pub struct Session {
    /// Session id for log correlation
    pub id: Uuid,
    current_screen: Screen,
    input_mode: InputMode,
    image: Option<ImageData>,
    selected_view: ViewAngle,
    explainability_on: bool,
    measurements: Option<Measurements>,
    bmi: Option<Bmi>,
    fitness_goal: Option<FitnessGoal>,
    gender: Option<Gender>,
    pending_confirmation: Option<GenderEstimate>,
    experience_level: ExperienceLevel,
    report: Option<AnalysisReport>,
    landmarks: Option<LandmarkFrame>,
    human_detected: bool,
    pending_alert: Option<String>,
    gauges_pending: bool,
    simulator_preview: Option<SimulatorBaseline>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on the upload screen
    #[must_use]
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        debug!(session_id = %id, "session created");
        Self {
            id,
            current_screen: Screen::Upload,
            input_mode: InputMode::Upload,
            image: None,
            selected_view: ViewAngle::Front,
            explainability_on: false,
            measurements: None,
            bmi: None,
            fitness_goal: None,
            gender: None,
            pending_confirmation: None,
            experience_level: ExperienceLevel::default(),
            report: None,
            landmarks: None,
            human_detected: false,
            pending_alert: None,
            gauges_pending: false,
            simulator_preview: None,
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Screen currently shown
    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Photo intake mode in effect
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Attached photo, if any
    #[must_use]
    pub const fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Selected photo angle
    #[must_use]
    pub const fn selected_view(&self) -> ViewAngle {
        self.selected_view
    }

    /// Whether the reasoning boxes on the breakdown screen are shown
    #[must_use]
    pub const fn explainability_on(&self) -> bool {
        self.explainability_on
    }

    /// Entered height/weight, if valid ones were stored
    #[must_use]
    pub const fn measurements(&self) -> Option<Measurements> {
        self.measurements
    }

    /// BMI computed from the stored measurements
    #[must_use]
    pub const fn bmi(&self) -> Option<Bmi> {
        self.bmi
    }

    /// Selected fitness goal
    #[must_use]
    pub const fn fitness_goal(&self) -> Option<FitnessGoal> {
        self.fitness_goal
    }

    /// Confirmed gender, if the confirmation step ran
    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Confirmed gender, defaulting to male like the original flow
    #[must_use]
    pub fn gender_or_default(&self) -> Gender {
        self.gender.unwrap_or(Gender::Male)
    }

    /// Gender estimate waiting on user confirmation
    #[must_use]
    pub const fn pending_gender_confirmation(&self) -> Option<GenderEstimate> {
        self.pending_confirmation
    }

    /// Workout experience level
    #[must_use]
    pub const fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    /// Latest analysis report
    #[must_use]
    pub const fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Landmark frame behind the latest scored report
    #[must_use]
    pub const fn landmarks(&self) -> Option<&LandmarkFrame> {
        self.landmarks.as_ref()
    }

    /// Whether the latest analysis read a person out of the photo
    #[must_use]
    pub const fn human_detected(&self) -> bool {
        self.human_detected
    }

    // ------------------------------------------------------------------
    // Upload-screen intake
    // ------------------------------------------------------------------

    /// Attach a photo
    ///
    /// A new photo invalidates any previous analysis; the report and
    /// landmarks are dropped with it.
    pub fn attach_image(&mut self, image: ImageData) {
        debug!(session_id = %self.id, bytes = image.len(), mime = %image.mime_type, "photo attached");
        self.image = Some(image);
        self.report = None;
        self.landmarks = None;
        self.human_detected = false;
    }

    /// Remove the attached photo and the analysis derived from it
    pub fn clear_image(&mut self) {
        self.image = None;
        self.report = None;
        self.landmarks = None;
        self.human_detected = false;
    }

    /// Store height/weight and compute BMI
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for implausible values. The session is
    /// left without measurements or BMI, so the upload gate stays closed.
    pub fn set_measurements(&mut self, measurements: Measurements) -> AppResult<Bmi> {
        match Bmi::compute(measurements.height_cm, measurements.weight_kg) {
            Ok(bmi) => {
                self.measurements = Some(measurements);
                self.bmi = Some(bmi);
                Ok(bmi)
            }
            Err(err) => {
                self.measurements = None;
                self.bmi = None;
                Err(err)
            }
        }
    }

    /// Select the fitness goal
    pub fn select_goal(&mut self, goal: FitnessGoal) {
        self.fitness_goal = Some(goal);
    }

    /// Select the photo angle
    pub fn select_view(&mut self, view: ViewAngle) {
        self.selected_view = view;
    }

    /// Switch between file upload and camera capture
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    /// Flip the breakdown-screen reasoning boxes, returning the new state
    pub fn toggle_explainability(&mut self) -> bool {
        self.explainability_on = !self.explainability_on;
        self.explainability_on
    }

    /// Set the workout experience level
    pub fn set_experience_level(&mut self, level: ExperienceLevel) {
        self.experience_level = level;
    }

    /// Record a camera failure: raise its remediation alert and fall back
    /// to upload mode
    pub fn report_capture_failure(&mut self, error_name: &str) -> CaptureFailure {
        let failure = CaptureFailure::classify(error_name);
        info!(session_id = %self.id, ?failure, "camera capture failed");
        self.pending_alert = Some(failure.remediation().to_owned());
        self.input_mode = InputMode::Upload;
        failure
    }

    // ------------------------------------------------------------------
    // Upload gate
    // ------------------------------------------------------------------

    /// First unmet requirement blocking analysis, if any
    #[must_use]
    pub const fn upload_blocker(&self) -> Option<UploadBlocker> {
        if self.image.is_none() {
            Some(UploadBlocker::NoImage)
        } else if self.bmi.is_none() {
            Some(UploadBlocker::NoMeasurements)
        } else if self.fitness_goal.is_none() {
            Some(UploadBlocker::NoGoal)
        } else {
            None
        }
    }

    /// Whether the upload gate is clear
    #[must_use]
    pub const fn can_start_analysis(&self) -> bool {
        self.upload_blocker().is_none()
    }

    /// Label for the analyze button in its current state
    #[must_use]
    pub const fn analyze_button_label(&self) -> &'static str {
        match self.upload_blocker() {
            Some(blocker) => blocker.button_label(),
            None => ANALYZE_READY_LABEL,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move to a screen unconditionally
    ///
    /// Entering Results marks the gauges for animation; entering Simulator
    /// refreshes the preview snapshot from the current report. Both are
    /// markers the presenter reads, not rendering.
    pub fn go_to_screen(&mut self, screen: Screen) {
        debug!(
            session_id = %self.id,
            from = self.current_screen.title(),
            to = screen.title(),
            "screen change"
        );
        match screen {
            Screen::Results => self.gauges_pending = true,
            Screen::Simulator => self.simulator_preview = Some(self.simulator_baseline()),
            _ => {}
        }
        self.current_screen = screen;
    }

    /// Navigate via a nav step; allowed only backward
    ///
    /// Returns whether the navigation happened. Nav steps ahead of the
    /// current screen are inert.
    pub fn navigate_back(&mut self, target: Screen) -> bool {
        if target.number() < self.current_screen.number() {
            self.go_to_screen(target);
            true
        } else {
            false
        }
    }

    /// How a nav step for `screen` renders right now
    #[must_use]
    pub fn nav_marker(&self, screen: Screen) -> NavMarker {
        match screen.number().cmp(&self.current_screen.number()) {
            std::cmp::Ordering::Less => NavMarker::Completed,
            std::cmp::Ordering::Equal => NavMarker::Active,
            std::cmp::Ordering::Greater => NavMarker::Upcoming,
        }
    }

    /// Consume the gauge-animation marker set on entering Results
    pub fn take_gauge_animation(&mut self) -> bool {
        std::mem::take(&mut self.gauges_pending)
    }

    /// Preview snapshot refreshed on entering Simulator
    #[must_use]
    pub const fn simulator_preview(&self) -> Option<&SimulatorBaseline> {
        self.simulator_preview.as_ref()
    }

    /// Consume the pending blocking alert, if one was raised
    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }

    // ------------------------------------------------------------------
    // Analysis flow
    // ------------------------------------------------------------------

    /// Start an analysis: check the gate and move to the Analysis screen
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the unmet requirement when the
    /// upload gate is not clear. The disabled button prevents this in the
    /// normal flow; the error covers direct API use.
    pub fn begin_analysis(&mut self) -> AppResult<()> {
        if let Some(blocker) = self.upload_blocker() {
            return Err(AppError::invalid_input(format!(
                "cannot start analysis: {}",
                blocker.button_label()
            )));
        }
        self.go_to_screen(Screen::Analysis);
        Ok(())
    }

    /// Apply a finished pipeline outcome to the session
    ///
    /// A result landing while the Analysis screen is no longer current is
    /// discarded silently, matching the no-cancellation model. The no-human
    /// failure raises its blocking alert and forces a reset to Upload, but
    /// only while the flow is still at Results or earlier.
    pub fn apply_analysis(&mut self, outcome: PipelineOutcome) -> AnalysisResolution {
        match outcome {
            PipelineOutcome::Scored { report, frame } => {
                if self.current_screen != Screen::Analysis {
                    debug!(session_id = %self.id, "scored result discarded, user left the analysis screen");
                    return AnalysisResolution::Discarded;
                }
                let confirmation = report.detected_gender;
                info!(
                    session_id = %self.id,
                    report_id = %report.id,
                    "analysis scored"
                );
                self.report = Some(report);
                self.landmarks = Some(frame);
                self.human_detected = true;
                let Some(estimate) = confirmation else {
                    self.go_to_screen(Screen::Results);
                    return AnalysisResolution::Completed;
                };
                self.pending_confirmation = Some(estimate);
                AnalysisResolution::AwaitingGenderConfirmation
            }
            PipelineOutcome::Estimated { report } => {
                if self.current_screen != Screen::Analysis {
                    debug!(session_id = %self.id, "estimated result discarded, user left the analysis screen");
                    return AnalysisResolution::Discarded;
                }
                info!(session_id = %self.id, "inference failed, estimated report applied");
                self.report = Some(report);
                self.landmarks = None;
                self.human_detected = false;
                self.pending_confirmation = None;
                self.go_to_screen(Screen::Results);
                AnalysisResolution::Completed
            }
            PipelineOutcome::NoHuman => {
                if self.current_screen > Screen::Results {
                    debug!(session_id = %self.id, "no-human result discarded, user moved past results");
                    return AnalysisResolution::Discarded;
                }
                info!(session_id = %self.id, "no human detected, session reset to upload");
                self.pending_alert = Some(NO_HUMAN_ALERT.to_owned());
                self.reset();
                AnalysisResolution::NoHumanDetected
            }
        }
    }

    /// Resolve the gender confirmation step and move to Results
    ///
    /// Resolution order follows the original flow: the explicit choice wins,
    /// then the inferred gender, then the male default.
    pub fn confirm_gender(&mut self, choice: Option<Gender>) -> Gender {
        let resolved = choice
            .or_else(|| self.pending_confirmation.map(|estimate| estimate.gender))
            .unwrap_or(Gender::Male);
        self.gender = Some(resolved);
        self.pending_confirmation = None;
        self.go_to_screen(Screen::Results);
        resolved
    }

    /// Return to Upload, dropping the photo and everything derived from it
    ///
    /// Height, weight, goal, and gender survive so the user only redoes the
    /// photo.
    pub fn reset(&mut self) {
        self.current_screen = Screen::Upload;
        self.image = None;
        self.report = None;
        self.landmarks = None;
        self.human_detected = false;
        self.pending_confirmation = None;
    }

    /// Run one full analysis attempt against a detector
    ///
    /// Convenience wrapper: checks the gate, moves to Analysis, awaits the
    /// pipeline, then applies the outcome. Stage progress is logged.
    ///
    /// # Errors
    ///
    /// Returns an error only when the upload gate is not clear. Inference
    /// failures degrade inside the pipeline instead of surfacing here.
    pub async fn run_analysis<R: Rng + Send>(
        &mut self,
        detector: &dyn PoseDetector,
        rng: &mut R,
    ) -> AppResult<AnalysisResolution> {
        self.begin_analysis()?;
        let image = self
            .image
            .clone()
            .ok_or_else(|| AppError::missing_field("image"))?;
        let outcome = AnalysisPipeline::new()
            .run(detector, &image, self.bmi, rng, |stage| {
                debug!(stage = stage.label(), "analysis stage");
            })
            .await;
        Ok(self.apply_analysis(outcome))
    }

    // ------------------------------------------------------------------
    // Panel calculators
    // ------------------------------------------------------------------

    /// Current-state snapshot the simulator projects from
    ///
    /// Scored reports seed real metrics; estimated reports and sessions with
    /// no report fall back to the stock baseline.
    #[must_use]
    pub fn simulator_baseline(&self) -> SimulatorBaseline {
        self.report
            .as_ref()
            .map_or_else(SimulatorBaseline::default, SimulatorBaseline::from_report)
    }

    /// Project a scenario at a horizon using the configured scenario table
    #[must_use]
    pub fn projection(
        &self,
        config: &EngineConfig,
        scenario: Scenario,
        horizon: TimelineHorizon,
    ) -> Projection {
        let baseline = self
            .report
            .as_ref()
            .map_or(config.simulator.baseline, SimulatorBaseline::from_report);
        ProjectionSimulator::project_targets(
            scenario,
            &config.simulator.scenarios.targets_for(scenario),
            &baseline,
            horizon,
        )
    }

    /// Goal tuning for the workout and nutrition panels
    #[must_use]
    pub fn goal_config(&self) -> Option<GoalConfig> {
        self.fitness_goal.map(GoalConfig::for_goal)
    }

    /// Set/rep/rest preset for the session's experience level
    #[must_use]
    pub fn difficulty(&self) -> DifficultyParams {
        DifficultyParams::for_level(self.experience_level)
    }

    /// Daily macro targets from body weight, activity, and the goal
    ///
    /// `None` until both measurements and a goal were entered.
    #[must_use]
    pub fn nutrition_targets(&self, activity: ActivityLevel) -> Option<NutritionTargets> {
        match (self.measurements, self.fitness_goal) {
            (Some(measurements), Some(goal)) => Some(NutritionAdvisor::goal_targets(
                goal,
                measurements.weight_kg,
                activity,
            )),
            _ => None,
        }
    }

    /// Daily macro targets from the gender/goal/diet table
    ///
    /// `None` until a goal was selected; gender defaults to male until
    /// confirmed.
    #[must_use]
    pub fn daily_targets(&self, diet: DietType) -> Option<NutritionTargets> {
        self.fitness_goal.map(|goal| {
            NutritionAdvisor::daily_targets(self.gender_or_default(), goal.nutrition_goal(), diet)
        })
    }

    /// Generate a daily meal plan from the configured defaults
    ///
    /// The session's confirmed gender and selected goal override the
    /// configured ones when present.
    #[must_use]
    pub fn daily_meal_plan<R: Rng>(&self, config: &EngineConfig, rng: &mut R) -> DailyMealPlan {
        let mut plan_config = config.meal_plan.clone();
        if let Some(gender) = self.gender {
            plan_config.gender = gender;
        }
        if let Some(goal) = self.fitness_goal {
            plan_config.goal = goal.nutrition_goal();
        }
        MealPlanner::daily_plan(&plan_config, rng)
    }

    /// Generate a weekly training plan from the configured defaults
    #[must_use]
    pub fn weekly_routine<R: Rng>(&self, config: &EngineConfig, rng: &mut R) -> WeeklyPlan {
        RoutineGenerator::generate(&config.routine, rng)
    }

    /// Build a guided player over the goal's featured exercises
    ///
    /// Every exercise carries the experience level's set/rep/rest preset.
    ///
    /// # Errors
    ///
    /// Returns a missing-field error when no goal was selected.
    pub fn start_workout(&self, started_at: DateTime<Utc>) -> AppResult<WorkoutPlayer> {
        let goal = self
            .fitness_goal
            .ok_or_else(|| AppError::missing_field("fitness_goal"))?;
        let config = GoalConfig::for_goal(goal);
        let params = self.difficulty();
        let exercises = config
            .featured_exercises
            .iter()
            .map(|name| PlayerExercise::new(name, params.sets, params.reps, params.rest_seconds))
            .collect();
        WorkoutPlayer::new(exercises, started_at)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use physiq_core::models::ImageSource;
    use physiq_providers::pose::{standing_frame, FixtureDetector};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_image() -> ImageData {
        ImageData::new("image/jpeg", vec![0xff, 0xd8], ImageSource::Upload).unwrap()
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.attach_image(test_image());
        session
            .set_measurements(Measurements {
                height_cm: 170.0,
                weight_kg: 70.0,
            })
            .unwrap();
        session.select_goal(FitnessGoal::BuildMuscle);
        session
    }

    fn scored_outcome(session: &Session) -> PipelineOutcome {
        let frame = standing_frame();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let report = physiq_intelligence::scoring::BodyAnalyzer::new()
            .analyze(session.bmi(), &frame, &mut rng)
            .unwrap();
        PipelineOutcome::Scored { report, frame }
    }

    #[test]
    fn test_blockers_in_form_order() {
        let mut session = Session::new();
        assert_eq!(session.upload_blocker(), Some(UploadBlocker::NoImage));
        assert_eq!(session.analyze_button_label(), "Upload Photo First");

        session.attach_image(test_image());
        assert_eq!(session.upload_blocker(), Some(UploadBlocker::NoMeasurements));
        assert_eq!(session.analyze_button_label(), "Enter Height & Weight");

        session
            .set_measurements(Measurements {
                height_cm: 170.0,
                weight_kg: 70.0,
            })
            .unwrap();
        assert_eq!(session.upload_blocker(), Some(UploadBlocker::NoGoal));
        assert_eq!(session.analyze_button_label(), "Select Fitness Goal");

        session.select_goal(FitnessGoal::LoseWeight);
        assert_eq!(session.upload_blocker(), None);
        assert_eq!(session.analyze_button_label(), "Analyze Photo");
        assert!(session.can_start_analysis());
    }

    #[test]
    fn test_invalid_measurements_leave_gate_closed() {
        let mut session = Session::new();
        session.attach_image(test_image());
        let err = session
            .set_measurements(Measurements {
                height_cm: 170.0,
                weight_kg: 0.0,
            })
            .unwrap_err();
        assert_eq!(err.code, physiq_core::errors::ErrorCode::ValueOutOfRange);
        assert!(session.bmi().is_none());
        assert_eq!(session.upload_blocker(), Some(UploadBlocker::NoMeasurements));
    }

    #[test]
    fn test_begin_analysis_requires_clear_gate() {
        let mut session = Session::new();
        let err = session.begin_analysis().unwrap_err();
        assert!(err.message.contains("Upload Photo First"));
        assert_eq!(session.current_screen(), Screen::Upload);

        let mut ready = ready_session();
        ready.begin_analysis().unwrap();
        assert_eq!(ready.current_screen(), Screen::Analysis);
    }

    #[test]
    fn test_forward_navigation_is_unconditional_after_upload() {
        let mut session = Session::new();
        session.go_to_screen(Screen::Simulator);
        assert_eq!(session.current_screen(), Screen::Simulator);
    }

    #[test]
    fn test_nav_steps_only_go_backward() {
        let mut session = ready_session();
        session.go_to_screen(Screen::Breakdown);

        assert!(!session.navigate_back(Screen::Workout));
        assert_eq!(session.current_screen(), Screen::Breakdown);
        assert!(!session.navigate_back(Screen::Breakdown));

        assert!(session.navigate_back(Screen::Results));
        assert_eq!(session.current_screen(), Screen::Results);
    }

    #[test]
    fn test_nav_markers() {
        let mut session = Session::new();
        session.go_to_screen(Screen::Results);
        assert_eq!(session.nav_marker(Screen::Upload), NavMarker::Completed);
        assert_eq!(session.nav_marker(Screen::Analysis), NavMarker::Completed);
        assert_eq!(session.nav_marker(Screen::Results), NavMarker::Active);
        assert_eq!(session.nav_marker(Screen::Simulator), NavMarker::Upcoming);
    }

    #[test]
    fn test_entering_results_marks_gauges() {
        let mut session = Session::new();
        assert!(!session.take_gauge_animation());
        session.go_to_screen(Screen::Results);
        assert!(session.take_gauge_animation());
        // marker is consumed
        assert!(!session.take_gauge_animation());
    }

    #[test]
    fn test_entering_simulator_refreshes_preview() {
        let mut session = Session::new();
        assert!(session.simulator_preview().is_none());
        session.go_to_screen(Screen::Simulator);
        assert_eq!(
            session.simulator_preview().copied().unwrap(),
            SimulatorBaseline::default()
        );
    }

    #[test]
    fn test_scored_result_pauses_for_gender_confirmation() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();

        let resolution = session.apply_analysis(scored_outcome(&session));
        assert_eq!(resolution, AnalysisResolution::AwaitingGenderConfirmation);
        assert_eq!(session.current_screen(), Screen::Analysis);
        assert!(session.pending_gender_confirmation().is_some());
        assert!(session.human_detected());
        assert!(session.report().is_some());
        assert!(session.landmarks().is_some());
    }

    #[test]
    fn test_confirm_gender_explicit_choice_wins() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session.apply_analysis(scored_outcome(&session));

        let resolved = session.confirm_gender(Some(Gender::Female));
        assert_eq!(resolved, Gender::Female);
        assert_eq!(session.gender(), Some(Gender::Female));
        assert_eq!(session.current_screen(), Screen::Results);
        assert!(session.pending_gender_confirmation().is_none());
    }

    #[test]
    fn test_confirm_gender_falls_back_to_estimate_then_male() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session.apply_analysis(scored_outcome(&session));

        // standing fixture reads male
        let estimated = session.pending_gender_confirmation().unwrap().gender;
        let resolved = session.confirm_gender(None);
        assert_eq!(resolved, estimated);

        let mut bare = Session::new();
        assert_eq!(bare.confirm_gender(None), Gender::Male);
    }

    #[test]
    fn test_estimated_result_skips_confirmation() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();

        let report = physiq_intelligence::scoring::BodyAnalyzer::new().estimated_report();
        let resolution = session.apply_analysis(PipelineOutcome::Estimated { report });
        assert_eq!(resolution, AnalysisResolution::Completed);
        assert_eq!(session.current_screen(), Screen::Results);
        assert!(session.pending_gender_confirmation().is_none());
        assert!(!session.human_detected());
        assert!(session.report().unwrap().estimated);
        assert!(session.take_gauge_animation());
    }

    #[test]
    fn test_no_human_raises_alert_and_resets() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();

        let resolution = session.apply_analysis(PipelineOutcome::NoHuman);
        assert_eq!(resolution, AnalysisResolution::NoHumanDetected);
        assert_eq!(session.current_screen(), Screen::Upload);

        let alert = session.take_alert().unwrap();
        assert!(alert.contains("No Human Body Detected"));
        assert!(alert.contains("FULL BODY"));

        // the photo goes, the form survives
        assert!(session.image().is_none());
        assert!(session.bmi().is_some());
        assert_eq!(session.fitness_goal(), Some(FitnessGoal::BuildMuscle));
        assert_eq!(session.upload_blocker(), Some(UploadBlocker::NoImage));
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        let outcome = scored_outcome(&session);

        // user wandered off mid-analysis
        session.go_to_screen(Screen::Workout);
        assert_eq!(
            session.apply_analysis(outcome),
            AnalysisResolution::Discarded
        );
        assert!(session.report().is_none());
        assert_eq!(session.current_screen(), Screen::Workout);

        // no-human is also inert past Results
        assert_eq!(
            session.apply_analysis(PipelineOutcome::NoHuman),
            AnalysisResolution::Discarded
        );
        assert!(session.take_alert().is_none());
    }

    #[test]
    fn test_new_photo_invalidates_previous_analysis() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session.apply_analysis(scored_outcome(&session));
        session.confirm_gender(None);
        assert!(session.report().is_some());

        session.attach_image(test_image());
        assert!(session.report().is_none());
        assert!(session.landmarks().is_none());
        assert!(!session.human_detected());
    }

    #[test]
    fn test_capture_failure_falls_back_to_upload_mode() {
        let mut session = Session::new();
        session.set_input_mode(InputMode::Camera);

        let failure = session.report_capture_failure("NotAllowedError");
        assert_eq!(failure, CaptureFailure::PermissionDenied);
        assert_eq!(session.input_mode(), InputMode::Upload);
        assert!(session.take_alert().unwrap().contains("Camera access was denied"));
    }

    #[tokio::test]
    async fn test_run_analysis_end_to_end() {
        let mut session = ready_session();
        let detector = FixtureDetector::standing();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let resolution = session.run_analysis(&detector, &mut rng).await.unwrap();
        assert_eq!(resolution, AnalysisResolution::AwaitingGenderConfirmation);

        session.confirm_gender(None);
        assert_eq!(session.current_screen(), Screen::Results);
        let report = session.report().unwrap();
        assert!(!report.estimated);
        assert!(report.is_high_confidence());
    }

    #[tokio::test]
    async fn test_run_analysis_detector_failure_lands_on_results() {
        let mut session = ready_session();
        let detector = FixtureDetector::failing("model never loaded");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let resolution = session.run_analysis(&detector, &mut rng).await.unwrap();
        assert_eq!(resolution, AnalysisResolution::Completed);
        assert_eq!(session.current_screen(), Screen::Results);
        assert!(session.report().unwrap().estimated);
    }

    #[test]
    fn test_projection_uses_configured_tables() {
        let config = EngineConfig::default();
        let session = Session::new();

        let projection =
            session.projection(&config, Scenario::Active, TimelineHorizon::SixMonths);
        // no report: configured baseline, six-month factor lands on the target
        assert!((projection.fitness_index - 8.1).abs() < f64::EPSILON);
        assert!((projection.muscle_score - 78.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projection_prefers_scored_report() {
        let config = EngineConfig::default();
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session.apply_analysis(scored_outcome(&session));

        let report_baseline = session.simulator_baseline();
        assert_ne!(report_baseline, SimulatorBaseline::default());

        let projection =
            session.projection(&config, Scenario::Intensive, TimelineHorizon::OneMonth);
        let expected = ProjectionSimulator::project(
            Scenario::Intensive,
            &report_baseline,
            TimelineHorizon::OneMonth,
        );
        assert_eq!(projection.muscle_score, expected.muscle_score);
    }

    #[test]
    fn test_nutrition_targets_need_measurements_and_goal() {
        let mut session = Session::new();
        assert!(session.nutrition_targets(ActivityLevel::Moderate).is_none());
        assert!(session.daily_targets(DietType::Standard).is_none());

        session
            .set_measurements(Measurements {
                height_cm: 180.0,
                weight_kg: 80.0,
            })
            .unwrap();
        session.select_goal(FitnessGoal::BuildMuscle);

        let targets = session.nutrition_targets(ActivityLevel::Moderate).unwrap();
        assert!(targets.calories > 0.0);
        assert!(session.daily_targets(DietType::Standard).is_some());
    }

    #[test]
    fn test_meal_plan_overrides_follow_session() {
        let config = EngineConfig::default();
        let mut session = Session::new();
        session.select_goal(FitnessGoal::LoseWeight);
        session.confirm_gender(Some(Gender::Female));

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let plan = session.daily_meal_plan(&config, &mut rng);
        // lose-weight maps to the fat-loss calorie table for women
        let expected = NutritionAdvisor::daily_targets(
            Gender::Female,
            physiq_core::models::NutritionGoal::FatLoss,
            config.meal_plan.diet,
        );
        assert!((plan.targets.calories - expected.calories).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_workout_uses_goal_and_level() {
        let mut session = ready_session();
        session.set_experience_level(ExperienceLevel::Beginner);

        let player = session.start_workout(Utc::now()).unwrap();
        let (position, total) = player.progress();
        assert_eq!(position, 1);
        assert_eq!(total, 6);
        assert_eq!(player.current_exercise().unwrap().name, "Push-ups");
        assert_eq!(player.current_exercise().unwrap().sets, 2);

        let bare = Session::new();
        assert!(bare.start_workout(Utc::now()).is_err());
    }

    #[test]
    fn test_weekly_routine_uses_configured_defaults() {
        let config = EngineConfig::default();
        let session = Session::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let plan = session.weekly_routine(&config, &mut rng);
        assert_eq!(plan.split, config.routine.split);
        assert_eq!(plan.goal, config.routine.goal);
        assert!(plan.training_days > 0);
    }

    #[test]
    fn test_screen_numbers_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_number(screen.number()), Some(screen));
        }
        assert_eq!(Screen::from_number(0), None);
        assert_eq!(Screen::from_number(8), None);
        assert_eq!(Screen::Upload.number(), 1);
        assert_eq!(Screen::Nutrition.number(), 7);
    }

    #[test]
    fn test_reset_preserves_form_state() {
        let mut session = ready_session();
        session.go_to_screen(Screen::Breakdown);
        session.reset();

        assert_eq!(session.current_screen(), Screen::Upload);
        assert!(session.image().is_none());
        assert!(session.measurements().is_some());
        assert!(session.bmi().is_some());
        assert!(session.fitness_goal().is_some());
    }
}
