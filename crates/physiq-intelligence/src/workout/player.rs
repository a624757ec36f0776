// ABOUTME: Guided workout player: a tick-driven phase machine over an exercise roster
// ABOUTME: GetReady -> Exercise -> Rest cycles per set, advancing through exercises to Complete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Countdown before the first set of each exercise
const GET_READY_SECONDS: u32 = 5;

/// Working duration of one set
const EXERCISE_SECONDS: u32 = 45;

/// Rotating encouragement lines shown during a session
pub const MOTIVATIONAL_MESSAGES: [&str; 10] = [
    "Push through! You're doing great!",
    "Feel the burn! It means it's working!",
    "You're stronger than you think!",
    "One rep at a time. You've got this!",
    "Champions are made in moments like this!",
    "Your future self will thank you!",
    "Pain is temporary, pride is forever!",
    "Every rep counts. Make it count!",
    "You didn't come this far to only come this far!",
    "Beast mode: ACTIVATED!",
];

/// Where an exercise is performed; drives the roster filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    /// Bodyweight or minimal equipment
    #[default]
    Home,
    /// Requires gym equipment
    Gym,
}

/// One roster entry the player runs through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerExercise {
    /// Exercise name
    pub name: String,
    /// Muscle-target tags shown under the name
    pub targets: Vec<String>,
    /// Sets to complete
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Rest between sets, seconds
    pub rest_seconds: u32,
    /// Flagged as a weak-point focus area by the analysis
    pub is_weak_point: bool,
    /// Home or gym exercise
    pub location: WorkoutLocation,
}

impl PlayerExercise {
    /// A plain roster entry with no tags or flags
    #[must_use]
    pub fn new(name: &str, sets: u32, reps: u32, rest_seconds: u32) -> Self {
        Self {
            name: name.to_owned(),
            targets: Vec::new(),
            sets,
            reps,
            rest_seconds,
            is_weak_point: false,
            location: WorkoutLocation::default(),
        }
    }
}

/// Player phase; the timer counts down within each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerPhase {
    /// Countdown before a set block starts
    GetReady,
    /// Working phase of the current set
    Exercise,
    /// Rest between sets
    Rest,
    /// Session finished; controls are inert
    Complete,
}

impl PlayerPhase {
    /// Badge label for the phase
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GetReady => "GET READY",
            Self::Exercise => "EXERCISE",
            Self::Rest => "REST",
            Self::Complete => "COMPLETE",
        }
    }
}

/// Stats shown on the completion overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Exercises in the session roster
    pub exercise_count: usize,
    /// Total sets across the roster
    pub total_sets: u32,
    /// Wall-clock seconds from session start to completion, pauses included
    pub elapsed_seconds: u64,
}

impl WorkoutSummary {
    /// Elapsed time as "M:SS"
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        let minutes = self.elapsed_seconds / 60;
        let seconds = self.elapsed_seconds % 60;
        format!("{minutes}:{seconds:02}")
    }
}

/// Tick-driven guided session over an exercise roster
///
/// The caller owns the clock: one [`WorkoutPlayer::tick`] is one second.
/// Every automatic transition follows the same shape as the timer display
/// it drives: the phase timer counts down to zero, and the tick after zero
/// advances the phase. Manual controls (complete set, skip rest, add rep,
/// next/previous exercise) mirror the player buttons.
#[derive(Debug, Clone)]
pub struct WorkoutPlayer {
    exercises: Vec<PlayerExercise>,
    index: usize,
    current_set: u32,
    current_reps: u32,
    phase: PlayerPhase,
    timer_seconds: u32,
    playing: bool,
    started_at: DateTime<Utc>,
}

impl WorkoutPlayer {
    /// Open a session over a roster, paused on the first get-ready countdown
    ///
    /// # Errors
    ///
    /// Returns an error when the roster is empty; the panel keeps its
    /// current filter and asks the user to pick one with exercises.
    pub fn new(exercises: Vec<PlayerExercise>, started_at: DateTime<Utc>) -> AppResult<Self> {
        if exercises.is_empty() {
            return Err(AppError::invalid_input(
                "workout roster is empty; select a filter with exercises",
            ));
        }
        tracing::debug!(exercise_count = exercises.len(), "opened workout player");
        Ok(Self {
            exercises,
            index: 0,
            current_set: 1,
            current_reps: 0,
            phase: PlayerPhase::GetReady,
            timer_seconds: GET_READY_SECONDS,
            playing: false,
            started_at,
        })
    }

    /// Exercise currently on deck
    #[must_use]
    pub fn current_exercise(&self) -> Option<&PlayerExercise> {
        self.exercises.get(self.index)
    }

    /// Next exercise in the roster, if any
    #[must_use]
    pub fn up_next(&self) -> Option<&PlayerExercise> {
        self.exercises.get(self.index + 1)
    }

    /// (1-based position, roster length)
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.exercises.len())
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> PlayerPhase {
        self.phase
    }

    /// Seconds left on the phase timer
    #[must_use]
    pub const fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    /// Countdown as "MM:SS"
    #[must_use]
    pub fn timer_display(&self) -> String {
        let minutes = self.timer_seconds / 60;
        let seconds = self.timer_seconds % 60;
        format!("{minutes:02}:{seconds:02}")
    }

    /// Whether the timer is running
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the session has finished
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == PlayerPhase::Complete
    }

    /// Set in progress, 1-based
    #[must_use]
    pub const fn current_set(&self) -> u32 {
        self.current_set
    }

    /// Reps counted so far in the current set
    #[must_use]
    pub const fn current_reps(&self) -> u32 {
        self.current_reps
    }

    /// Estimated session length in minutes: sets x (work + rest) per exercise
    #[must_use]
    pub fn estimated_duration_minutes(&self) -> u32 {
        let total_seconds: u32 = self
            .exercises
            .iter()
            .map(|ex| ex.sets * (EXERCISE_SECONDS + ex.rest_seconds))
            .sum();
        (f64::from(total_seconds) / 60.0).round() as u32
    }

    /// Random encouragement line
    pub fn motivational_message<R: Rng>(rng: &mut R) -> &'static str {
        MOTIVATIONAL_MESSAGES
            .choose(rng)
            .copied()
            .unwrap_or("One rep at a time. You've got this!")
    }

    /// Start the timer; ignored once complete
    pub fn play(&mut self) {
        if !self.is_complete() {
            self.playing = true;
        }
    }

    /// Stop the timer
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip between playing and paused
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the clock by one second
    ///
    /// No-op while paused. The phase advances on the tick after the timer
    /// shows zero, so a 5-second countdown displays 5 through 0 before the
    /// next phase starts.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.timer_seconds > 0 {
            self.timer_seconds -= 1;
        } else {
            self.advance_phase();
        }
    }

    /// Mark every rep of the current set done and move on
    pub fn complete_set(&mut self) {
        if self.is_complete() {
            return;
        }
        let Some(reps) = self.current_exercise().map(|ex| ex.reps) else {
            return;
        };
        self.pause();
        self.current_reps = reps;
        self.finish_set();
    }

    /// Skip the rest countdown and start the next set immediately
    pub fn skip_rest(&mut self) {
        if self.phase != PlayerPhase::Rest {
            return;
        }
        self.pause();
        self.begin_next_set();
    }

    /// Count one rep; completing the target finishes the set
    pub fn add_rep(&mut self) {
        if self.is_complete() {
            return;
        }
        let Some(target) = self.current_exercise().map(|ex| ex.reps) else {
            return;
        };
        if self.current_reps < target {
            self.current_reps += 1;
            if self.current_reps >= target {
                self.complete_set();
            }
        }
    }

    /// Jump to the next exercise, or complete the session from the last one
    pub fn next_exercise(&mut self) {
        if self.is_complete() {
            return;
        }
        if self.index < self.exercises.len() - 1 {
            self.index += 1;
            self.reset_for_exercise();
            self.play();
        } else {
            self.complete_session();
        }
    }

    /// Step back to the previous exercise, paused on its countdown
    pub fn previous_exercise(&mut self) {
        if self.is_complete() || self.index == 0 {
            return;
        }
        self.pause();
        self.index -= 1;
        self.reset_for_exercise();
    }

    /// Completion stats; meaningful once the session is complete
    #[must_use]
    pub fn summary(&self, finished_at: DateTime<Utc>) -> WorkoutSummary {
        let elapsed = (finished_at - self.started_at).num_seconds().max(0) as u64;
        WorkoutSummary {
            exercise_count: self.exercises.len(),
            total_sets: self.exercises.iter().map(|ex| ex.sets).sum(),
            elapsed_seconds: elapsed,
        }
    }

    fn advance_phase(&mut self) {
        self.pause();
        match self.phase {
            PlayerPhase::GetReady => {
                self.current_reps = 0;
                self.set_phase(PlayerPhase::Exercise, EXERCISE_SECONDS);
                self.play();
            }
            PlayerPhase::Exercise => self.finish_set(),
            PlayerPhase::Rest => self.begin_next_set(),
            PlayerPhase::Complete => {}
        }
    }

    /// Route a finished set to its rest break or the next exercise
    fn finish_set(&mut self) {
        let Some((sets, rest)) = self
            .current_exercise()
            .map(|ex| (ex.sets, ex.rest_seconds))
        else {
            return;
        };
        if self.current_set < sets {
            self.set_phase(PlayerPhase::Rest, rest);
            self.play();
        } else {
            self.next_exercise();
        }
    }

    fn begin_next_set(&mut self) {
        self.current_set += 1;
        self.current_reps = 0;
        self.set_phase(PlayerPhase::Exercise, EXERCISE_SECONDS);
        self.play();
    }

    fn reset_for_exercise(&mut self) {
        self.current_set = 1;
        self.current_reps = 0;
        self.set_phase(PlayerPhase::GetReady, GET_READY_SECONDS);
    }

    fn set_phase(&mut self, phase: PlayerPhase, duration: u32) {
        tracing::debug!(phase = phase.label(), duration, "player phase change");
        self.phase = phase;
        self.timer_seconds = duration;
    }

    fn complete_session(&mut self) {
        self.pause();
        self.phase = PlayerPhase::Complete;
        self.timer_seconds = 0;
        tracing::debug!(
            exercise_count = self.exercises.len(),
            "workout session complete"
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster() -> Vec<PlayerExercise> {
        vec![
            PlayerExercise::new("Push-Ups", 2, 3, 60),
            PlayerExercise::new("Squats", 2, 5, 90),
        ]
    }

    fn open_player() -> WorkoutPlayer {
        WorkoutPlayer::new(roster(), Utc::now()).unwrap()
    }

    /// Run ticks until the current phase's timer elapses and advances
    fn run_phase(player: &mut WorkoutPlayer) {
        let limit = player.timer_seconds() + 1;
        for _ in 0..limit {
            player.tick();
        }
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(WorkoutPlayer::new(Vec::new(), Utc::now()).is_err());
    }

    #[test]
    fn test_opens_paused_on_countdown() {
        let player = open_player();
        assert_eq!(player.phase(), PlayerPhase::GetReady);
        assert_eq!(player.timer_seconds(), 5);
        assert!(!player.is_playing());
        assert_eq!(player.current_set(), 1);
        assert_eq!(player.current_reps(), 0);
        assert_eq!(player.progress(), (1, 2));
        assert_eq!(player.up_next().unwrap().name, "Squats");
    }

    #[test]
    fn test_tick_is_inert_while_paused() {
        let mut player = open_player();
        player.tick();
        player.tick();
        assert_eq!(player.timer_seconds(), 5);
    }

    #[test]
    fn test_countdown_rolls_into_exercise() {
        let mut player = open_player();
        player.play();
        // five decrements reach zero; the next tick advances
        for _ in 0..5 {
            player.tick();
        }
        assert_eq!(player.timer_seconds(), 0);
        assert_eq!(player.phase(), PlayerPhase::GetReady);
        player.tick();
        assert_eq!(player.phase(), PlayerPhase::Exercise);
        assert_eq!(player.timer_seconds(), 45);
        assert!(player.is_playing());
    }

    #[test]
    fn test_exercise_timer_leads_to_rest_between_sets() {
        let mut player = open_player();
        player.play();
        run_phase(&mut player); // get-ready
        run_phase(&mut player); // exercise set 1
        assert_eq!(player.phase(), PlayerPhase::Rest);
        assert_eq!(player.timer_seconds(), 60);
        assert!(player.is_playing());
        assert_eq!(player.current_set(), 1);
    }

    #[test]
    fn test_rest_starts_next_set() {
        let mut player = open_player();
        player.play();
        run_phase(&mut player); // get-ready
        run_phase(&mut player); // exercise set 1
        run_phase(&mut player); // rest
        assert_eq!(player.phase(), PlayerPhase::Exercise);
        assert_eq!(player.current_set(), 2);
        assert_eq!(player.current_reps(), 0);
    }

    #[test]
    fn test_last_set_advances_to_next_exercise() {
        let mut player = open_player();
        player.play();
        run_phase(&mut player); // get-ready
        player.complete_set(); // set 1 -> rest
        player.skip_rest(); // -> set 2
        player.complete_set(); // last set -> next exercise
        assert_eq!(player.progress(), (2, 2));
        assert_eq!(player.phase(), PlayerPhase::GetReady);
        assert!(player.is_playing());
        assert_eq!(player.current_exercise().unwrap().name, "Squats");
    }

    #[test]
    fn test_add_rep_completes_set_at_target() {
        let mut player = open_player();
        player.play();
        run_phase(&mut player); // into exercise phase
        player.add_rep();
        player.add_rep();
        assert_eq!(player.current_reps(), 2);
        assert_eq!(player.phase(), PlayerPhase::Exercise);
        player.add_rep(); // hits the 3-rep target
        assert_eq!(player.phase(), PlayerPhase::Rest);
        assert_eq!(player.current_reps(), 3);
    }

    #[test]
    fn test_skip_rest_only_applies_during_rest() {
        let mut player = open_player();
        player.skip_rest();
        assert_eq!(player.phase(), PlayerPhase::GetReady);
        assert_eq!(player.current_set(), 1);
    }

    #[test]
    fn test_previous_exercise_rewinds_paused() {
        let mut player = open_player();
        player.next_exercise();
        assert_eq!(player.progress(), (2, 2));
        assert!(player.is_playing());
        player.previous_exercise();
        assert_eq!(player.progress(), (1, 2));
        assert_eq!(player.phase(), PlayerPhase::GetReady);
        assert!(!player.is_playing());
        // at the first exercise, previous is a no-op
        player.previous_exercise();
        assert_eq!(player.progress(), (1, 2));
    }

    #[test]
    fn test_completing_final_exercise_ends_session() {
        let mut player = open_player();
        player.next_exercise(); // to Squats
        player.complete_set(); // set 1 -> rest
        player.skip_rest();
        player.complete_set(); // final set
        assert!(player.is_complete());
        assert!(!player.is_playing());
        // controls are inert after completion
        player.play();
        player.add_rep();
        assert!(!player.is_playing());
        assert_eq!(player.phase(), PlayerPhase::Complete);
    }

    #[test]
    fn test_summary_counts_and_elapsed() {
        let started = Utc::now();
        let player = WorkoutPlayer::new(roster(), started).unwrap();
        let summary = player.summary(started + Duration::seconds(125));
        assert_eq!(summary.exercise_count, 2);
        assert_eq!(summary.total_sets, 4);
        assert_eq!(summary.elapsed_seconds, 125);
        assert_eq!(summary.elapsed_display(), "2:05");
    }

    #[test]
    fn test_estimated_duration() {
        // 2x(45+60) + 2x(45+90) = 210 + 270 = 480s -> 8 minutes
        let player = open_player();
        assert_eq!(player.estimated_duration_minutes(), 8);
    }

    #[test]
    fn test_motivational_message_in_rotation() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..20 {
            let message = WorkoutPlayer::motivational_message(&mut rng);
            assert!(MOTIVATIONAL_MESSAGES.contains(&message));
        }
    }

    #[test]
    fn test_timer_display_padding() {
        let mut player = open_player();
        assert_eq!(player.timer_display(), "00:05");
        player.play();
        run_phase(&mut player); // get-ready elapses
        player.complete_set(); // -> rest at 60s
        assert_eq!(player.timer_display(), "01:00");
    }
}
