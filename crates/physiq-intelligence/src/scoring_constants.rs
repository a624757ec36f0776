//! Hand-tuned constants behind the body-metrics scoring ladders
//!
//! These values were calibrated against normalized pose-model output, where
//! every coordinate lives in [0,1] relative to the image frame. Widths and
//! offsets are therefore dimensionless fractions of the frame, not
//! centimeters.

/// Posture scoring weights and label thresholds
pub mod posture {
    /// Penalty weight applied to the left/right shoulder height offset
    pub const SHOULDER_OFFSET_WEIGHT: f64 = 500.0;

    /// Penalty weight applied to the forward/backward head offset
    pub const HEAD_FORWARD_WEIGHT: f64 = 100.0;

    /// Posture score floor
    pub const MIN_SCORE: f64 = 40.0;

    /// Posture score ceiling
    pub const MAX_SCORE: f64 = 95.0;

    /// Shoulder offset below this reads as "Aligned"
    pub const ALIGNED_THRESHOLD: f64 = 0.02;

    /// Shoulder offset below this reads as "Slight Imbalance"
    pub const SLIGHT_IMBALANCE_THRESHOLD: f64 = 0.05;

    /// Head offset magnitude below this reads as a neutral spine
    pub const HEAD_NEUTRAL_THRESHOLD: f64 = 0.03;

    /// Hip offset below this reads as "Balanced"
    pub const HIP_BALANCED_THRESHOLD: f64 = 0.02;

    /// Scores under this trigger the posture-correction recommendation
    pub const CORRECTION_ADVICE_THRESHOLD: f64 = 70.0;
}

/// Left/right symmetry scoring weights
pub mod symmetry {
    /// Penalty weight applied to each of the shoulder and hip offsets
    pub const OFFSET_WEIGHT: f64 = 300.0;

    /// Symmetry score floor
    pub const MIN_SCORE: f64 = 50.0;

    /// Symmetry score ceiling
    pub const MAX_SCORE: f64 = 98.0;
}

/// Muscle-tone scoring weights and regional label thresholds
pub mod muscle {
    /// Share of the body-composition score feeding the muscle estimate
    pub const COMPOSITION_WEIGHT: f64 = 0.8;

    /// Cap on the composition contribution
    pub const COMPOSITION_CAP: f64 = 70.0;

    /// Weight of the mean landmark visibility (tracking quality proxy)
    pub const VISIBILITY_WEIGHT: f64 = 20.0;

    /// Hip/shoulder ratio under this counts as a V-taper for upper body
    pub const UPPER_TAPER_THRESHOLD: f64 = 0.9;

    /// Composition score needed for "Well Developed" upper body
    pub const UPPER_DEVELOPED_SCORE: f64 = 65.0;

    /// Composition score needed for "Moderate" upper body
    pub const UPPER_MODERATE_SCORE: f64 = 50.0;

    /// Composition score needed for a "Defined" core
    pub const CORE_DEFINED_SCORE: f64 = 70.0;

    /// Composition score needed for a "Moderate" core
    pub const CORE_MODERATE_SCORE: f64 = 50.0;

    /// Hip-width/body-height ratio under this reads as "Lean" legs
    pub const LOWER_LEAN_RATIO: f64 = 0.14;

    /// Hip-width/body-height ratio under this reads as "Moderate" legs
    pub const LOWER_MODERATE_RATIO: f64 = 0.18;
}

/// Lean-mass estimate ladder over the body-composition score
pub mod lean_mass {
    /// "High" floor
    pub const HIGH: f64 = 75.0;

    /// "Above Average" floor
    pub const ABOVE_AVERAGE: f64 = 60.0;

    /// "Average" floor
    pub const AVERAGE: f64 = 45.0;

    /// "Below Average" floor; anything under is "Low"
    pub const BELOW_AVERAGE: f64 = 30.0;
}

/// Overview derivations from the body-composition score
pub mod overview {
    /// Body-composition score to 0-10 fitness index
    pub const FITNESS_INDEX_SCALE: f64 = 0.1;

    /// Visual-age anchor for a score at the pivot
    pub const VISUAL_AGE_BASE: f64 = 30.0;

    /// Score pivot around which the visual age swings
    pub const VISUAL_AGE_PIVOT: f64 = 60.0;

    /// Years of visual age per score point away from the pivot
    pub const VISUAL_AGE_SLOPE: f64 = 0.3;
}

/// Body-zone label thresholds
pub mod zones {
    /// Shoulder offset under this reads as "Balanced"
    pub const SHOULDER_BALANCED: f64 = 0.02;

    /// Hip/shoulder ratio under this reads as a "V-Taper" chest
    pub const CHEST_V_TAPER: f64 = 0.9;

    /// Hip/shoulder ratio under this reads as a "Straight" chest
    pub const CHEST_STRAIGHT: f64 = 1.05;

    /// Composition score for a "Defined" core zone
    pub const CORE_DEFINED: f64 = 65.0;

    /// Composition score for a "Soft" core zone
    pub const CORE_SOFT: f64 = 45.0;

    /// Hip-width/body-height ratio for "Lean" legs
    pub const LEGS_LEAN: f64 = 0.15;

    /// Hip-width/body-height ratio for "Average" legs
    pub const LEGS_AVERAGE: f64 = 0.2;
}

/// Shoulder/hip ratio bands for gender inference
///
/// Skeleton joints sit wider at the shoulder than body contours do, so the
/// bands are shifted toward female defaults; the ambiguous middle resolves
/// to female with low confidence and the user can correct it afterwards.
pub mod gender {
    /// Above this ratio: male, high confidence
    pub const MALE_HIGH_RATIO: f64 = 1.25;

    /// Above this ratio: male, medium confidence
    pub const MALE_MEDIUM_RATIO: f64 = 1.18;

    /// Below this ratio: female, high confidence
    pub const FEMALE_HIGH_RATIO: f64 = 0.95;

    /// Below this ratio: female, medium confidence
    pub const FEMALE_MEDIUM_RATIO: f64 = 1.05;
}
