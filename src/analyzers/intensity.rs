//! Intensity Estimator
//!
//! Global intensity estimate from modifier words: amplifiers push a 0.5
//! baseline up, diminishers pull it down, result clamped to [0, 1].
//! Category-independent; the combiner takes the max of this and each
//! analyzer's local estimate, so explicit amplifying language is never
//! diluted by a quieter table-derived guess.

use lazy_static::lazy_static;

pub const BASELINE: f32 = 0.5;

lazy_static! {
    /// Modifier table: amplifiers carry positive deltas, diminishers
    /// negative. Multi-word diminishers ("a little") are matched as
    /// literal substrings like everything else.
    static ref MODIFIERS: Vec<(&'static str, f32)> = vec![
        ("overwhelming", 0.35),
        ("extremely", 0.3),
        ("incredibly", 0.3),
        ("utterly", 0.3),
        ("absolutely", 0.3),
        ("completely", 0.25),
        ("totally", 0.25),
        ("very", 0.2),
        ("deeply", 0.2),
        ("really", 0.15),
        ("barely", -0.25),
        ("slightly", -0.2),
        ("mildly", -0.2),
        ("faintly", -0.2),
        ("a little", -0.15),
        ("a bit", -0.15),
        ("somewhat", -0.15),
        ("kind of", -0.1),
        ("sort of", -0.1),
    ];
}

/// Sum all matched modifier deltas onto the baseline and clamp.
pub fn estimate(input: &str) -> f32 {
    let delta: f32 = MODIFIERS
        .iter()
        .filter(|(word, _)| input.contains(word))
        .map(|(_, delta)| delta)
        .sum();
    (BASELINE + delta).clamp(0.0, 1.0)
}
