//! Keyword Analyzer
//!
//! Votes for every category whose trigger keywords occur in the input.

use tracing::debug;

use super::scorer::{hit_count, matched_keywords, weighted_score};
use super::CategoryVote;
use crate::taxonomy::Category;

/// Scale applied to the matched/total trigger ratio, so a single trigger
/// hit in a ten-word table still clears the combiner's noise floor.
const TRIGGER_WEIGHT: f32 = 2.0;

/// Band midpoints used when a marker word pins the intensity.
const HIGH_BAND_MID: f32 = 0.85;
const MEDIUM_BAND_MID: f32 = 0.5;
const LOW_BAND_MID: f32 = 0.2;

/// Intensity when no marker band matches.
const DEFAULT_INTENSITY: f32 = 0.5;

/// One vote per category with at least one trigger hit. Categories with
/// empty trigger tables never appear (the scorer guards the divisor).
pub fn analyze(categories: &[Category], input: &str) -> Vec<CategoryVote> {
    let mut votes = Vec::new();
    for cat in categories {
        let matched = matched_keywords(input, &cat.triggers);
        if matched.is_empty() {
            continue;
        }
        let confidence = weighted_score(matched.len(), cat.triggers.len(), TRIGGER_WEIGHT);
        if confidence <= 0.0 {
            continue;
        }
        let intensity = marker_intensity(cat, input);
        debug!(
            code = %cat.code,
            hits = matched.len(),
            confidence,
            "keyword trigger match"
        );
        votes.push(CategoryVote {
            code: cat.code.clone(),
            confidence,
            intensity,
        });
    }
    votes
}

/// Midpoint of the marker band whose words matched. The high band is
/// checked first so overlapping matches favor the higher intensity.
fn marker_intensity(cat: &Category, input: &str) -> f32 {
    if hit_count(input, &cat.markers.high) > 0 {
        HIGH_BAND_MID
    } else if hit_count(input, &cat.markers.medium) > 0 {
        MEDIUM_BAND_MID
    } else if hit_count(input, &cat.markers.low) > 0 {
        LOW_BAND_MID
    } else {
        DEFAULT_INTENSITY
    }
}
