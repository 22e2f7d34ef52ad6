//! Classification pipeline: fans normalized input out to the analyzers,
//! combines their votes, resolves variant and blends, and assembles the
//! final record. Synchronous and stateless per invocation; the codex is
//! the only shared state and is read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analyzers::{intensity, keyword, metaphor, CategoryVote, SymbolicAnnotation};
use crate::context::{cultural, tone, CulturalReading, ToneReading};
use crate::error::CodexError;
use crate::taxonomy::{Category, EmotionCodex, Variant};

/// Combined confidence at or below this is treated as no match, so
/// noise-level candidates are never reported as classifications.
pub const CONFIDENCE_FLOOR: f32 = 0.1;

/// The assembled output of one pipeline invocation. Immutable once
/// produced; the storage boundary takes a converted copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub variant: Option<Variant>,
    pub confidence: f32,
    pub intensity: f32,
    /// How many analyzer votes backed the primary category.
    pub match_count: usize,
    /// Blend categories with keyword evidence in the input.
    pub blended_with: Vec<String>,
    pub symbolic: SymbolicAnnotation,
    pub cultural: CulturalReading,
    pub tone: ToneReading,
}

/// Classified-or-not, kept distinct from real errors: unrecognized input
/// is an expected outcome, and a low-confidence match is not the same
/// thing as no match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassificationOutcome {
    Match(Box<ClassificationResult>),
    NoMatch,
}

impl ClassificationOutcome {
    pub fn as_match(&self) -> Option<&ClassificationResult> {
        match self {
            Self::Match(result) => Some(result),
            Self::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Shape persisted by the surrounding storage layer. Intensity and
/// confidence use the 0..100 integer encoding at this boundary; this
/// conversion lives here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredClassification {
    pub primary_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub reference_code: String,
    pub intensity: u8,
    pub confidence: u8,
    pub blended_with: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbolic_reference: Option<String>,
    pub cultural_tag: String,
    pub tone_tag: String,
    pub timestamp: DateTime<Utc>,
}

fn to_percent(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u8
}

impl ClassificationResult {
    /// Convert to the storage shape, minting a reference code and
    /// timestamp for the persisted copy.
    pub fn to_stored(&self) -> StoredClassification {
        let reference_code = format!(
            "EMO-{}",
            &Uuid::new_v4().simple().to_string()[..8].to_uppercase()
        );
        StoredClassification {
            primary_category: self.category.code.clone(),
            variant: self.variant.as_ref().map(|v| v.code.clone()),
            reference_code,
            intensity: to_percent(self.intensity),
            confidence: to_percent(self.confidence),
            blended_with: self.blended_with.clone(),
            symbolic_reference: if self.symbolic.archetype == "Unknown" {
                None
            } else {
                Some(self.symbolic.archetype.clone())
            },
            cultural_tag: self.cultural.tag.clone(),
            tone_tag: self.tone.tag.clone(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug)]
struct CombinedVote {
    code: String,
    confidence: f32,
    intensity: f32,
    matches: usize,
}

/// Group votes by category: confidences accumulate by summation (capped
/// at 1.0), intensities merge as a running average.
fn combine(votes: Vec<CategoryVote>) -> Vec<CombinedVote> {
    let mut merged: HashMap<String, CombinedVote> = HashMap::new();
    for vote in votes {
        match merged.get_mut(&vote.code) {
            Some(existing) => {
                existing.confidence = (existing.confidence + vote.confidence).min(1.0);
                let n = existing.matches as f32;
                existing.intensity = (existing.intensity * n + vote.intensity) / (n + 1.0);
                existing.matches += 1;
            }
            None => {
                merged.insert(
                    vote.code.clone(),
                    CombinedVote {
                        code: vote.code,
                        confidence: vote.confidence,
                        intensity: vote.intensity,
                        matches: 1,
                    },
                );
            }
        }
    }
    let mut combined: Vec<CombinedVote> = merged.into_values().collect();
    combined.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.code.cmp(&b.code))
    });
    combined
}

/// Prefer the variant whose range contains the intensity AND whose name
/// appears literally in the input; fall back to range containment alone.
fn resolve_variant(category: &Category, intensity: f32, input: &str) -> Option<Variant> {
    let in_range: Vec<&Variant> = category
        .variants
        .iter()
        .filter(|v| v.range.contains(intensity))
        .collect();
    in_range
        .iter()
        .find(|v| input.contains(v.name.to_lowercase().as_str()))
        .or_else(|| in_range.first())
        .map(|v| (*v).clone())
}

/// Presence-of-evidence blending: a blend partner is reported when any
/// of its own trigger words appear in the input. Not a second
/// classification pass.
fn detect_blends(primary: &Category, categories: &[Category], input: &str) -> Vec<String> {
    primary
        .blends_with
        .iter()
        .filter(|code| {
            categories
                .iter()
                .find(|c| &c.code == *code)
                .map(|c| crate::analyzers::scorer::hit_count(input, &c.triggers) > 0)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Facade over the codex and the analyzers. Constructed explicitly and
/// passed by reference; there is no global instance.
pub struct Classifier {
    codex: EmotionCodex,
}

impl Classifier {
    pub fn new(codex: EmotionCodex) -> Self {
        Self { codex }
    }

    pub fn with_builtin() -> Self {
        Self::new(EmotionCodex::with_builtin())
    }

    pub fn codex(&self) -> &EmotionCodex {
        &self.codex
    }

    /// Read-only export of the taxonomy.
    pub fn list_categories(&self) -> Vec<Category> {
        self.codex.list()
    }

    /// Append path used by manual entry and integrations.
    pub fn register_category(&self, category: Category) -> Result<(), CodexError> {
        self.codex.register(category)
    }

    pub fn classify(&self, input: &str) -> Result<ClassificationOutcome, CodexError> {
        self.classify_with_context(input, None)
    }

    /// Full pipeline: normalize once, fan out to the analyzers, combine,
    /// resolve, annotate.
    pub fn classify_with_context(
        &self,
        input: &str,
        cultural_hint: Option<&str>,
    ) -> Result<ClassificationOutcome, CodexError> {
        if input.trim().is_empty() {
            return Err(CodexError::MalformedInput(
                "input is empty or whitespace".to_string(),
            ));
        }
        let normalized = input.to_lowercase();
        let categories = self.codex.list();

        let mut votes = keyword::analyze(&categories, &normalized);
        let (metaphor_votes, symbolic) = metaphor::analyze(&normalized);
        votes.extend(metaphor_votes);

        let global_intensity = intensity::estimate(&normalized);
        let cultural = cultural::detect(&normalized, cultural_hint, global_intensity);
        let tone = tone::classify(&normalized, global_intensity);

        let combined = combine(votes);
        debug!(candidates = combined.len(), global_intensity, "votes combined");

        let top = match combined.first() {
            Some(top) if top.confidence > CONFIDENCE_FLOOR => top,
            _ => {
                info!("no category cleared the confidence floor");
                return Ok(ClassificationOutcome::NoMatch);
            }
        };

        let category = self
            .codex
            .get(&top.code)
            .ok_or_else(|| CodexError::InvalidCategory {
                code: top.code.clone(),
                reason: "vote references unknown category".to_string(),
            })?;

        // Explicit amplifying language is never diluted by a quieter
        // analyzer estimate.
        let final_intensity = top.intensity.max(global_intensity);
        let variant = resolve_variant(&category, final_intensity, &normalized);
        let blended_with = detect_blends(&category, &categories, &normalized);

        info!(
            code = %category.code,
            confidence = top.confidence,
            intensity = final_intensity,
            "classified"
        );

        Ok(ClassificationOutcome::Match(Box::new(ClassificationResult {
            confidence: top.confidence,
            intensity: final_intensity,
            match_count: top.matches,
            category,
            variant,
            blended_with,
            symbolic,
            cultural,
            tone,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{IntensityMarkers, IntensityRange};

    fn vote(code: &str, confidence: f32, intensity: f32) -> CategoryVote {
        CategoryVote {
            code: code.to_string(),
            confidence,
            intensity,
        }
    }

    #[test]
    fn test_combine_sums_confidence_and_averages_intensity() {
        let combined = combine(vec![vote("JOY", 0.3, 0.4), vote("JOY", 0.4, 0.8)]);
        assert_eq!(combined.len(), 1);
        assert!((combined[0].confidence - 0.7).abs() < 1e-6);
        assert!((combined[0].intensity - 0.6).abs() < 1e-6);
        assert_eq!(combined[0].matches, 2);
    }

    #[test]
    fn test_combine_caps_confidence() {
        let combined = combine(vec![vote("JOY", 0.8, 0.5), vote("JOY", 0.8, 0.5)]);
        assert_eq!(combined[0].confidence, 1.0);
    }

    #[test]
    fn test_combine_sorts_descending() {
        let combined = combine(vec![vote("A", 0.2, 0.5), vote("B", 0.9, 0.5)]);
        assert_eq!(combined[0].code, "B");
    }

    #[test]
    fn test_variant_disjoint_ranges_resolve_by_intensity() {
        let category = Category {
            code: "TEST".to_string(),
            name: "Test".to_string(),
            definition: String::new(),
            range: IntensityRange::new(0.0, 1.0),
            triggers: vec![],
            markers: IntensityMarkers::default(),
            blends_with: vec![],
            variants: vec![
                Variant::new("T-001", "Low", "", IntensityRange::new(0.1, 0.4)),
                Variant::new("T-002", "High", "", IntensityRange::new(0.6, 0.9)),
            ],
        };
        let resolved = resolve_variant(&category, 0.7, "no variant names here").unwrap();
        assert_eq!(resolved.code, "T-002");
    }

    #[test]
    fn test_variant_name_in_input_preferred() {
        let category = Category {
            code: "TEST".to_string(),
            name: "Test".to_string(),
            definition: String::new(),
            range: IntensityRange::new(0.0, 1.0),
            triggers: vec![],
            markers: IntensityMarkers::default(),
            blends_with: vec![],
            variants: vec![
                Variant::new("T-001", "Ache", "", IntensityRange::new(0.0, 1.0)),
                Variant::new("T-002", "Pang", "", IntensityRange::new(0.0, 1.0)),
            ],
        };
        let resolved = resolve_variant(&category, 0.5, "a sudden pang of it").unwrap();
        assert_eq!(resolved.code, "T-002");
    }

    #[test]
    fn test_variant_none_when_no_range_contains() {
        let category = Category {
            code: "TEST".to_string(),
            name: "Test".to_string(),
            definition: String::new(),
            range: IntensityRange::new(0.0, 1.0),
            triggers: vec![],
            markers: IntensityMarkers::default(),
            blends_with: vec![],
            variants: vec![Variant::new("T-001", "Low", "", IntensityRange::new(0.0, 0.2))],
        };
        assert!(resolve_variant(&category, 0.9, "whatever").is_none());
    }

    #[test]
    fn test_percent_conversion_bounds() {
        assert_eq!(to_percent(-0.5), 0);
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.654), 65);
        assert_eq!(to_percent(1.7), 100);
    }
}
