//! Metaphor/Symbol Analyzer
//!
//! Scans for figurative-language patterns. Each pattern carries an
//! archetype family, the categories it evokes, and a symbolic weight.
//! Produces both category votes and a standalone symbolic annotation.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryVote;

/// Extra ambiguity charged when matches span more than one archetype
/// family: the input is speaking in mixed symbols.
const CROSS_FAMILY_AMBIGUITY_BONUS: f32 = 0.15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaphorPattern {
    /// Literal substring looked for in the input.
    pub pattern: String,
    /// Archetype family this pattern belongs to.
    pub archetype: String,
    /// Category codes the pattern evokes. Many-to-many with categories.
    pub categories: Vec<String>,
    /// Symbolic weight in [0, 1], used as the confidence contribution.
    pub weight: f32,
}

impl MetaphorPattern {
    fn new(pattern: &str, archetype: &str, categories: &[&str], weight: f32) -> Self {
        Self {
            pattern: pattern.to_string(),
            archetype: archetype.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            weight,
        }
    }
}

/// Symbolic reading of the input, reported alongside the classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolicAnnotation {
    /// Archetype of the strongest matching pattern, or "Unknown".
    pub archetype: String,
    /// Deduplicated patterns that matched, strongest first.
    pub matched_patterns: Vec<String>,
    /// Sum of matched weights, plus a bonus for cross-family matches,
    /// capped at 1.0.
    pub ambiguity: f32,
    pub reasoning: String,
}

impl SymbolicAnnotation {
    fn none() -> Self {
        Self {
            archetype: "Unknown".to_string(),
            matched_patterns: Vec::new(),
            ambiguity: 0.0,
            reasoning: "No symbolic or metaphorical language detected.".to_string(),
        }
    }
}

lazy_static! {
    /// Canonical pattern table, sorted by weight descending so the first
    /// match in scan order is also the strongest.
    static ref PATTERNS: Vec<MetaphorPattern> = {
        let mut patterns = vec![
            MetaphorPattern::new("drowning", "Drowning/Survival", &["FEAR", "SADNESS"], 0.8),
            MetaphorPattern::new("sinking", "Drowning/Survival", &["SADNESS", "FEAR"], 0.7),
            MetaphorPattern::new("about to explode", "Eruption/Pressure", &["ANGER"], 0.8),
            MetaphorPattern::new("boiling over", "Eruption/Pressure", &["ANGER"], 0.75),
            MetaphorPattern::new("storm inside", "Storm/Chaos", &["ANGER", "FEAR"], 0.75),
            MetaphorPattern::new("shattered", "Breakage/Loss", &["SADNESS"], 0.75),
            MetaphorPattern::new("falling apart", "Breakage/Loss", &["SADNESS", "FEAR"], 0.7),
            MetaphorPattern::new("walking on air", "Flight/Ascension", &["JOY"], 0.7),
            MetaphorPattern::new("over the moon", "Flight/Ascension", &["JOY"], 0.7),
            MetaphorPattern::new("light at the end", "Light/Renewal", &["JOY"], 0.65),
            MetaphorPattern::new("empty inside", "Void/Emptiness", &["SADNESS"], 0.65),
            MetaphorPattern::new("hollowed out", "Void/Emptiness", &["SADNESS"], 0.6),
            MetaphorPattern::new("trapped", "Cage/Confinement", &["FEAR", "SADNESS"], 0.65),
            MetaphorPattern::new("caged", "Cage/Confinement", &["FEAR"], 0.6),
            MetaphorPattern::new("butterflies", "Flutter/Anticipation", &["LOVE", "FEAR"], 0.6),
            MetaphorPattern::new("weight on my shoulders", "Burden/Weight", &["SADNESS", "FEAR"], 0.7),
            MetaphorPattern::new("carrying the world", "Burden/Weight", &["SADNESS"], 0.65),
        ];
        patterns.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
        patterns
    };
}

/// Read-only view of the pattern table, mostly for tests and tooling.
pub fn patterns() -> &'static [MetaphorPattern] {
    &PATTERNS
}

/// Category votes plus the symbolic annotation. Zero matches is not an
/// error: the annotation degrades to "Unknown" with ambiguity 0.
pub fn analyze(input: &str) -> (Vec<CategoryVote>, SymbolicAnnotation) {
    let matched: Vec<&MetaphorPattern> = PATTERNS
        .iter()
        .filter(|p| input.contains(p.pattern.as_str()))
        .collect();

    if matched.is_empty() {
        return (Vec::new(), SymbolicAnnotation::none());
    }

    let mut votes = Vec::new();
    for pattern in &matched {
        for code in &pattern.categories {
            votes.push(CategoryVote {
                code: code.clone(),
                confidence: pattern.weight,
                intensity: pattern.weight,
            });
        }
    }

    let mut names: Vec<String> = Vec::new();
    for pattern in &matched {
        if !names.contains(&pattern.pattern) {
            names.push(pattern.pattern.clone());
        }
    }

    let mut families: Vec<&str> = Vec::new();
    for pattern in &matched {
        if !families.contains(&pattern.archetype.as_str()) {
            families.push(pattern.archetype.as_str());
        }
    }

    let mut ambiguity: f32 = matched.iter().map(|p| p.weight).sum::<f32>().min(1.0);
    let archetype = matched[0].archetype.clone();

    let reasoning = if families.len() > 1 {
        ambiguity = (ambiguity + CROSS_FAMILY_AMBIGUITY_BONUS).min(1.0);
        format!(
            "Symbolic language from {} distinct families ({}); interpretation is \
             more ambiguous than a single-theme expression (ambiguity {:.2}).",
            families.len(),
            families.join(", "),
            ambiguity
        )
    } else {
        format!(
            "Dominant symbolic theme '{}' via pattern(s): {}.",
            archetype,
            names.join(", ")
        )
    };

    debug!(archetype = %archetype, patterns = names.len(), ambiguity, "metaphor match");

    (
        votes,
        SymbolicAnnotation {
            archetype,
            matched_patterns: names,
            ambiguity,
            reasoning,
        },
    )
}
