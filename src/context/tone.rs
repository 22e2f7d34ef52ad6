//! Tone classifier.
//!
//! Primary tone by first-match-wins keyword tables, secondary labels by
//! a second pass over a shorter hedging/indirectness table, and an
//! additive tone-risk score from an explicit rule list.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzers::scorer::{first_match_label, hit_count};

/// Tone reported when no table matches.
pub const NEUTRAL: &str = "neutral";

/// Auxiliary tone annotation attached to a classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneReading {
    pub tag: String,
    /// Secondary labels from the hedging/indirectness pass.
    pub secondary: Vec<String>,
    /// Additive risk from the rule list, clamped to [0, 1].
    pub risk: f32,
}

fn table(label: &str, keywords: &[&str]) -> (String, Vec<String>) {
    (
        label.to_string(),
        keywords.iter().map(|k| k.to_string()).collect(),
    )
}

lazy_static! {
    /// Primary tone tables. Order matters: distress outranks urgency,
    /// urgency outranks register.
    static ref TONE_TABLES: Vec<(String, Vec<String>)> = vec![
        table("distressed", &[
            "help me", "can't cope", "can't take", "desperate", "unbearable", "breaking point",
        ]),
        table("urgent", &[
            "right now", "immediately", "urgent", "asap", "can't wait", "need this today",
        ]),
        table("formal", &[
            "i would like to", "i wish to express", "respectfully", "kind regards",
        ]),
        table("casual", &[
            "lol", "kinda", "tbh", "y'know", "whatever", "no biggie",
        ]),
        table("reflective", &[
            "i've been thinking", "looking back", "i realize", "i wonder", "in hindsight",
        ]),
    ];

    /// Shorter hedging/indirectness tables for the secondary pass.
    static ref HEDGING_TABLES: Vec<(String, Vec<String>)> = vec![
        table("hedging", &[
            "maybe", "perhaps", "i guess", "i suppose", "not sure", "possibly",
        ]),
        table("indirect", &[
            "it's nothing", "never mind", "forget it", "doesn't matter", "it's fine, really",
        ]),
    ];

    static ref REPEATED_EXCLAIM: Regex = Regex::new(r"!{2,}").expect("static regex");
    static ref TRAILING_OFF: Regex = Regex::new(r"\.{3}").expect("static regex");
}

/// A single tone-risk rule: independent and additive.
struct ToneRule {
    name: &'static str,
    delta: f32,
    applies: fn(&ToneEvidence) -> bool,
}

struct ToneEvidence<'a> {
    tag: &'a str,
    secondary: &'a [String],
    input: &'a str,
    intensity: f32,
}

const TONE_RULES: &[ToneRule] = &[
    ToneRule {
        name: "distressed-tone",
        delta: 0.3,
        applies: |e| e.tag == "distressed",
    },
    ToneRule {
        name: "urgent-tone",
        delta: 0.2,
        applies: |e| e.tag == "urgent",
    },
    ToneRule {
        name: "repeated-exclamation",
        delta: 0.15,
        applies: |e| REPEATED_EXCLAIM.is_match(e.input),
    },
    ToneRule {
        name: "trailing-off",
        delta: 0.1,
        applies: |e| TRAILING_OFF.is_match(e.input),
    },
    ToneRule {
        name: "indirect-minimizing",
        delta: 0.15,
        applies: |e| e.secondary.iter().any(|s| s == "indirect"),
    },
    ToneRule {
        name: "high-intensity",
        delta: 0.15,
        applies: |e| e.intensity > 0.75,
    },
];

/// Names of the rules in the risk list, for inspection.
pub fn tone_rule_names() -> Vec<&'static str> {
    TONE_RULES.iter().map(|r| r.name).collect()
}

/// Classify the tone of normalized input. Pure function of the input,
/// the static tables, and the global intensity estimate.
pub fn classify(input: &str, intensity: f32) -> ToneReading {
    let tag = first_match_label(input, &TONE_TABLES)
        .unwrap_or(NEUTRAL)
        .to_string();

    let secondary: Vec<String> = HEDGING_TABLES
        .iter()
        .filter(|(_, keywords)| hit_count(input, keywords) > 0)
        .map(|(label, _)| label.clone())
        .collect();

    let evidence = ToneEvidence {
        tag: &tag,
        secondary: &secondary,
        input,
        intensity,
    };
    let risk = TONE_RULES
        .iter()
        .filter(|rule| (rule.applies)(&evidence))
        .map(|rule| rule.delta)
        .sum::<f32>()
        .clamp(0.0, 1.0);

    ToneReading {
        tag,
        secondary,
        risk,
    }
}
