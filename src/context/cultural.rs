//! Cultural-context detector.
//!
//! First-match-wins lookup over expression-style profiles, plus a
//! declarative guidance rule list. These are coarse contextual hints;
//! they never influence category selection.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::analyzers::scorer::first_match_label;

/// Label used when no profile keywords match and no hint is given.
pub const UNIVERSAL: &str = "Universal";
/// Hint value meaning "detect from the text".
pub const AUTO_DETECT: &str = "Auto-detect";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionStyle {
    Reserved,
    Expressive,
    Neutral,
}

/// Auxiliary cultural annotation attached to a classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalReading {
    pub tag: String,
    pub style: ExpressionStyle,
    /// Notes from every guidance rule that fired, in rule order.
    pub sensitivity_notes: Vec<String>,
    /// Additive risk from the rule list, clamped to [0, 1].
    pub risk: f32,
    pub recommended_response: String,
}

struct Profile {
    label: &'static str,
    style: ExpressionStyle,
}

lazy_static! {
    /// Profile keyword tables, scanned first-match-wins.
    static ref PROFILE_TABLES: Vec<(String, Vec<String>)> = vec![
        table("Reserved", &[
            "keep it to myself", "keep it in", "don't usually talk", "hard to say out loud",
            "stay composed", "not one to complain",
        ]),
        table("Expressive", &[
            "can't hold back", "wear my heart", "need to shout", "out loud", "let it all out",
        ]),
        table("Communal", &[
            "my family", "our community", "we all feel", "the whole village", "my elders",
        ]),
    ];

    static ref PROFILES: Vec<Profile> = vec![
        Profile { label: "Reserved", style: ExpressionStyle::Reserved },
        Profile { label: "Expressive", style: ExpressionStyle::Expressive },
        Profile { label: "Communal", style: ExpressionStyle::Neutral },
        Profile { label: UNIVERSAL, style: ExpressionStyle::Neutral },
    ];
}

fn table(label: &str, keywords: &[&str]) -> (String, Vec<String>) {
    (
        label.to_string(),
        keywords.iter().map(|k| k.to_string()).collect(),
    )
}

fn style_for(label: &str) -> ExpressionStyle {
    PROFILES
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
        .map(|p| p.style)
        .unwrap_or(ExpressionStyle::Neutral)
}

/// A single guidance rule: independent, additive, inspectable.
struct GuidanceRule {
    name: &'static str,
    delta: f32,
    note: &'static str,
    applies: fn(ExpressionStyle, f32, usize) -> bool,
}

/// The full rule list, in evaluation order. Each rule sees the detected
/// style, the global intensity, and the exclamation count.
const GUIDANCE_RULES: &[GuidanceRule] = &[
    GuidanceRule {
        name: "reserved-exclamation",
        delta: 0.2,
        note: "High-arousal punctuation inside a reserved profile suggests unusual distress.",
        applies: |style, _, exclamations| style == ExpressionStyle::Reserved && exclamations > 0,
    },
    GuidanceRule {
        name: "reserved-high-intensity",
        delta: 0.2,
        note: "A reserved speaker expressing high intensity may be understating further feeling.",
        applies: |style, intensity, _| style == ExpressionStyle::Reserved && intensity > 0.7,
    },
    GuidanceRule {
        name: "expressive-saturated",
        delta: 0.1,
        note: "An expressive profile at near-maximal intensity can mask the underlying baseline.",
        applies: |style, intensity, _| style == ExpressionStyle::Expressive && intensity > 0.85,
    },
    GuidanceRule {
        name: "general-high-intensity",
        delta: 0.1,
        note: "High overall intensity warrants a measured, validating response.",
        applies: |_, intensity, _| intensity > 0.8,
    },
];

/// Names of the rules in the guidance list, for inspection.
pub fn guidance_rule_names() -> Vec<&'static str> {
    GUIDANCE_RULES.iter().map(|r| r.name).collect()
}

/// Detect the cultural tag and derive guidance. A caller-supplied hint
/// (other than "Auto-detect") overrides detection.
pub fn detect(input: &str, hint: Option<&str>, intensity: f32) -> CulturalReading {
    let tag = match hint {
        Some(h) if !h.trim().is_empty() && !h.eq_ignore_ascii_case(AUTO_DETECT) => h.to_string(),
        _ => first_match_label(input, &PROFILE_TABLES)
            .unwrap_or(UNIVERSAL)
            .to_string(),
    };
    let style = style_for(&tag);
    let exclamations = input.matches('!').count();

    let mut risk: f32 = 0.0;
    let mut notes = Vec::new();
    for rule in GUIDANCE_RULES {
        if (rule.applies)(style, intensity, exclamations) {
            risk += rule.delta;
            notes.push(rule.note.to_string());
        }
    }
    risk = risk.clamp(0.0, 1.0);

    CulturalReading {
        tag,
        style,
        sensitivity_notes: notes,
        recommended_response: recommend(style, risk),
        risk,
    }
}

fn recommend(style: ExpressionStyle, risk: f32) -> String {
    match (style, risk) {
        (ExpressionStyle::Reserved, r) if r >= 0.3 => {
            "Acknowledge gently, avoid pressing for elaboration, and let them set the pace."
        }
        (_, r) if r >= 0.5 => {
            "Validate the feeling first; defer problem-solving until the intensity settles."
        }
        (ExpressionStyle::Expressive, _) => {
            "Match their energy while reflecting the named feeling back to them."
        }
        _ => "Reflect the expression back in the speaker's own terms.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_universal() {
        let reading = detect("nothing profile related here", None, 0.5);
        assert_eq!(reading.tag, UNIVERSAL);
        assert_eq!(reading.style, ExpressionStyle::Neutral);
    }

    #[test]
    fn test_hint_overrides_detection() {
        let reading = detect("i keep it to myself mostly", Some("Expressive"), 0.5);
        assert_eq!(reading.tag, "Expressive");
        assert_eq!(reading.style, ExpressionStyle::Expressive);
    }

    #[test]
    fn test_auto_detect_hint_falls_through() {
        let reading = detect("i keep it to myself mostly", Some(AUTO_DETECT), 0.5);
        assert_eq!(reading.tag, "Reserved");
    }

    #[test]
    fn test_reserved_exclamation_rule_fires() {
        let quiet = detect("i keep it to myself.", None, 0.5);
        let loud = detect("i keep it to myself!", None, 0.5);
        assert!(loud.risk > quiet.risk);
        assert!(!loud.sensitivity_notes.is_empty());
    }

    #[test]
    fn test_risk_clamped() {
        let reading = detect("i keep it to myself!!!", None, 1.0);
        assert!((0.0..=1.0).contains(&reading.risk));
    }

    #[test]
    fn test_rule_list_is_inspectable() {
        assert!(guidance_rule_names().contains(&"reserved-exclamation"));
    }
}
