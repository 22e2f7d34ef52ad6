//! Built-in canonical codex.
//!
//! This module is the single source of truth for trigger lists, marker
//! bands, blend links and variant codes. Earlier revisions kept several
//! independently-edited copies of this data in different modules and
//! they drifted apart; do not add a second table.

use super::category::{Category, IntensityMarkers, IntensityRange, Variant};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn markers(low: &[&str], medium: &[&str], high: &[&str]) -> IntensityMarkers {
    IntensityMarkers {
        low: strings(low),
        medium: strings(medium),
        high: strings(high),
    }
}

fn variant(code: &str, name: &str, definition: &str, lo: f32, hi: f32) -> Variant {
    Variant::new(code, name, definition, IntensityRange::new(lo, hi))
}

/// The eight canonical emotion families.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category {
            code: "JOY".to_string(),
            name: "Joy".to_string(),
            definition: "A state of delight, pleasure, or well-being arising from \
                         satisfaction or anticipation of the good."
                .to_string(),
            range: IntensityRange::new(0.2, 1.0),
            triggers: strings(&[
                "happy", "joy", "delight", "excited", "glad", "cheerful", "thrilled",
                "wonderful", "elated", "grateful",
            ]),
            markers: markers(
                &["content", "pleasant", "fine"],
                &["happy", "glad", "cheerful"],
                &["ecstatic", "elated", "overjoyed", "thrilled"],
            ),
            blends_with: strings(&["LOVE", "SURPRISE"]),
            variants: vec![
                variant(
                    "JOY-001",
                    "Contentment",
                    "Quiet, settled satisfaction without urgency.",
                    0.2,
                    0.45,
                ),
                variant(
                    "JOY-002",
                    "Delight",
                    "Bright, active pleasure in a particular moment.",
                    0.45,
                    0.75,
                ),
                variant(
                    "JOY-003",
                    "Elation",
                    "Soaring, near-overwhelming happiness.",
                    0.75,
                    1.0,
                ),
            ],
        },
        Category {
            code: "SADNESS".to_string(),
            name: "Sadness".to_string(),
            definition: "Sorrow or unhappiness in response to loss, disappointment, \
                         or helplessness."
                .to_string(),
            range: IntensityRange::new(0.1, 1.0),
            triggers: strings(&[
                "sad", "sorrow", "grief", "unhappy", "miserable", "heartbroken", "lonely",
                "crying", "tears", "mourning",
            ]),
            markers: markers(
                &["down", "blue", "glum"],
                &["sad", "unhappy", "lonely"],
                &["devastated", "heartbroken", "inconsolable"],
            ),
            blends_with: strings(&["FEAR", "ANGER", "SHAME"]),
            variants: vec![
                variant(
                    "SAD-001",
                    "Melancholy",
                    "A low, lingering sadness without a sharp cause.",
                    0.1,
                    0.4,
                ),
                variant(
                    "SAD-002",
                    "Grief",
                    "Acute sorrow over a concrete loss.",
                    0.4,
                    0.75,
                ),
                variant(
                    "SAD-003",
                    "Despair",
                    "Sorrow that has collapsed into hopelessness.",
                    0.75,
                    1.0,
                ),
            ],
        },
        Category {
            code: "ANGER".to_string(),
            name: "Anger".to_string(),
            definition: "A strong feeling of displeasure or antagonism provoked by \
                         a perceived wrong."
                .to_string(),
            range: IntensityRange::new(0.2, 1.0),
            triggers: strings(&[
                "angry", "furious", "mad", "rage", "irritated", "annoyed", "resent",
                "outraged", "frustrated", "livid",
            ]),
            markers: markers(
                &["annoyed", "irritated", "bothered"],
                &["angry", "mad", "frustrated"],
                &["furious", "livid", "enraged", "seething"],
            ),
            blends_with: strings(&["DISGUST", "SADNESS"]),
            variants: vec![
                variant(
                    "ANG-001",
                    "Irritation",
                    "Low-grade friction, easily set aside.",
                    0.2,
                    0.45,
                ),
                variant(
                    "ANG-002",
                    "Frustration",
                    "Anger at being blocked from a goal.",
                    0.45,
                    0.7,
                ),
                variant(
                    "ANG-003",
                    "Fury",
                    "Consuming anger that crowds out everything else.",
                    0.7,
                    1.0,
                ),
            ],
        },
        Category {
            code: "FEAR".to_string(),
            name: "Fear".to_string(),
            definition: "An unpleasant response to perceived danger or threat, \
                         real or imagined."
                .to_string(),
            range: IntensityRange::new(0.15, 1.0),
            triggers: strings(&[
                "afraid", "scared", "fear", "terrified", "anxious", "worried", "nervous",
                "panic", "dread", "frightened",
            ]),
            markers: markers(
                &["uneasy", "wary", "nervous"],
                &["scared", "worried", "anxious"],
                &["terrified", "petrified", "panicking"],
            ),
            blends_with: strings(&["SADNESS", "SURPRISE"]),
            variants: vec![
                variant(
                    "FEA-001",
                    "Unease",
                    "A background sense that something is off.",
                    0.15,
                    0.4,
                ),
                variant(
                    "FEA-002",
                    "Anxiety",
                    "Sustained worry about what might happen.",
                    0.4,
                    0.7,
                ),
                variant(
                    "FEA-003",
                    "Terror",
                    "Immediate, overwhelming fear.",
                    0.7,
                    1.0,
                ),
            ],
        },
        Category {
            code: "LOVE".to_string(),
            name: "Love".to_string(),
            definition: "Deep affection, attachment, or care directed at a person, \
                         place, or idea."
                .to_string(),
            range: IntensityRange::new(0.2, 1.0),
            triggers: strings(&[
                "love", "adore", "cherish", "affection", "fond", "devoted", "caring",
                "tenderness", "warmth", "longing",
            ]),
            markers: markers(
                &["fond", "warm", "caring"],
                &["love", "adore", "devoted"],
                &["passionately", "head over heels", "consumed by love"],
            ),
            blends_with: strings(&["JOY", "SADNESS"]),
            variants: vec![
                variant(
                    "LOV-001",
                    "Fondness",
                    "Gentle, steady warmth toward someone or something.",
                    0.2,
                    0.5,
                ),
                variant(
                    "LOV-002",
                    "Devotion",
                    "Committed, enduring attachment.",
                    0.5,
                    0.8,
                ),
                variant(
                    "LOV-003",
                    "Passion",
                    "Intense, all-absorbing love.",
                    0.8,
                    1.0,
                ),
            ],
        },
        Category {
            code: "SURPRISE".to_string(),
            name: "Surprise".to_string(),
            definition: "A brief reaction to the unexpected, pleasant or unpleasant."
                .to_string(),
            range: IntensityRange::new(0.2, 0.95),
            triggers: strings(&[
                "surprised", "shocked", "astonished", "amazed", "stunned", "unexpected",
                "startled", "speechless",
            ]),
            markers: markers(
                &["curious", "surprised"],
                &["amazed", "astonished"],
                &["stunned", "shocked", "floored"],
            ),
            blends_with: strings(&["JOY", "FEAR"]),
            variants: vec![
                variant(
                    "SUR-001",
                    "Wonder",
                    "Open, curious surprise that invites exploration.",
                    0.2,
                    0.55,
                ),
                variant(
                    "SUR-002",
                    "Shock",
                    "Jarring surprise that briefly suspends thought.",
                    0.55,
                    0.95,
                ),
            ],
        },
        Category {
            code: "DISGUST".to_string(),
            name: "Disgust".to_string(),
            definition: "Revulsion toward something offensive, tainted, or wrong."
                .to_string(),
            range: IntensityRange::new(0.2, 0.95),
            triggers: strings(&[
                "disgust", "revolted", "repulsed", "sickened", "gross", "nauseating",
                "appalled", "contempt",
            ]),
            markers: markers(
                &["distaste", "off-putting"],
                &["disgusted", "gross", "appalled"],
                &["revolted", "repulsed", "sickened"],
            ),
            blends_with: strings(&["ANGER"]),
            variants: vec![
                variant(
                    "DIS-001",
                    "Distaste",
                    "Mild aversion, a wrinkled nose.",
                    0.2,
                    0.5,
                ),
                variant(
                    "DIS-002",
                    "Revulsion",
                    "Strong, bodily rejection.",
                    0.5,
                    0.95,
                ),
            ],
        },
        Category {
            code: "SHAME".to_string(),
            name: "Shame".to_string(),
            definition: "Painful awareness of having fallen short in one's own or \
                         others' eyes."
                .to_string(),
            range: IntensityRange::new(0.15, 0.95),
            triggers: strings(&[
                "ashamed", "shame", "embarrassed", "guilty", "guilt", "humiliated",
                "regret", "mortified",
            ]),
            markers: markers(
                &["awkward", "sheepish"],
                &["embarrassed", "guilty", "ashamed"],
                &["humiliated", "mortified", "disgraced"],
            ),
            blends_with: strings(&["SADNESS", "FEAR"]),
            variants: vec![
                variant(
                    "SHA-001",
                    "Embarrassment",
                    "Social discomfort at being seen unfavorably.",
                    0.15,
                    0.5,
                ),
                variant(
                    "SHA-002",
                    "Guilt",
                    "Self-reproach over a specific act or omission.",
                    0.4,
                    0.75,
                ),
                variant(
                    "SHA-003",
                    "Humiliation",
                    "Shame inflicted or witnessed, deeply felt.",
                    0.7,
                    0.95,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_categories_validate() {
        for cat in builtin_categories() {
            cat.validate().unwrap();
        }
    }

    #[test]
    fn test_builtin_codes_unique() {
        let cats = builtin_categories();
        let codes: HashSet<_> = cats.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), cats.len());
    }

    #[test]
    fn test_blend_links_resolve() {
        let cats = builtin_categories();
        let codes: HashSet<_> = cats.iter().map(|c| c.code.clone()).collect();
        for cat in &cats {
            for blend in &cat.blends_with {
                assert!(codes.contains(blend), "{} blends with unknown {}", cat.code, blend);
            }
        }
    }

    #[test]
    fn test_every_builtin_has_triggers() {
        for cat in builtin_categories() {
            assert!(!cat.triggers.is_empty(), "{} has no triggers", cat.code);
        }
    }
}
