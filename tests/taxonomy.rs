//! Registry behavior through the public API: registration round-trips,
//! duplicate rejection, and the serialized append path.

use std::sync::Arc;
use std::thread;

use emotion_codex::{
    Category, Classifier, CodexError, EmotionCodex, IntensityMarkers, IntensityRange, Variant,
};

fn custom_category(code: &str, trigger: &str) -> Category {
    Category {
        code: code.to_string(),
        name: code.to_string(),
        definition: format!("Custom {} family", code),
        range: IntensityRange::new(0.1, 0.9),
        triggers: vec![trigger.to_string()],
        markers: IntensityMarkers::default(),
        blends_with: vec![],
        variants: vec![Variant::new(
            format!("{}-001", code),
            "Base",
            "",
            IntensityRange::new(0.1, 0.9),
        )],
    }
}

#[test]
fn test_register_then_list_round_trip() {
    let classifier = Classifier::with_builtin();
    let before = classifier.list_categories().len();

    classifier
        .register_category(custom_category("CALM", "serene"))
        .unwrap();

    let listed = classifier.list_categories();
    assert_eq!(listed.len(), before + 1);
    assert_eq!(listed.iter().filter(|c| c.code == "CALM").count(), 1);
}

#[test]
fn test_duplicate_registration_rejected() {
    let classifier = Classifier::with_builtin();
    classifier
        .register_category(custom_category("CALM", "serene"))
        .unwrap();
    let before = classifier.list_categories();

    let err = classifier
        .register_category(custom_category("CALM", "different"))
        .unwrap_err();
    assert_eq!(err, CodexError::DuplicateCategory("CALM".to_string()));

    // The rejected registration leaves the table unchanged.
    let after = classifier.list_categories();
    assert_eq!(after.len(), before.len());
    let calm = after.iter().find(|c| c.code == "CALM").unwrap();
    assert_eq!(calm.triggers, vec!["serene".to_string()]);
}

#[test]
fn test_registering_a_builtin_code_fails() {
    let classifier = Classifier::with_builtin();
    let err = classifier
        .register_category(custom_category("JOY", "whee"))
        .unwrap_err();
    assert!(matches!(err, CodexError::DuplicateCategory(_)));
}

#[test]
fn test_registered_category_participates_in_classification() {
    let classifier = Classifier::with_builtin();
    classifier
        .register_category(custom_category("CALM", "serene"))
        .unwrap();

    let outcome = classifier.classify("everything feels serene tonight").unwrap();
    let result = outcome.as_match().expect("expected a match");
    assert_eq!(result.category.code, "CALM");
}

#[test]
fn test_concurrent_registration_is_serialized() {
    let codex = Arc::new(EmotionCodex::with_builtin());
    let before = codex.len();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codex = Arc::clone(&codex);
            thread::spawn(move || {
                codex
                    .register(custom_category(&format!("EXT{}", i), "extword"))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(codex.len(), before + 8);
}

#[test]
fn test_readers_never_observe_partial_category() {
    // Classifications running alongside registrations must only ever see
    // fully constructed categories.
    let classifier = Arc::new(Classifier::with_builtin());

    let writer = {
        let classifier = Arc::clone(&classifier);
        thread::spawn(move || {
            for i in 0..20 {
                classifier
                    .register_category(custom_category(&format!("GEN{}", i), "genword"))
                    .unwrap();
            }
        })
    };
    let reader = {
        let classifier = Arc::clone(&classifier);
        thread::spawn(move || {
            for _ in 0..20 {
                for cat in classifier.list_categories() {
                    cat.validate().unwrap();
                }
                let _ = classifier.classify("I feel happy").unwrap();
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}
