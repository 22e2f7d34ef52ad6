//! Typed taxonomy model: emotion categories, their variants, and the
//! intensity bands both carry. All entries are validated at construction
//! so malformed table data is rejected at startup, not at first use.

use serde::{Deserialize, Serialize};

use crate::error::CodexError;

/// Closed intensity interval, both ends in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRange {
    pub lo: f32,
    pub hi: f32,
}

impl IntensityRange {
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.lo && value <= self.hi
    }

    pub fn midpoint(&self) -> f32 {
        (self.lo + self.hi) / 2.0
    }

    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.lo) || !(0.0..=1.0).contains(&self.hi) {
            return Err(format!("range [{}, {}] escapes [0, 1]", self.lo, self.hi));
        }
        if self.lo > self.hi {
            return Err(format!("range lo {} exceeds hi {}", self.lo, self.hi));
        }
        Ok(())
    }
}

/// Marker words that pin a keyword match to an intensity band.
/// The high band is checked before the low band, so overlapping matches
/// favor the higher intensity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntensityMarkers {
    pub low: Vec<String>,
    pub medium: Vec<String>,
    pub high: Vec<String>,
}

/// A named sub-classification within a category, with its own intensity
/// band. Owned exclusively by its parent; no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub code: String,
    pub name: String,
    pub definition: String,
    pub range: IntensityRange,
}

impl Variant {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        definition: impl Into<String>,
        range: IntensityRange,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            definition: definition.into(),
            range,
        }
    }
}

/// A top-level emotion family in the codex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Short stable code, e.g. "JOY". Unique across the codex.
    pub code: String,
    pub name: String,
    pub definition: String,
    pub range: IntensityRange,
    /// Literal trigger keywords that vote for this category.
    pub triggers: Vec<String>,
    pub markers: IntensityMarkers,
    /// Codes of categories this one is known to blend with.
    pub blends_with: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Category {
    /// Reject malformed entries before they enter the codex.
    ///
    /// Variant ranges are NOT required to nest inside the parent range;
    /// they only have to be well-formed on their own.
    pub fn validate(&self) -> Result<(), CodexError> {
        let invalid = |reason: String| CodexError::InvalidCategory {
            code: self.code.clone(),
            reason,
        };
        if self.code.trim().is_empty() {
            return Err(invalid("empty category code".to_string()));
        }
        self.range.validate().map_err(&invalid)?;
        for variant in &self.variants {
            if variant.code.trim().is_empty() {
                return Err(invalid(format!("variant of '{}' has empty code", self.name)));
            }
            variant
                .range
                .validate()
                .map_err(|reason| invalid(format!("variant '{}': {}", variant.code, reason)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(code: &str, lo: f32, hi: f32) -> Category {
        Category {
            code: code.to_string(),
            name: "Test".to_string(),
            definition: String::new(),
            range: IntensityRange::new(lo, hi),
            triggers: vec![],
            markers: IntensityMarkers::default(),
            blends_with: vec![],
            variants: vec![],
        }
    }

    #[test]
    fn test_range_containment() {
        let range = IntensityRange::new(0.3, 0.7);
        assert!(range.contains(0.3));
        assert!(range.contains(0.7));
        assert!(!range.contains(0.71));
        assert_eq!(range.midpoint(), 0.5);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let cat = minimal("TEST", 0.8, 0.2);
        assert!(matches!(cat.validate(), Err(CodexError::InvalidCategory { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let cat = minimal("  ", 0.0, 1.0);
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_variant_range() {
        let mut cat = minimal("TEST", 0.0, 1.0);
        cat.variants.push(Variant::new(
            "TEST-001",
            "Broken",
            "",
            IntensityRange::new(0.5, 1.5),
        ));
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_variant_range_need_not_nest_in_parent() {
        let mut cat = minimal("TEST", 0.4, 0.6);
        cat.variants.push(Variant::new(
            "TEST-001",
            "Wide",
            "",
            IntensityRange::new(0.0, 1.0),
        ));
        assert!(cat.validate().is_ok());
    }
}
