//! Taxonomy Module
//!
//! The emotion codex: typed category/variant data and its registry.

mod builtin;
mod category;
mod codex;

pub use builtin::builtin_categories;
pub use category::{Category, IntensityMarkers, IntensityRange, Variant};
pub use codex::EmotionCodex;
