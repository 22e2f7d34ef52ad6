//! Context Module
//!
//! Auxiliary annotators: cultural-context detection and tone
//! classification. Both are independent keyword-table lookups and never
//! affect category selection.

pub mod cultural;
pub mod tone;

pub use cultural::{CulturalReading, ExpressionStyle};
pub use tone::ToneReading;
