//! Emotion Codex Classification Engine
//!
//! A deterministic, rule-based classifier for free-text emotional
//! expressions:
//! - Typed taxonomy of emotion families with variants and blends
//! - Keyword, metaphor/symbol, and intensity analyzers over static tables
//! - Vote combining with variant resolution and a confidence floor
//! - Cultural-context and tone annotators with declarative rule lists
//!
//! No learned models, no I/O, no request-scoped state: every invocation
//! is a pure function of the input text and the codex.

pub mod analyzers;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod taxonomy;

// Re-exports for convenience
pub use analyzers::{CategoryVote, MetaphorPattern, SymbolicAnnotation};
pub use context::{CulturalReading, ExpressionStyle, ToneReading};
pub use error::CodexError;
pub use pipeline::{
    ClassificationOutcome, ClassificationResult, Classifier, StoredClassification,
    CONFIDENCE_FLOOR,
};
pub use taxonomy::{Category, EmotionCodex, IntensityMarkers, IntensityRange, Variant};
