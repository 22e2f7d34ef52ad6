//! Analyzers Module
//!
//! Independent, stateless scans of the normalized input: keyword voting,
//! metaphor/symbol reading, and the global intensity estimate.

pub mod intensity;
pub mod keyword;
pub mod metaphor;
pub mod scorer;

use serde::{Deserialize, Serialize};

pub use metaphor::{MetaphorPattern, SymbolicAnnotation};

/// One analyzer's weighted vote for a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryVote {
    pub code: String,
    pub confidence: f32,
    pub intensity: f32,
}
