//! The emotion codex: process-wide registry of categories.
//!
//! Read-mostly. The only mutation path is `register`, the append used by
//! manual entry and integrations; it is serialized through a write lock
//! so a concurrent classification never observes a half-constructed
//! category.

use std::sync::RwLock;

use tracing::info;

use super::builtin::builtin_categories;
use super::category::Category;
use crate::error::CodexError;

pub struct EmotionCodex {
    categories: RwLock<Vec<Category>>,
}

impl EmotionCodex {
    /// Empty codex, for callers supplying their own taxonomy.
    pub fn empty() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Codex seeded with the canonical built-in families.
    pub fn with_builtin() -> Self {
        let codex = Self::empty();
        for cat in builtin_categories() {
            // Built-in data is validated like everything else.
            codex
                .register(cat)
                .expect("built-in codex must be well-formed");
        }
        codex
    }

    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CodexError> {
        let codex = Self::empty();
        for cat in categories {
            codex.register(cat)?;
        }
        Ok(codex)
    }

    /// Snapshot of every category, in registration order.
    pub fn list(&self) -> Vec<Category> {
        self.categories
            .read()
            .expect("codex lock poisoned")
            .clone()
    }

    pub fn get(&self, code: &str) -> Option<Category> {
        self.categories
            .read()
            .expect("codex lock poisoned")
            .iter()
            .find(|c| c.code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.categories.read().expect("codex lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new category. Rejects duplicates instead of overwriting:
    /// results already issued reference the old definition.
    pub fn register(&self, category: Category) -> Result<(), CodexError> {
        category.validate()?;
        let mut categories = self.categories.write().expect("codex lock poisoned");
        if categories.iter().any(|c| c.code == category.code) {
            return Err(CodexError::DuplicateCategory(category.code));
        }
        info!(code = %category.code, "registered category");
        categories.push(category);
        Ok(())
    }
}

impl Default for EmotionCodex {
    fn default() -> Self {
        Self::with_builtin()
    }
}
