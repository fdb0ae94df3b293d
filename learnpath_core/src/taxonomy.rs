//! Skills taxonomy store abstraction
//!
//! The taxonomy is the read-only reference catalog of known skills. This
//! core only consumes it as grounding context for analysis prompts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::StoreResult;

/// One catalog entry describing a known skill
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub id: String,
    pub skill_name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub proficiency_levels: Vec<String>,
    pub typical_use_cases: Vec<String>,
    pub is_active: bool,
}

impl TaxonomyEntry {
    pub fn new(skill_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            skill_name: skill_name.into(),
            category: category.into(),
            subcategory: None,
            description: None,
            proficiency_levels: vec![
                "beginner".to_string(),
                "intermediate".to_string(),
                "advanced".to_string(),
                "expert".to_string(),
            ],
            typical_use_cases: Vec::new(),
            is_active: true,
        }
    }
}

/// Read-only taxonomy access (allows test fakes)
#[async_trait]
pub trait TaxonomyStore: Send + Sync {
    /// List every active taxonomy entry
    async fn list_active_skills(&self) -> StoreResult<Vec<TaxonomyEntry>>;
}

/// In-memory taxonomy for testing and wiring
pub struct InMemoryTaxonomyStore {
    entries: Arc<RwLock<Vec<TaxonomyEntry>>>,
}

impl InMemoryTaxonomyStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_entries(entries: Vec<TaxonomyEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub async fn add(&self, entry: TaxonomyEntry) {
        self.entries.write().await.push(entry);
    }
}

impl Default for InMemoryTaxonomyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaxonomyStore for InMemoryTaxonomyStore {
    async fn list_active_skills(&self) -> StoreResult<Vec<TaxonomyEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.is_active).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_skips_inactive() {
        let store = InMemoryTaxonomyStore::new();
        store.add(TaxonomyEntry::new("Product Strategy", "Product Management")).await;

        let mut retired = TaxonomyEntry::new("Flash Development", "Programming");
        retired.is_active = false;
        store.add(retired).await;

        let active = store.list_active_skills().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].skill_name, "Product Strategy");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryTaxonomyStore::new();
        assert!(store.list_active_skills().await.unwrap().is_empty());
    }
}
