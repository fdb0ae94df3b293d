//! Content store abstraction
//!
//! Keyed repository of learning-content items, searchable by skill tag and
//! difficulty. Writes are upsert-only; generated items land here before
//! they are recommended.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::StoreResult;
use crate::gap::SkillLevel;
use crate::learning::ContentItem;

/// Content repository access (allows test fakes)
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Find active items covering the skill at the given difficulty
    async fn find(&self, skill_name: &str, difficulty: SkillLevel)
        -> StoreResult<Vec<ContentItem>>;

    /// Insert or overwrite an item by id, returning the id
    async fn upsert(&self, item: &ContentItem) -> StoreResult<String>;
}

/// In-memory content store for testing and wiring
///
/// Iteration order is insertion order, keeping lookups deterministic.
pub struct InMemoryContentStore {
    items: Arc<RwLock<IndexMap<String, ContentItem>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<ContentItem> {
        self.items.read().await.get(id).cloned()
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find(
        &self,
        skill_name: &str,
        difficulty: SkillLevel,
    ) -> StoreResult<Vec<ContentItem>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| {
                item.is_active && item.difficulty == difficulty && item.covers_skill(skill_name)
            })
            .cloned()
            .collect())
    }

    async fn upsert(&self, item: &ContentItem) -> StoreResult<String> {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item.clone());
        Ok(item.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::ContentType;

    fn item(title: &str, skill: &str, difficulty: SkillLevel, minutes: u32) -> ContentItem {
        let mut item = ContentItem::new(title, ContentType::Article, difficulty, minutes);
        item.skills_covered = vec![skill.to_string()];
        item
    }

    #[tokio::test]
    async fn test_find_filters_by_skill_and_difficulty() {
        let store = InMemoryContentStore::new();
        store
            .upsert(&item("A", "Product Strategy", SkillLevel::Beginner, 10))
            .await
            .unwrap();
        store
            .upsert(&item("B", "Product Strategy", SkillLevel::Advanced, 30))
            .await
            .unwrap();
        store
            .upsert(&item("C", "Programming", SkillLevel::Beginner, 15))
            .await
            .unwrap();

        let found = store.find("Product Strategy", SkillLevel::Beginner).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "A");
    }

    #[tokio::test]
    async fn test_find_skips_inactive() {
        let store = InMemoryContentStore::new();
        let mut retired = item("Old", "Programming", SkillLevel::Beginner, 10);
        retired.is_active = false;
        store.upsert(&retired).await.unwrap();

        let found = store.find("Programming", SkillLevel::Beginner).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_by_id() {
        let store = InMemoryContentStore::new();
        let mut original = item("Original", "Programming", SkillLevel::Beginner, 10);
        store.upsert(&original).await.unwrap();

        original.title = "Updated".to_string();
        store.upsert(&original).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&original.id).await.unwrap().title, "Updated");
    }
}
