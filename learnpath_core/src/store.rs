//! Generic keyed record store for pipeline entities
//!
//! Covers assessments, skill gaps, learning paths, and recommendations.
//! Backends are a collaborator concern; the in-memory implementation here
//! backs tests and wiring.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::assessment::{Assessment, AssessmentId};
use crate::errors::StoreResult;
use crate::gap::{GapId, Priority, SkillGap};
use crate::learning::{LearningPath, LearningRecommendation, PathId};

/// Keyed record access for the pipeline entities (allows test fakes)
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_assessment(&self, id: AssessmentId) -> StoreResult<Option<Assessment>>;

    async fn upsert_assessment(&self, assessment: &Assessment) -> StoreResult<()>;

    /// Append a new gap record
    async fn insert_gap(&self, gap: &SkillGap) -> StoreResult<GapId>;

    /// Gaps for a user in insertion order, optionally filtered by priority
    async fn gaps_for_user(
        &self,
        user_id: &str,
        priority: Option<Priority>,
    ) -> StoreResult<Vec<SkillGap>>;

    async fn upsert_path(&self, path: &LearningPath) -> StoreResult<()>;

    async fn get_path(&self, id: PathId) -> StoreResult<Option<LearningPath>>;

    /// Insert or overwrite a recommendation by content id
    async fn upsert_recommendation(&self, rec: &LearningRecommendation) -> StoreResult<()>;

    async fn get_recommendation(
        &self,
        content_id: &str,
    ) -> StoreResult<Option<LearningRecommendation>>;
}

/// In-memory record store for testing and wiring
pub struct InMemoryRecordStore {
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
    gaps: Arc<RwLock<IndexMap<GapId, SkillGap>>>,
    paths: Arc<RwLock<HashMap<PathId, LearningPath>>>,
    recommendations: Arc<RwLock<IndexMap<String, LearningRecommendation>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            assessments: Arc::new(RwLock::new(HashMap::new())),
            gaps: Arc::new(RwLock::new(IndexMap::new())),
            paths: Arc::new(RwLock::new(HashMap::new())),
            recommendations: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    pub async fn gap_count(&self) -> usize {
        self.gaps.read().await.len()
    }

    pub async fn path_count(&self) -> usize {
        self.paths.read().await.len()
    }

    pub async fn recommendation_count(&self) -> usize {
        self.recommendations.read().await.len()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_assessment(&self, id: AssessmentId) -> StoreResult<Option<Assessment>> {
        Ok(self.assessments.read().await.get(&id).cloned())
    }

    async fn upsert_assessment(&self, assessment: &Assessment) -> StoreResult<()> {
        self.assessments
            .write()
            .await
            .insert(assessment.id, assessment.clone());
        Ok(())
    }

    async fn insert_gap(&self, gap: &SkillGap) -> StoreResult<GapId> {
        self.gaps.write().await.insert(gap.id, gap.clone());
        Ok(gap.id)
    }

    async fn gaps_for_user(
        &self,
        user_id: &str,
        priority: Option<Priority>,
    ) -> StoreResult<Vec<SkillGap>> {
        let gaps = self.gaps.read().await;
        Ok(gaps
            .values()
            .filter(|g| g.user_id == user_id)
            .filter(|g| priority.map_or(true, |p| g.priority == p))
            .cloned()
            .collect())
    }

    async fn upsert_path(&self, path: &LearningPath) -> StoreResult<()> {
        self.paths.write().await.insert(path.path_id, path.clone());
        Ok(())
    }

    async fn get_path(&self, id: PathId) -> StoreResult<Option<LearningPath>> {
        Ok(self.paths.read().await.get(&id).cloned())
    }

    async fn upsert_recommendation(&self, rec: &LearningRecommendation) -> StoreResult<()> {
        self.recommendations
            .write()
            .await
            .insert(rec.content_id.clone(), rec.clone());
        Ok(())
    }

    async fn get_recommendation(
        &self,
        content_id: &str,
    ) -> StoreResult<Option<LearningRecommendation>> {
        Ok(self.recommendations.read().await.get(content_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentType;
    use crate::gap::SkillLevel;
    use crate::learning::ContentType;

    #[tokio::test]
    async fn test_assessment_round_trip() {
        let store = InMemoryRecordStore::new();
        let assessment =
            Assessment::new("user_1", AssessmentType::ArtifactAnalysis, "Review", None);
        let id = assessment.id;

        store.upsert_assessment(&assessment).await.unwrap();
        let loaded = store.get_assessment(id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Review");
    }

    #[tokio::test]
    async fn test_get_assessment_missing() {
        let store = InMemoryRecordStore::new();
        assert!(store
            .get_assessment(AssessmentId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_gaps_for_user_preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        store.insert_gap(&SkillGap::new("u", "first")).await.unwrap();
        store.insert_gap(&SkillGap::new("u", "second")).await.unwrap();
        store.insert_gap(&SkillGap::new("other", "third")).await.unwrap();

        let gaps = store.gaps_for_user("u", None).await.unwrap();
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].skill_name, "first");
        assert_eq!(gaps[1].skill_name, "second");
    }

    #[tokio::test]
    async fn test_gaps_for_user_priority_filter() {
        let store = InMemoryRecordStore::new();
        let mut urgent = SkillGap::new("u", "a");
        urgent.priority = Priority::Critical;
        store.insert_gap(&urgent).await.unwrap();
        store.insert_gap(&SkillGap::new("u", "b")).await.unwrap();

        let critical = store
            .gaps_for_user("u", Some(Priority::Critical))
            .await
            .unwrap();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].skill_name, "a");
    }

    #[tokio::test]
    async fn test_recommendation_upsert_overwrites() {
        let store = InMemoryRecordStore::new();
        let mut rec = LearningRecommendation {
            content_id: "c1".to_string(),
            title: "Original".to_string(),
            content_type: ContentType::Tutorial,
            difficulty: SkillLevel::Beginner,
            estimated_duration: 10,
            skills_covered: Vec::new(),
            priority_score: 1.0,
            reasoning: String::new(),
            prerequisites: Vec::new(),
            learning_objectives: Vec::new(),
        };
        store.upsert_recommendation(&rec).await.unwrap();

        rec.title = "Updated".to_string();
        store.upsert_recommendation(&rec).await.unwrap();

        assert_eq!(store.recommendation_count().await, 1);
        let loaded = store.get_recommendation("c1").await.unwrap().unwrap();
        assert_eq!(loaded.title, "Updated");
    }
}
