//! Learning content and path data model
//!
//! - ContentType: catalog and micro-learning content kinds
//! - ContentItem: a stored learning-content record
//! - LearningRecommendation: one content item slotted into a path
//! - LearningPath: the synthesized, duration-bounded output

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gap::SkillLevel;

/// Unique identifier for a learning path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(pub Uuid);

impl PathId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PathId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of learning content
///
/// Covers both the catalog vocabulary (article..workshop) and the
/// micro-learning vocabulary used for generated modules
/// (quick_tip..case_study).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Article,
    Video,
    Exercise,
    Quiz,
    Interactive,
    Course,
    Tutorial,
    Workshop,
    QuickTip,
    ConceptExplanation,
    PracticalExercise,
    CaseStudy,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Video => "video",
            ContentType::Exercise => "exercise",
            ContentType::Quiz => "quiz",
            ContentType::Interactive => "interactive",
            ContentType::Course => "course",
            ContentType::Tutorial => "tutorial",
            ContentType::Workshop => "workshop",
            ContentType::QuickTip => "quick_tip",
            ContentType::ConceptExplanation => "concept_explanation",
            ContentType::PracticalExercise => "practical_exercise",
            ContentType::CaseStudy => "case_study",
        }
    }

    /// Hands-on kinds get a scoring bonus during path synthesis
    pub fn is_hands_on(&self) -> bool {
        matches!(self, ContentType::Tutorial | ContentType::PracticalExercise)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A learning-content record as stored in the content store
///
/// The id is the store key; external stores own the key space, so it is a
/// plain string rather than a UUID newtype.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub difficulty: SkillLevel,
    /// Estimated duration in minutes, always > 0
    pub estimated_duration: u32,
    pub skills_covered: Vec<String>,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub content_text: Option<String>,
    pub is_active: bool,
}

impl ContentItem {
    pub fn new(
        title: impl Into<String>,
        content_type: ContentType,
        difficulty: SkillLevel,
        estimated_duration: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            content_type,
            difficulty,
            estimated_duration,
            skills_covered: Vec::new(),
            prerequisites: Vec::new(),
            learning_objectives: Vec::new(),
            content_text: None,
            is_active: true,
        }
    }

    /// True when this item covers the named skill (case-insensitive)
    pub fn covers_skill(&self, skill_name: &str) -> bool {
        self.skills_covered
            .iter()
            .any(|s| s.eq_ignore_ascii_case(skill_name))
    }
}

/// One content item slotted into a learning path
///
/// References (does not own) the backing content item; the same item may be
/// shared across paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub content_id: String,
    pub title: String,
    pub content_type: ContentType,
    pub difficulty: SkillLevel,
    pub estimated_duration: u32,
    pub skills_covered: Vec<String>,
    pub priority_score: f64,
    pub reasoning: String,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
}

/// A synthesized, priority-ordered, duration-bounded learning path
///
/// Immutable once returned; regeneration produces a new path_id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearningPath {
    pub path_id: PathId,
    pub title: String,
    pub description: String,
    /// Skill names of the gaps that drove synthesis
    pub target_skills: Vec<String>,
    pub difficulty: SkillLevel,
    /// Sum of content_sequence durations, minutes
    pub estimated_duration: u32,
    pub content_sequence: Vec<LearningRecommendation>,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
    /// Skill names in the order the gaps were prioritized
    pub priority_order: Vec<String>,
    pub success_metrics: IndexMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_serde_snake_case() {
        let json = serde_json::to_string(&ContentType::ConceptExplanation).unwrap();
        assert_eq!(json, "\"concept_explanation\"");
        let back: ContentType = serde_json::from_str("\"quick_tip\"").unwrap();
        assert_eq!(back, ContentType::QuickTip);
    }

    #[test]
    fn test_hands_on_kinds() {
        assert!(ContentType::Tutorial.is_hands_on());
        assert!(ContentType::PracticalExercise.is_hands_on());
        assert!(!ContentType::CaseStudy.is_hands_on());
        assert!(!ContentType::Article.is_hands_on());
    }

    #[test]
    fn test_covers_skill_case_insensitive() {
        let mut item = ContentItem::new(
            "Roadmapping basics",
            ContentType::Article,
            SkillLevel::Beginner,
            10,
        );
        item.skills_covered = vec!["Product Strategy".to_string()];
        assert!(item.covers_skill("product strategy"));
        assert!(!item.covers_skill("programming"));
    }

    #[test]
    fn test_path_round_trips_through_json() {
        let path = LearningPath {
            path_id: PathId::new(),
            title: "t".into(),
            description: "d".into(),
            target_skills: vec!["a".into()],
            difficulty: SkillLevel::Beginner,
            estimated_duration: 15,
            content_sequence: Vec::new(),
            prerequisites: Vec::new(),
            learning_objectives: Vec::new(),
            priority_order: vec!["a".into()],
            success_metrics: IndexMap::new(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: LearningPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back.path_id, path.path_id);
        assert_eq!(back.estimated_duration, 15);
    }
}
