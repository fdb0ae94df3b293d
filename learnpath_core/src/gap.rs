//! Skill gap data model
//!
//! Defines skill gaps and the ordinal scales used to rank them:
//! - SkillLevel: 4-point proficiency scale, also used as content difficulty
//! - GapSize: magnitude of a gap (small/medium/large)
//! - Priority: learning priority / urgency scale
//! - SkillGap: a single identified deficiency for a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a skill gap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GapId(pub Uuid);

impl GapId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GapId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proficiency level on a 4-point scale
///
/// Used both for a user's skill level and for content difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Numeric rank: beginner=1, intermediate=2, advanced=3, expert=4
    pub fn rank(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    /// Parse a level name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            "expert" => Some(SkillLevel::Expert),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal magnitude of a skill gap
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSize {
    Small,
    Medium,
    Large,
}

impl GapSize {
    /// Ordinal weight: small=1, medium=2, large=3
    pub fn ordinal(&self) -> u8 {
        match self {
            GapSize::Small => 1,
            GapSize::Medium => 2,
            GapSize::Large => 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Some(GapSize::Small),
            "medium" => Some(GapSize::Medium),
            "large" => Some(GapSize::Large),
            _ => None,
        }
    }
}

/// Learning priority and urgency scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

/// A single identified skill deficiency for a user
///
/// Gaps are created once per detection per assessment; the same skill_name
/// may appear in multiple gaps for one user across assessments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillGap {
    pub id: GapId,
    pub user_id: String,
    pub skill_name: String,
    pub category: Option<String>,
    pub current_level: Option<SkillLevel>,
    pub target_level: Option<SkillLevel>,
    pub gap_size: Option<GapSize>,
    pub priority: Priority,
    pub urgency: Priority,
    pub business_impact: Option<String>,
    pub learning_effort: Option<String>,
    /// References to the assessments or other evidence that produced this gap
    pub evidence_sources: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub related_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillGap {
    /// Create a gap with default (medium) priority and urgency
    pub fn new(user_id: impl Into<String>, skill_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: GapId::new(),
            user_id: user_id.into(),
            skill_name: skill_name.into(),
            category: None,
            current_level: None,
            target_level: None,
            gap_size: None,
            priority: Priority::Medium,
            urgency: Priority::Medium,
            business_impact: None,
            learning_effort: None,
            evidence_sources: Vec::new(),
            recommended_actions: Vec::new(),
            related_skills: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolved current level, defaulting to beginner when unknown
    pub fn effective_current_level(&self) -> SkillLevel {
        self.current_level.unwrap_or(SkillLevel::Beginner)
    }

    /// Resolved target level, defaulting to intermediate when unknown
    pub fn effective_target_level(&self) -> SkillLevel {
        self.target_level.unwrap_or(SkillLevel::Intermediate)
    }
}
