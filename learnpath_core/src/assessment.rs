//! Assessment data model
//!
//! Defines the assessment record and its lifecycle:
//! - AssessmentId: Unique identifier (UUID v4)
//! - AssessmentStatus: Lifecycle state machine
//! - Assessment: One analysis run over a batch of artifacts for one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an assessment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of evidence an assessment is based on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    /// Analysis of user-supplied work artifacts
    ArtifactAnalysis,
    /// Self-reported skill levels
    SelfAssessment,
    /// Feedback collected from peers
    PeerReview,
    /// Scored automated test
    AutomatedTest,
    /// Review of a representative work sample
    WorkSample,
}

/// Lifecycle status of an assessment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Created but analysis has not started
    Pending,
    /// Analysis is running
    InProgress,
    /// Analysis finished (possibly with a degraded fallback result)
    Completed,
    /// The analysis call itself failed
    Failed,
}

impl AssessmentStatus {
    /// Valid status transitions
    ///
    /// Returns true if transition from self to next is valid.
    /// `Completed` and `Failed` are terminal.
    pub fn can_transition_to(&self, next: &AssessmentStatus) -> bool {
        match (self, next) {
            (AssessmentStatus::Pending, AssessmentStatus::InProgress) => true,
            (AssessmentStatus::InProgress, AssessmentStatus::Completed) => true,
            (AssessmentStatus::InProgress, AssessmentStatus::Failed) => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AssessmentStatus::Completed | AssessmentStatus::Failed)
    }
}

/// One analysis run over a batch of work artifacts for one user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub user_id: String,
    pub assessment_type: AssessmentType,
    pub status: AssessmentStatus,
    pub title: String,
    pub description: Option<String>,
    /// Opaque references to the analyzed artifacts, in input order
    pub artifacts_analyzed: Vec<String>,
    /// Skill names the analysis found demonstrated
    pub skills_evaluated: Vec<String>,
    /// Overall score (0-100), set together with confidence_level at completion
    pub overall_score: Option<f64>,
    /// Confidence of the analysis (0.0-1.0)
    pub confidence_level: Option<f64>,
    /// Full structured analysis blob, non-null only when completed
    pub assessment_data: Option<serde_json::Value>,
    pub recommendations: Vec<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Create a new pending assessment
    pub fn new(
        user_id: impl Into<String>,
        assessment_type: AssessmentType,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AssessmentId::new(),
            user_id: user_id.into(),
            assessment_type,
            status: AssessmentStatus::Pending,
            title: title.into(),
            description,
            artifacts_analyzed: Vec::new(),
            skills_evaluated: Vec::new(),
            overall_score: None,
            confidence_level: None,
            assessment_data: None,
            recommendations: Vec::new(),
            started_at: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition to a new status
    ///
    /// Rejects transitions the lifecycle does not allow.
    pub fn set_status(&mut self, next: AssessmentStatus) -> Result<(), String> {
        if !self.status.can_transition_to(&next) {
            return Err(format!(
                "Invalid status transition: {:?} -> {:?}",
                self.status, next
            ));
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
