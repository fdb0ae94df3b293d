//! Assessment engine
//!
//! Turns free-text work artifacts into a structured competency/gap analysis:
//! combines the artifact batch, grounds one text-service call in the skills
//! taxonomy, parses the structured response (degrading to a fallback on
//! malformed output), and persists the assessment plus its derived gaps.
//!
//! Error contract: a text-service call failure marks the assessment failed
//! and propagates; a parse failure is a degraded success.

pub mod analysis;
pub mod prompt;

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use learnpath_core::{
    Assessment, AssessmentId, AssessmentStatus, GapSize, GenerationRequest, Priority, RecordStore,
    SkillGap, SkillLevel, TaxonomyStore, TextGenerator,
};

use crate::errors::{EngineError, Result};
use analysis::{AnalysisOutcome, ArtifactAnalysis};

/// AI-assisted artifact analysis over a keyed assessment record
///
/// Collaborators are injected at construction; the engine itself holds no
/// mutable state between calls.
pub struct AssessmentEngine {
    records: Arc<dyn RecordStore>,
    taxonomy: Arc<dyn TaxonomyStore>,
    generator: Arc<dyn TextGenerator>,
}

impl AssessmentEngine {
    pub fn new(
        records: Arc<dyn RecordStore>,
        taxonomy: Arc<dyn TaxonomyStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            records,
            taxonomy,
            generator,
        }
    }

    /// Analyze a batch of artifact texts for an existing assessment
    ///
    /// Transitions the assessment pending -> in_progress -> completed, or
    /// -> failed when the text-service call itself fails (the failure is
    /// re-raised). Skill gaps named by the analysis are persisted for the
    /// assessment's user.
    pub async fn analyze(
        &self,
        assessment_id: AssessmentId,
        artifacts: &[String],
    ) -> Result<Assessment> {
        info!(%assessment_id, artifact_count = artifacts.len(), "Analyzing work artifacts");

        let mut assessment = self
            .records
            .get_assessment(assessment_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("Assessment {assessment_id} not found")))?;

        if assessment.status == AssessmentStatus::Completed {
            return Err(EngineError::InvalidState(format!(
                "Assessment {assessment_id} is already completed"
            )));
        }

        // Persisted before the analysis call so the transition is visible
        // to concurrent readers.
        assessment
            .set_status(AssessmentStatus::InProgress)
            .map_err(EngineError::InvalidState)?;
        self.records.upsert_assessment(&assessment).await?;

        let combined = combine_artifacts(artifacts);
        let taxonomy = self.taxonomy.list_active_skills().await?;
        debug!(taxonomy_entries = taxonomy.len(), "Built taxonomy grounding context");

        let request = GenerationRequest::new(prompt::analysis_user_prompt(&combined))
            .with_system_context(prompt::analysis_system_prompt(&prompt::taxonomy_context(
                &taxonomy,
            )));

        // The single suspension point of the analysis. A call failure is
        // fatal to this assessment; a parse failure below is not.
        let response = match self.generator.generate(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%assessment_id, %error, "Text service call failed, marking assessment failed");
                assessment
                    .set_status(AssessmentStatus::Failed)
                    .map_err(EngineError::InvalidState)?;
                self.records.upsert_assessment(&assessment).await?;
                return Err(error.into());
            }
        };

        let outcome = AnalysisOutcome::from_response(&response.text);
        if outcome.is_fallback() {
            warn!(%assessment_id, "Malformed analysis response, substituting fallback analysis");
        }
        let analysis = outcome.into_analysis();

        let now = Utc::now();
        assessment
            .set_status(AssessmentStatus::Completed)
            .map_err(EngineError::InvalidState)?;
        assessment.artifacts_analyzed = artifact_refs(artifacts);
        assessment.skills_evaluated = analysis
            .skills_demonstrated
            .iter()
            .map(|s| s.skill_name.clone())
            .collect();
        assessment.overall_score = analysis.overall_assessment.overall_score;
        assessment.confidence_level = analysis.overall_assessment.confidence_level;
        assessment.recommendations = analysis.overall_assessment.recommendations.clone();
        assessment.assessment_data = Some(serde_json::to_value(&analysis)?);
        assessment.started_at = Some(now);
        assessment.completed_at = Some(now);
        self.records.upsert_assessment(&assessment).await?;

        let gap_count = self.record_gaps(&assessment, &analysis).await?;
        info!(%assessment_id, gap_count, "Artifact analysis completed");

        Ok(assessment)
    }

    /// Persist one SkillGap per gap finding, evidenced by this assessment
    async fn record_gaps(
        &self,
        assessment: &Assessment,
        analysis: &ArtifactAnalysis,
    ) -> Result<usize> {
        for finding in &analysis.skill_gaps {
            let mut gap = SkillGap::new(&assessment.user_id, &finding.skill_name);
            gap.category = finding.category.clone();
            gap.current_level = finding.current_level.as_deref().and_then(SkillLevel::parse);
            gap.target_level = finding.target_level.as_deref().and_then(SkillLevel::parse);
            gap.gap_size = Some(
                finding
                    .gap_size
                    .as_deref()
                    .and_then(GapSize::parse)
                    .unwrap_or(GapSize::Medium),
            );
            gap.priority = finding
                .priority
                .as_deref()
                .and_then(Priority::parse)
                .unwrap_or_default();
            gap.business_impact = finding.business_impact.clone();
            gap.recommended_actions = finding.recommended_actions.clone();
            gap.evidence_sources = vec![format!("assessment_{}", assessment.id)];

            self.records.insert_gap(&gap).await?;
        }
        Ok(analysis.skill_gaps.len())
    }
}

/// Concatenate artifact texts in input order, blank-line separated
fn combine_artifacts(artifacts: &[String]) -> String {
    artifacts.join("\n\n").trim().to_string()
}

/// One opaque reference per artifact: position plus a content-hash prefix
fn artifact_refs(artifacts: &[String]) -> Vec<String> {
    artifacts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let digest = Sha256::digest(text.as_bytes());
            let prefix: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
            format!("artifact_{i}_{prefix}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_artifacts_order_and_separator() {
        let artifacts = vec!["first".to_string(), "second".to_string()];
        assert_eq!(combine_artifacts(&artifacts), "first\n\nsecond");
    }

    #[test]
    fn test_combine_artifacts_empty() {
        assert_eq!(combine_artifacts(&[]), "");
    }

    #[test]
    fn test_artifact_refs_are_stable_and_ordered() {
        let artifacts = vec!["a PRD".to_string(), "review notes".to_string()];
        let refs = artifact_refs(&artifacts);
        assert_eq!(refs.len(), 2);
        assert!(refs[0].starts_with("artifact_0_"));
        assert!(refs[1].starts_with("artifact_1_"));
        // Same content hashes to the same reference
        assert_eq!(refs, artifact_refs(&artifacts));
        // 8 hex chars of content hash
        assert_eq!(refs[0].len(), "artifact_0_".len() + 8);
    }

    #[test]
    fn test_artifact_refs_differ_by_content() {
        let refs = artifact_refs(&["x".to_string(), "y".to_string()]);
        let suffix = |r: &str| r.rsplit('_').next().unwrap().to_string();
        assert_ne!(suffix(&refs[0]), suffix(&refs[1]));
    }
}
