//! Structured analysis payload returned by the text service
//!
//! The analysis schema is an internal contract with the AI service, not a
//! public interface. Parsing never raises: malformed output degrades to a
//! low-confidence fallback analysis, and callers branch on the tagged
//! `AnalysisOutcome` instead of catching errors.

use serde::{Deserialize, Serialize};

/// One skill the analysis found demonstrated in the artifacts
///
/// skill_name is required; an entry without it fails the parse and the
/// whole response degrades to the fallback.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SkillDemonstrated {
    pub skill_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub competency_level: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    /// Specific examples from the artifact text
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
}

/// One skill deficiency the analysis identified
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GapFinding {
    pub skill_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub current_level: Option<String>,
    #[serde(default)]
    pub target_level: Option<String>,
    #[serde(default)]
    pub gap_size: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub business_impact: Option<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}

/// Summary block of the analysis
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallAssessment {
    pub overall_score: Option<f64>,
    pub confidence_level: Option<f64>,
    pub summary: Option<String>,
    pub key_strengths: Vec<String>,
    pub primary_gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full structured analysis of one artifact batch
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactAnalysis {
    pub skills_demonstrated: Vec<SkillDemonstrated>,
    pub skill_gaps: Vec<GapFinding>,
    pub overall_assessment: OverallAssessment,
}

/// Outcome of interpreting the service response
///
/// `Parsed` carries the analysis as returned; `Fallback` carries the
/// substituted low-confidence analysis after a parse failure. A true call
/// failure never reaches this type.
#[derive(Clone, Debug)]
pub enum AnalysisOutcome {
    Parsed(ArtifactAnalysis),
    Fallback(ArtifactAnalysis),
}

impl AnalysisOutcome {
    /// Interpret raw response text, degrading to the fallback on malformed
    /// structure. Never fails.
    pub fn from_response(text: &str) -> Self {
        match serde_json::from_str::<ArtifactAnalysis>(text.trim()) {
            Ok(analysis) => AnalysisOutcome::Parsed(analysis),
            Err(_) => AnalysisOutcome::Fallback(fallback_analysis()),
        }
    }

    pub fn analysis(&self) -> &ArtifactAnalysis {
        match self {
            AnalysisOutcome::Parsed(a) | AnalysisOutcome::Fallback(a) => a,
        }
    }

    pub fn into_analysis(self) -> ArtifactAnalysis {
        match self {
            AnalysisOutcome::Parsed(a) | AnalysisOutcome::Fallback(a) => a,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }
}

/// Substitute analysis used when the service returns malformed output
pub fn fallback_analysis() -> ArtifactAnalysis {
    ArtifactAnalysis {
        skills_demonstrated: Vec::new(),
        skill_gaps: Vec::new(),
        overall_assessment: OverallAssessment {
            overall_score: Some(50.0),
            confidence_level: Some(0.3),
            summary: Some("Analysis incomplete due to technical issues".to_string()),
            key_strengths: Vec::new(),
            primary_gaps: Vec::new(),
            recommendations: vec![
                "Please try the analysis again or contact support".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let raw = r#"{
            "skills_demonstrated": [
                {"skill_name": "Product Strategy", "competency_level": "intermediate"}
            ],
            "skill_gaps": [
                {"skill_name": "Advanced JavaScript", "gap_size": "medium", "priority": "high"}
            ],
            "overall_assessment": {"overall_score": 75, "confidence_level": 0.85}
        }"#;

        let outcome = AnalysisOutcome::from_response(raw);
        assert!(!outcome.is_fallback());
        let analysis = outcome.analysis();
        assert_eq!(analysis.skills_demonstrated[0].skill_name, "Product Strategy");
        assert_eq!(analysis.skill_gaps[0].priority.as_deref(), Some("high"));
        assert_eq!(analysis.overall_assessment.overall_score, Some(75.0));
    }

    #[test]
    fn test_parse_tolerates_missing_sections() {
        let outcome = AnalysisOutcome::from_response("{}");
        assert!(!outcome.is_fallback());
        assert!(outcome.analysis().skill_gaps.is_empty());
    }

    #[test]
    fn test_entry_without_skill_name_degrades_to_fallback() {
        let outcome = AnalysisOutcome::from_response(
            r#"{"skill_gaps": [{"gap_size": "large"}]}"#,
        );
        assert!(outcome.is_fallback());
    }

    #[test]
    fn test_garbage_degrades_to_fallback() {
        let outcome = AnalysisOutcome::from_response("sorry, I cannot produce JSON today");
        assert!(outcome.is_fallback());
        let overall = &outcome.analysis().overall_assessment;
        assert_eq!(overall.overall_score, Some(50.0));
        assert_eq!(overall.confidence_level, Some(0.3));
        assert!(outcome.analysis().skill_gaps.is_empty());
    }

    #[test]
    fn test_fallback_never_empty_recommendations() {
        let fallback = fallback_analysis();
        assert!(!fallback.overall_assessment.recommendations.is_empty());
    }
}
