//! Path synthesizer
//!
//! Consumes prioritized gaps and a time budget, retrieves or generates
//! content per gap, scores candidates, and assembles a personalized
//! learning path. Content generation failures are isolated per gap; the
//! caller always receives a path, possibly shorter than the budget.

pub mod content;
pub mod scoring;

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use serde_json::json;
use tracing::{debug, info, warn};

use learnpath_core::{
    ContentItem, ContentStore, ContentType, GenerationRequest, LearningPath,
    LearningRecommendation, PathId, RecordStore, SkillGap, SkillLevel, TextGenerator, UserContext,
};

use crate::errors::Result;
use crate::ranking::GapPrioritizer;
use content::GeneratedModule;
use scoring::ScoringConfig;

/// What happens when the best candidate for a gap no longer fits the budget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BudgetPolicy {
    /// Stop assembling the path entirely (the historical behavior)
    #[default]
    StopOnOverflow,
    /// Skip to the next gap and keep filling the remaining budget
    SkipOverflowing,
}

/// Tunables for path synthesis
///
/// Defaults are the production constants.
#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    /// Budget when the caller gives no max duration (minutes)
    pub default_budget_minutes: u32,
    /// How many prioritized gaps become learning objectives
    pub objective_gap_limit: usize,
    pub budget_policy: BudgetPolicy,
    pub scoring: ScoringConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_budget_minutes: 480, // 8 hours
            objective_gap_limit: 5,
            budget_policy: BudgetPolicy::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// A content candidate for one gap, before scoring
struct Candidate {
    item: ContentItem,
    reasoning: String,
}

/// Budgeted learning-path synthesis over prioritized skill gaps
pub struct PathSynthesizer {
    prioritizer: GapPrioritizer,
    content: Arc<dyn ContentStore>,
    generator: Arc<dyn TextGenerator>,
    records: Arc<dyn RecordStore>,
    config: SynthesisConfig,
}

impl PathSynthesizer {
    pub fn new(
        prioritizer: GapPrioritizer,
        content: Arc<dyn ContentStore>,
        generator: Arc<dyn TextGenerator>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            prioritizer,
            content,
            generator,
            records,
            config: SynthesisConfig::default(),
        }
    }

    /// Set a custom synthesis configuration (builder pattern)
    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Synthesize a duration-bounded learning path for the user's gaps
    ///
    /// An empty gap set short-circuits to the fixed starter path without
    /// touching the prioritizer, the stores, or the generator.
    pub async fn synthesize(
        &self,
        ctx: &UserContext,
        gaps: Vec<SkillGap>,
        max_duration_hours: Option<u32>,
        preferred_difficulty: Option<SkillLevel>,
    ) -> Result<LearningPath> {
        info!(
            user_id = %ctx.user_id,
            gap_count = gaps.len(),
            "Generating personalized learning path"
        );

        if gaps.is_empty() {
            info!(user_id = %ctx.user_id, "No skill gaps, returning starter path");
            return Ok(default_path());
        }

        let prioritized = self.prioritizer.prioritize(gaps.clone(), ctx).await;
        let budget_minutes = max_duration_hours
            .map(|hours| hours * 60)
            .unwrap_or(self.config.default_budget_minutes);

        let mut total_minutes: u32 = 0;
        let mut selected: Vec<LearningRecommendation> = Vec::new();

        'gaps: for gap in &prioritized {
            if total_minutes >= budget_minutes {
                break;
            }

            let difficulty = preferred_difficulty.unwrap_or_else(|| {
                scoring::derive_difficulty(
                    gap.effective_current_level(),
                    gap.effective_target_level(),
                )
            });

            let mut candidates: Vec<(Candidate, f64)> = self
                .candidates_for_gap(gap, ctx, difficulty)
                .await?
                .into_iter()
                .map(|candidate| {
                    let score =
                        scoring::priority_score(&candidate.item, gap, &self.config.scoring);
                    (candidate, score)
                })
                .collect();
            candidates.sort_by(|a, b| {
                b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
            });

            for (index, (candidate, score)) in candidates.into_iter().enumerate() {
                if total_minutes + candidate.item.estimated_duration <= budget_minutes {
                    total_minutes += candidate.item.estimated_duration;
                    selected.push(recommendation_from(candidate, score));
                } else if index == 0 {
                    // The best candidate no longer fits the remaining budget.
                    debug!(
                        skill = %gap.skill_name,
                        remaining = budget_minutes - total_minutes,
                        "Budget exhausted at gap"
                    );
                    match self.config.budget_policy {
                        BudgetPolicy::StopOnOverflow => break 'gaps,
                        BudgetPolicy::SkipOverflowing => continue 'gaps,
                    }
                }
                // Lower-ranked candidates that do not fit are skipped.
            }
        }

        let path = self.assemble(ctx, &gaps, &prioritized, selected, total_minutes)?;
        self.persist(&path).await?;

        info!(
            path_id = %path.path_id,
            modules = path.content_sequence.len(),
            minutes = path.estimated_duration,
            "Learning path synthesized"
        );
        Ok(path)
    }

    /// Candidates for one gap: store lookup first, otherwise one generated
    /// micro-learning item. Generation failures leave the gap empty-handed.
    async fn candidates_for_gap(
        &self,
        gap: &SkillGap,
        ctx: &UserContext,
        difficulty: SkillLevel,
    ) -> Result<Vec<Candidate>> {
        let existing = self.content.find(&gap.skill_name, difficulty).await?;
        if !existing.is_empty() {
            debug!(skill = %gap.skill_name, found = existing.len(), "Using stored content");
            return Ok(existing
                .into_iter()
                .map(|item| Candidate {
                    reasoning: format!("Existing content covering {}", gap.skill_name),
                    item,
                })
                .collect());
        }

        match self.generate_micro_item(gap, ctx, difficulty).await? {
            Some(item) => Ok(vec![Candidate {
                reasoning: format!("AI-generated content for {} skill gap", gap.skill_name),
                item,
            }]),
            None => Ok(Vec::new()),
        }
    }

    /// Generate and persist exactly one micro-learning item for a gap
    ///
    /// Returns None when the generation call fails or its output is
    /// malformed; store failures propagate.
    async fn generate_micro_item(
        &self,
        gap: &SkillGap,
        ctx: &UserContext,
        difficulty: SkillLevel,
    ) -> Result<Option<ContentItem>> {
        let content_type = content::content_type_for_skill(&gap.skill_name);
        let duration = content::micro_duration(content_type);
        let prompt = content::generation_prompt(gap, ctx, content_type, difficulty, duration);

        let response = match self.generator.generate(GenerationRequest::new(prompt)).await {
            Ok(response) => response,
            Err(error) => {
                warn!(skill = %gap.skill_name, %error, "Content generation call failed");
                return Ok(None);
            }
        };

        let module: GeneratedModule = match serde_json::from_str(response.text.trim()) {
            Ok(module) => module,
            Err(error) => {
                warn!(skill = %gap.skill_name, %error, "Malformed generated module, skipping");
                return Ok(None);
            }
        };

        let item = content::build_generated_item(gap, &module, content_type, difficulty, duration);
        // New items land in the content store before they are recommended.
        self.content.upsert(&item).await?;
        debug!(skill = %gap.skill_name, content_id = %item.id, "Generated micro-learning item");
        Ok(Some(item))
    }

    /// Assemble the path record from the selected recommendations
    fn assemble(
        &self,
        ctx: &UserContext,
        gaps: &[SkillGap],
        prioritized: &[SkillGap],
        selected: Vec<LearningRecommendation>,
        total_minutes: u32,
    ) -> Result<LearningPath> {
        let learning_objectives = prioritized
            .iter()
            .take(self.config.objective_gap_limit)
            .map(|gap| {
                format!(
                    "Improve {} from {} to {}",
                    gap.skill_name,
                    gap.effective_current_level(),
                    gap.effective_target_level()
                )
            })
            .collect();

        let mut success_metrics = IndexMap::new();
        success_metrics.insert("target_skills_improved".to_string(), json!(gaps.len()));
        success_metrics.insert(
            "estimated_completion_time".to_string(),
            json!(format!("{total_minutes} minutes")),
        );
        success_metrics.insert("learning_modules".to_string(), json!(selected.len()));
        success_metrics.insert(
            "difficulty_distribution".to_string(),
            serde_json::to_value(scoring::difficulty_distribution(&selected))?,
        );

        Ok(LearningPath {
            path_id: PathId::new(),
            title: format!("Personalized Learning Path for {}", ctx.role),
            description: format!(
                "Customized learning journey to address {} skill gaps",
                gaps.len()
            ),
            target_skills: gaps.iter().map(|gap| gap.skill_name.clone()).collect(),
            difficulty: scoring::overall_difficulty(&selected),
            estimated_duration: total_minutes,
            content_sequence: selected,
            prerequisites: Vec::new(),
            learning_objectives,
            priority_order: prioritized.iter().map(|gap| gap.skill_name.clone()).collect(),
            success_metrics,
            created_at: Utc::now(),
        })
    }

    /// Upsert the path and every recommendation it references
    async fn persist(&self, path: &LearningPath) -> Result<()> {
        self.records.upsert_path(path).await?;
        for recommendation in &path.content_sequence {
            self.records.upsert_recommendation(recommendation).await?;
        }
        Ok(())
    }
}

fn recommendation_from(candidate: Candidate, score: f64) -> LearningRecommendation {
    let Candidate { item, reasoning } = candidate;
    LearningRecommendation {
        content_id: item.id,
        title: item.title,
        content_type: item.content_type,
        difficulty: item.difficulty,
        estimated_duration: item.estimated_duration,
        skills_covered: item.skills_covered,
        priority_score: score,
        reasoning,
        prerequisites: item.prerequisites,
        learning_objectives: item.learning_objectives,
    }
}

/// The fixed starter path returned when a user has no recorded gaps
///
/// Deterministic apart from the generated identifiers; never persisted.
fn default_path() -> LearningPath {
    let recommendation = LearningRecommendation {
        content_id: uuid::Uuid::new_v4().to_string(),
        title: "Product Management Fundamentals".to_string(),
        content_type: ContentType::ConceptExplanation,
        difficulty: SkillLevel::Beginner,
        estimated_duration: 15,
        skills_covered: vec!["product_management".to_string(), "strategy".to_string()],
        priority_score: 8.0,
        reasoning: "Essential foundation for product managers".to_string(),
        prerequisites: Vec::new(),
        learning_objectives: vec![
            "Understand core PM principles".to_string(),
            "Learn strategic thinking".to_string(),
        ],
    };

    let mut success_metrics = IndexMap::new();
    success_metrics.insert("target_skills_improved".to_string(), json!(1));
    success_metrics.insert("learning_modules".to_string(), json!(1));

    LearningPath {
        path_id: PathId::new(),
        title: "Introduction to Product Management".to_string(),
        description: "Essential learning path for new product managers".to_string(),
        target_skills: vec![
            "product_management".to_string(),
            "strategy".to_string(),
            "user_research".to_string(),
        ],
        difficulty: SkillLevel::Beginner,
        estimated_duration: recommendation.estimated_duration,
        content_sequence: vec![recommendation],
        prerequisites: Vec::new(),
        learning_objectives: vec!["Build foundational PM knowledge".to_string()],
        priority_order: vec!["product_management".to_string()],
        success_metrics,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        let path = default_path();
        assert_eq!(path.content_sequence.len(), 1);
        assert_eq!(path.estimated_duration, 15);
        assert_eq!(path.difficulty, SkillLevel::Beginner);
        assert_eq!(
            path.target_skills,
            vec!["product_management", "strategy", "user_research"]
        );
        assert_eq!(path.priority_order, vec!["product_management"]);
    }

    #[test]
    fn test_default_path_regenerates_ids() {
        assert_ne!(default_path().path_id, default_path().path_id);
    }

    #[test]
    fn test_budget_policy_default_is_stop() {
        assert_eq!(BudgetPolicy::default(), BudgetPolicy::StopOnOverflow);
        assert_eq!(
            SynthesisConfig::default().budget_policy,
            BudgetPolicy::StopOnOverflow
        );
        assert_eq!(SynthesisConfig::default().default_budget_minutes, 480);
    }
}
