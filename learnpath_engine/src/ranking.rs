//! Gap prioritizer
//!
//! Orders a set of skill gaps with one AI ranking call over the user's
//! context, falling back to a deterministic gap-size ordering when the call
//! fails or the response is unparsable. The output is always a permutation
//! of the input.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use learnpath_core::{GenerationRequest, SkillGap, TextGenerator, UserContext};

/// AI-assisted ranking of skill gaps with a deterministic fallback
pub struct GapPrioritizer {
    generator: Arc<dyn TextGenerator>,
}

impl GapPrioritizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Order gaps by learning priority
    ///
    /// Degradation is internal: on any text-service or parse failure the
    /// gaps are ordered by gap size (large > medium > small, ties in input
    /// order) without a second service call.
    pub async fn prioritize(&self, gaps: Vec<SkillGap>, ctx: &UserContext) -> Vec<SkillGap> {
        info!(gap_count = gaps.len(), "Prioritizing skill gaps");

        let request = GenerationRequest::new(ranking_prompt(&gaps, ctx));
        match self.generator.generate(request).await {
            Ok(response) => match parse_ranking(&response.text) {
                Some(order) => {
                    debug!(ranked = order.len(), "Applying AI ranking");
                    reorder_by_names(gaps, &order)
                }
                None => {
                    warn!("Unparsable ranking response, falling back to gap-size ordering");
                    order_by_gap_size(gaps)
                }
            },
            Err(error) => {
                warn!(%error, "Ranking call failed, falling back to gap-size ordering");
                order_by_gap_size(gaps)
            }
        }
    }
}

/// Ranking prompt: gap summaries as JSON plus the user-context block
fn ranking_prompt(gaps: &[SkillGap], ctx: &UserContext) -> String {
    let gap_summaries: Vec<serde_json::Value> = gaps
        .iter()
        .map(|gap| {
            json!({
                "skill_name": gap.skill_name,
                "current_level": gap.current_level,
                "target_level": gap.target_level,
                "gap_size": gap.gap_size,
                "category": gap.category,
            })
        })
        .collect();

    format!(
        r#"Analyze and prioritize these skill gaps for a {role}:

User Context:
{context}

Skill Gaps:
{gaps}

Please prioritize these gaps considering:
1. Impact on current work and projects
2. Career advancement potential
3. Learning difficulty and time investment
4. Prerequisites and dependencies

Return a JSON list with skill names in priority order."#,
        role = ctx.role,
        context = ctx.summary(),
        gaps = serde_json::Value::Array(gap_summaries),
    )
}

/// Parse the ranking response as a plain list of skill names
fn parse_ranking(text: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(text.trim()).ok()
}

/// Reorder gaps to follow the returned name order
///
/// Each returned name claims the first not-yet-placed gap with that
/// skill_name; unclaimed gaps follow in their original relative order, so
/// the result is always a permutation of the input.
fn reorder_by_names(gaps: Vec<SkillGap>, order: &[String]) -> Vec<SkillGap> {
    let mut placed = vec![false; gaps.len()];
    let mut indices = Vec::with_capacity(gaps.len());

    for name in order {
        let next = gaps
            .iter()
            .enumerate()
            .find(|(i, gap)| !placed[*i] && gap.skill_name == *name)
            .map(|(i, _)| i);
        if let Some(i) = next {
            placed[i] = true;
            indices.push(i);
        }
    }
    for (i, done) in placed.iter().enumerate() {
        if !done {
            indices.push(i);
        }
    }

    let mut slots: Vec<Option<SkillGap>> = gaps.into_iter().map(Some).collect();
    indices.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Deterministic fallback: gap size descending, ties in input order
fn order_by_gap_size(mut gaps: Vec<SkillGap>) -> Vec<SkillGap> {
    gaps.sort_by_key(|gap| {
        std::cmp::Reverse(gap.gap_size.map(|size| size.ordinal()).unwrap_or(0))
    });
    gaps
}
