//! Content candidate scoring and difficulty heuristics
//!
//! Scores candidates within one gap:
//! - gap size carries the base weight (small/medium/large -> 1/2/3, x10)
//! - short durations win (micro-learning first)
//! - intermediate then beginner difficulty win
//! - hands-on kinds (tutorial, practical exercise) win

use indexmap::IndexMap;

use learnpath_core::{ContentItem, LearningRecommendation, SkillGap, SkillLevel};

/// Weights and cutoffs for candidate scoring
///
/// Defaults are the production constants.
#[derive(Clone, Debug)]
pub struct ScoringConfig {
    /// Multiplier applied to the gap-size ordinal
    pub gap_size_factor: f64,
    /// Duration at or under this gets the short bonus (minutes)
    pub short_duration_cutoff: u32,
    pub short_duration_bonus: f64,
    /// Duration at or under this gets the medium bonus (minutes)
    pub medium_duration_cutoff: u32,
    pub medium_duration_bonus: f64,
    pub intermediate_bonus: f64,
    pub beginner_bonus: f64,
    /// Bonus for tutorial / practical-exercise content
    pub hands_on_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_size_factor: 10.0,
            short_duration_cutoff: 10,
            short_duration_bonus: 5.0,
            medium_duration_cutoff: 15,
            medium_duration_bonus: 3.0,
            intermediate_bonus: 3.0,
            beginner_bonus: 2.0,
            hands_on_bonus: 2.0,
        }
    }
}

/// Priority score of one candidate for one gap
pub fn priority_score(item: &ContentItem, gap: &SkillGap, config: &ScoringConfig) -> f64 {
    let gap_weight = gap.gap_size.map(|size| size.ordinal()).unwrap_or(1) as f64;
    let mut score = gap_weight * config.gap_size_factor;

    if item.estimated_duration <= config.short_duration_cutoff {
        score += config.short_duration_bonus;
    } else if item.estimated_duration <= config.medium_duration_cutoff {
        score += config.medium_duration_bonus;
    }

    score += match item.difficulty {
        SkillLevel::Intermediate => config.intermediate_bonus,
        SkillLevel::Beginner => config.beginner_bonus,
        _ => 0.0,
    };

    if item.content_type.is_hands_on() {
        score += config.hands_on_bonus;
    }

    score
}

/// Difficulty for a gap on the 4-point scale: a jump of 2+ levels is
/// advanced, exactly 1 is intermediate, otherwise beginner
pub fn derive_difficulty(current: SkillLevel, target: SkillLevel) -> SkillLevel {
    let delta = target.rank() as i32 - current.rank() as i32;
    if delta >= 2 {
        SkillLevel::Advanced
    } else if delta == 1 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Majority-weighted overall difficulty of the selected recommendations
pub fn overall_difficulty(recommendations: &[LearningRecommendation]) -> SkillLevel {
    if recommendations.is_empty() {
        return SkillLevel::Beginner;
    }
    let avg = recommendations
        .iter()
        .map(|rec| rec.difficulty.rank() as f64)
        .sum::<f64>()
        / recommendations.len() as f64;

    if avg >= 3.0 {
        SkillLevel::Advanced
    } else if avg >= 2.0 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Per-level histogram of the selected recommendations
pub fn difficulty_distribution(
    recommendations: &[LearningRecommendation],
) -> IndexMap<String, u32> {
    let mut distribution = IndexMap::new();
    for level in [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ] {
        distribution.insert(level.as_str().to_string(), 0u32);
    }
    for rec in recommendations {
        *distribution
            .entry(rec.difficulty.as_str().to_string())
            .or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::{ContentType, GapSize};

    fn item(content_type: ContentType, difficulty: SkillLevel, minutes: u32) -> ContentItem {
        ContentItem::new("t", content_type, difficulty, minutes)
    }

    fn gap(size: Option<GapSize>) -> SkillGap {
        let mut gap = SkillGap::new("u", "s");
        gap.gap_size = size;
        gap
    }

    fn rec(difficulty: SkillLevel) -> LearningRecommendation {
        LearningRecommendation {
            content_id: "c".to_string(),
            title: "t".to_string(),
            content_type: ContentType::Article,
            difficulty,
            estimated_duration: 10,
            skills_covered: Vec::new(),
            priority_score: 0.0,
            reasoning: String::new(),
            prerequisites: Vec::new(),
            learning_objectives: Vec::new(),
        }
    }

    #[test]
    fn test_score_components_add_up() {
        let config = ScoringConfig::default();
        // large gap (30) + short duration (5) + intermediate (3) + hands-on (2)
        let score = priority_score(
            &item(ContentType::Tutorial, SkillLevel::Intermediate, 10),
            &gap(Some(GapSize::Large)),
            &config,
        );
        assert_eq!(score, 40.0);
    }

    #[test]
    fn test_duration_bonus_bands() {
        let config = ScoringConfig::default();
        let g = gap(Some(GapSize::Small));
        let short = priority_score(&item(ContentType::Article, SkillLevel::Advanced, 10), &g, &config);
        let medium = priority_score(&item(ContentType::Article, SkillLevel::Advanced, 15), &g, &config);
        let long = priority_score(&item(ContentType::Article, SkillLevel::Advanced, 45), &g, &config);
        assert_eq!(short, 15.0);
        assert_eq!(medium, 13.0);
        assert_eq!(long, 10.0);
    }

    #[test]
    fn test_missing_gap_size_weighs_as_small() {
        let config = ScoringConfig::default();
        let score = priority_score(
            &item(ContentType::Article, SkillLevel::Advanced, 45),
            &gap(None),
            &config,
        );
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_larger_gap_dominates_other_bonuses() {
        let config = ScoringConfig::default();
        let best_small = priority_score(
            &item(ContentType::Tutorial, SkillLevel::Intermediate, 5),
            &gap(Some(GapSize::Small)),
            &config,
        );
        let plain_medium = priority_score(
            &item(ContentType::Article, SkillLevel::Expert, 60),
            &gap(Some(GapSize::Medium)),
            &config,
        );
        assert!(plain_medium > best_small);
    }

    #[test]
    fn test_derive_difficulty() {
        assert_eq!(
            derive_difficulty(SkillLevel::Beginner, SkillLevel::Advanced),
            SkillLevel::Advanced
        );
        assert_eq!(
            derive_difficulty(SkillLevel::Beginner, SkillLevel::Intermediate),
            SkillLevel::Intermediate
        );
        assert_eq!(
            derive_difficulty(SkillLevel::Advanced, SkillLevel::Advanced),
            SkillLevel::Beginner
        );
        assert_eq!(
            derive_difficulty(SkillLevel::Expert, SkillLevel::Beginner),
            SkillLevel::Beginner
        );
    }

    #[test]
    fn test_overall_difficulty_thresholds() {
        assert_eq!(overall_difficulty(&[]), SkillLevel::Beginner);
        assert_eq!(
            overall_difficulty(&[rec(SkillLevel::Advanced), rec(SkillLevel::Advanced)]),
            SkillLevel::Advanced
        );
        assert_eq!(
            overall_difficulty(&[rec(SkillLevel::Beginner), rec(SkillLevel::Advanced)]),
            SkillLevel::Intermediate
        );
        assert_eq!(
            overall_difficulty(&[rec(SkillLevel::Beginner), rec(SkillLevel::Beginner)]),
            SkillLevel::Beginner
        );
    }

    #[test]
    fn test_distribution_counts_all_levels() {
        let distribution = difficulty_distribution(&[
            rec(SkillLevel::Beginner),
            rec(SkillLevel::Beginner),
            rec(SkillLevel::Advanced),
        ]);
        assert_eq!(distribution["beginner"], 2);
        assert_eq!(distribution["intermediate"], 0);
        assert_eq!(distribution["advanced"], 1);
        assert_eq!(distribution["expert"], 0);
    }
}
