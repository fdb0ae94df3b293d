//! Micro-learning content generation
//!
//! When the content store has nothing for a gap, exactly one short module
//! is generated: the content kind comes from a fixed skill lookup, the
//! duration from a fixed kind table, and the module body from one
//! text-service call.

use serde::{Deserialize, Serialize};

use learnpath_core::{ContentItem, ContentType, SkillGap, SkillLevel, UserContext};

/// Content kind for a skill, matched on the lowercased skill name
pub fn content_type_for_skill(skill_name: &str) -> ContentType {
    match skill_name.to_ascii_lowercase().as_str() {
        "programming" => ContentType::Tutorial,
        "data_analysis" => ContentType::PracticalExercise,
        "user_research" => ContentType::CaseStudy,
        "product_strategy" => ContentType::ConceptExplanation,
        "stakeholder_management" => ContentType::CaseStudy,
        "api_development" => ContentType::Tutorial,
        "database_design" => ContentType::PracticalExercise,
        _ => ContentType::ConceptExplanation,
    }
}

/// Target duration in minutes for a micro-learning kind
pub fn micro_duration(content_type: ContentType) -> u32 {
    match content_type {
        ContentType::QuickTip => 5,
        ContentType::ConceptExplanation => 10,
        ContentType::PracticalExercise => 15,
        ContentType::CaseStudy => 12,
        ContentType::Tutorial => 15,
        ContentType::Quiz => 8,
        _ => 10,
    }
}

/// Module body returned by the generation call
///
/// Only the title is required; a response without it is treated as
/// malformed and the candidate is skipped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedModule {
    pub title: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub content_structure: Vec<String>,
    #[serde(default)]
    pub practical_exercises: Vec<String>,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Prompt for one micro-learning module
pub fn generation_prompt(
    gap: &SkillGap,
    ctx: &UserContext,
    content_type: ContentType,
    difficulty: SkillLevel,
    duration: u32,
) -> String {
    format!(
        r#"Create a micro-learning module for a {role} to learn {skill}.

Context:
- Current skill level: {current}
- Target skill level: {target}
- User role: {role}
- Experience: {years} years
- Industry: {industry}

Requirements:
- Content type: {content_type}
- Duration: {duration} minutes
- Difficulty: {difficulty}
- Focus on practical, actionable learning

Please provide:
1. Title (concise and engaging)
2. Learning objectives (3-5 specific goals)
3. Content structure (step-by-step breakdown)
4. Practical exercises or examples
5. Key takeaways
6. Prerequisites (if any)

Format as JSON with the following structure:
{{
    "title": "string",
    "learning_objectives": ["string"],
    "content_structure": ["string"],
    "practical_exercises": ["string"],
    "key_takeaways": ["string"],
    "prerequisites": ["string"]
}}"#,
        role = ctx.role,
        skill = gap.skill_name,
        current = gap.effective_current_level(),
        target = gap.effective_target_level(),
        years = ctx.years_of_experience,
        industry = ctx.industry,
        content_type = content_type,
        duration = duration,
        difficulty = difficulty,
    )
}

/// Render the module body as readable markdown
pub fn render_content_text(module: &GeneratedModule) -> String {
    let mut parts = vec![format!("# {}\n", module.title)];

    if !module.learning_objectives.is_empty() {
        parts.push("## Learning Objectives".to_string());
        for objective in &module.learning_objectives {
            parts.push(format!("- {objective}"));
        }
        parts.push(String::new());
    }

    if !module.content_structure.is_empty() {
        parts.push("## Content Structure".to_string());
        for (i, step) in module.content_structure.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, step));
        }
        parts.push(String::new());
    }

    if !module.practical_exercises.is_empty() {
        parts.push("## Practical Exercises".to_string());
        for exercise in &module.practical_exercises {
            parts.push(format!("- {exercise}"));
        }
        parts.push(String::new());
    }

    if !module.key_takeaways.is_empty() {
        parts.push("## Key Takeaways".to_string());
        for takeaway in &module.key_takeaways {
            parts.push(format!("- {takeaway}"));
        }
    }

    parts.join("\n")
}

/// Assemble the stored content item for a generated module
pub fn build_generated_item(
    gap: &SkillGap,
    module: &GeneratedModule,
    content_type: ContentType,
    difficulty: SkillLevel,
    duration: u32,
) -> ContentItem {
    let mut item = ContentItem::new(&module.title, content_type, difficulty, duration);
    item.description = Some(format!(
        "AI-generated content for {} skill gap",
        gap.skill_name
    ));
    item.skills_covered = vec![gap.skill_name.clone()];
    item.prerequisites = module.prerequisites.clone();
    item.learning_objectives = module.learning_objectives.clone();
    item.content_text = Some(render_content_text(module));
    item
}
