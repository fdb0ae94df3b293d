//! Prompt construction for artifact analysis
//!
//! The system instruction pins the structured output schema and grounds the
//! analysis in the skills taxonomy; the user instruction carries the
//! combined artifact text.

use learnpath_core::TaxonomyEntry;

/// Serialize the active taxonomy into the grounding-context block
pub fn taxonomy_context(entries: &[TaxonomyEntry]) -> String {
    let mut parts = Vec::with_capacity(entries.len());

    for skill in entries {
        let mut info = format!("Skill: {}\n", skill.skill_name);
        info.push_str(&format!("Category: {}\n", skill.category));
        if let Some(subcategory) = &skill.subcategory {
            info.push_str(&format!("Subcategory: {}\n", subcategory));
        }
        if let Some(description) = &skill.description {
            info.push_str(&format!("Description: {}\n", description));
        }
        info.push_str(&format!(
            "Proficiency Levels: {}\n",
            skill.proficiency_levels.join(", ")
        ));
        if !skill.typical_use_cases.is_empty() {
            info.push_str(&format!(
                "Use Cases: {}\n",
                skill.typical_use_cases.join(", ")
            ));
        }
        parts.push(info);
    }

    parts.join("\n\n")
}

/// System instruction: analyst role, taxonomy grounding, required schema
pub fn analysis_system_prompt(taxonomy_context: &str) -> String {
    format!(
        r#"You are an expert skills assessment analyst. Your task is to analyze work artifacts
and identify the skills demonstrated, competency levels, and potential skill gaps.

Skills Taxonomy Context:
{taxonomy_context}

Please analyze the provided work artifacts and return a JSON response with the following structure:
{{
    "skills_demonstrated": [
        {{
            "skill_name": "string",
            "category": "string",
            "competency_level": "beginner|intermediate|advanced|expert",
            "confidence_score": 0.0-1.0,
            "evidence": "specific examples from the text",
            "strengths": ["list of strengths"],
            "areas_for_improvement": ["list of areas to improve"]
        }}
    ],
    "skill_gaps": [
        {{
            "skill_name": "string",
            "category": "string",
            "gap_size": "small|medium|large",
            "priority": "low|medium|high|critical",
            "business_impact": "description of impact",
            "recommended_actions": ["list of recommended learning actions"]
        }}
    ],
    "overall_assessment": {{
        "overall_score": 0-100,
        "confidence_level": 0.0-1.0,
        "summary": "overall assessment summary",
        "key_strengths": ["list of key strengths"],
        "primary_gaps": ["list of primary skill gaps"],
        "recommendations": ["list of top recommendations"]
    }}
}}

Focus on both product management skills and technical skills relevant to the work context.
Be specific and provide actionable insights."#
    )
}

/// User instruction carrying the combined artifact document
pub fn analysis_user_prompt(combined_text: &str) -> String {
    format!(
        r#"Please analyze the following work artifacts for skills assessment:

{combined_text}

Provide a comprehensive analysis of demonstrated skills, competency levels,
and identified skill gaps. Focus on actionable insights for learning and development."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_context_layout() {
        let mut entry = TaxonomyEntry::new("Product Strategy", "Product Management");
        entry.subcategory = Some("Strategic Planning".to_string());
        entry.description = Some("Develop and execute product strategies".to_string());
        entry.typical_use_cases = vec!["Roadmap planning".to_string()];

        let context = taxonomy_context(&[entry]);
        assert!(context.contains("Skill: Product Strategy"));
        assert!(context.contains("Category: Product Management"));
        assert!(context.contains("Subcategory: Strategic Planning"));
        assert!(context.contains("Use Cases: Roadmap planning"));
        assert!(context.contains("Proficiency Levels: beginner, intermediate, advanced, expert"));
    }

    #[test]
    fn test_taxonomy_context_omits_empty_fields() {
        let entry = TaxonomyEntry::new("Programming", "Technical");
        let context = taxonomy_context(&[entry]);
        assert!(!context.contains("Subcategory:"));
        assert!(!context.contains("Use Cases:"));
    }

    #[test]
    fn test_system_prompt_embeds_taxonomy_and_schema() {
        let prompt = analysis_system_prompt("Skill: Testing");
        assert!(prompt.contains("Skill: Testing"));
        assert!(prompt.contains("skills_demonstrated"));
        assert!(prompt.contains("skill_gaps"));
        assert!(prompt.contains("overall_assessment"));
    }

    #[test]
    fn test_user_prompt_embeds_document() {
        let prompt = analysis_user_prompt("I wrote a PRD for checkout.");
        assert!(prompt.contains("I wrote a PRD for checkout."));
    }
}
