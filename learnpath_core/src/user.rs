//! User context consumed by ranking and content-generation prompts
//!
//! Profile CRUD lives outside this core; only the slice of the profile the
//! pipelines serialize into prompts is modeled here.

use serde::{Deserialize, Serialize};

/// The user-profile slice used for prompt grounding
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub role: String,
    pub years_of_experience: u32,
    pub industry: String,
    pub team_size: Option<u32>,
    pub project_names: Vec<String>,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
            years_of_experience: 0,
            industry: String::new(),
            team_size: None,
            project_names: Vec::new(),
        }
    }

    /// Short summary block rendered into prompts
    pub fn summary(&self) -> String {
        let team = self
            .team_size
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "- Role: {}\n- Experience: {} years\n- Industry: {}\n- Team Size: {}\n- Current Projects: {}",
            self.role,
            self.years_of_experience,
            self.industry,
            team,
            self.project_names.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_contains_context_fields() {
        let mut ctx = UserContext::new("user_1", "Product Manager");
        ctx.years_of_experience = 5;
        ctx.industry = "Fintech".to_string();
        ctx.team_size = Some(8);
        ctx.project_names = vec!["Mobile App".to_string(), "Checkout".to_string()];

        let summary = ctx.summary();
        assert!(summary.contains("Product Manager"));
        assert!(summary.contains("5 years"));
        assert!(summary.contains("Fintech"));
        assert!(summary.contains("Mobile App, Checkout"));
    }

    #[test]
    fn test_summary_without_team_size() {
        let ctx = UserContext::new("user_1", "PM");
        assert!(ctx.summary().contains("Team Size: unknown"));
    }
}
