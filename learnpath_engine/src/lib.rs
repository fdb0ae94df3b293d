//! Learnpath pipeline engines
//!
//! Provides the skill-gap core pipelines:
//! - Assessment Engine: artifact analysis with taxonomy grounding
//! - Gap Prioritizer: AI ranking with a deterministic fallback
//! - Path Synthesizer: budgeted, priority-ordered learning paths
//!
//! Collaborators (taxonomy store, content store, record store, text
//! generator) are injected at construction; see `learnpath_core` for the
//! contracts and in-memory implementations.

// Module declarations
pub mod assessment;
pub mod errors;
pub mod ranking;
pub mod synthesis;

// Re-export main types
pub use assessment::analysis::{
    AnalysisOutcome, ArtifactAnalysis, GapFinding, OverallAssessment, SkillDemonstrated,
    fallback_analysis,
};
pub use assessment::AssessmentEngine;

pub use ranking::GapPrioritizer;

pub use synthesis::content::GeneratedModule;
pub use synthesis::scoring::ScoringConfig;
pub use synthesis::{BudgetPolicy, PathSynthesizer, SynthesisConfig};

pub use errors::{EngineError, Result};

use std::sync::Arc;

use learnpath_core::{ContentStore, RecordStore, TaxonomyStore, TextGenerator};

/// Wire the pipeline engines from their collaborators
///
/// Application-boundary convenience; each engine can equally be constructed
/// directly with only the collaborators it needs.
pub fn build_engines(
    records: Arc<dyn RecordStore>,
    taxonomy: Arc<dyn TaxonomyStore>,
    content: Arc<dyn ContentStore>,
    generator: Arc<dyn TextGenerator>,
) -> (AssessmentEngine, PathSynthesizer) {
    let assessment = AssessmentEngine::new(records.clone(), taxonomy, generator.clone());
    let synthesizer = PathSynthesizer::new(
        GapPrioritizer::new(generator.clone()),
        content,
        generator,
        records,
    );
    (assessment, synthesizer)
}

/// Version of the engine crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the pipeline engines
pub fn init() {
    tracing::info!("Learnpath engines v{}", VERSION);
}
