//! Learnpath core types and collaborator contracts
//!
//! Provides the shared vocabulary of the skill-gap pipelines:
//! - Entity records: assessments, skill gaps, content, learning paths
//! - Collaborator traits: taxonomy store, content store, record store,
//!   text generator
//! - In-memory implementations and scripted generators for tests/wiring

// Module declarations
pub mod ai;
pub mod assessment;
pub mod content;
pub mod errors;
pub mod gap;
pub mod learning;
pub mod store;
pub mod taxonomy;
pub mod user;

// Re-export main types
pub use assessment::{Assessment, AssessmentId, AssessmentStatus, AssessmentType};

pub use gap::{GapId, GapSize, Priority, SkillGap, SkillLevel};

pub use learning::{
    ContentItem, ContentType, LearningPath, LearningRecommendation, PathId,
};

pub use taxonomy::{InMemoryTaxonomyStore, TaxonomyEntry, TaxonomyStore};

pub use content::{ContentStore, InMemoryContentStore};

pub use store::{InMemoryRecordStore, RecordStore};

pub use ai::{
    FailingGenerator, GeneratedText, GenerationRequest, ScriptedGenerator, TextGenerator,
};

pub use user::UserContext;

pub use errors::{StoreError, StoreResult, TextServiceError};

/// Version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
