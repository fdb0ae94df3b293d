//! Text-generation service abstraction
//!
//! Defines the `TextGenerator` trait - the single seam to the external AI
//! text service - plus scripted and failing implementations for tests.
//!
//! The service is treated as one synchronous call that either returns text
//! or a terminal failure; retry/backoff is the service's own concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::errors::TextServiceError;

/// A single generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user instruction
    pub prompt: String,
    /// Optional system instruction / grounding context
    pub system_context: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_context: None,
        }
    }

    pub fn with_system_context(mut self, context: impl Into<String>) -> Self {
        self.system_context = Some(context.into());
        self
    }
}

/// Generated text plus the producing model, when known
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: String,
    pub model: Option<String>,
}

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
        }
    }
}

/// The external AI text-generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier for logging (e.g. model name)
    fn id(&self) -> &str;

    /// Generate text for the request, blocking until the service answers
    async fn generate(&self, request: GenerationRequest)
        -> Result<GeneratedText, TextServiceError>;
}

/// Scripted response for the test generator
enum Scripted {
    Text(String),
    Error(TextServiceError),
}

/// Test generator that replays a fixed script of responses
///
/// Each call consumes the next scripted entry; an exhausted script fails
/// the request. Records the requests it receives for prompt assertions.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GenerationRequest>>,
    calls: AtomicU32,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicU32::new(0),
        }
    }

    /// Queue a successful text response
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("script lock")
            .push_back(Scripted::Text(text.into()));
        self
    }

    /// Queue a failure response
    pub fn then_error(self, error: TextServiceError) -> Self {
        self.responses
            .lock()
            .expect("script lock")
            .push_back(Scripted::Error(error));
        self
    }

    /// Number of generate calls received so far
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Copies of the requests received, in call order
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("request lock").clone()
    }
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn id(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedText, TextServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().expect("request lock").push(request);

        let next = self.responses.lock().expect("script lock").pop_front();
        match next {
            Some(Scripted::Text(text)) => Ok(GeneratedText::new(text)),
            Some(Scripted::Error(error)) => Err(error),
            None => Err(TextServiceError::RequestFailed(
                "scripted generator exhausted".to_string(),
            )),
        }
    }
}

/// Test generator whose every call fails as unavailable
pub struct FailingGenerator {
    calls: AtomicU32,
}

impl FailingGenerator {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn id(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GeneratedText, TextServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TextServiceError::Unavailable(
            "failing generator".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_replays_in_order() {
        let gen = ScriptedGenerator::new().then_text("first").then_text("second");

        let a = gen.generate(GenerationRequest::new("p1")).await.unwrap();
        let b = gen.generate(GenerationRequest::new("p2")).await.unwrap();
        assert_eq!(a.text, "first");
        assert_eq!(b.text, "second");
        assert_eq!(gen.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_error_then_exhaustion() {
        let gen = ScriptedGenerator::new()
            .then_error(TextServiceError::Unavailable("down".to_string()));

        assert!(gen.generate(GenerationRequest::new("p")).await.is_err());
        // Script is now empty
        assert!(gen.generate(GenerationRequest::new("p")).await.is_err());
    }

    #[tokio::test]
    async fn test_scripted_records_requests() {
        let gen = ScriptedGenerator::new().then_text("ok");
        let request = GenerationRequest::new("analyze this").with_system_context("grounding");
        gen.generate(request).await.unwrap();

        let seen = gen.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].prompt, "analyze this");
        assert_eq!(seen[0].system_context.as_deref(), Some("grounding"));
    }

    #[tokio::test]
    async fn test_failing_always_fails() {
        let gen = FailingGenerator::new();
        assert!(gen.generate(GenerationRequest::new("p")).await.is_err());
        assert!(gen.generate(GenerationRequest::new("p")).await.is_err());
        assert_eq!(gen.call_count(), 2);
    }
}
