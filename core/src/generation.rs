//! Generation capability seams
//!
//! The reasoning engine is generic over two capabilities: one that proposes
//! candidate thoughts and one that completes free-form prompts. Production
//! wiring injects a model-backed client; tests inject deterministic mocks
//! from `multipath-testing`.
//!
//! **Key pattern**: the engine owns the search loop; the capabilities own all
//! I/O. No HTTP client, API key, or retry policy lives in this workspace.

use std::future::Future;

/// Errors surfaced by an injected generation capability.
///
/// The engine treats most of these as advisory (a failed scoring call
/// degrades to a neutral score; a failed proposal drops one branch), so the
/// taxonomy stays coarse: callers mainly need a message to log.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GenerationError {
    /// The underlying transport failed (connection, timeout, TLS, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered, but with nothing usable.
    #[error("empty response from provider")]
    EmptyResponse,

    /// The provider reported an error of its own.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Proposes candidate child thoughts for a node in the reasoning tree.
///
/// Given the overall problem and the thought being expanded, produce up to
/// `count` candidate continuations. Fewer than `count` is fine (the tree
/// enforces no arity); an empty vector means the branch has nowhere to go.
///
/// **Edition 2024**: Uses RPITIT (Return Position Impl Trait In Traits)
pub trait ThoughtGenerator: Send + Sync {
    /// Propose up to `count` child thoughts for `parent_thought`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the capability could not produce
    /// candidates at all (as opposed to legitimately producing none).
    fn propose(
        &self,
        problem: &str,
        parent_thought: &str,
        count: usize,
    ) -> impl Future<Output = Result<Vec<String>, GenerationError>> + Send;
}

/// Answers a free-form text prompt with free-form text.
///
/// The evaluator builds a structured scoring prompt and expects a response
/// from which a single number can be extracted; parsing and clamping happen
/// on the engine side, so implementations just return whatever the provider
/// said.
pub trait Completion: Send + Sync {
    /// Complete `prompt`, returning the raw response text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on any transport or provider failure.
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    struct EchoCompletion;

    impl Completion for EchoCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(prompt.to_string())
        }
    }

    struct ConstantGenerator;

    impl ThoughtGenerator for ConstantGenerator {
        async fn propose(
            &self,
            _problem: &str,
            parent_thought: &str,
            count: usize,
        ) -> Result<Vec<String>, GenerationError> {
            Ok((0..count).map(|i| format!("{parent_thought}/{i}")).collect())
        }
    }

    #[tokio::test]
    async fn completion_round_trips_text() {
        let capability = EchoCompletion;
        let response = capability.complete("score this").await.unwrap();
        assert_eq!(response, "score this");
    }

    #[tokio::test]
    async fn generator_respects_requested_count() {
        let generator = ConstantGenerator;
        let thoughts = generator.propose("problem", "root", 3).await.unwrap();
        assert_eq!(thoughts.len(), 3);
        assert_eq!(thoughts[0], "root/0");
    }

    #[test]
    fn generation_error_messages() {
        let err = GenerationError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failure: connection refused");
        assert_eq!(GenerationError::EmptyResponse.to_string(), "empty response from provider");
    }
}
