//! # Multipath Testing
//!
//! Deterministic mock implementations of the capability traits in
//! `multipath-core`, for exercising the search engine without a model
//! provider.
//!
//! ## Example
//!
//! ```
//! use multipath_testing::mocks::ScriptedCompletion;
//! use multipath_core::generation::Completion;
//!
//! # tokio_test::block_on(async {
//! let completion = ScriptedCompletion::new(["8", "3"]);
//! assert_eq!(completion.complete("first").await.unwrap(), "8");
//! assert_eq!(completion.complete("second").await.unwrap(), "3");
//! // Script exhausted: the last response repeats.
//! assert_eq!(completion.complete("third").await.unwrap(), "3");
//! # });
//! ```

/// Mock implementations of the generation capability traits.
///
/// All mocks are deterministic: identical call sequences produce identical
/// results, which keeps search tests reproducible.
pub mod mocks {
    use multipath_core::generation::{Completion, GenerationError, ThoughtGenerator};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Completion that replays a fixed script of responses.
    ///
    /// Responses are consumed in order; once the script is exhausted the
    /// last response repeats, so a single-entry script behaves like a
    /// constant completion.
    #[derive(Debug)]
    pub struct ScriptedCompletion {
        script: Mutex<VecDeque<String>>,
        last: Mutex<String>,
    }

    impl ScriptedCompletion {
        /// Create a completion replaying `responses` in order.
        pub fn new<I, S>(responses: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let script: VecDeque<String> = responses.into_iter().map(Into::into).collect();
            Self {
                script: Mutex::new(script),
                last: Mutex::new(String::new()),
            }
        }
    }

    impl Completion for ScriptedCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
            let next = {
                let mut script = self.script.lock().map_err(|_| {
                    GenerationError::Provider("scripted completion poisoned".to_string())
                })?;
                script.pop_front()
            };
            let mut last = self.last.lock().map_err(|_| {
                GenerationError::Provider("scripted completion poisoned".to_string())
            })?;
            if let Some(response) = next {
                *last = response;
            }
            Ok(last.clone())
        }
    }

    /// Completion that always fails with a transport error.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingCompletion;

    impl Completion for FailingCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Transport("mock transport down".to_string()))
        }
    }

    /// Generator with a fixed child list per parent thought.
    ///
    /// Parents without an entry get no children (their branch ends), which
    /// makes tree shapes fully scriptable.
    #[derive(Debug, Default)]
    pub struct ScriptedGenerator {
        children: HashMap<String, Vec<String>>,
    }

    impl ScriptedGenerator {
        /// Create an empty generator (every branch ends immediately).
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the children proposed for `parent`.
        #[must_use]
        pub fn with_children<S, I, T>(mut self, parent: S, children: I) -> Self
        where
            S: Into<String>,
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            self.children
                .insert(parent.into(), children.into_iter().map(Into::into).collect());
            self
        }
    }

    impl ThoughtGenerator for ScriptedGenerator {
        async fn propose(
            &self,
            _problem: &str,
            parent_thought: &str,
            count: usize,
        ) -> Result<Vec<String>, GenerationError> {
            let mut children = self.children.get(parent_thought).cloned().unwrap_or_default();
            children.truncate(count);
            Ok(children)
        }
    }

    /// Generator that always fails with a provider error.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingGenerator;

    impl ThoughtGenerator for FailingGenerator {
        async fn propose(
            &self,
            _problem: &str,
            _parent_thought: &str,
            _count: usize,
        ) -> Result<Vec<String>, GenerationError> {
            Err(GenerationError::Provider("mock generator refused".to_string()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::mocks::{FailingCompletion, FailingGenerator, ScriptedCompletion, ScriptedGenerator};
    use multipath_core::generation::{Completion, ThoughtGenerator};

    #[tokio::test]
    async fn scripted_completion_replays_then_repeats() {
        let completion = ScriptedCompletion::new(["a", "b"]);
        assert_eq!(completion.complete("p").await.unwrap(), "a");
        assert_eq!(completion.complete("p").await.unwrap(), "b");
        assert_eq!(completion.complete("p").await.unwrap(), "b");
    }

    #[tokio::test]
    async fn empty_script_returns_empty_text() {
        let completion = ScriptedCompletion::new(Vec::<String>::new());
        assert_eq!(completion.complete("p").await.unwrap(), "");
    }

    #[tokio::test]
    async fn scripted_generator_is_keyed_by_parent() {
        let generator = ScriptedGenerator::new()
            .with_children("root", ["A", "B"])
            .with_children("A", ["A1"]);

        assert_eq!(generator.propose("prob", "root", 5).await.unwrap(), vec!["A", "B"]);
        assert_eq!(generator.propose("prob", "A", 5).await.unwrap(), vec!["A1"]);
        assert!(generator.propose("prob", "B", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn scripted_generator_truncates_to_count() {
        let generator = ScriptedGenerator::new().with_children("root", ["A", "B", "C"]);
        assert_eq!(generator.propose("prob", "root", 2).await.unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn failing_mocks_fail() {
        assert!(FailingCompletion.complete("p").await.is_err());
        assert!(FailingGenerator.propose("p", "t", 2).await.is_err());
    }
}
