//! Thought scoring
//!
//! The [`Evaluator`] turns a candidate thought into a number in [0.0, 10.0]
//! by prompting an injected [`Completion`] capability and extracting the
//! number from whatever text comes back.
//!
//! Scoring is advisory. A failed or unparseable scoring call must not abort
//! the search, so every failure path collapses to the neutral
//! [`FALLBACK_SCORE`]: the branch becomes unremarkable rather than the run
//! becoming an error. The degraded path is logged at `warn`.

use multipath_core::generation::Completion;
use std::collections::HashMap;

/// Score substituted whenever the capability fails or returns garbage.
///
/// Neutral by construction: half way through the range, so the branch is
/// neither pruned aggressively nor favored.
pub const FALLBACK_SCORE: f64 = 5.0;

/// Lower bound of the score range.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of the score range.
pub const MAX_SCORE: f64 = 10.0;

/// Scores candidate thoughts against a problem statement and criteria.
///
/// Holds configuration only; each [`Evaluator::evaluate`] call is independent
/// and idempotent modulo the non-determinism of the underlying capability.
#[derive(Debug, Clone)]
pub struct Evaluator<C> {
    problem: String,
    criteria: String,
    completion: C,
}

impl<C: Completion> Evaluator<C> {
    /// Create an evaluator for `problem`, judging by `criteria`.
    pub fn new(problem: impl Into<String>, criteria: impl Into<String>, completion: C) -> Self {
        Self {
            problem: problem.into(),
            criteria: criteria.into(),
            completion,
        }
    }

    /// The problem statement candidates are judged against.
    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// The criteria text embedded in every scoring prompt.
    #[must_use]
    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    /// Score one candidate thought; always returns a value in
    /// [[`MIN_SCORE`], [`MAX_SCORE`]].
    ///
    /// Any capability failure, or a response with no extractable number,
    /// yields [`FALLBACK_SCORE`] instead of an error.
    pub async fn evaluate(&self, thought: &str) -> f64 {
        let prompt = self.scoring_prompt(thought);
        match self.completion.complete(&prompt).await {
            Ok(response) => match parse_score(&response) {
                Some(score) => score.clamp(MIN_SCORE, MAX_SCORE),
                None => {
                    tracing::warn!(
                        response = %response,
                        "no numeric score in evaluator response, using fallback"
                    );
                    FALLBACK_SCORE
                }
            },
            Err(error) => {
                tracing::warn!(%error, "scoring call failed, using fallback");
                FALLBACK_SCORE
            }
        }
    }

    /// Score several thoughts sequentially, keyed by thought text.
    ///
    /// No batching and no deduplication: identical texts are scored
    /// independently (the later score wins the map entry), which is accepted
    /// behavior given capability non-determinism.
    pub async fn evaluate_many(&self, thoughts: &[String]) -> HashMap<String, f64> {
        let mut scores = HashMap::with_capacity(thoughts.len());
        for thought in thoughts {
            let score = self.evaluate(thought).await;
            scores.insert(thought.clone(), score);
        }
        scores
    }

    fn scoring_prompt(&self, thought: &str) -> String {
        format!(
            "Rate the following candidate step for solving a problem.\n\n\
             Problem: {}\n\
             Criteria: {}\n\
             Candidate step: {}\n\n\
             Respond with a single number from 0 to 10 and nothing else.",
            self.problem, self.criteria, thought
        )
    }
}

/// Extract a float from free-form response text.
///
/// Strips everything but digits, `.`, and `-`, then parses. Returns `None`
/// if nothing parseable remains.
fn parse_score(response: &str) -> Option<f64> {
    let numeric: String = response
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().ok()
}
