//! Reasoning Search Demo
//!
//! Runs a best-first multi-path search over a toy planning problem with a
//! canned, fully offline generator — no API key required. Shows the full
//! loop: propose children, score them, prune the frontier, extract the best
//! root-to-leaf path.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p search-demo
//! ```

use multipath_core::generation::{Completion, GenerationError, ThoughtGenerator};
use multipath_search::{Evaluator, SearchConfig, SearchDriver, StrategyKind};

const PROBLEM: &str = "Plan a weekend trip to the mountains on a small budget";

/// Offline generator: a tiny hand-written tree of trip-planning ideas.
struct CannedGenerator;

impl ThoughtGenerator for CannedGenerator {
    async fn propose(
        &self,
        _problem: &str,
        parent_thought: &str,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        let children: &[&str] = match parent_thought {
            thought if thought == PROBLEM => &[
                "Take the night bus and camp for free",
                "Drive and split fuel with friends",
                "Book a last-minute package deal",
            ],
            "Take the night bus and camp for free" => &[
                "Reserve a free wild-camping spot near the trailhead",
                "Borrow camping gear instead of buying",
            ],
            "Drive and split fuel with friends" => &[
                "Find three friends and a shared cabin",
                "Day trips only, sleep at home",
            ],
            "Book a last-minute package deal" => &[
                "Watch deal aggregators on Thursday night",
            ],
            _ => &[],
        };
        Ok(children.iter().take(count).map(ToString::to_string).collect())
    }
}

/// Offline scorer: favors thoughts that mention free or shared costs.
struct CannedScorer;

impl Completion for CannedScorer {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let candidate = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Candidate step: "))
            .unwrap_or_default()
            .to_lowercase();

        let mut score = 4;
        if candidate.contains("free") {
            score += 4;
        }
        if candidate.contains("split") || candidate.contains("shared") || candidate.contains("borrow") {
            score += 3;
        }
        Ok(score.min(10).to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Multipath Reasoning Search Demo ===\n");
    println!("Problem: {PROBLEM}\n");

    let evaluator = Evaluator::new(PROBLEM, "cheap, realistic, low effort", CannedScorer);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::BestFirst)
        .with_max_depth(2)
        .with_branch_factor(3)
        .with_top_k(2);

    let driver = SearchDriver::new(CannedGenerator, evaluator, config);
    let outcome = driver.run(PROBLEM).await?;

    println!("Chosen reasoning path:");
    for (step, node) in outcome.best_path.iter().enumerate() {
        println!("  {step}. [{:>4.1}] {}", node.score, node.thought);
    }
    println!("\nConclusion: {}\n", outcome.conclusion);

    println!("Tree summary:");
    println!("{}", serde_json::to_string_pretty(&outcome.tree.snapshot())?);

    Ok(())
}
