//! End-to-end searches over scripted capabilities.
//!
//! These exercise the full loop (generate, score, select, conclude) with the
//! deterministic mocks from `multipath-testing`.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use multipath_search::{Evaluator, SearchConfig, SearchDriver, StrategyKind};
use multipath_testing::mocks::{FailingCompletion, FailingGenerator, ScriptedCompletion, ScriptedGenerator};

const PROBLEM: &str = "Use 4, 4, 6, 8 to reach 24";

fn two_level_generator() -> ScriptedGenerator {
    ScriptedGenerator::new()
        .with_children(PROBLEM, ["try 6*8", "try 4+4"])
        .with_children("try 6*8", ["48 / 2 via (4+4)/4", "48 - 24"])
        .with_children("try 4+4", ["8 * 3", "8 + 16"])
}

#[tokio::test]
async fn best_first_search_follows_the_scores() {
    // Scoring order is deterministic: children are inserted frontier-order
    // then proposal-order, and scored in that same order.
    // Level 1: "try 6*8" -> 9, "try 4+4" -> 4. Level 2 scores the children
    // of "try 6*8" as 8 and 2; the script then repeats its last entry for
    // the children of "try 4+4".
    let completion = ScriptedCompletion::new(["9", "4", "8", "2"]);
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", completion);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::BestFirst)
        .with_max_depth(2)
        .with_branch_factor(2)
        .with_top_k(1);

    let driver = SearchDriver::new(two_level_generator(), evaluator, config);
    let outcome = driver.run(PROBLEM).await.unwrap();

    // With max_depth 2 the top-k cut only shapes deeper searches; both root
    // children still get expanded here.
    assert_eq!(outcome.tree.node_count(), 7);
    let path: Vec<&str> = outcome.best_path.iter().map(|n| n.thought.as_str()).collect();
    assert_eq!(path, vec![PROBLEM, "try 6*8", "48 / 2 via (4+4)/4"]);
    assert_eq!(outcome.conclusion, "48 / 2 via (4+4)/4");
}

#[tokio::test]
async fn breadth_first_search_expands_every_branch() {
    let completion = ScriptedCompletion::new(["5"]);
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", completion);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::BreadthFirst)
        .with_max_depth(2)
        .with_branch_factor(2);

    let driver = SearchDriver::new(two_level_generator(), evaluator, config);
    let outcome = driver.run(PROBLEM).await.unwrap();

    // Root, both children, all four grandchildren.
    assert_eq!(outcome.tree.node_count(), 7);
    assert_eq!(outcome.tree.max_depth(), 2);
    assert_eq!(outcome.tree.leaf_nodes().len(), 4);
}

#[tokio::test]
async fn scoring_outage_degrades_to_neutral_scores() {
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", FailingCompletion);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::BreadthFirst)
        .with_max_depth(2)
        .with_branch_factor(2);

    let driver = SearchDriver::new(two_level_generator(), evaluator, config);
    let outcome = driver.run(PROBLEM).await.unwrap();

    // The search completes; every scored node carries the neutral fallback,
    // and the best path degenerates to first children.
    assert_eq!(outcome.tree.node_count(), 7);
    for node in outcome.tree.descendants(outcome.tree.root_id()) {
        assert!((node.score - multipath_search::FALLBACK_SCORE).abs() < f64::EPSILON);
    }
    let path: Vec<&str> = outcome.best_path.iter().map(|n| n.thought.as_str()).collect();
    assert_eq!(path, vec![PROBLEM, "try 6*8", "48 / 2 via (4+4)/4"]);
}

#[tokio::test]
async fn generator_outage_yields_a_root_only_outcome() {
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", FailingCompletion);
    let driver = SearchDriver::new(FailingGenerator, evaluator, SearchConfig::default());
    let outcome = driver.run(PROBLEM).await.unwrap();

    assert_eq!(outcome.tree.node_count(), 1);
    assert_eq!(outcome.best_path.len(), 1);
    assert_eq!(outcome.conclusion, PROBLEM);
}

#[tokio::test]
async fn depth_first_search_never_revisits_siblings() {
    let completion = ScriptedCompletion::new(["5"]);
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", completion);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::DepthFirst)
        .with_max_depth(2)
        .with_branch_factor(2);

    let driver = SearchDriver::new(two_level_generator(), evaluator, config);
    let outcome = driver.run(PROBLEM).await.unwrap();

    // Level 1 inserts both root children; level 2 only expands the first.
    assert_eq!(outcome.tree.node_count(), 5);
    let second_child = outcome.tree.nodes_by_depth(1)[1];
    assert!(second_child.is_leaf());
}

#[tokio::test]
async fn snapshot_of_a_finished_search_serializes() {
    let completion = ScriptedCompletion::new(["6"]);
    let evaluator = Evaluator::new(PROBLEM, "gets closer to 24", completion);
    let config = SearchConfig::default()
        .with_strategy(StrategyKind::BreadthFirst)
        .with_max_depth(1)
        .with_branch_factor(2);

    let driver = SearchDriver::new(two_level_generator(), evaluator, config);
    let outcome = driver.run(PROBLEM).await.unwrap();

    let json = serde_json::to_value(outcome.tree.snapshot()).unwrap();
    assert_eq!(json["total_nodes"], 3);
    assert_eq!(json["leaf_count"], 2);
    assert_eq!(json["root"]["id"], "node_0");
}
