//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;

fn stats_with_nodes(nodes: u64) -> SearchStats {
    let mut stats = SearchStats::default();
    stats.nodes_explored = nodes;
    stats
}

#[test]
fn test_no_termination() {
    assert!(!NoTermination.is_terminated(&stats_with_nodes(u64::MAX)));
}

#[test]
fn test_node_count_termination() {
    let term = NodeCountTermination::new(3);

    assert!(!term.is_terminated(&stats_with_nodes(2)));
    assert!(term.is_terminated(&stats_with_nodes(3)));
    assert!(term.is_terminated(&stats_with_nodes(4)));
}

#[test]
fn test_time_termination_before_start() {
    // A search that has not started has spent no time
    let term = TimeTermination::millis(1);
    assert!(!term.is_terminated(&SearchStats::default()));
}

#[test]
fn test_time_termination_expired() {
    let term = TimeTermination::new(Duration::ZERO);
    let mut stats = SearchStats::default();
    stats.start();

    assert!(term.is_terminated(&stats));
}

#[test]
fn test_time_termination_not_expired() {
    let term = TimeTermination::seconds(3600);
    let mut stats = SearchStats::default();
    stats.start();

    assert!(!term.is_terminated(&stats));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    let stats = SearchStats::default();

    assert!(!term.is_terminated(&stats));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&stats));
    assert!(term.flag().load(Ordering::SeqCst));
}

#[test]
fn test_optional_termination() {
    let absent: Option<NodeCountTermination> = None;
    let present = Some(NodeCountTermination::new(1));
    let stats = stats_with_nodes(10);

    assert!(!absent.is_terminated(&stats));
    assert!(present.is_terminated(&stats));
}

#[test]
fn test_or_termination() {
    let term = OrTermination::new((
        NodeCountTermination::new(100),
        NodeCountTermination::new(10),
    ));

    assert!(!term.is_terminated(&stats_with_nodes(5)));
    assert!(term.is_terminated(&stats_with_nodes(10)));
}

#[test]
fn test_and_termination() {
    let term = AndTermination::new((
        NodeCountTermination::new(100),
        NodeCountTermination::new(10),
    ));

    assert!(!term.is_terminated(&stats_with_nodes(10)));
    assert!(term.is_terminated(&stats_with_nodes(100)));
}

#[test]
fn test_or_termination_with_optionals() {
    let term = OrTermination::new((
        None::<NodeCountTermination>,
        Some(TimeTermination::seconds(3600)),
    ));
    let mut stats = stats_with_nodes(1_000);
    stats.start();

    assert!(!term.is_terminated(&stats));
}
