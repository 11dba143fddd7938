// tests/execution_order.rs

mod common;
use crate::common::builders::{TaskQueueBuilder, reference_graph};
use crate::common::init_tracing;

use taskqueue::scheduler::compute_order;
use taskqueue::{TaskQueue, UpdateMode};

fn ids(order: &[String]) -> Vec<&str> {
    order.iter().map(String::as_str).collect()
}

#[test]
fn test_reference_graph_order() {
    init_tracing();
    let queue = reference_graph().build();

    // A is the only root; B beats C on priority; D needs C as well.
    assert_eq!(ids(&queue.execution_order()), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_order_after_replace_update() {
    init_tracing();
    let mut queue = reference_graph().build();

    // Replacing D drops it from E's dependencies and moves it to the end.
    queue.update_task("D", 2, ["B"]).unwrap();

    // After B, D(2) and C(1) are ready: D wins; E only waits on C now.
    assert_eq!(ids(&queue.execution_order()), vec!["A", "B", "D", "C", "E"]);
}

#[test]
fn test_order_after_atomic_update() {
    let mut queue = reference_graph().update_mode(UpdateMode::Atomic).build();

    queue.update_task("D", 2, ["B"]).unwrap();

    // E still waits on D, so it comes last.
    assert_eq!(ids(&queue.execution_order()), vec!["A", "B", "D", "C", "E"]);
    assert!(queue.registry().get("E").unwrap().dependencies.contains("D"));
}

#[test]
fn test_higher_priority_root_first() {
    let queue = TaskQueueBuilder::new()
        .with_task("low", 1, &[])
        .with_task("mid", 2, &[])
        .with_task("high", 3, &[])
        .build();

    assert_eq!(ids(&queue.execution_order()), vec!["high", "mid", "low"]);
}

#[test]
fn test_equal_priority_ties_break_fifo() {
    let queue = TaskQueueBuilder::new()
        .with_task("first", 2, &[])
        .with_task("second", 2, &[])
        .with_task("third", 2, &[])
        .build();

    let expected = vec!["first", "second", "third"];
    for _ in 0..10 {
        assert_eq!(ids(&queue.execution_order()), expected);
    }
}

#[test]
fn test_ties_among_released_tasks_follow_ready_order() {
    // Y becomes ready before X (its only dependency is placed first), so
    // it is drained first even though both share priority 1.
    let queue = TaskQueueBuilder::new()
        .with_task("root_a", 5, &[])
        .with_task("root_b", 4, &[])
        .with_task("X", 1, &["root_b"])
        .with_task("Y", 1, &["root_a"])
        .build();

    assert_eq!(ids(&queue.execution_order()), vec!["root_a", "root_b", "Y", "X"]);
}

#[test]
fn test_ready_task_beats_earlier_lower_priority_one() {
    // Once A is placed, B(1) and C(9) are ready; C wins despite B being
    // older.
    let queue = TaskQueueBuilder::new()
        .with_task("A", 1, &[])
        .with_task("B", 1, &["A"])
        .with_task("C", 9, &["A"])
        .build();

    assert_eq!(ids(&queue.execution_order()), vec!["A", "C", "B"]);
}

#[test]
fn test_dependency_free_task_in_first_round() {
    // A low-priority root is still placed before any of its dependents.
    let queue = TaskQueueBuilder::new()
        .with_task("root", 1, &[])
        .with_task("child", 3, &["root"])
        .build();

    assert_eq!(ids(&queue.execution_order()), vec!["root", "child"]);
}

#[test]
fn test_empty_registry_gives_empty_order() {
    let queue = TaskQueue::new();
    let order = queue.compute_execution_order();

    assert!(order.is_empty());
    assert!(order.is_complete());
    assert_eq!(queue.unscheduled_count(), 0);
}

#[test]
fn test_cycle_members_are_omitted() {
    init_tracing();
    // The registry only accepts known dependencies, so a cycle can only be
    // formed by an atomic update pointing back at a dependent.
    let mut queue = TaskQueueBuilder::new()
        .update_mode(UpdateMode::Atomic)
        .with_task("A", 1, &[])
        .with_task("B", 1, &["A"])
        .build();
    queue.update_task("A", 1, ["B"]).unwrap();

    let order = queue.compute_execution_order();
    assert!(order.is_empty());
    assert_eq!(order.unscheduled(), &["A".to_string(), "B".to_string()]);
    assert_eq!(queue.unscheduled_count(), 2);
    assert!(!order.is_complete());
}

#[test]
fn test_tasks_downstream_of_cycle_are_omitted() {
    let mut queue = TaskQueueBuilder::new()
        .update_mode(UpdateMode::Atomic)
        .with_task("free", 2, &[])
        .with_task("A", 1, &[])
        .with_task("B", 1, &["A"])
        .with_task("after_cycle", 3, &["B", "free"])
        .build();
    queue.update_task("A", 1, ["B"]).unwrap();

    let order = queue.compute_execution_order();
    assert_eq!(ids(order.ids()), vec!["free"]);
    assert_eq!(order.unscheduled_count(), 3);
}

#[test]
fn test_compute_order_on_registry_parts() {
    let queue = reference_graph().build();
    let registry = queue.registry();

    let order = compute_order(registry.tasks(), registry.graph());
    assert_eq!(order.position("A"), Some(0));
    assert_eq!(order.position("E"), Some(4));
    assert_eq!(order.position("missing"), None);
    assert_eq!(order.len(), 5);
}

#[test]
fn test_removal_releases_dependents() {
    let mut queue = reference_graph().build();

    queue.remove_task("C");

    // D and E lost C, E still waits on D.
    assert_eq!(ids(&queue.execution_order()), vec!["A", "B", "D", "E"]);
    for task in queue.registry().tasks().values() {
        assert!(!task.dependencies.contains("C"));
    }
}

#[test]
fn test_order_respects_every_dependency() {
    let queue = reference_graph()
        .with_task("F", 9, &["E"])
        .with_task("G", 1, &[])
        .with_task("H", 2, &["G", "B"])
        .build();

    let order = queue.compute_execution_order();
    assert!(order.is_complete());
    for task in queue.registry().tasks().values() {
        let pos = order.position(&task.id).unwrap();
        for dep in task.dependencies.iter() {
            assert!(
                order.position(dep).unwrap() < pos,
                "{} placed before its dependency {}",
                task.id,
                dep
            );
        }
    }
}
