// tests/registry_tests.rs

mod common;
use crate::common::init_tracing;

use taskqueue::errors::TaskQueueError;
use taskqueue::registry::{TaskRegistry, TaskStatus};
use taskqueue::UpdateMode;

fn registry_with_chain() -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    registry.add_task("A", 3, Vec::<String>::new()).unwrap();
    registry.add_task("B", 2, ["A"]).unwrap();
    registry.add_task("C", 1, ["A", "B"]).unwrap();
    registry
}

#[test]
fn test_add_task_stores_task_and_graph_entry() {
    init_tracing();
    let registry = registry_with_chain();

    let c = registry.get("C").expect("C should be registered");
    assert_eq!(c.priority, 1);
    assert_eq!(
        c.dependencies.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["A", "B"]
    );
    assert_eq!(c.status, TaskStatus::Pending);

    let graph = registry.graph();
    assert_eq!(graph.dependencies_of("C"), Some(&c.dependencies));
    assert_eq!(graph.dependents_of("A"), &["B".to_string(), "C".to_string()]);
    assert_eq!(graph.tasks().collect::<Vec<_>>(), vec!["A", "B", "C"]);
}

#[test]
fn test_duplicate_task_is_rejected_without_changes() {
    init_tracing();
    let mut registry = registry_with_chain();

    let result = registry.add_task("B", 1, ["A"]);
    match result {
        Err(TaskQueueError::DuplicateTask(id)) => assert_eq!(id, "B"),
        other => panic!("Expected DuplicateTask, got: {:?}", other),
    }

    let b = registry.get("B").unwrap();
    assert_eq!(b.priority, 2);
    assert!(b.dependencies.contains("A"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_unknown_dependency_is_rejected_without_changes() {
    init_tracing();
    let mut registry = registry_with_chain();

    let result = registry.add_task("D", 2, ["A", "Missing"]);
    match result {
        Err(TaskQueueError::UnknownDependency { task, dependency }) => {
            assert_eq!(task, "D");
            assert_eq!(dependency, "Missing");
        }
        other => panic!("Expected UnknownDependency, got: {:?}", other),
    }

    assert!(!registry.contains("D"));
    assert!(!registry.graph().contains("D"));
    // No dependent edge was left behind on A.
    assert_eq!(registry.graph().dependents_of("A").len(), 2);
}

#[test]
fn test_forward_reference_is_rejected() {
    let mut registry = TaskRegistry::new();
    let result = registry.add_task("B", 2, ["A"]);
    assert!(matches!(
        result,
        Err(TaskQueueError::UnknownDependency { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_remove_task_scrubs_references() {
    init_tracing();
    let mut registry = registry_with_chain();

    let removed = registry.remove_task("A").expect("A was registered");
    assert_eq!(removed.id, "A");

    assert!(!registry.contains("A"));
    assert!(!registry.graph().contains("A"));
    for task in registry.tasks().values() {
        assert!(
            !task.dependencies.contains("A"),
            "{} still depends on removed task A",
            task.id
        );
        let graph_deps = registry.graph().dependencies_of(&task.id).unwrap();
        assert!(!graph_deps.contains("A"));
    }
    assert_eq!(registry.graph().dependents_of("B"), &["C".to_string()]);
}

#[test]
fn test_remove_unknown_task_is_noop() {
    let mut registry = registry_with_chain();

    assert!(registry.remove_task("Nope").is_none());
    assert!(registry.remove_task("Nope").is_none());
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_replace_update_redefines_task() {
    init_tracing();
    let mut registry = registry_with_chain();

    registry
        .update_task("B", 5, Vec::<String>::new(), UpdateMode::Replace)
        .unwrap();

    let b = registry.get("B").unwrap();
    assert_eq!(b.priority, 5);
    assert!(b.dependencies.is_empty());

    // The intermediate removal scrubbed B from C, and B moved to the end.
    assert!(!registry.get("C").unwrap().dependencies.contains("B"));
    assert_eq!(
        registry.tasks().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["A", "C", "B"]
    );
}

#[test]
fn test_failed_replace_update_leaves_task_deleted() {
    let mut registry = registry_with_chain();

    let result = registry.update_task("B", 2, ["Missing"], UpdateMode::Replace);
    assert!(matches!(
        result,
        Err(TaskQueueError::UnknownDependency { .. })
    ));

    assert!(!registry.contains("B"));
    assert!(!registry.get("C").unwrap().dependencies.contains("B"));
}

#[test]
fn test_replace_update_rejects_self_dependency() {
    let mut registry = registry_with_chain();

    let result = registry.update_task("B", 2, ["B"], UpdateMode::Replace);
    match result {
        Err(TaskQueueError::UnknownDependency { task, dependency }) => {
            assert_eq!(task, "B");
            assert_eq!(dependency, "B");
        }
        other => panic!("Expected UnknownDependency, got: {:?}", other),
    }
    assert!(!registry.contains("B"));
}

#[test]
fn test_atomic_update_keeps_position_and_dependents() {
    init_tracing();
    let mut registry = registry_with_chain();

    registry
        .update_task("B", 7, Vec::<String>::new(), UpdateMode::Atomic)
        .unwrap();

    let b = registry.get("B").unwrap();
    assert_eq!(b.priority, 7);
    assert!(b.dependencies.is_empty());
    assert!(registry.get("C").unwrap().dependencies.contains("B"));
    assert_eq!(
        registry.tasks().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
    assert_eq!(registry.graph().dependents_of("A"), &["C".to_string()]);
    assert_eq!(registry.graph().dependents_of("B"), &["C".to_string()]);
}

#[test]
fn test_failed_atomic_update_changes_nothing() {
    let mut registry = registry_with_chain();
    let before = registry.get("B").cloned();

    let result = registry.update_task("B", 9, ["Missing"], UpdateMode::Atomic);
    assert!(matches!(
        result,
        Err(TaskQueueError::UnknownDependency { .. })
    ));

    assert_eq!(registry.get("B").cloned(), before);
    assert!(registry.get("C").unwrap().dependencies.contains("B"));

    let self_dep = registry.update_task("B", 9, ["B"], UpdateMode::Atomic);
    assert!(matches!(
        self_dep,
        Err(TaskQueueError::UnknownDependency { .. })
    ));
    assert_eq!(registry.get("B").cloned(), before);
}

#[test]
fn test_update_of_unknown_task_adds_it() {
    for mode in [UpdateMode::Replace, UpdateMode::Atomic] {
        let mut registry = registry_with_chain();
        registry.update_task("Z", 1, ["C"], mode).unwrap();
        assert!(registry.contains("Z"));
        assert_eq!(registry.graph().dependents_of("C"), &["Z".to_string()]);
    }
}

#[test]
fn test_mark_done() {
    let mut registry = registry_with_chain();

    assert!(registry.mark_done("A"));
    assert!(registry.get("A").unwrap().is_done());
    assert!(!registry.mark_done("Missing"));
}

#[test]
fn test_cycles_reported_after_atomic_update() {
    let mut registry = TaskRegistry::new();
    registry.add_task("A", 1, Vec::<String>::new()).unwrap();
    registry.add_task("B", 1, ["A"]).unwrap();
    registry.add_task("C", 1, Vec::<String>::new()).unwrap();
    assert!(registry.graph().cycles().is_empty());

    registry
        .update_task("A", 1, ["B"], UpdateMode::Atomic)
        .unwrap();

    assert_eq!(
        registry.graph().cycles(),
        vec![vec!["A".to_string(), "B".to_string()]]
    );
}
