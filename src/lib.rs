// src/lib.rs

pub mod assign;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod queue;
pub mod registry;
pub mod scheduler;
pub mod types;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::assign::AssignmentTable;
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ScenarioFile;
use crate::registry::TaskId;

pub use crate::errors::TaskQueueError;
pub use crate::queue::{SharedTaskQueue, TaskQueue};
pub use crate::types::{QueueOptions, ReassignScope, UpdateMode};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - scenario loading
/// - queue construction and scenario replay
/// - rendering of the execution order and assignment table
pub fn run(args: CliArgs) -> Result<()> {
    let scenario = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&scenario);
        return Ok(());
    }

    let queue = apply_scenario(&scenario)?;

    for cycle in queue.registry().graph().cycles() {
        warn!(?cycle, "dependency cycle; these tasks are left out of the order");
    }

    println!("{}", render_order(&queue.execution_order()));
    if !args.order_only {
        print!("{}", render_assignments(queue.assignments()));
    }

    Ok(())
}

/// Replay a scenario on a fresh queue.
///
/// Order: tasks, updates, done marks, node additions, node removals, then a
/// final assignment run. Registry errors stop the replay and are returned
/// as-is.
pub fn apply_scenario(scenario: &ScenarioFile) -> crate::errors::Result<TaskQueue> {
    let mut queue = TaskQueue::with_options(scenario.config);

    for entry in scenario.task.iter() {
        queue.add_task(&entry.id, entry.priority, entry.after.iter().cloned())?;
    }
    for entry in scenario.update.iter() {
        queue.update_task(&entry.id, entry.priority, entry.after.iter().cloned())?;
    }
    for id in scenario.done.iter() {
        if !queue.mark_done(id) {
            warn!(task = %id, "cannot mark unknown task as done; ignoring");
        }
    }
    for node in scenario.nodes.iter() {
        queue.add_node(node);
    }
    for node in scenario.failed_nodes.iter() {
        let released = queue.remove_node(node);
        debug!(node = %node, ?released, "scenario: node failed");
    }

    queue.assign_all();
    info!(
        tasks = queue.registry().len(),
        nodes = queue.nodes().len(),
        "scenario applied"
    );

    Ok(queue)
}

/// `Execution Order: [A, B, C]`.
pub fn render_order(order: &[TaskId]) -> String {
    format!("Execution Order: [{}]", order.join(", "))
}

/// One `node: [tasks]` line per node, in pool order.
pub fn render_assignments(table: &AssignmentTable) -> String {
    let mut out = String::new();
    for (node, tasks) in table.iter() {
        out.push_str(&format!("{node}: [{}]\n", tasks.join(", ")));
    }
    out
}

/// Simple dry-run output: print options, tasks, updates and nodes.
fn print_dry_run(scenario: &ScenarioFile) {
    println!("taskqueue dry-run");
    println!("  config.update_mode = {:?}", scenario.config.update_mode);
    println!("  config.reassign_scope = {:?}", scenario.config.reassign_scope);
    println!();

    println!("tasks ({}):", scenario.task.len());
    for entry in scenario.task.iter() {
        println!("  - {} (priority {})", entry.id, entry.priority);
        if !entry.after.is_empty() {
            println!("      after: {:?}", entry.after);
        }
    }

    if !scenario.update.is_empty() {
        println!("updates ({}):", scenario.update.len());
        for entry in scenario.update.iter() {
            println!("  - {} -> priority {}, after {:?}", entry.id, entry.priority, entry.after);
        }
    }

    if !scenario.done.is_empty() {
        println!("done: {:?}", scenario.done);
    }
    println!("nodes: {:?}", scenario.nodes);
    if !scenario.failed_nodes.is_empty() {
        println!("failed nodes: {:?}", scenario.failed_nodes);
    }

    debug!("dry-run complete (scenario not applied)");
}
