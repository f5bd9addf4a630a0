//! Help view rendering

use crate::runner::task::{HelpView, TaskId, TaskKind, TaskTree};
use colored::Colorize;

/// Print a help view for a task subtree
pub fn print_help(tree: &TaskTree, view: &HelpView) {
    let scope = view.scope;

    // General
    println!("{}", tree.qualified_name(scope).as_str().bold());
    println!("{}", "\n---".bold());
    let desc = &tree.node(scope).desc;
    if !desc.is_empty() {
        println!("{}", "\nDescription\n".bold());
        println!("{}", desc);
    }

    // Vars
    let mut header = false;
    for task in subtree(tree, scope) {
        if tree.node(task).kind != TaskKind::Variable {
            continue;
        }
        if !header {
            println!("{}", "\nVars\n".bold());
            header = true;
        }
        println!("{}", tree.qualified_name(task));
    }

    // Tasks
    let mut header = false;
    for task in subtree(tree, scope) {
        let node = tree.node(task);
        if node.name.is_empty() || node.kind == TaskKind::Variable {
            continue;
        }
        if !header {
            println!("{}", "\nTasks\n".bold());
            header = true;
        }
        let mut message = tree.qualified_name(task);
        if node.optional {
            message.push_str(" (optional)");
        }
        if let Some(filters) = &view.filters {
            if filters.pick.contains(&task) {
                message.push_str(" (picked)");
            }
            if filters.enable.contains(&task) {
                message.push_str(" (enabled)");
            }
            if filters.disable.contains(&task) {
                message.push_str(" (disabled)");
            }
        }
        if task == view.selected {
            message.push_str(" (selected)");
            println!("{}", message.as_str().bold());
        } else {
            println!("{}", message);
        }
    }

    // Execution plan
    if let Some(plan) = &view.plan {
        println!("{}", "\nExecution Plan\n".bold());
        println!("{}", plan.explain());
    }
}

/// The scope task followed by its composite-inclusive descendants
fn subtree(tree: &TaskTree, scope: TaskId) -> impl Iterator<Item = TaskId> {
    std::iter::once(scope).chain(tree.flatten_childs_with_composite(scope))
}
