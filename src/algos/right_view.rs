// Right-side view, tracked by node identity rather than value
//
// The BFS variant snapshots an entire level before deciding which node is
// last; the DFS variant visits right before left and records a depth only the
// first time it is newly reached. Results carry node ids so duplicate values
// can never alias.

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};
use std::collections::VecDeque;

pub fn breadth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree, view is empty")
                .result(StepResult::Nodes(Vec::new())),
        );
        return rec.finish();
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(root);
    let mut view: Vec<usize> = Vec::new();
    let mut depth = 0usize;

    while !queue.is_empty() {
        // The whole level is snapshotted before its last node is chosen.
        let level: Vec<usize> = queue.iter().copied().collect();
        rec.push(
            StepBuilder::new(
                Action::Visit,
                format!("snapshot level {}: {} node(s)", depth, level.len()),
            )
            .aux("level", level.clone())
            .counter("depth", depth as i64),
        );

        for _ in 0..level.len() {
            let Some(id) = queue.pop_front() else { break };
            for child in [tree.left(id), tree.right(id)].into_iter().flatten() {
                queue.push_back(child);
            }
        }

        if let Some(&last) = level.last() {
            view.push(last);
            rec.push(
                StepBuilder::new(
                    Action::Record,
                    format!(
                        "node {} (value {}) is last in level {}, visible from the right",
                        last,
                        tree.value(last),
                        depth
                    ),
                )
                .pointer("rightmost", Some(last))
                .counter("depth", depth as i64)
                .result(StepResult::Nodes(view.clone())),
            );
        }
        depth += 1;
    }

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("right-side view holds {} node(s)", view.len()),
        )
        .result(StepResult::Nodes(view)),
    );
    rec.finish()
}

pub fn depth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree, view is empty")
                .result(StepResult::Nodes(Vec::new())),
        );
        return rec.finish();
    };

    let mut view: Vec<usize> = Vec::new();
    walk(tree, &mut rec, root, 0, &mut view);

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("right-side view holds {} node(s)", view.len()),
        )
        .result(StepResult::Nodes(view)),
    );
    rec.finish()
}

/// Right child first; the first node to reach a new depth is the one visible
/// from the right.
fn walk(tree: &Tree, rec: &mut Recorder, id: usize, depth: usize, view: &mut Vec<usize>) {
    if depth == view.len() {
        view.push(id);
        rec.push(
            StepBuilder::new(
                Action::Record,
                format!(
                    "node {} (value {}) newly reaches depth {}, visible from the right",
                    id,
                    tree.value(id),
                    depth
                ),
            )
            .pointer("current", Some(id))
            .counter("depth", depth as i64)
            .result(StepResult::Nodes(view.clone())),
        );
    } else {
        rec.push(
            StepBuilder::new(
                Action::Visit,
                format!("node {} at depth {} is hidden behind a righter node", id, depth),
            )
            .pointer("current", Some(id))
            .counter("depth", depth as i64),
        );
    }

    for child in [tree.right(id), tree.left(id)].into_iter().flatten() {
        walk(tree, rec, child, depth + 1, view);
    }
}
