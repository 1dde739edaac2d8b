// Level-order traversal: BFS queue and DFS level-tracking recursion

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};
use std::collections::VecDeque;

/// Breadth-first variant. The queue is snapshotted into every step; the final
/// complete step carries the per-level result matrix.
pub fn breadth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree, nothing to traverse")
                .result(StepResult::Levels(Vec::new())),
        );
        return rec.finish();
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(root);
    rec.push(
        StepBuilder::new(
            Action::Enqueue,
            format!("enqueue root node {} (value {})", root, tree.value(root)),
        )
        .pointer("current", Some(root))
        .aux("queue", queue.iter().copied().collect()),
    );

    let mut levels: Vec<Vec<i64>> = Vec::new();
    while !queue.is_empty() {
        let width = queue.len();
        let mut level_values = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(id) = queue.pop_front() else { break };
            level_values.push(tree.value(id));
            rec.push(
                StepBuilder::new(
                    Action::Dequeue,
                    format!(
                        "dequeue node {} (value {}) into level {}",
                        id,
                        tree.value(id),
                        levels.len()
                    ),
                )
                .pointer("current", Some(id))
                .aux("queue", queue.iter().copied().collect())
                .counter("level", levels.len() as i64),
            );

            for child in [tree.left(id), tree.right(id)].into_iter().flatten() {
                queue.push_back(child);
                rec.push(
                    StepBuilder::new(
                        Action::Enqueue,
                        format!(
                            "enqueue child node {} (value {})",
                            child,
                            tree.value(child)
                        ),
                    )
                    .pointer("current", Some(id))
                    .aux("queue", queue.iter().copied().collect()),
                );
            }
        }
        levels.push(level_values);
    }

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("traversal finished with {} levels", levels.len()),
        )
        .result(StepResult::Levels(levels)),
    );
    rec.finish()
}

/// Depth-first variant: descend carries the level number, values are slotted
/// into the matrix row for their level as they are visited.
pub fn depth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree, nothing to traverse")
                .result(StepResult::Levels(Vec::new())),
        );
        return rec.finish();
    };

    let mut levels: Vec<Vec<i64>> = Vec::new();
    walk(tree, &mut rec, root, 0, &mut levels);

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("traversal finished with {} levels", levels.len()),
        )
        .result(StepResult::Levels(levels)),
    );
    rec.finish()
}

fn walk(tree: &Tree, rec: &mut Recorder, id: usize, level: usize, levels: &mut Vec<Vec<i64>>) {
    if level == levels.len() {
        levels.push(Vec::new());
    }
    levels[level].push(tree.value(id));
    rec.push(
        StepBuilder::new(
            Action::Visit,
            format!(
                "visit node {} (value {}) at level {}",
                id,
                tree.value(id),
                level
            ),
        )
        .pointer("current", Some(id))
        .counter("level", level as i64),
    );

    for child in [tree.left(id), tree.right(id)].into_iter().flatten() {
        rec.push(
            StepBuilder::new(
                Action::Descend,
                format!("descend from node {} to node {}", id, child),
            )
            .pointer("current", Some(child))
            .counter("level", level as i64 + 1),
        );
        walk(tree, rec, child, level + 1, levels);
        rec.push(
            StepBuilder::new(
                Action::Backtrack,
                format!("backtrack from node {} to node {}", child, id),
            )
            .pointer("current", Some(id))
            .counter("level", level as i64),
        );
    }
}
