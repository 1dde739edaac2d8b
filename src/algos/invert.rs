// Tree inversion: every swap step exchanges one node's two child pointers atomically

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, Trace};
use std::collections::VecDeque;

/// Iterative breadth-first inversion. The processed set only grows; children
/// are enqueued after the swap, so each node is swapped exactly once.
pub fn breadth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(StepBuilder::new(Action::Complete, "empty tree, nothing to invert"));
        return rec.finish();
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(root);
    let mut processed: Vec<usize> = Vec::new();

    while let Some(id) = queue.pop_front() {
        let left = tree.left(id);
        let right = tree.right(id);
        processed.push(id);
        rec.push(
            StepBuilder::new(
                Action::Swap,
                format!(
                    "swap children of node {}: left {} <-> right {}",
                    id,
                    describe(left),
                    describe(right)
                ),
            )
            .pointer("current", Some(id))
            .pointer("new-left", right)
            .pointer("new-right", left)
            .aux("queue", queue.iter().copied().collect())
            .aux("processed", processed.clone()),
        );

        for child in [left, right].into_iter().flatten() {
            queue.push_back(child);
        }
    }

    rec.push(StepBuilder::new(
        Action::Complete,
        format!("inversion finished, {} nodes swapped", processed.len()),
    ));
    rec.finish()
}

/// Recursive depth-first inversion: swap at the node, then descend into both
/// subtrees.
pub fn depth_first(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(StepBuilder::new(Action::Complete, "empty tree, nothing to invert"));
        return rec.finish();
    };

    let mut processed: Vec<usize> = Vec::new();
    walk(tree, &mut rec, root, &mut processed);

    rec.push(StepBuilder::new(
        Action::Complete,
        format!("inversion finished, {} nodes swapped", processed.len()),
    ));
    rec.finish()
}

fn walk(tree: &Tree, rec: &mut Recorder, id: usize, processed: &mut Vec<usize>) {
    let left = tree.left(id);
    let right = tree.right(id);
    processed.push(id);
    rec.push(
        StepBuilder::new(
            Action::Swap,
            format!(
                "swap children of node {}: left {} <-> right {}",
                id,
                describe(left),
                describe(right)
            ),
        )
        .pointer("current", Some(id))
        .pointer("new-left", right)
        .pointer("new-right", left)
        .aux("processed", processed.clone()),
    );

    for child in [left, right].into_iter().flatten() {
        rec.push(
            StepBuilder::new(
                Action::Descend,
                format!("descend from node {} to node {}", id, child),
            )
            .pointer("current", Some(child)),
        );
        walk(tree, rec, child, processed);
    }
}

fn describe(child: Option<usize>) -> String {
    match child {
        Some(id) => format!("node {}", id),
        None => "null".to_string(),
    }
}
