// Kth smallest element via inorder traversal
//
// The visit counter increments only on the in-order visit; generation stops
// the instant it reaches k, and nodes beyond that point are never processed.

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

/// Iterative variant with an explicit work stack, snapshotted on every push
pub fn explicit_stack(tree: &Tree, k: usize) -> Trace {
    let mut rec = Recorder::new();

    if tree.is_empty() {
        rec.push(StepBuilder::new(Action::Complete, "empty tree, nothing to select"));
        return rec.finish();
    }

    let mut stack: Vec<usize> = Vec::new();
    let mut current = tree.root();
    let mut visited = 0usize;

    while current.is_some() || !stack.is_empty() {
        while let Some(id) = current {
            stack.push(id);
            rec.push(
                StepBuilder::new(
                    Action::Descend,
                    format!("push node {} and descend left", id),
                )
                .pointer("current", Some(id))
                .aux("stack", stack.clone())
                .counter("visited", visited as i64),
            );
            current = tree.left(id);
        }

        let Some(id) = stack.pop() else { break };
        visited += 1;
        if visited == k {
            rec.push(
                StepBuilder::new(
                    Action::Found,
                    format!(
                        "visit #{} is node {} (value {}), the kth smallest",
                        visited,
                        id,
                        tree.value(id)
                    ),
                )
                .pointer("current", Some(id))
                .counter("visited", visited as i64)
                .result(StepResult::Node(id)),
            );
            return rec.finish();
        }
        rec.push(
            StepBuilder::new(
                Action::Visit,
                format!("in-order visit #{}: node {} (value {})", visited, id, tree.value(id)),
            )
            .pointer("current", Some(id))
            .aux("stack", stack.clone())
            .counter("visited", visited as i64),
        );
        current = tree.right(id);
    }

    // k is validated against the node count, so the loop cannot exhaust
    rec.push(StepBuilder::new(
        Action::Complete,
        "traversal exhausted before reaching k",
    ));
    rec.finish()
}

/// Recursive variant; unwinds without further steps once the kth visit fires
pub fn recursive(tree: &Tree, k: usize) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(StepBuilder::new(Action::Complete, "empty tree, nothing to select"));
        return rec.finish();
    };

    let mut visited = 0usize;
    let found = walk(tree, &mut rec, root, k, &mut visited);
    if found.is_none() {
        rec.push(StepBuilder::new(
            Action::Complete,
            "traversal exhausted before reaching k",
        ));
    }
    rec.finish()
}

fn walk(tree: &Tree, rec: &mut Recorder, id: usize, k: usize, visited: &mut usize) -> Option<usize> {
    rec.push(
        StepBuilder::new(Action::Descend, format!("descend into node {}", id))
            .pointer("current", Some(id))
            .counter("visited", *visited as i64),
    );

    if let Some(left) = tree.left(id) {
        if let Some(found) = walk(tree, rec, left, k, visited) {
            return Some(found);
        }
    }

    *visited += 1;
    if *visited == k {
        rec.push(
            StepBuilder::new(
                Action::Found,
                format!(
                    "visit #{} is node {} (value {}), the kth smallest",
                    visited,
                    id,
                    tree.value(id)
                ),
            )
            .pointer("current", Some(id))
            .counter("visited", *visited as i64)
            .result(StepResult::Node(id)),
        );
        return Some(id);
    }
    rec.push(
        StepBuilder::new(
            Action::Visit,
            format!("in-order visit #{}: node {} (value {})", visited, id, tree.value(id)),
        )
        .pointer("current", Some(id))
        .counter("visited", *visited as i64),
    );

    if let Some(right) = tree.right(id) {
        if let Some(found) = walk(tree, rec, right, k, visited) {
            return Some(found);
        }
    }
    None
}
