// BST validation: range propagation and inorder-monotonic checks
//
// Both halt at the first violation with a dedicated failure step; success
// requires the entire tree to be traversed without one.

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

/// Range propagation: every frame carries a live (min, max) bound, tightened
/// to (min, value) on left descent and (value, max) on right descent. A node
/// violates when its value is not strictly inside the inherited bound.
pub fn range_check(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree is a valid BST")
                .result(StepResult::Verdict(true)),
        );
        return rec.finish();
    };

    let valid = check_range(tree, &mut rec, root, None, None);
    if valid {
        rec.push(
            StepBuilder::new(Action::Complete, "every node sits inside its bound, valid BST")
                .result(StepResult::Verdict(true)),
        );
    }
    rec.finish()
}

fn check_range(
    tree: &Tree,
    rec: &mut Recorder,
    id: usize,
    min: Option<i64>,
    max: Option<i64>,
) -> bool {
    let value = tree.value(id);
    let below = min.is_some_and(|bound| value <= bound);
    let above = max.is_some_and(|bound| value >= bound);

    if below || above {
        rec.push(
            StepBuilder::new(
                Action::Violation,
                format!(
                    "node {} (value {}) escapes its bound {}",
                    id,
                    value,
                    describe_bound(min, max)
                ),
            )
            .pointer("current", Some(id))
            .result(StepResult::Verdict(false)),
        );
        return false;
    }

    rec.push(
        StepBuilder::new(
            Action::Compare,
            format!(
                "node {} (value {}) sits inside bound {}",
                id,
                value,
                describe_bound(min, max)
            ),
        )
        .pointer("current", Some(id)),
    );

    if let Some(left) = tree.left(id) {
        if !check_range(tree, rec, left, min, Some(value)) {
            return false;
        }
    }
    if let Some(right) = tree.right(id) {
        if !check_range(tree, rec, right, Some(value), max) {
            return false;
        }
    }
    true
}

fn describe_bound(min: Option<i64>, max: Option<i64>) -> String {
    let low = min.map_or("-inf".to_string(), |bound| bound.to_string());
    let high = max.map_or("+inf".to_string(), |bound| bound.to_string());
    format!("({}, {})", low, high)
}

/// Inorder-monotonic: only the previously emitted value is tracked; the
/// current value must be strictly greater.
pub fn inorder_check(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    if tree.is_empty() {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree is a valid BST")
                .result(StepResult::Verdict(true)),
        );
        return rec.finish();
    }

    let mut stack: Vec<usize> = Vec::new();
    let mut current = tree.root();
    let mut previous: Option<(usize, i64)> = None;

    while current.is_some() || !stack.is_empty() {
        while let Some(id) = current {
            stack.push(id);
            current = tree.left(id);
        }
        let Some(id) = stack.pop() else { break };
        let value = tree.value(id);

        match previous {
            Some((prev_id, prev_value)) if value <= prev_value => {
                rec.push(
                    StepBuilder::new(
                        Action::Violation,
                        format!(
                            "node {} (value {}) is not greater than node {} (value {})",
                            id, value, prev_id, prev_value
                        ),
                    )
                    .pointer("current", Some(id))
                    .pointer("previous", Some(prev_id))
                    .result(StepResult::Verdict(false)),
                );
                return rec.finish();
            }
            _ => {
                let previous_counter = previous.map(|(_, prev_value)| prev_value);
                let mut step = StepBuilder::new(
                    Action::Visit,
                    format!("in-order visit: node {} (value {})", id, value),
                )
                .pointer("current", Some(id))
                .aux("stack", stack.clone())
                .counter("value", value);
                if let Some(prev_value) = previous_counter {
                    step = step.counter("previous", prev_value);
                }
                rec.push(step);
                previous = Some((id, value));
            }
        }
        current = tree.right(id);
    }

    rec.push(
        StepBuilder::new(
            Action::Complete,
            "in-order values strictly increase, valid BST",
        )
        .result(StepResult::Verdict(true)),
    );
    rec.finish()
}
