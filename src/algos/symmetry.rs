// Symmetric-tree check: paired recursive descent and paired iterative queue
//
// Every step compares two node pointers as a pair. Both-null is a match with
// no further descent; exactly-one-null and unequal values fail immediately,
// and generation halts at the first failing pair.

use crate::structure::Tree;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};
use std::collections::VecDeque;

pub fn recursive(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree is symmetric")
                .result(StepResult::Verdict(true)),
        );
        return rec.finish();
    };

    let symmetric = check_pair(tree, &mut rec, tree.left(root), tree.right(root));
    if symmetric {
        rec.push(
            StepBuilder::new(Action::Complete, "every mirror pair matched, tree is symmetric")
                .result(StepResult::Verdict(true)),
        );
    }
    rec.finish()
}

/// Compare one mirror pair; on success schedule the two sub-pairs
/// (left-vs-right, right-vs-left). Returns false once a violation step has
/// been emitted so no further steps follow.
fn check_pair(tree: &Tree, rec: &mut Recorder, a: Option<usize>, b: Option<usize>) -> bool {
    match pair_outcome(tree, a, b) {
        PairOutcome::BothNull => {
            rec.push(
                StepBuilder::new(Action::Compare, "both sides null, mirror holds")
                    .pointer("left", None)
                    .pointer("right", None),
            );
            true
        }
        PairOutcome::Match(x, y) => {
            rec.push(
                StepBuilder::new(
                    Action::Compare,
                    format!(
                        "node {} and node {} both carry value {}",
                        x,
                        y,
                        tree.value(x)
                    ),
                )
                .pointer("left", Some(x))
                .pointer("right", Some(y)),
            );
            check_pair(tree, rec, tree.left(x), tree.right(y))
                && check_pair(tree, rec, tree.right(x), tree.left(y))
        }
        PairOutcome::Mismatch(reason) => {
            rec.push(
                StepBuilder::new(Action::Violation, reason)
                    .pointer("left", a)
                    .pointer("right", b)
                    .result(StepResult::Verdict(false)),
            );
            false
        }
    }
}

pub fn iterative(tree: &Tree) -> Trace {
    let mut rec = Recorder::new();

    let Some(root) = tree.root() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty tree is symmetric")
                .result(StepResult::Verdict(true)),
        );
        return rec.finish();
    };

    let mut queue: VecDeque<(Option<usize>, Option<usize>)> = VecDeque::new();
    queue.push_back((tree.left(root), tree.right(root)));

    while let Some((a, b)) = queue.pop_front() {
        match pair_outcome(tree, a, b) {
            PairOutcome::BothNull => {
                rec.push(
                    StepBuilder::new(Action::Compare, "both sides null, mirror holds")
                        .pointer("left", None)
                        .pointer("right", None)
                        .aux("pending", pending_ids(&queue)),
                );
            }
            PairOutcome::Match(x, y) => {
                queue.push_back((tree.left(x), tree.right(y)));
                queue.push_back((tree.right(x), tree.left(y)));
                rec.push(
                    StepBuilder::new(
                        Action::Compare,
                        format!(
                            "node {} and node {} both carry value {}",
                            x,
                            y,
                            tree.value(x)
                        ),
                    )
                    .pointer("left", Some(x))
                    .pointer("right", Some(y))
                    .aux("pending", pending_ids(&queue)),
                );
            }
            PairOutcome::Mismatch(reason) => {
                rec.push(
                    StepBuilder::new(Action::Violation, reason)
                        .pointer("left", a)
                        .pointer("right", b)
                        .result(StepResult::Verdict(false)),
                );
                return rec.finish();
            }
        }
    }

    rec.push(
        StepBuilder::new(Action::Complete, "every mirror pair matched, tree is symmetric")
            .result(StepResult::Verdict(true)),
    );
    rec.finish()
}

enum PairOutcome {
    BothNull,
    Match(usize, usize),
    Mismatch(String),
}

fn pair_outcome(tree: &Tree, a: Option<usize>, b: Option<usize>) -> PairOutcome {
    match (a, b) {
        (None, None) => PairOutcome::BothNull,
        (Some(x), None) => PairOutcome::Mismatch(format!(
            "node {} has no mirror partner, tree is asymmetric",
            x
        )),
        (None, Some(y)) => PairOutcome::Mismatch(format!(
            "node {} has no mirror partner, tree is asymmetric",
            y
        )),
        (Some(x), Some(y)) => {
            if tree.value(x) == tree.value(y) {
                PairOutcome::Match(x, y)
            } else {
                PairOutcome::Mismatch(format!(
                    "node {} (value {}) != node {} (value {})",
                    x,
                    tree.value(x),
                    y,
                    tree.value(y)
                ))
            }
        }
    }
}

/// Non-null ids still waiting in the pair queue, in order
fn pending_ids(queue: &VecDeque<(Option<usize>, Option<usize>)>) -> Vec<usize> {
    queue
        .iter()
        .flat_map(|(a, b)| [*a, *b])
        .flatten()
        .collect()
}
