// Two-list intersection via synchronized pointer switch-over
//
// Each pointer walks its own list and, on exhaustion, switches to the head of
// the other list; both then cover len(A) + len(B) nodes and align on the
// shared tail. Pointer equality, including simultaneous null, is terminal.

use crate::structure::IntersectingLists;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

pub fn find(lists: &IntersectingLists) -> Trace {
    let mut rec = Recorder::new();

    let mut pa = lists.head_a();
    let mut pb = lists.head_b();

    // Immediate equality at initialization is its own case, not the loop.
    if pa == pb {
        rec.push(
            StepBuilder::new(Action::Compare, "pointers are equal before any movement")
                .pointer("a", pa)
                .pointer("b", pb),
        );
        push_terminal(&mut rec, lists, pa);
        return rec.finish();
    }

    let cap = lists.node_count() * 2 + 2;
    let mut iterations = 0usize;

    while pa != pb && iterations < cap {
        iterations += 1;

        let (next_a, switched_a) = match pa {
            Some(id) => (lists.next(id), false),
            None => (lists.head_b(), true),
        };
        let (next_b, switched_b) = match pb {
            Some(id) => (lists.next(id), false),
            None => (lists.head_a(), true),
        };
        pa = next_a;
        pb = next_b;

        let description = match (switched_a, switched_b) {
            (true, false) => "pointer A exhausted its list, switches to head of B".to_string(),
            (false, true) => "pointer B exhausted its list, switches to head of A".to_string(),
            (true, true) => "both pointers switch lists".to_string(),
            (false, false) => format!(
                "advance: pointer A to {}, pointer B to {}",
                describe(pa),
                describe(pb)
            ),
        };
        rec.push(
            StepBuilder::new(Action::Advance, description)
                .pointer("a", pa)
                .pointer("b", pb)
                .counter("iteration", iterations as i64),
        );
    }

    // The cap only trips on a structure no builder can produce; the terminal
    // steps below assume genuine convergence.
    debug_assert_eq!(pa, pb, "pointer walk exceeded its iteration cap");

    rec.push(
        StepBuilder::new(
            Action::Compare,
            format!("pointers agree at {}", describe(pa)),
        )
        .pointer("a", pa)
        .pointer("b", pb),
    );
    push_terminal(&mut rec, lists, pa);
    rec.finish()
}

fn push_terminal(rec: &mut Recorder, lists: &IntersectingLists, at: Option<usize>) {
    match at {
        Some(id) => rec.push(
            StepBuilder::new(
                Action::Found,
                format!(
                    "lists intersect at node {} (value {})",
                    id,
                    lists.value(id)
                ),
            )
            .pointer("a", Some(id))
            .pointer("b", Some(id))
            .result(StepResult::Node(id)),
        ),
        None => rec.push(
            StepBuilder::new(
                Action::Complete,
                "both pointers reached null together, the lists do not intersect",
            )
            .result(StepResult::Verdict(false)),
        ),
    }
}

fn describe(pointer: Option<usize>) -> String {
    match pointer {
        Some(id) => format!("node {}", id),
        None => "null".to_string(),
    }
}
