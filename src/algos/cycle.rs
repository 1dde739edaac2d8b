// Cycle-entry detection with Floyd's two-phase algorithm
//
// Phase one advances slow by one and fast by two until they collide or fast
// runs off the end. Phase two resets one pointer to the head and advances
// both one step at a time; the node where they coincide is the cycle entry.
// Iteration counts are capped so a malformed structure can never hang the
// generator.

use crate::structure::List;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

pub fn detect(list: &List) -> Trace {
    let mut rec = Recorder::new();

    let Some(head) = list.head() else {
        rec.push(
            StepBuilder::new(Action::Complete, "empty list has no cycle")
                .result(StepResult::Verdict(false)),
        );
        return rec.finish();
    };

    let cap = list.len() * 2 + 2;
    let mut slow = head;
    let mut fast = head;
    let mut iterations = 0usize;

    let meeting = loop {
        if iterations >= cap {
            break None;
        }
        iterations += 1;

        let Some(hop) = list.next(fast) else { break None };
        let Some(next_fast) = list.next(hop) else { break None };
        let Some(next_slow) = list.next(slow) else { break None };
        slow = next_slow;
        fast = next_fast;
        rec.push(
            StepBuilder::new(
                Action::Advance,
                format!("slow to node {}, fast to node {}", slow, fast),
            )
            .pointer("slow", Some(slow))
            .pointer("fast", Some(fast))
            .counter("iteration", iterations as i64),
        );

        if slow == fast {
            rec.push(
                StepBuilder::new(
                    Action::Meet,
                    format!("slow and fast collide at node {}, a cycle exists", slow),
                )
                .pointer("slow", Some(slow))
                .pointer("fast", Some(fast)),
            );
            break Some(slow);
        }
    };

    let Some(meeting) = meeting else {
        rec.push(
            StepBuilder::new(
                Action::Complete,
                "fast pointer ran off the end, the list has no cycle",
            )
            .result(StepResult::Verdict(false)),
        );
        return rec.finish();
    };

    // Phase two: from the head and the meeting point in lockstep.
    let mut from_head = head;
    let mut from_meeting = meeting;
    rec.push(
        StepBuilder::new(
            Action::Reset,
            format!("reset one pointer to head node {}", head),
        )
        .pointer("slow", Some(from_head))
        .pointer("fast", Some(from_meeting)),
    );

    let mut guard = 0usize;
    while from_head != from_meeting && guard < cap {
        guard += 1;
        from_head = match list.next(from_head) {
            Some(id) => id,
            None => break,
        };
        from_meeting = match list.next(from_meeting) {
            Some(id) => id,
            None => break,
        };
        rec.push(
            StepBuilder::new(
                Action::Advance,
                format!("both advance one: node {} and node {}", from_head, from_meeting),
            )
            .pointer("slow", Some(from_head))
            .pointer("fast", Some(from_meeting)),
        );
    }

    // The guard only trips on a structure no builder can produce; the found
    // step below assumes genuine coincidence.
    debug_assert_eq!(
        from_head, from_meeting,
        "phase two exceeded its iteration cap"
    );

    rec.push(
        StepBuilder::new(
            Action::Found,
            format!(
                "pointers coincide at node {} (value {}), the cycle entry",
                from_head,
                list.value(from_head)
            ),
        )
        .pointer("slow", Some(from_head))
        .pointer("fast", Some(from_meeting))
        .result(StepResult::Node(from_head)),
    );
    rec.finish()
}
