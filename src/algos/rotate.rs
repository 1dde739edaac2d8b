// Array rotation: auxiliary-array, cyclic-replacement and triple-reversal variants
//
// All three derive from the same normalized amount: k mod n, with negative k
// wrapped into [0, n).

use crate::structure::BoundedArray;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

/// Wrap any rotation amount into `[0, n)`
pub fn normalized_amount(k: i64, n: usize) -> usize {
    if n == 0 {
        0
    } else {
        k.rem_euclid(n as i64) as usize
    }
}

fn empty_trace() -> Trace {
    let mut rec = Recorder::new();
    rec.push(
        StepBuilder::new(Action::Complete, "empty array, nothing to rotate")
            .result(StepResult::Array(Vec::new())),
    );
    rec.finish()
}

/// Auxiliary-array placement: each value is placed straight into its rotated
/// slot of a scratch array, which then replaces the original wholesale.
pub fn auxiliary(array: &BoundedArray, k: i64) -> Trace {
    let mut rec = Recorder::new();
    let values = array.values();
    let n = values.len();
    if n == 0 {
        return empty_trace();
    }

    let shift = normalized_amount(k, n);
    let mut aux = vec![0i64; n];
    for (index, &value) in values.iter().enumerate() {
        let target = (index + shift) % n;
        aux[target] = value;
        rec.push(
            StepBuilder::new(
                Action::Place,
                format!("place value {} from index {} into auxiliary index {}", value, index, target),
            )
            .counter("from", index as i64)
            .counter("to", target as i64)
            .counter("shift", shift as i64)
            .array(&aux),
        );
    }

    rec.push(
        StepBuilder::new(Action::Update, "copy auxiliary array back over the original")
            .array(&aux),
    );
    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("rotation by {} finished", shift),
        )
        .result(StepResult::Array(aux)),
    );
    rec.finish()
}

/// In-place cyclic replacement. One start-cycle step per unvisited starting
/// index; the run ends when the moved count reaches n. A single array may need
/// several disjoint cycles: exactly gcd(n, k mod n) of them.
pub fn cyclic(array: &BoundedArray, k: i64) -> Trace {
    let mut rec = Recorder::new();
    let values = array.values();
    let n = values.len();
    if n == 0 {
        return empty_trace();
    }

    let shift = normalized_amount(k, n);
    let mut working = values.to_vec();
    let mut moved = 0usize;
    let mut start = 0usize;

    while moved < n {
        rec.push(
            StepBuilder::new(
                Action::CycleStart,
                format!("open a new cycle at unvisited index {}", start),
            )
            .counter("start", start as i64)
            .counter("moved", moved as i64)
            .array(&working),
        );

        let mut current = start;
        let mut carry = working[start];
        loop {
            let target = (current + shift) % n;
            std::mem::swap(&mut working[target], &mut carry);
            moved += 1;
            rec.push(
                StepBuilder::new(
                    Action::Place,
                    format!("drop carried value {} at index {}", working[target], target),
                )
                .counter("index", target as i64)
                .counter("moved", moved as i64)
                .array(&working),
            );
            current = target;
            if current == start {
                break;
            }
        }
        start += 1;
    }

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("all {} values moved, rotation by {} finished", n, shift),
        )
        .result(StepResult::Array(working)),
    );
    rec.finish()
}

/// Triple reversal: reverse the whole array, then the first k values, then
/// the rest.
pub fn reversal(array: &BoundedArray, k: i64) -> Trace {
    let mut rec = Recorder::new();
    let values = array.values();
    let n = values.len();
    if n == 0 {
        return empty_trace();
    }

    let shift = normalized_amount(k, n);
    let mut working = values.to_vec();

    reverse_segment(&mut rec, &mut working, 0, n, "whole array");
    reverse_segment(&mut rec, &mut working, 0, shift, "first segment");
    reverse_segment(&mut rec, &mut working, shift, n, "second segment");

    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("rotation by {} finished", shift),
        )
        .result(StepResult::Array(working)),
    );
    rec.finish()
}

/// Reverse `working[lo..hi]` with one swap step per element pair
fn reverse_segment(rec: &mut Recorder, working: &mut [i64], lo: usize, hi: usize, label: &str) {
    if hi - lo < 2 {
        return;
    }
    let (mut left, mut right) = (lo, hi - 1);
    while left < right {
        working.swap(left, right);
        rec.push(
            StepBuilder::new(
                Action::Swap,
                format!("swap indices {} and {}", left, right),
            )
            .counter("left", left as i64)
            .counter("right", right as i64)
            .array(working),
        );
        left += 1;
        right -= 1;
    }
    rec.push(
        StepBuilder::new(
            Action::Reverse,
            format!("{} [{}, {}) reversed", label, lo, hi),
        )
        .array(working),
    );
}
