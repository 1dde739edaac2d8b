// Maximum subarray: Kadane's scan and divide-and-conquer
//
// Element magnitudes are bounded by the normalizer, so no running or
// cross-boundary sum over one bounded array can overflow i64.

use crate::structure::BoundedArray;
use crate::trace::{Action, Recorder, StepBuilder, StepResult, Trace};

/// Kadane's algorithm. One evaluate step per index carrying the previous and
/// new running sum and whether the window restarted; a separate update step
/// fires only when a new strict global best appears.
pub fn kadane(array: &BoundedArray) -> Trace {
    let mut rec = Recorder::new();
    let values = array.values();

    if values.is_empty() {
        rec.push(StepBuilder::new(
            Action::Complete,
            "empty array has no subarray",
        ));
        return rec.finish();
    }

    let mut running = 0i64;
    let mut window_start = 0usize;
    let mut best: Option<(i64, usize, usize)> = None;

    for (index, &value) in values.iter().enumerate() {
        let previous = running;
        let restarted = previous < 0;
        if restarted {
            running = value;
            window_start = index;
        } else {
            running = previous + value;
        }

        let description = if restarted {
            format!(
                "index {}: running sum {} would only hurt, restart window at {}",
                index, previous, value
            )
        } else {
            format!(
                "index {}: extend window, running sum {} + {} = {}",
                index, previous, value, running
            )
        };
        rec.push(
            StepBuilder::new(Action::Evaluate, description)
                .counter("index", index as i64)
                .counter("previous", previous)
                .counter("running", running)
                .counter("restarted", i64::from(restarted)),
        );

        let improved = best.map_or(true, |(sum, _, _)| running > sum);
        if improved {
            best = Some((running, window_start, index));
            rec.push(
                StepBuilder::new(
                    Action::Update,
                    format!(
                        "new global best {} over indices [{}, {}]",
                        running, window_start, index
                    ),
                )
                .counter("best", running)
                .result(StepResult::Range {
                    sum: running,
                    start: window_start,
                    end: index,
                }),
            );
        }
    }

    // values is non-empty so the first index always set a best
    let (sum, start, end) = best.unwrap_or((0, 0, 0));
    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("best subarray sums to {} over indices [{}, {}]", sum, start, end),
        )
        .result(StepResult::Range { sum, start, end }),
    );
    rec.finish()
}

/// Divide-and-conquer. Each merge carries the left, right and cross-boundary
/// candidates; ties resolve left, then right, then strictly-greater cross.
pub fn divide_and_conquer(array: &BoundedArray) -> Trace {
    let mut rec = Recorder::new();
    let values = array.values();

    if values.is_empty() {
        rec.push(StepBuilder::new(
            Action::Complete,
            "empty array has no subarray",
        ));
        return rec.finish();
    }

    let (sum, start, end) = solve(&mut rec, values, 0, values.len() - 1);
    rec.push(
        StepBuilder::new(
            Action::Complete,
            format!("best subarray sums to {} over indices [{}, {}]", sum, start, end),
        )
        .result(StepResult::Range { sum, start, end }),
    );
    rec.finish()
}

/// Best subarray of the inclusive range `[lo, hi]`
fn solve(rec: &mut Recorder, values: &[i64], lo: usize, hi: usize) -> (i64, usize, usize) {
    if lo == hi {
        rec.push(
            StepBuilder::new(
                Action::Base,
                format!("single element {} at index {}", values[lo], lo),
            )
            .counter("lo", lo as i64)
            .counter("hi", hi as i64),
        );
        return (values[lo], lo, lo);
    }

    let mid = lo + (hi - lo) / 2;
    rec.push(
        StepBuilder::new(
            Action::Split,
            format!("split [{}, {}] at {}", lo, hi, mid),
        )
        .counter("lo", lo as i64)
        .counter("mid", mid as i64)
        .counter("hi", hi as i64),
    );

    let left = solve(rec, values, lo, mid);
    let right = solve(rec, values, mid + 1, hi);
    let cross = cross_candidate(values, lo, mid, hi);

    let winner = if left.0 >= right.0 && left.0 >= cross.0 {
        ("left", left)
    } else if right.0 >= cross.0 {
        ("right", right)
    } else {
        ("cross", cross)
    };

    rec.push(
        StepBuilder::new(
            Action::Merge,
            format!(
                "merge [{}, {}]: left {}, right {}, cross {} -> {} wins with {}",
                lo, hi, left.0, right.0, cross.0, winner.0, winner.1 .0
            ),
        )
        .counter("left", left.0)
        .counter("right", right.0)
        .counter("cross", cross.0)
        .counter("winner", winner.1 .0),
    );
    winner.1
}

/// Best suffix of `[lo, mid]` plus best prefix of `[mid+1, hi]`
fn cross_candidate(values: &[i64], lo: usize, mid: usize, hi: usize) -> (i64, usize, usize) {
    let mut sum = 0i64;
    let mut best_left = values[mid];
    let mut left_index = mid;
    for index in (lo..=mid).rev() {
        sum += values[index];
        if sum > best_left || index == mid {
            best_left = sum;
            left_index = index;
        }
    }

    sum = 0;
    let mut best_right = values[mid + 1];
    let mut right_index = mid + 1;
    for (index, &value) in values.iter().enumerate().take(hi + 1).skip(mid + 1) {
        sum += value;
        if sum > best_right || index == mid + 1 {
            best_right = sum;
            right_index = index;
        }
    }

    (best_left + best_right, left_index, right_index)
}
