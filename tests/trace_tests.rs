// Trace invariants that every generator must uphold

use algotty::algos::{bst, cycle, intersect, invert, kth_smallest, level_order, max_subarray,
    random_copy, right_view, rotate, symmetry};
use algotty::structure::{BoundedArray, IntersectingLists, List, Tree};
use algotty::trace::{Action, Trace};

fn sample_tree() -> Tree {
    Tree::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ])
}

fn sample_bst() -> Tree {
    Tree::from_level_order(&[Some(5), Some(3), Some(8), Some(2), Some(4)])
}

fn sample_symmetric() -> Tree {
    Tree::from_level_order(&[
        Some(1),
        Some(2),
        Some(2),
        Some(3),
        Some(4),
        Some(4),
        Some(3),
    ])
}

/// Every algorithm/variant combination over a representative input
fn all_traces() -> Vec<(&'static str, Trace)> {
    let tree = sample_tree();
    let bst_tree = sample_bst();
    let mirror = sample_symmetric();
    let array = BoundedArray::new(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4]);
    let rotated = BoundedArray::new(vec![1, 2, 3, 4, 5, 6, 7]);
    let cyclic = List::from_values(&[3, 2, 0, -4], Some(1));
    let random = List::with_random(&[
        (7, None),
        (13, Some(0)),
        (11, Some(4)),
        (10, Some(2)),
        (1, Some(0)),
    ]);
    let lists = IntersectingLists::build(&[4, 1, 8, 4, 5], &[5, 6, 1, 8, 4, 5], 2, 3);

    vec![
        ("level-order:bfs", level_order::breadth_first(&tree)),
        ("level-order:dfs", level_order::depth_first(&tree)),
        ("invert:bfs", invert::breadth_first(&tree)),
        ("invert:dfs", invert::depth_first(&tree)),
        ("symmetry:recursive", symmetry::recursive(&mirror)),
        ("symmetry:iterative", symmetry::iterative(&mirror)),
        ("kth:stack", kth_smallest::explicit_stack(&bst_tree, 3)),
        ("kth:recursive", kth_smallest::recursive(&bst_tree, 3)),
        ("right-view:bfs", right_view::breadth_first(&tree)),
        ("right-view:dfs", right_view::depth_first(&tree)),
        ("max-subarray:kadane", max_subarray::kadane(&array)),
        ("max-subarray:divide", max_subarray::divide_and_conquer(&array)),
        ("rotate:aux", rotate::auxiliary(&rotated, 3)),
        ("rotate:cyclic", rotate::cyclic(&rotated, 3)),
        ("rotate:reversal", rotate::reversal(&rotated, 3)),
        ("cycle", cycle::detect(&cyclic)),
        ("intersect", intersect::find(&lists)),
        ("random-copy", random_copy::deep_copy(&random)),
        ("validate-bst:range", bst::range_check(&bst_tree)),
        ("validate-bst:inorder", bst::inorder_check(&bst_tree)),
    ]
}

#[test]
fn every_trace_is_non_empty() {
    for (name, trace) in all_traces() {
        assert!(!trace.is_empty(), "{} produced an empty trace", name);
    }
}

#[test]
fn sequence_numbers_are_contiguous_from_one() {
    for (name, trace) in all_traces() {
        for (index, step) in trace.steps().iter().enumerate() {
            assert_eq!(
                step.seq,
                index + 1,
                "{}: step at index {} carries seq {}",
                name,
                index,
                step.seq
            );
        }
    }
}

#[test]
fn terminal_action_closes_every_trace_exactly_once() {
    for (name, trace) in all_traces() {
        let last = trace.last().expect("non-empty trace");
        assert!(
            last.action.is_terminal(),
            "{}: final step is {:?}",
            name,
            last.action
        );
        for step in &trace.steps()[..trace.len() - 1] {
            assert!(
                !step.action.is_terminal(),
                "{}: terminal {:?} at seq {} before the end",
                name,
                step.action,
                step.seq
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let first = all_traces();
    let second = all_traces();
    for ((name, a), (_, b)) in first.iter().zip(second.iter()) {
        assert_eq!(a, b, "{} differs between identical runs", name);
    }
}

#[test]
fn aux_snapshots_are_copies_not_live_views() {
    // The first BFS step snapshots the queue holding only the root; later
    // steps see different contents, so the early snapshot must not change.
    let trace = level_order::breadth_first(&sample_tree());
    let first = trace.get(0).expect("first step");
    assert_eq!(first.action, Action::Enqueue);
    let queue = first.aux.first().expect("queue snapshot");
    assert_eq!(queue.name, "queue");
    assert_eq!(queue.ids, vec![0]);
}

#[test]
fn empty_inputs_yield_degenerate_terminal_traces() {
    let empty_tree = Tree::from_level_order(&[]);
    let empty_array = BoundedArray::new(Vec::new());
    let empty_list = List::from_values(&[], None);
    let empty_lists = IntersectingLists::build(&[], &[], 0, 0);

    let degenerate: Vec<(&str, Trace)> = vec![
        ("level-order:bfs", level_order::breadth_first(&empty_tree)),
        ("level-order:dfs", level_order::depth_first(&empty_tree)),
        ("invert:bfs", invert::breadth_first(&empty_tree)),
        ("invert:dfs", invert::depth_first(&empty_tree)),
        ("symmetry:recursive", symmetry::recursive(&empty_tree)),
        ("symmetry:iterative", symmetry::iterative(&empty_tree)),
        ("right-view:bfs", right_view::breadth_first(&empty_tree)),
        ("right-view:dfs", right_view::depth_first(&empty_tree)),
        ("max-subarray:kadane", max_subarray::kadane(&empty_array)),
        (
            "max-subarray:divide",
            max_subarray::divide_and_conquer(&empty_array),
        ),
        ("rotate:aux", rotate::auxiliary(&empty_array, 3)),
        ("rotate:cyclic", rotate::cyclic(&empty_array, 3)),
        ("rotate:reversal", rotate::reversal(&empty_array, 3)),
        ("cycle", cycle::detect(&empty_list)),
        ("intersect", intersect::find(&empty_lists)),
        ("random-copy", random_copy::deep_copy(&empty_list)),
        ("validate-bst:range", bst::range_check(&empty_tree)),
        ("validate-bst:inorder", bst::inorder_check(&empty_tree)),
    ]
    .into_iter()
    .collect();

    for (name, trace) in degenerate {
        assert!(
            trace.len() <= 2,
            "{}: empty input produced {} steps",
            name,
            trace.len()
        );
        let last = trace.last().expect("non-empty trace");
        assert!(
            last.action.is_terminal(),
            "{}: empty input did not end on a terminal step",
            name
        );
    }
}
