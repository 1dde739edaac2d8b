// End-to-end scenarios: canonical inputs with known final results

use algotty::algos::{bst, cycle, intersect, invert, kth_smallest, level_order, max_subarray,
    random_copy, right_view, rotate, symmetry};
use algotty::input::{self, MAX_VALUE_MAGNITUDE};
use algotty::structure::{BoundedArray, IntersectingLists, List, Tree};
use algotty::trace::{Action, StepResult, Trace};

fn final_result(trace: &Trace) -> &StepResult {
    trace
        .last()
        .expect("non-empty trace")
        .result
        .as_ref()
        .expect("terminal step carries a result")
}

#[test]
fn level_order_groups_values_by_depth() {
    let tree = Tree::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ]);
    let expected = StepResult::Levels(vec![vec![3], vec![9, 20], vec![15, 7]]);

    let bfs = level_order::breadth_first(&tree);
    let dfs = level_order::depth_first(&tree);
    assert_eq!(final_result(&bfs), &expected);
    assert_eq!(final_result(&dfs), &expected);
}

#[test]
fn invert_swaps_every_node_once() {
    let tree = Tree::from_level_order(&[
        Some(4),
        Some(2),
        Some(7),
        Some(1),
        Some(3),
        Some(6),
        Some(9),
    ]);

    for trace in [invert::breadth_first(&tree), invert::depth_first(&tree)] {
        let swaps = trace
            .steps()
            .iter()
            .filter(|step| step.action == Action::Swap)
            .count();
        assert_eq!(swaps, tree.node_count(), "one swap per node");
        assert_eq!(trace.last().expect("last step").action, Action::Complete);
    }
}

#[test]
fn symmetry_accepts_a_mirror_and_rejects_a_broken_one() {
    let mirror = Tree::from_level_order(&[
        Some(1),
        Some(2),
        Some(2),
        Some(3),
        Some(4),
        Some(4),
        Some(3),
    ]);
    let broken = Tree::from_level_order(&[
        Some(1),
        Some(2),
        Some(2),
        None,
        Some(3),
        None,
        Some(3),
    ]);

    for trace in [symmetry::recursive(&mirror), symmetry::iterative(&mirror)] {
        assert_eq!(final_result(&trace), &StepResult::Verdict(true));
        assert_eq!(trace.last().expect("last step").action, Action::Complete);
    }
    for trace in [symmetry::recursive(&broken), symmetry::iterative(&broken)] {
        assert_eq!(final_result(&trace), &StepResult::Verdict(false));
        assert_eq!(trace.last().expect("last step").action, Action::Violation);
    }
}

#[test]
fn kth_smallest_lands_on_the_inorder_position() {
    // Inorder over this tree: node 3 (2), node 1 (3), node 4 (4), node 0 (5),
    // node 2 (8); the third smallest is node 4.
    let tree = Tree::from_level_order(&[Some(5), Some(3), Some(8), Some(2), Some(4)]);

    for trace in [
        kth_smallest::explicit_stack(&tree, 3),
        kth_smallest::recursive(&tree, 3),
    ] {
        let last = trace.last().expect("last step");
        assert_eq!(last.action, Action::Found);
        assert_eq!(final_result(&trace), &StepResult::Node(4));
    }
}

#[test]
fn right_view_tracks_node_identity() {
    // Values 1 and 4 appear once, but the view must carry ids so duplicate
    // values in other trees can never alias.
    let tree = Tree::from_level_order(&[
        Some(1),
        Some(2),
        Some(3),
        None,
        Some(5),
        None,
        Some(4),
    ]);
    let expected = StepResult::Nodes(vec![0, 2, 6]);

    assert_eq!(final_result(&right_view::breadth_first(&tree)), &expected);
    assert_eq!(final_result(&right_view::depth_first(&tree)), &expected);
}

#[test]
fn right_view_prefers_rightmost_among_duplicate_values() {
    // Both depth-1 nodes carry the value 2; only node 2 may be visible.
    let tree = Tree::from_level_order(&[Some(1), Some(2), Some(2)]);
    let expected = StepResult::Nodes(vec![0, 2]);

    assert_eq!(final_result(&right_view::breadth_first(&tree)), &expected);
    assert_eq!(final_result(&right_view::depth_first(&tree)), &expected);
}

#[test]
fn max_subarray_finds_the_classic_window() {
    let array = BoundedArray::new(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4]);

    let kadane = max_subarray::kadane(&array);
    assert_eq!(
        final_result(&kadane),
        &StepResult::Range {
            sum: 6,
            start: 3,
            end: 6
        }
    );

    let divide = max_subarray::divide_and_conquer(&array);
    match final_result(&divide) {
        StepResult::Range { sum, .. } => assert_eq!(*sum, 6),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn max_subarray_all_negative_picks_the_least_bad_element() {
    let array = BoundedArray::new(vec![-8, -3, -6, -2, -5]);

    for trace in [
        max_subarray::kadane(&array),
        max_subarray::divide_and_conquer(&array),
    ] {
        match final_result(&trace) {
            StepResult::Range { sum, start, end } => {
                assert_eq!((*sum, *start, *end), (-2, 3, 3));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}

#[test]
fn max_subarray_survives_extreme_magnitudes() {
    // The largest values the normalizer admits must sum without overflow.
    let literal = format!("[{m},-1,{m}]", m = MAX_VALUE_MAGNITUDE);
    let parsed = input::parse_array(&literal).expect("bounded extremes are valid");
    let array = BoundedArray::new(parsed.values);
    let expected = (2 * MAX_VALUE_MAGNITUDE - 1, 0usize, 2usize);

    for trace in [
        max_subarray::kadane(&array),
        max_subarray::divide_and_conquer(&array),
    ] {
        match final_result(&trace) {
            StepResult::Range { sum, start, end } => {
                assert_eq!((*sum, *start, *end), expected);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}

#[test]
fn all_rotation_variants_agree() {
    let array = BoundedArray::new(vec![1, 2, 3, 4, 5, 6, 7]);
    let expected = StepResult::Array(vec![5, 6, 7, 1, 2, 3, 4]);

    for trace in [
        rotate::auxiliary(&array, 3),
        rotate::cyclic(&array, 3),
        rotate::reversal(&array, 3),
    ] {
        assert_eq!(final_result(&trace), &expected);
    }
}

#[test]
fn rotation_normalizes_oversized_and_negative_amounts() {
    let array = BoundedArray::new(vec![1, 2, 3, 4]);

    // 6 mod 4 and -2 mod 4 both shift by two.
    let expected = StepResult::Array(vec![3, 4, 1, 2]);
    assert_eq!(final_result(&rotate::reversal(&array, 6)), &expected);
    assert_eq!(final_result(&rotate::reversal(&array, -2)), &expected);

    // A full-length rotation is the identity.
    let identity = StepResult::Array(vec![1, 2, 3, 4]);
    assert_eq!(final_result(&rotate::cyclic(&array, 4)), &identity);
}

#[test]
fn cycle_detection_finds_the_entry_node() {
    let list = List::from_values(&[3, 2, 0, -4], Some(1));
    let trace = cycle::detect(&list);

    let last = trace.last().expect("last step");
    assert_eq!(last.action, Action::Found);
    assert_eq!(final_result(&trace), &StepResult::Node(1));
    assert!(
        trace.steps().iter().any(|step| step.action == Action::Meet),
        "phase one must record the collision"
    );
}

#[test]
fn cycle_detection_on_straight_list_reports_no_cycle() {
    let list = List::from_values(&[1, 2, 3, 4], None);
    let trace = cycle::detect(&list);

    let last = trace.last().expect("last step");
    assert_eq!(last.action, Action::Complete);
    assert_eq!(final_result(&trace), &StepResult::Verdict(false));
}

#[test]
fn intersection_converges_on_the_shared_node() {
    let lists = IntersectingLists::build(&[4, 1, 8, 4, 5], &[5, 6, 1, 8, 4, 5], 2, 3);
    let trace = intersect::find(&lists);

    let last = trace.last().expect("last step");
    assert_eq!(last.action, Action::Found);
    assert_eq!(final_result(&trace), &StepResult::Node(2));
}

#[test]
fn intersection_of_disjoint_lists_reports_none() {
    let lists = IntersectingLists::build(&[2, 6, 4], &[1, 5], 3, 2);
    let trace = intersect::find(&lists);

    let last = trace.last().expect("last step");
    assert_eq!(last.action, Action::Complete);
    assert_eq!(final_result(&trace), &StepResult::Verdict(false));
}

#[test]
fn cycle_detection_at_maximum_size_finds_the_entry() {
    // Longest admissible list with a late entry keeps both Floyd phases well
    // inside their iteration caps.
    let values: Vec<i64> = (0..24).collect();
    let list = List::from_values(&values, Some(17));
    let trace = cycle::detect(&list);

    assert_eq!(trace.last().expect("last step").action, Action::Found);
    assert_eq!(final_result(&trace), &StepResult::Node(17));
}

#[test]
fn intersection_cap_accommodates_maximum_disjoint_lists() {
    // Two full-size private lists with no shared tail: the switch-over walk
    // must align both pointers on null before the iteration cap.
    let a: Vec<i64> = (0..16).collect();
    let b: Vec<i64> = (100..116).collect();
    let lists = IntersectingLists::build(&a, &b, 16, 16);
    let trace = intersect::find(&lists);

    assert_eq!(trace.last().expect("last step").action, Action::Complete);
    assert_eq!(final_result(&trace), &StepResult::Verdict(false));
}

#[test]
fn random_copy_clones_before_linking() {
    let list = List::with_random(&[
        (7, None),
        (13, Some(0)),
        (11, Some(4)),
        (10, Some(2)),
        (1, Some(0)),
    ]);
    let trace = random_copy::deep_copy(&list);

    let clones = trace
        .steps()
        .iter()
        .filter(|step| step.action == Action::CloneNode)
        .count();
    let links = trace
        .steps()
        .iter()
        .filter(|step| step.action == Action::Link)
        .count();
    assert_eq!(clones, list.len());
    assert_eq!(links, list.len());

    let first_link = trace
        .steps()
        .iter()
        .position(|step| step.action == Action::Link)
        .expect("at least one link step");
    let last_clone = trace
        .steps()
        .iter()
        .rposition(|step| step.action == Action::CloneNode)
        .expect("at least one clone step");
    assert!(
        last_clone < first_link,
        "every clone step must precede the first link step"
    );
}

#[test]
fn bst_validation_accepts_and_rejects() {
    let valid = Tree::from_level_order(&[Some(5), Some(3), Some(8), Some(2), Some(4)]);
    let invalid = Tree::from_level_order(&[
        Some(5),
        Some(1),
        Some(4),
        None,
        None,
        Some(3),
        Some(6),
    ]);

    for trace in [bst::range_check(&valid), bst::inorder_check(&valid)] {
        assert_eq!(final_result(&trace), &StepResult::Verdict(true));
        assert_eq!(trace.last().expect("last step").action, Action::Complete);
    }
    for trace in [bst::range_check(&invalid), bst::inorder_check(&invalid)] {
        assert_eq!(final_result(&trace), &StepResult::Verdict(false));
        assert_eq!(trace.last().expect("last step").action, Action::Violation);
    }
}
