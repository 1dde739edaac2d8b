// Deep copy of a list with random pointers, simulated with a two-pass map
//
// Pass one clones every source node value-only into the clone map; pass two
// resolves each clone's successor and random target through that map. Pass one
// fully completes before any link step is emitted, so forward random
// references always resolve.

use crate::structure::List;
use crate::trace::{Action, Recorder, StepBuilder, Trace};
use rustc_hash::FxHashMap;

pub fn deep_copy(list: &List) -> Trace {
    let mut rec = Recorder::new();

    if list.is_empty() {
        rec.push(StepBuilder::new(Action::Complete, "empty list, nothing to copy"));
        return rec.finish();
    }

    // Pass one: value-only clones. Clone identity mirrors the source position.
    let mut clone_map: FxHashMap<usize, usize> = FxHashMap::default();
    let mut cloned: Vec<usize> = Vec::new();
    for node in list.nodes() {
        clone_map.insert(node.id, node.id);
        cloned.push(node.id);
        rec.push(
            StepBuilder::new(
                Action::CloneNode,
                format!("clone node {} (value {}), pointers still unset", node.id, node.value),
            )
            .pointer("source", Some(node.id))
            .aux("cloned", cloned.clone())
            .counter("cloned", cloned.len() as i64),
        );
    }

    // Pass two: resolve both pointers of every clone through the map.
    for node in list.nodes() {
        let next = node.next.and_then(|target| clone_map.get(&target).copied());
        let random = node
            .random
            .and_then(|target| clone_map.get(&target).copied());
        rec.push(
            StepBuilder::new(
                Action::Link,
                format!(
                    "link clone of node {}: next -> {}, random -> {}",
                    node.id,
                    describe(next),
                    describe(random)
                ),
            )
            .pointer("source", Some(node.id))
            .pointer("next", next)
            .pointer("random", random),
        );
    }

    rec.push(StepBuilder::new(
        Action::Complete,
        format!("deep copy of {} nodes finished", list.len()),
    ));
    rec.finish()
}

fn describe(target: Option<usize>) -> String {
    match target {
        Some(id) => format!("clone of node {}", id),
        None => "null".to_string(),
    }
}
