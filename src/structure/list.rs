// Singly linked lists: plain chains, cyclic chains, random pointers, shared tails

use rustc_hash::FxHashMap;

/// A list node. `id` is the node's position in the original input; `random`
/// is the secondary pointer used by the deep-copy algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub id: usize,
    pub value: i64,
    pub next: Option<usize>,
    pub random: Option<usize>,
}

/// A singly linked chain, optionally cyclic, optionally carrying random
/// pointers.
#[derive(Debug, Clone, Default)]
pub struct List {
    nodes: Vec<ListNode>,
    head: Option<usize>,
    cycle_entry: Option<usize>,
}

impl List {
    /// Build a chain from values. A supplied cycle index redirects the tail's
    /// successor into the interior node at that input position.
    pub fn from_values(values: &[i64], cycle: Option<usize>) -> Self {
        let mut nodes: Vec<ListNode> = values
            .iter()
            .enumerate()
            .map(|(id, &value)| ListNode {
                id,
                value,
                next: if id + 1 < values.len() {
                    Some(id + 1)
                } else {
                    None
                },
                random: None,
            })
            .collect();

        if let (Some(entry), Some(tail)) = (cycle, nodes.last_mut()) {
            tail.next = Some(entry);
        }

        List {
            head: if nodes.is_empty() { None } else { Some(0) },
            cycle_entry: cycle,
            nodes,
        }
    }

    /// Build a chain with random pointers. Primary links are created first;
    /// random targets are resolved in a second pass since they may be forward
    /// references to nodes that did not exist yet.
    pub fn with_random(entries: &[(i64, Option<usize>)]) -> Self {
        let values: Vec<i64> = entries.iter().map(|(value, _)| *value).collect();
        let mut list = Self::from_values(&values, None);

        let by_position: FxHashMap<usize, usize> =
            list.nodes.iter().map(|node| (node.id, node.id)).collect();
        for (position, (_, random)) in entries.iter().enumerate() {
            if let Some(target) = random {
                list.nodes[position].random = by_position.get(target).copied();
            }
        }

        list
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn cycle_entry(&self) -> Option<usize> {
        self.cycle_entry
    }

    pub fn get(&self, id: usize) -> Option<&ListNode> {
        self.nodes.get(id)
    }

    pub fn value(&self, id: usize) -> i64 {
        self.get(id).map_or(0, |node| node.value)
    }

    pub fn next(&self, id: usize) -> Option<usize> {
        self.get(id).and_then(|node| node.next)
    }

    pub fn random(&self, id: usize) -> Option<usize> {
        self.get(id).and_then(|node| node.random)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }
}

/// Two chains that share a physical tail.
///
/// The shared tail nodes exist once and carry list-A identities; list B's
/// private prefix is numbered after the whole of A, so every id maps back to
/// one input position.
#[derive(Debug, Clone)]
pub struct IntersectingLists {
    nodes: Vec<ListNode>,
    head_a: Option<usize>,
    head_b: Option<usize>,
    join: Option<usize>,
}

impl IntersectingLists {
    /// Build from the two value arrays and their declared join offsets. The
    /// normalizer has already checked the suffixes agree, so the tail after
    /// `skip_a` is materialized once and B's prefix links into it.
    pub fn build(a: &[i64], b: &[i64], skip_a: usize, skip_b: usize) -> Self {
        let mut nodes: Vec<ListNode> = a
            .iter()
            .enumerate()
            .map(|(id, &value)| ListNode {
                id,
                value,
                next: if id + 1 < a.len() { Some(id + 1) } else { None },
                random: None,
            })
            .collect();

        let join = if skip_a < a.len() { Some(skip_a) } else { None };

        for (offset, &value) in b.iter().take(skip_b).enumerate() {
            let id = a.len() + offset;
            let next = if offset + 1 < skip_b {
                Some(id + 1)
            } else {
                join
            };
            nodes.push(ListNode {
                id,
                value,
                next,
                random: None,
            });
        }

        let head_a = if a.is_empty() { None } else { Some(0) };
        let head_b = if skip_b > 0 { Some(a.len()) } else { join };

        IntersectingLists {
            nodes,
            head_a,
            head_b,
            join,
        }
    }

    pub fn head_a(&self) -> Option<usize> {
        self.head_a
    }

    pub fn head_b(&self) -> Option<usize> {
        self.head_b
    }

    /// The first shared node, when the lists intersect at all
    pub fn join(&self) -> Option<usize> {
        self.join
    }

    pub fn get(&self, id: usize) -> Option<&ListNode> {
        self.nodes.get(id)
    }

    pub fn value(&self, id: usize) -> i64 {
        self.get(id).map_or(0, |node| node.value)
    }

    pub fn next(&self, id: usize) -> Option<usize> {
        self.get(id).and_then(|node| node.next)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }
}
