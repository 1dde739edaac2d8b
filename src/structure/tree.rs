// Binary tree built by breadth-first placement from a level-order array

use std::collections::VecDeque;

/// A single tree node. `id` is the node's position in the original
/// level-order input array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: usize,
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Binary tree stored as a slot arena indexed by input position.
///
/// A `null` input entry leaves its slot empty and suppresses the whole
/// corresponding child subtree; the normalizer guarantees no non-null entry
/// is ever left without a parent to consume it.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    slots: Vec<Option<TreeNode>>,
    root: Option<usize>,
}

impl Tree {
    /// Build from level-order slots. Placement is breadth-first: each created
    /// node consumes the next two entries of the array as its children.
    pub fn from_level_order(slots: &[Option<i64>]) -> Self {
        let mut nodes: Vec<Option<TreeNode>> = slots
            .iter()
            .enumerate()
            .map(|(id, value)| {
                value.map(|value| TreeNode {
                    id,
                    value,
                    left: None,
                    right: None,
                })
            })
            .collect();

        let root = match nodes.first() {
            Some(Some(_)) => Some(0),
            _ => None,
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        if let Some(root_id) = root {
            queue.push_back(root_id);
        }

        let mut next = 1;
        while let Some(id) = queue.pop_front() {
            let mut left = None;
            let mut right = None;
            if next < nodes.len() {
                if nodes[next].is_some() {
                    left = Some(next);
                    queue.push_back(next);
                }
                next += 1;
            }
            if next < nodes.len() {
                if nodes[next].is_some() {
                    right = Some(next);
                    queue.push_back(next);
                }
                next += 1;
            }
            if let Some(node) = nodes[id].as_mut() {
                node.left = left;
                node.right = right;
            }
        }

        Tree { slots: nodes, root }
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn get(&self, id: usize) -> Option<&TreeNode> {
        self.slots.get(id).and_then(|slot| slot.as_ref())
    }

    /// Node value by identity; 0 for a missing id (cannot happen for ids
    /// reached through links).
    pub fn value(&self, id: usize) -> i64 {
        self.get(id).map_or(0, |node| node.value)
    }

    pub fn left(&self, id: usize) -> Option<usize> {
        self.get(id).and_then(|node| node.left)
    }

    pub fn right(&self, id: usize) -> Option<usize> {
        self.get(id).and_then(|node| node.right)
    }

    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node ids in input-position order
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
    }
}
