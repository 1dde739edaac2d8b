//! Node graphs built from normalized input
//!
//! Each builder runs once per input application and assigns every node a
//! stable identity equal to its original input position, so duplicate values
//! never alias. Construction from already-validated input cannot fail, and
//! every pointer that should be resolved is resolved before a builder returns.

pub mod list;
pub mod tree;

pub use list::{IntersectingLists, List, ListNode};
pub use tree::{Tree, TreeNode};

/// A plain bounded array; the identity transform under the size ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray {
    values: Vec<i64>,
}

impl BoundedArray {
    pub fn new(values: Vec<i64>) -> Self {
        BoundedArray { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The structure an input application produced, kept alongside its trace so
/// the renderer can draw the static graph.
#[derive(Debug, Clone)]
pub enum Structure {
    Tree(Tree),
    List(List),
    Lists(IntersectingLists),
    Array(BoundedArray),
}
