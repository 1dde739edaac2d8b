//! Trace generators, one module per algorithm family
//!
//! Shared contract: a generator consumes one immutable structure plus scalar
//! parameters and returns a complete [`Trace`](crate::trace::Trace).
//! Generation is synchronous and run-to-completion; the only observable output
//! is the ordered step sequence. No generator may fail once given a validated
//! structure, and the empty structure is an explicit first-class branch that
//! still produces a short, valid trace.

pub mod bst;
pub mod cycle;
pub mod intersect;
pub mod invert;
pub mod kth_smallest;
pub mod level_order;
pub mod max_subarray;
pub mod random_copy;
pub mod right_view;
pub mod rotate;
pub mod symmetry;

/// Breadth-first vs depth-first variants of the tree walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeVariant {
    Bfs,
    Dfs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryVariant {
    Recursive,
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KthVariant {
    Stack,
    Recursive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxSubarrayVariant {
    Kadane,
    DivideConquer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateVariant {
    Aux,
    Cyclic,
    Reversal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BstVariant {
    Range,
    Inorder,
}

/// An algorithm family together with its selected variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    LevelOrder(TreeVariant),
    Invert(TreeVariant),
    Symmetry(SymmetryVariant),
    KthSmallest(KthVariant),
    RightView(TreeVariant),
    MaxSubarray(MaxSubarrayVariant),
    Rotate(RotateVariant),
    CycleDetect,
    Intersection,
    RandomCopy,
    ValidateBst(BstVariant),
}

impl Algorithm {
    /// Parse a CLI name like `level-order:bfs` or `rotate:reversal`. The part
    /// after the colon selects the variant; each family has a default.
    pub fn parse(name: &str) -> Option<Self> {
        let (family, variant) = match name.split_once(':') {
            Some((family, variant)) => (family, Some(variant)),
            None => (name, None),
        };

        let tree_variant = |default: TreeVariant| match variant {
            None => Some(default),
            Some("bfs") => Some(TreeVariant::Bfs),
            Some("dfs") => Some(TreeVariant::Dfs),
            Some(_) => None,
        };

        match family {
            "level-order" => tree_variant(TreeVariant::Bfs).map(Algorithm::LevelOrder),
            "invert" => tree_variant(TreeVariant::Bfs).map(Algorithm::Invert),
            "right-view" => tree_variant(TreeVariant::Bfs).map(Algorithm::RightView),
            "symmetry" => match variant {
                None | Some("recursive") => Some(Algorithm::Symmetry(SymmetryVariant::Recursive)),
                Some("iterative") => Some(Algorithm::Symmetry(SymmetryVariant::Iterative)),
                Some(_) => None,
            },
            "kth" => match variant {
                None | Some("stack") => Some(Algorithm::KthSmallest(KthVariant::Stack)),
                Some("recursive") => Some(Algorithm::KthSmallest(KthVariant::Recursive)),
                Some(_) => None,
            },
            "max-subarray" => match variant {
                None | Some("kadane") => {
                    Some(Algorithm::MaxSubarray(MaxSubarrayVariant::Kadane))
                }
                Some("divide") => Some(Algorithm::MaxSubarray(MaxSubarrayVariant::DivideConquer)),
                Some(_) => None,
            },
            "rotate" => match variant {
                None | Some("reversal") => Some(Algorithm::Rotate(RotateVariant::Reversal)),
                Some("aux") => Some(Algorithm::Rotate(RotateVariant::Aux)),
                Some("cyclic") => Some(Algorithm::Rotate(RotateVariant::Cyclic)),
                Some(_) => None,
            },
            "cycle" if variant.is_none() => Some(Algorithm::CycleDetect),
            "intersect" if variant.is_none() => Some(Algorithm::Intersection),
            "random-copy" if variant.is_none() => Some(Algorithm::RandomCopy),
            "validate-bst" => match variant {
                None | Some("range") => Some(Algorithm::ValidateBst(BstVariant::Range)),
                Some("inorder") => Some(Algorithm::ValidateBst(BstVariant::Inorder)),
                Some(_) => None,
            },
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::LevelOrder(TreeVariant::Bfs) => "Level-order traversal (BFS queue)",
            Algorithm::LevelOrder(TreeVariant::Dfs) => "Level-order traversal (DFS recursion)",
            Algorithm::Invert(TreeVariant::Bfs) => "Tree inversion (BFS queue)",
            Algorithm::Invert(TreeVariant::Dfs) => "Tree inversion (DFS recursion)",
            Algorithm::Symmetry(SymmetryVariant::Recursive) => "Symmetric tree (paired recursion)",
            Algorithm::Symmetry(SymmetryVariant::Iterative) => "Symmetric tree (paired queue)",
            Algorithm::KthSmallest(KthVariant::Stack) => "Kth smallest (explicit stack)",
            Algorithm::KthSmallest(KthVariant::Recursive) => "Kth smallest (inorder recursion)",
            Algorithm::RightView(TreeVariant::Bfs) => "Right-side view (BFS last of level)",
            Algorithm::RightView(TreeVariant::Dfs) => "Right-side view (DFS first at depth)",
            Algorithm::MaxSubarray(MaxSubarrayVariant::Kadane) => "Maximum subarray (Kadane)",
            Algorithm::MaxSubarray(MaxSubarrayVariant::DivideConquer) => {
                "Maximum subarray (divide and conquer)"
            }
            Algorithm::Rotate(RotateVariant::Aux) => "Array rotation (auxiliary array)",
            Algorithm::Rotate(RotateVariant::Cyclic) => "Array rotation (cyclic replacement)",
            Algorithm::Rotate(RotateVariant::Reversal) => "Array rotation (triple reversal)",
            Algorithm::CycleDetect => "Cycle entry detection (Floyd)",
            Algorithm::Intersection => "Two-list intersection (pointer switch-over)",
            Algorithm::RandomCopy => "Random-pointer list deep copy",
            Algorithm::ValidateBst(BstVariant::Range) => "BST validation (range propagation)",
            Algorithm::ValidateBst(BstVariant::Inorder) => "BST validation (inorder monotonic)",
        }
    }
}
