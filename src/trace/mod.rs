// Step and Trace types shared by every trace generator

use std::fmt;

/// Closed vocabulary of step tags.
///
/// Every generator draws from this set; the terminal tags ([`Action::Found`],
/// [`Action::Violation`], [`Action::Complete`]) may only appear on the final
/// step of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enqueue,
    Dequeue,
    Visit,
    Descend,
    Backtrack,
    Compare,
    Swap,
    Evaluate,
    Update,
    Split,
    Base,
    Merge,
    Place,
    Reverse,
    CycleStart,
    Advance,
    Meet,
    Reset,
    CloneNode,
    Link,
    Record,
    Found,
    Violation,
    Complete,
}

impl Action {
    /// Whether this tag may only close a trace
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::Found | Action::Violation | Action::Complete)
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Enqueue => "enqueue",
            Action::Dequeue => "dequeue",
            Action::Visit => "visit",
            Action::Descend => "descend",
            Action::Backtrack => "backtrack",
            Action::Compare => "compare",
            Action::Swap => "swap",
            Action::Evaluate => "evaluate",
            Action::Update => "update",
            Action::Split => "split",
            Action::Base => "base",
            Action::Merge => "merge",
            Action::Place => "place",
            Action::Reverse => "reverse",
            Action::CycleStart => "start-cycle",
            Action::Advance => "advance",
            Action::Meet => "meet",
            Action::Reset => "reset",
            Action::CloneNode => "clone",
            Action::Link => "link",
            Action::Record => "record",
            Action::Found => "found",
            Action::Violation => "violation",
            Action::Complete => "complete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named pointer position: a node identity or null
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub name: &'static str,
    pub node: Option<usize>,
}

/// A named auxiliary sequence (queue, stack, level contents) as ordered node ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxSnapshot {
    pub name: &'static str,
    pub ids: Vec<usize>,
}

/// Accumulated result carried by a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// Per-level value matrix (level-order traversal)
    Levels(Vec<Vec<i64>>),
    /// Best subarray sum with inclusive index range
    Range { sum: i64, start: usize, end: usize },
    /// A single node identity (cycle entry, intersection, kth node)
    Node(usize),
    /// Ordered node identities (right-side view)
    Nodes(Vec<usize>),
    /// Yes/no verdict (symmetric, valid BST, cycle present)
    Verdict(bool),
    /// Final array contents (rotation)
    Array(Vec<i64>),
}

/// Immutable snapshot of generator state at one instant.
///
/// Every field is a structural copy taken at emission time; a step never holds
/// a live reference into the generator's working collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Unique, ascending, starting at 1
    pub seq: usize,
    pub action: Action,
    pub description: String,
    /// Named pointer positions (node identities or null)
    pub pointers: Vec<Pointer>,
    /// Named auxiliary sequences, snapshotted at emission
    pub aux: Vec<AuxSnapshot>,
    /// Working array contents, for the array algorithms
    pub array: Option<Vec<i64>>,
    /// Named counters (visit count, running sums, moved count)
    pub counters: Vec<(&'static str, i64)>,
    /// Accumulated result, when one exists at this instant
    pub result: Option<StepResult>,
}

/// Builder for a single step; the recorder assigns the sequence number on push
#[derive(Debug)]
pub struct StepBuilder {
    action: Action,
    description: String,
    pointers: Vec<Pointer>,
    aux: Vec<AuxSnapshot>,
    array: Option<Vec<i64>>,
    counters: Vec<(&'static str, i64)>,
    result: Option<StepResult>,
}

impl StepBuilder {
    pub fn new(action: Action, description: impl Into<String>) -> Self {
        StepBuilder {
            action,
            description: description.into(),
            pointers: Vec::new(),
            aux: Vec::new(),
            array: None,
            counters: Vec::new(),
            result: None,
        }
    }

    pub fn pointer(mut self, name: &'static str, node: Option<usize>) -> Self {
        self.pointers.push(Pointer { name, node });
        self
    }

    /// Snapshot an auxiliary sequence. The ids are copied out of the caller's
    /// working collection at this instant.
    pub fn aux(mut self, name: &'static str, ids: Vec<usize>) -> Self {
        self.aux.push(AuxSnapshot { name, ids });
        self
    }

    pub fn array(mut self, values: &[i64]) -> Self {
        self.array = Some(values.to_vec());
        self
    }

    pub fn counter(mut self, name: &'static str, value: i64) -> Self {
        self.counters.push((name, value));
        self
    }

    pub fn result(mut self, result: StepResult) -> Self {
        self.result = Some(result);
        self
    }
}

/// The complete, precomputed step sequence for one algorithm run.
///
/// Immutable once produced; a re-generation supersedes the whole trace, it is
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

/// Accumulates steps during generation and enforces the trace invariants:
/// contiguous sequence numbers from 1, at least one step, terminal tag last.
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    /// Number and append a step. Terminal tags are only legal as the closing
    /// step, so pushing after one is a generator defect.
    pub fn push(&mut self, builder: StepBuilder) {
        debug_assert!(
            self.steps.last().map_or(true, |s| !s.action.is_terminal()),
            "step pushed after a terminal action"
        );
        let seq = self.steps.len() + 1;
        self.steps.push(Step {
            seq,
            action: builder.action,
            description: builder.description,
            pointers: builder.pointers,
            aux: builder.aux,
            array: builder.array,
            counters: builder.counters,
            result: builder.result,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace. A generator that produced zero steps or ended on a
    /// non-terminal tag is defective; that must never happen for validated
    /// input, including the empty-structure edge case.
    pub fn finish(self) -> Trace {
        debug_assert!(!self.steps.is_empty(), "generator produced an empty trace");
        debug_assert!(
            self.steps.last().is_some_and(|s| s.action.is_terminal()),
            "trace does not end on a terminal action"
        );
        Trace { steps: self.steps }
    }
}
