//! # Introduction
//!
//! algotty normalizes a textual input into a bounded node graph, runs one of
//! several classic algorithms over it while recording every observable
//! decision as an immutable step, and replays the recorded trace in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Normalizer → Structure → Generator → Trace → Playback → TUI
//! ```
//!
//! 1. [`input`] — parses and range-checks the raw parameters; every failure
//!    is reported as an [`input::InputError`] before anything runs.
//! 2. [`structure`] — builds the node graph (tree, list, paired lists, or
//!    array); node identity is the original input position.
//! 3. [`algos`] — one module per algorithm family; each generator runs to
//!    completion and records steps through a [`trace::Recorder`].
//! 4. [`trace`] — the immutable step sequence: ordered, contiguous, and
//!    closed by exactly one terminal step.
//! 5. [`playback`] — position-based navigation with cancellable timed
//!    auto-advance.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithm families
//!
//! Tree: level-order traversal, inversion, symmetry check, kth smallest,
//! right-side view, BST validation. Array: maximum subarray, rotation.
//! List: cycle detection, two-list intersection, random-pointer deep copy.
//! Most families offer more than one strategy variant; both variants of a
//! family always reach the same final result over the same input.

pub mod algos;
pub mod input;
pub mod playback;
pub mod structure;
pub mod trace;
pub mod ui;
