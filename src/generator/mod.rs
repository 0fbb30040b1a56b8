//! QuickSort snapshot generation
//!
//! [`generate`] runs a recursive, stable partition over the input and records
//! a [`Snapshot`](crate::snapshot::Snapshot) at every visible milestone:
//!
//! ```text
//! select pivot → move to depth → color lower/higher → rearrange → recurse
//! ```
//!
//! - The pivot is the element at the positional midpoint (`count / 2`) of the
//!   column-ordered range, not the median value.
//! - Values equal to the pivot are colored higher.
//! - Rearranging relabels columns (lowers, pivot, highers) instead of
//!   swapping values, so every element keeps its identity across a move.
//! - Inputs of two or more values end with a "Sorting complete!" snapshot in
//!   which every element is back on row 0 and marked sorted.
//! - A side of exactly one element next to a larger side still recurses, so
//!   it gets its own "Element X is sorted" snapshot, on the row below its
//!   pivot, before the larger side is partitioned.
//!
//! Generation is a pure function of its input: the whole history is built
//! eagerly and nothing is shared between runs.

pub mod engine;
pub mod store;

pub use engine::generate;
