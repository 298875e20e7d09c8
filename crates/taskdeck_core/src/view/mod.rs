//! Derived read-only views over the canonical task collection.
//!
//! # Responsibility
//! - Compute the visible task subset for a filter and search query.
//! - Aggregate global display counts.
//!
//! # Invariants
//! - Projection is a pure function of its inputs; no cached derived state.
//! - Projection output borrows the canonical collection and preserves its
//!   order.

pub mod projection;
