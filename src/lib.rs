//! Deep forcing of deferred values.
//!
//! A value may contain not-yet-computed sub-results: memoized lazy cells
//! that compute on first access ([`std::sync::LazyLock`] and friends).
//! [`ForceDeep::force_deep`] guarantees that every sub-value transitively
//! reachable through the value's declared structure is materialized before
//! it returns, leaving no deferred computation anywhere in the structure.
//! Forcing is idempotent, forces only the populated alternative of a
//! tagged union, and propagates materialization failures unchanged.
//!
//! Implementations exist for scalars and other atomic leaves, standard
//! containers and wrappers, and the deferred cell family itself. New
//! composite types opt in either with a hand-written impl or by declaring
//! a structural [`Shape`] once and letting [`derive_force_deep!`] emit
//! the traversal.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use deepforce::{ForceDeep, force_ref};
//!
//! let cell: LazyLock<Vec<u32>> = LazyLock::new(|| (0..4).collect());
//! let value = vec![Some(cell), None];
//! value.force_deep();
//! assert_eq!(force_ref(&value)[0].as_ref().map(|cell| cell.len()), Some(4));
//! ```

mod atomic;
mod cell;
mod choice;
mod error;
mod meta;
mod protocol;
mod seq;
mod shape;
mod tuple;
mod wrap;

/// Error and result aliases.
pub use error::{ParseError, Result};
/// Structured metadata types with hand-written forceable shapes.
pub use meta::{Fingerprint, TypeDesc, Version};
/// Traversal protocol trait, terminal marker, and derived helpers.
pub use protocol::{ForceDeep, Forced, force_ref, force_then, strict_apply};
/// Structural representation and the generic derivation engine.
pub use shape::{Shape, Shaped, Side, force_via_shape};
