//! # Structural conformance
//!
//! The traits in [`crate::protocols`] are checked by rustc. This module
//! checks the same contracts at the descriptor level, for tooling that sees
//! a type only as a set of method signatures (a [`TypeShape`]). A shape
//! conforms to a protocol when it exposes every required method with the
//! same name and arity and a compatible return shape. No declaration or
//! registration on the type's side is needed.

pub mod checker;
pub mod shape;

pub use checker::{mismatches, ConformanceChecker, Mismatch};
pub use shape::TypeShape;
