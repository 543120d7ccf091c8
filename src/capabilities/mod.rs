//! # Capability Registry
//!
//! Descriptor-level declarations of the capability contracts, for tooling
//! that reasons about types by their method signatures rather than through
//! trait bounds.
//!
//! ## Builtin catalogue
//!
//! | Name | Aliases | Origin | Method |
//! |---|---|---|---|
//! | LowercaseConvertible | | local | `lower() -> Any` |
//! | ContainmentCheckable | | local | `contains(item) -> bool` |
//! | IntConvertible | SupportsInt | standard | `to_int() -> int` |
//! | FloatConvertible | SupportsFloat | standard | `to_float() -> float` |
//! | ComplexConvertible | SupportsComplex | standard | `to_complex() -> complex` |
//! | Sized | SizeQueryable, SupportsLen | standard | `size() -> int` |
//!
//! Declarations are independent: none extends another.
//!
//! ## Resolution Flow
//!
//! 1. `CapabilityRegistry::with_config(&config)` seeds the builtins and aliases
//! 2. `load_all()` reads extra declarations from the search paths
//! 3. `resolve("SupportsInt")` returns the canonical declaration
//! 4. `ConformanceChecker::new(&registry)` checks type shapes against it

pub mod capability;
pub mod registry;

pub use capability::{standard_declarations, MethodSignature, Origin, ProtocolDecl, ReturnShape};
pub use registry::{standard_registry, CapabilityRegistry, RegisterOutcome};
