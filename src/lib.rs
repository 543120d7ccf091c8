//! # capability-protocols
//!
//! Capability contracts for values: producing a lowercased form, testing
//! membership, converting to int/float/complex, and reporting a size.
//!
//! - [`protocols`]: the contracts as traits. Generic code names them in
//!   bounds and rustc rejects non-conforming types at compile time. The
//!   traits carry no runtime behaviour of their own.
//! - [`capabilities`]: the same contracts as declarations in a catalogue,
//!   with YAML loading and alias resolution (`SupportsInt`, `Sized`, ...).
//! - [`conformance`]: checks type shapes against the catalogue, for tooling
//!   that works from method signatures instead of trait bounds.
//!
//! ```
//! use capability_protocols::{ContainmentCheckable, LowercaseConvertible};
//!
//! fn mentions<H, N>(haystack: &H, needle: &N) -> bool
//! where
//!     H: LowercaseConvertible<Lowered = String> + ?Sized,
//!     N: LowercaseConvertible<Lowered = String> + ?Sized,
//! {
//!     ContainmentCheckable::<str>::contains(&haystack.lower(), needle.lower().as_str())
//! }
//!
//! assert!(mentions("Structural Typing", "TYPING"));
//! ```

pub mod capabilities;
pub mod conformance;
pub mod protocols;
pub mod utilities;

pub use capabilities::{standard_registry, CapabilityRegistry, ProtocolDecl};
pub use conformance::{ConformanceChecker, TypeShape};
pub use protocols::{
    Complex, ComplexConvertible, ContainmentCheckable, FloatConvertible, IntConvertible,
    LowercaseConvertible, SizeQueryable,
};
pub use utilities::{ConformanceError, RegistryConfig, RegistryError};

/// Library version
pub const VERSION: &str = "0.1.0";
