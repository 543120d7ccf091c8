//! # Capability traits
//!
//! Six independent capability contracts. Each names exactly one operation and
//! none has a supertrait, so a type may satisfy any subset of them.
//!
//! | Capability | Trait | Operation |
//! |---|---|---|
//! | LowercaseConvertible | [`LowercaseConvertible`] | `lower(&self) -> Self::Lowered` |
//! | ContainmentCheckable | [`ContainmentCheckable`] | `contains(&self, &Item) -> bool` |
//! | SupportsInt | [`IntConvertible`] | `to_int(&self) -> i64` |
//! | SupportsFloat | [`FloatConvertible`] | `to_float(&self) -> f64` |
//! | SupportsComplex | [`ComplexConvertible`] | `to_complex(&self) -> Complex` |
//! | Sized | [`SizeQueryable`] | `size(&self) -> usize` |
//!
//! ## Conformance is opt-in
//!
//! Rust traits are nominal. A type that happens to have an inherent
//! `lower()` method does not satisfy [`LowercaseConvertible`] until it says
//! so with an `impl`. That is a real loss against duck typing: third-party
//! types need a local newtype to conform. The standard-library types that
//! already expose these operations are wired up in this module.
//!
//! Rejection happens at compile time:
//!
//! ```compile_fail
//! use capability_protocols::LowercaseConvertible;
//!
//! fn shout<T: LowercaseConvertible>(value: &T) -> T::Lowered {
//!     value.lower()
//! }
//!
//! shout(&42u32);
//! ```
//!
//! ```compile_fail
//! use capability_protocols::{assert_conforms, IntConvertible};
//!
//! assert_conforms!(String: IntConvertible);
//! ```

pub mod membership;
pub mod numeric;
pub mod size;
pub mod text;

pub use membership::ContainmentCheckable;
pub use numeric::{Complex, ComplexConvertible, FloatConvertible, IntConvertible};
pub use size::SizeQueryable;
pub use text::LowercaseConvertible;

/// Assert at compile time that a type satisfies one or more capabilities.
///
/// Expands to an unnamed const, so it can sit at module level, can repeat
/// freely and generates no code.
///
/// ```
/// use capability_protocols::{
///     assert_conforms, ContainmentCheckable, LowercaseConvertible, SizeQueryable,
/// };
///
/// assert_conforms!(String: LowercaseConvertible, ContainmentCheckable<str>, SizeQueryable);
/// assert_conforms!(str: LowercaseConvertible);
/// assert_conforms!(str: LowercaseConvertible);
/// ```
#[macro_export]
macro_rules! assert_conforms {
    ($ty:ty : $($bound:path),+ $(,)?) => {
        const _: fn() = || {
            fn conforms<T: ?Sized $(+ $bound)+>() {}
            conforms::<$ty>();
        };
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Implements only the membership test; nothing else is implied.
    struct Inventory {
        items: Vec<String>,
    }

    impl ContainmentCheckable<str> for Inventory {
        fn contains(&self, item: &str) -> bool {
            self.items.iter().any(|held| held == item)
        }
    }

    // Implements only the lowercase capability, with a non-text result.
    struct Shouting(&'static str);

    impl LowercaseConvertible for Shouting {
        type Lowered = usize;

        fn lower(&self) -> usize {
            self.0.chars().filter(|c| c.is_uppercase()).count()
        }
    }

    crate::assert_conforms!(Inventory: ContainmentCheckable<str>);
    crate::assert_conforms!(Shouting: LowercaseConvertible);
    crate::assert_conforms!(
        Vec<u8>: LowercaseConvertible,
        ContainmentCheckable<u8>,
        SizeQueryable,
    );
    crate::assert_conforms!(f64: IntConvertible, FloatConvertible, ComplexConvertible);
    crate::assert_conforms!(HashSet<String>: ContainmentCheckable<str>, SizeQueryable);

    fn lookup<C: ContainmentCheckable<str> + ?Sized>(collection: &C, item: &str) -> bool {
        collection.contains(item)
    }

    fn lowered<T: LowercaseConvertible>(value: &T) -> T::Lowered {
        value.lower()
    }

    #[test]
    fn test_user_type_opts_into_single_capability() {
        let inventory = Inventory {
            items: vec!["sword".to_string(), "shield".to_string()],
        };
        assert!(lookup(&inventory, "sword"));
        assert!(!lookup(&inventory, "bow"));
    }

    #[test]
    fn test_lowered_type_is_unconstrained() {
        assert_eq!(lowered(&Shouting("ABc")), 2);
    }

    #[test]
    fn test_text_and_collections_share_one_bound() {
        assert!(lookup("lowercase", "case"));
        assert!(lookup(&"Capability".to_string(), "pab"));
        assert_eq!(lowered(&"Capability".to_string()), "capability");
    }
}
