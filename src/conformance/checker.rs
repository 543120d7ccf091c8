//! Structural conformance checking against the catalogue.
//!
//! Each required method is looked up on the shape by name. If no overload
//! with that name exists the method is missing. Otherwise one overload must
//! have the same arity and a return shape the requirement accepts. Methods
//! the protocol does not mention are ignored.

use std::fmt;

use crate::capabilities::capability::{MethodSignature, ProtocolDecl, ReturnShape};
use crate::capabilities::registry::{standard_registry, CapabilityRegistry};
use crate::utilities::errors::ConformanceError;

use super::shape::TypeShape;

/// One reason a shape fails a protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// No method with the required name.
    MissingMethod { method: String },
    /// The method exists, but no overload takes the required number of
    /// arguments.
    ArityMismatch {
        method: String,
        expected: usize,
        found: usize,
    },
    /// The arity matches, but the return shape is incompatible.
    ReturnMismatch {
        method: String,
        expected: ReturnShape,
        found: ReturnShape,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingMethod { method } => write!(f, "missing method {}", method),
            Mismatch::ArityMismatch {
                method,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} argument(s), expected {}",
                method, found, expected
            ),
            Mismatch::ReturnMismatch {
                method,
                expected,
                found,
            } => write!(f, "{} returns {}, expected {}", method, found, expected),
        }
    }
}

/// Every mismatch between `shape` and the methods `decl` requires.
pub fn mismatches(decl: &ProtocolDecl, shape: &TypeShape) -> Vec<Mismatch> {
    decl.methods
        .iter()
        .filter_map(|required| match_method(required, shape))
        .collect()
}

fn match_method(required: &MethodSignature, shape: &TypeShape) -> Option<Mismatch> {
    let candidates: Vec<&MethodSignature> = shape.overloads(&required.name).collect();
    let Some(first) = candidates.first() else {
        return Some(Mismatch::MissingMethod {
            method: required.name.clone(),
        });
    };

    let same_arity: Vec<&&MethodSignature> = candidates
        .iter()
        .filter(|c| c.arity() == required.arity())
        .collect();
    let Some(closest) = same_arity.first() else {
        return Some(Mismatch::ArityMismatch {
            method: required.name.clone(),
            expected: required.arity(),
            found: first.arity(),
        });
    };

    if same_arity
        .iter()
        .any(|c| required.returns.accepts(&c.returns))
    {
        None
    } else {
        Some(Mismatch::ReturnMismatch {
            method: required.name.clone(),
            expected: required.returns.clone(),
            found: closest.returns.clone(),
        })
    }
}

/// Checks type shapes against the declarations in a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ConformanceChecker<'r> {
    registry: &'r CapabilityRegistry,
}

impl ConformanceChecker<'static> {
    /// A checker over the process-wide builtin catalogue.
    pub fn standard() -> Self {
        Self::new(standard_registry())
    }
}

impl<'r> ConformanceChecker<'r> {
    /// Create a checker over `registry`.
    pub fn new(registry: &'r CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// All mismatches between `shape` and the named protocol. Empty means the
    /// shape conforms.
    pub fn diagnose(
        &self,
        shape: &TypeShape,
        protocol: &str,
    ) -> Result<Vec<Mismatch>, ConformanceError> {
        let decl = self
            .registry
            .resolve(protocol)
            .ok_or_else(|| ConformanceError::UnknownProtocol(protocol.to_string()))?;
        Ok(mismatches(decl, shape))
    }

    /// Check that `shape` conforms to the named protocol.
    pub fn check(&self, shape: &TypeShape, protocol: &str) -> Result<(), ConformanceError> {
        let found = self.diagnose(shape, protocol)?;
        if found.is_empty() {
            log::debug!("{} conforms to {}", shape.name, protocol);
            return Ok(());
        }
        log::debug!(
            "{} does not conform to {} ({} mismatch(es))",
            shape.name,
            protocol,
            found.len()
        );
        Err(ConformanceError::NotConforming {
            type_name: shape.name.clone(),
            protocol: protocol.to_string(),
            mismatches: found,
        })
    }

    /// Whether `shape` conforms to the named protocol. Unknown protocols
    /// answer `false`.
    pub fn conforms(&self, shape: &TypeShape, protocol: &str) -> bool {
        self.check(shape, protocol).is_ok()
    }

    /// Every protocol in the catalogue that `shape` satisfies, by name.
    pub fn satisfied_by(&self, shape: &TypeShape) -> Vec<&'r ProtocolDecl> {
        self.registry
            .list()
            .into_iter()
            .filter(|decl| mismatches(decl, shape).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::capability::standard_declarations;

    fn text_shape() -> TypeShape {
        TypeShape::new("str")
            .method(MethodSignature::nullary("lower", ReturnShape::Str))
            .method(MethodSignature::nullary("upper", ReturnShape::Str))
            .method(MethodSignature::new("contains", ["sub"], ReturnShape::Bool))
            .method(MethodSignature::nullary("size", ReturnShape::Int))
    }

    fn int_shape() -> TypeShape {
        TypeShape::new("int")
            .method(MethodSignature::nullary("to_int", ReturnShape::Int))
            .method(MethodSignature::nullary("to_float", ReturnShape::Float))
            .method(MethodSignature::nullary("to_complex", ReturnShape::Complex))
    }

    #[test]
    fn test_text_is_lowercase_convertible_and_int_is_not() {
        let checker = ConformanceChecker::standard();
        assert!(checker.conforms(&text_shape(), "LowercaseConvertible"));
        assert!(!checker.conforms(&int_shape(), "LowercaseConvertible"));

        let err = checker.check(&int_shape(), "LowercaseConvertible").unwrap_err();
        assert_eq!(
            err.to_string(),
            "int does not conform to LowercaseConvertible: missing method lower"
        );
    }

    #[test]
    fn test_lower_return_shape_is_unconstrained() {
        let checker = ConformanceChecker::standard();
        for returns in [
            ReturnShape::Str,
            ReturnShape::Bool,
            ReturnShape::Any,
            ReturnShape::Named("Bytes".to_string()),
        ] {
            let shape = TypeShape::new("T").method(MethodSignature::nullary("lower", returns));
            assert!(checker.conforms(&shape, "LowercaseConvertible"));
        }
    }

    #[test]
    fn test_lower_with_arguments_is_rejected() {
        let checker = ConformanceChecker::standard();
        let shape = TypeShape::new("Localized")
            .method(MethodSignature::new("lower", ["locale"], ReturnShape::Str));
        assert_eq!(
            checker.diagnose(&shape, "LowercaseConvertible").unwrap(),
            vec![Mismatch::ArityMismatch {
                method: "lower".to_string(),
                expected: 0,
                found: 1,
            }]
        );
    }

    #[test]
    fn test_one_argument_membership_is_accepted() {
        let checker = ConformanceChecker::standard();
        let list = TypeShape::new("list")
            .method(MethodSignature::new("contains", ["item"], ReturnShape::Bool));
        assert!(checker.check(&list, "ContainmentCheckable").is_ok());
    }

    #[test]
    fn test_unannotated_membership_return_conforms() {
        let checker = ConformanceChecker::standard();
        let bag =
            TypeShape::from_yaml("name: Bag\nmethods:\n  - name: contains\n    params: [item]\n")
                .unwrap();
        assert_eq!(bag.overloads("contains").next().unwrap().returns, ReturnShape::Any);
        assert!(checker.diagnose(&bag, "ContainmentCheckable").unwrap().is_empty());
        assert!(checker.conforms(&bag, "ContainmentCheckable"));

        let counter = TypeShape::new("Counter")
            .method(MethodSignature::nullary("to_int", ReturnShape::Any));
        assert!(checker.conforms(&counter, "SupportsInt"));
    }

    #[test]
    fn test_two_argument_membership_is_rejected() {
        let checker = ConformanceChecker::standard();
        let grid = TypeShape::new("Grid").method(MethodSignature::new(
            "contains",
            ["row", "col"],
            ReturnShape::Bool,
        ));
        let err = checker.check(&grid, "ContainmentCheckable").unwrap_err();
        match err {
            ConformanceError::NotConforming { mismatches, .. } => {
                assert_eq!(
                    mismatches,
                    vec![Mismatch::ArityMismatch {
                        method: "contains".to_string(),
                        expected: 1,
                        found: 2,
                    }]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_membership_must_return_bool() {
        let checker = ConformanceChecker::standard();
        let counter = TypeShape::new("Counter")
            .method(MethodSignature::new("contains", ["item"], ReturnShape::Int));
        assert_eq!(
            checker.diagnose(&counter, "ContainmentCheckable").unwrap(),
            vec![Mismatch::ReturnMismatch {
                method: "contains".to_string(),
                expected: ReturnShape::Bool,
                found: ReturnShape::Int,
            }]
        );
    }

    #[test]
    fn test_any_matching_overload_is_enough() {
        let checker = ConformanceChecker::standard();
        let shape = TypeShape::new("Overloaded")
            .method(MethodSignature::new("contains", ["a", "b"], ReturnShape::Bool))
            .method(MethodSignature::new("contains", ["item"], ReturnShape::Bool));
        assert!(checker.conforms(&shape, "ContainmentCheckable"));
    }

    #[test]
    fn test_empty_shape_fails_every_protocol() {
        let checker = ConformanceChecker::standard();
        let empty = TypeShape::new("object");
        for decl in standard_declarations() {
            assert!(!checker.conforms(&empty, &decl.name), "{} accepted", decl.name);
            for alias in &decl.aliases {
                assert!(!checker.conforms(&empty, alias));
            }
        }
        assert!(checker.satisfied_by(&empty).is_empty());
    }

    #[test]
    fn test_satisfied_by_lists_each_protocol_independently() {
        let checker = ConformanceChecker::standard();
        let names: Vec<&str> = checker
            .satisfied_by(&text_shape())
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["ContainmentCheckable", "LowercaseConvertible", "Sized"]);

        let names: Vec<&str> = checker
            .satisfied_by(&int_shape())
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["ComplexConvertible", "FloatConvertible", "IntConvertible"]
        );
    }

    #[test]
    fn test_size_return_must_be_int_like() {
        let checker = ConformanceChecker::standard();
        let flag = TypeShape::new("Flag").method(MethodSignature::nullary("size", ReturnShape::Bool));
        assert!(checker.conforms(&flag, "Sized"));
        let floaty =
            TypeShape::new("Floaty").method(MethodSignature::nullary("size", ReturnShape::Float));
        assert!(!checker.conforms(&floaty, "SupportsLen"));
    }

    #[test]
    fn test_unknown_protocol() {
        let checker = ConformanceChecker::standard();
        assert!(matches!(
            checker.check(&text_shape(), "Hashable"),
            Err(ConformanceError::UnknownProtocol(name)) if name == "Hashable"
        ));
        assert!(!checker.conforms(&text_shape(), "Hashable"));
    }

    #[test]
    fn test_checker_over_custom_registry() {
        let mut registry = CapabilityRegistry::new();
        registry
            .register(
                ProtocolDecl::new("Stream")
                    .with_method(MethodSignature::new("read", ["size"], ReturnShape::Str))
                    .with_method(MethodSignature::nullary("close", ReturnShape::Any)),
            )
            .unwrap();
        let checker = ConformanceChecker::new(&registry);

        let half = TypeShape::new("Reader")
            .method(MethodSignature::new("read", ["n"], ReturnShape::Str));
        let found = checker.diagnose(&half, "Stream").unwrap();
        assert_eq!(
            found,
            vec![Mismatch::MissingMethod {
                method: "close".to_string()
            }]
        );
        assert!(!checker.conforms(&text_shape(), "LowercaseConvertible"));
    }
}
