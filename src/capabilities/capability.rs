//! Protocol declaration: the descriptor form of one capability contract.
//!
//! A declaration lists the methods a conforming type must expose. It
//! carries behaviour only and declares no fields. Declarations can be built
//! in code or loaded from YAML:
//!
//! ```yaml
//! protocol:
//!   name: "LowercaseConvertible"
//!   description: "Produces a lowercased form of itself"
//!   origin: local
//!   methods:
//!     - name: "lower"
//!       returns: any
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utilities::errors::RegistryError;

/// The return type a method signature promises, as seen by tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReturnShape {
    /// Unconstrained: any return type is acceptable.
    Any,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    /// Any other type, by name.
    Named(String),
}

impl ReturnShape {
    /// Whether a method returning `found` satisfies a requirement of `self`.
    ///
    /// `Any` is compatible in both directions: it accepts everything and is
    /// accepted everywhere, so an unannotated return never fails a check.
    /// `Int` also accepts `Bool`. Other shapes must match exactly.
    pub fn accepts(&self, found: &ReturnShape) -> bool {
        match (self, found) {
            (ReturnShape::Any, _) | (_, ReturnShape::Any) => true,
            (ReturnShape::Int, ReturnShape::Bool) => true,
            (expected, found) => expected == found,
        }
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnShape::Any => f.write_str("Any"),
            ReturnShape::Bool => f.write_str("bool"),
            ReturnShape::Int => f.write_str("int"),
            ReturnShape::Float => f.write_str("float"),
            ReturnShape::Complex => f.write_str("complex"),
            ReturnShape::Str => f.write_str("str"),
            ReturnShape::Named(name) => f.write_str(name),
        }
    }
}

/// A method signature. `params` excludes the receiver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name
    pub name: String,

    /// Parameter names, in call order
    #[serde(default)]
    pub params: Vec<String>,

    /// Declared return shape
    #[serde(default = "default_returns")]
    pub returns: ReturnShape,
}

fn default_returns() -> ReturnShape {
    ReturnShape::Any
}

impl MethodSignature {
    /// Create a signature with the given parameters and return shape.
    pub fn new<P: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = P>,
        returns: ReturnShape,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            returns,
        }
    }

    /// Create a zero-argument signature.
    pub fn nullary(name: impl Into<String>, returns: ReturnShape) -> Self {
        Self::new(name, Vec::<String>::new(), returns)
    }

    /// Number of arguments, not counting the receiver.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.name, self.params.join(", "), self.returns)
    }
}

/// Where a declaration comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Declared by this catalogue.
    #[default]
    Local,
    /// Part of the standard capability set, re-exported here.
    Standard,
}

/// One structural interface: a name plus the methods a conforming type must
/// expose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProtocolDecl {
    /// Canonical name (e.g., "ContainmentCheckable")
    pub name: String,

    /// Alternate names this declaration answers to (e.g., "SupportsInt")
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Whether the declaration is local or from the standard set
    #[serde(default)]
    pub origin: Origin,

    /// Required methods
    pub methods: Vec<MethodSignature>,
}

impl ProtocolDecl {
    /// Create a local declaration with no methods yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            origin: Origin::Local,
            methods: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    /// Parse a declaration from a YAML string (nested under `protocol:`).
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let wrapper: ProtocolWrapper = serde_yaml::from_str(yaml)?;
        wrapper.protocol.validate()?;
        Ok(wrapper.protocol)
    }

    /// Parse a declaration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check the declaration is well formed: a non-empty name, at least one
    /// method, and no method declared twice.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::Validation(
                "protocol name must not be empty".to_string(),
            ));
        }
        if self.methods.is_empty() {
            return Err(RegistryError::Validation(format!(
                "protocol {} declares no methods",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for method in &self.methods {
            if method.name.trim().is_empty() {
                return Err(RegistryError::Validation(format!(
                    "protocol {} has a method with an empty name",
                    self.name
                )));
            }
            if !seen.insert(method.name.as_str()) {
                return Err(RegistryError::Validation(format!(
                    "protocol {} declares method {} more than once",
                    self.name, method.name
                )));
            }
        }
        Ok(())
    }

    /// Look up a required method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Whether `name` is this declaration's name or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }

    /// Same contract, ignoring aliases and description.
    pub fn same_contract(&self, other: &ProtocolDecl) -> bool {
        self.name == other.name && self.origin == other.origin && self.methods == other.methods
    }
}

/// Wrapper for YAML deserialization (declaration is nested under `protocol:` key)
#[derive(Debug, Deserialize)]
struct ProtocolWrapper {
    protocol: ProtocolDecl,
}

/// The six builtin declarations, in catalogue order.
pub fn standard_declarations() -> Vec<ProtocolDecl> {
    vec![
        ProtocolDecl::new("LowercaseConvertible")
            .with_description("Produces a lowercased form of itself")
            .with_method(MethodSignature::nullary("lower", ReturnShape::Any)),
        ProtocolDecl::new("ContainmentCheckable")
            .with_description("Answers whether it contains an item")
            .with_method(MethodSignature::new("contains", ["item"], ReturnShape::Bool)),
        ProtocolDecl::new("IntConvertible")
            .with_description("Converts to an integer")
            .with_origin(Origin::Standard)
            .with_alias("SupportsInt")
            .with_method(MethodSignature::nullary("to_int", ReturnShape::Int)),
        ProtocolDecl::new("FloatConvertible")
            .with_description("Converts to a float")
            .with_origin(Origin::Standard)
            .with_alias("SupportsFloat")
            .with_method(MethodSignature::nullary("to_float", ReturnShape::Float)),
        ProtocolDecl::new("ComplexConvertible")
            .with_description("Converts to a complex number")
            .with_origin(Origin::Standard)
            .with_alias("SupportsComplex")
            .with_method(MethodSignature::nullary("to_complex", ReturnShape::Complex)),
        ProtocolDecl::new("Sized")
            .with_description("Reports its element count")
            .with_origin(Origin::Standard)
            .with_alias("SizeQueryable")
            .with_alias("SupportsLen")
            .with_method(MethodSignature::nullary("size", ReturnShape::Int)),
    ]
}
