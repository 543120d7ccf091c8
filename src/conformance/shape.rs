//! Type shapes: the methods a candidate type exposes, as tooling sees them.

use serde::{Deserialize, Serialize};

use crate::capabilities::capability::MethodSignature;
use crate::utilities::errors::RegistryError;

/// The observable surface of a candidate type.
///
/// ```yaml
/// name: "Inventory"
/// methods:
///   - name: "contains"
///     params: ["item"]
///     returns: bool
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShape {
    /// Type name, used in diagnostics
    pub name: String,

    /// Exposed methods. A name may appear more than once (overloads).
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
}

impl TypeShape {
    /// Create a shape with no methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add an exposed method.
    pub fn method(mut self, signature: MethodSignature) -> Self {
        self.methods.push(signature);
        self
    }

    /// Parse a shape from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Every exposed overload named `name`.
    pub fn overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodSignature> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Whether any method named `name` is exposed.
    pub fn exposes(&self, name: &str) -> bool {
        self.overloads(name).next().is_some()
    }
}
