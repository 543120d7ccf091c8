//! Capability Registry: the catalogue of protocol declarations.
//!
//! The registry holds declarations from:
//! 1. The six builtin declarations
//! 2. YAML files in the configured search paths
//! 3. Programmatically registered declarations
//!
//! Resolution is by canonical name or alias:
//! `registry.resolve("SupportsInt")` returns the `IntConvertible` declaration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::capability::{standard_declarations, Origin, ProtocolDecl};
use crate::utilities::config::RegistryConfig;
use crate::utilities::errors::RegistryError;

static STANDARD: Lazy<CapabilityRegistry> = Lazy::new(CapabilityRegistry::standard);

/// The process-wide builtin catalogue, built on first use and never mutated.
pub fn standard_registry() -> &'static CapabilityRegistry {
    &STANDARD
}

/// What [`CapabilityRegistry::register`] did with a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new name was added.
    Added,
    /// An identical declaration was already present.
    Unchanged,
    /// A different declaration under the same name was replaced.
    Replaced,
}

/// Catalogue of protocol declarations indexed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    /// Declarations indexed by canonical name
    protocols: HashMap<String, ProtocolDecl>,

    /// Search paths for protocol YAML files
    search_paths: Vec<PathBuf>,

    /// Alias -> canonical name
    aliases: HashMap<String, String>,

    /// Replace conflicting declarations instead of rejecting them
    allow_redeclaration: bool,
}

impl CapabilityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the six builtin declarations.
    pub fn standard() -> Self {
        let mut reg = Self::new();
        for decl in standard_declarations() {
            reg.insert(decl);
        }
        reg
    }

    /// Build a registry from configuration. Search paths are recorded but
    /// not scanned; call [`load_all`](Self::load_all) for that.
    pub fn with_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut reg = if config.include_standard {
            Self::standard()
        } else {
            Self::new()
        };
        reg.allow_redeclaration = config.allow_redeclaration;
        reg.search_paths = config.search_paths.clone();
        for (alias, target) in &config.aliases {
            if alias.trim().is_empty() || alias == target {
                return Err(RegistryError::Validation(format!(
                    "invalid alias {:?} for protocol {}",
                    alias, target
                )));
            }
            reg.add_alias(alias, target);
        }
        Ok(reg)
    }

    /// Add a search path for protocol YAML files.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Register an alias for a canonical protocol name.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        log::debug!("Protocol alias {} -> {}", alias, target);
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// Register a declaration.
    ///
    /// Registering the same contract twice is a no-op. A different contract
    /// under an existing name is a conflict unless redeclaration is allowed.
    /// Aliases never move between protocols: taking a name another protocol
    /// already answers to is rejected before anything changes.
    pub fn register(&mut self, decl: ProtocolDecl) -> Result<RegisterOutcome, RegistryError> {
        decl.validate()?;
        self.check_names(&decl)?;

        let outcome = match self.protocols.get(&decl.name) {
            None => RegisterOutcome::Added,
            Some(existing) if existing.same_contract(&decl) => RegisterOutcome::Unchanged,
            Some(_) if self.allow_redeclaration => RegisterOutcome::Replaced,
            Some(_) => {
                return Err(RegistryError::Conflict {
                    name: decl.name.clone(),
                })
            }
        };

        match outcome {
            RegisterOutcome::Unchanged => {
                // Keep the first declaration, but remember any new aliases.
                for alias in &decl.aliases {
                    self.aliases
                        .entry(alias.clone())
                        .or_insert_with(|| decl.name.clone());
                }
                if let Some(existing) = self.protocols.get_mut(&decl.name) {
                    for alias in decl.aliases {
                        if !existing.aliases.contains(&alias) {
                            existing.aliases.push(alias);
                        }
                    }
                }
            }
            RegisterOutcome::Added | RegisterOutcome::Replaced => {
                log::debug!("Registering protocol {} ({:?})", decl.name, outcome);
                if let Some(old) = self.protocols.get(&decl.name) {
                    for alias in &old.aliases {
                        self.aliases.remove(alias);
                    }
                }
                self.insert(decl);
            }
        }
        Ok(outcome)
    }

    /// Register declarations from YAML text. The text can hold a single
    /// `protocol:` or a `protocols:` list. Returns how many were read.
    ///
    /// A list is applied as a whole: if any entry is invalid or conflicts,
    /// the registry is left as it was.
    pub fn register_yaml(&mut self, yaml: &str) -> Result<usize, RegistryError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.get("protocol").is_some() {
            self.register(ProtocolDecl::from_yaml(yaml)?)?;
            return Ok(1);
        }

        let list: ProtocolListWrapper = serde_yaml::from_value(value)?;
        let count = list.protocols.len();
        let mut staged = self.clone();
        for decl in list.protocols {
            staged.register(decl)?;
        }
        *self = staged;
        Ok(count)
    }

    /// Register declarations from a YAML file.
    pub fn register_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        self.register_yaml(&content)
    }

    /// Load all protocol YAML files from a directory (recursive).
    ///
    /// Files that fail to parse or conflict are logged and skipped.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize, RegistryError> {
        let mut count = 0;
        if !dir.exists() {
            return Ok(0);
        }

        let mut entries = std::fs::read_dir(dir)?
            .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, file_type) in entries {
            if file_type.is_symlink() && path.is_dir() {
                log::debug!("Not following symlinked directory {}", path.display());
            } else if file_type.is_dir() {
                count += self.load_directory(&path)?;
            } else if is_yaml(&path) {
                match self.register_from_file(&path) {
                    Ok(n) => count += n,
                    Err(e) => {
                        log::warn!("Failed to load protocol from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(count)
    }

    /// Load declarations from every search path.
    pub fn load_all(&mut self) -> Result<usize, RegistryError> {
        let mut count = 0;
        let paths = self.search_paths.clone();
        for path in &paths {
            count += self.load_directory(path)?;
        }
        Ok(count)
    }

    /// Resolve a declaration by canonical name or alias.
    pub fn resolve(&self, name: &str) -> Option<&ProtocolDecl> {
        if let Some(decl) = self.protocols.get(name) {
            return Some(decl);
        }
        let target = self.aliases.get(name)?;
        log::debug!("Resolved alias {} -> {}", name, target);
        self.protocols.get(target)
    }

    /// Resolve a declaration, falling back to `<search_path>/<name>.yaml`
    /// (or `.yml`) when it is not registered yet.
    pub fn resolve_or_load(&mut self, name: &str) -> Option<&ProtocolDecl> {
        if self.resolve(name).is_none() {
            for search_path in &self.search_paths.clone() {
                let loaded = ["yaml", "yml"].iter().any(|ext| {
                    let candidate = search_path.join(format!("{}.{}", name, ext));
                    candidate.exists()
                        && self
                            .register_from_file(&candidate)
                            .map_err(|e| {
                                log::warn!(
                                    "Failed to load protocol from {}: {}",
                                    candidate.display(),
                                    e
                                )
                            })
                            .is_ok()
                });
                if loaded {
                    break;
                }
            }
        }
        self.resolve(name)
    }

    /// All declarations, sorted by name.
    pub fn list(&self) -> Vec<&ProtocolDecl> {
        let mut decls: Vec<&ProtocolDecl> = self.protocols.values().collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        decls
    }

    /// Declarations with the given origin, sorted by name.
    pub fn list_by_origin(&self, origin: Origin) -> Vec<&ProtocolDecl> {
        self.list()
            .into_iter()
            .filter(|d| d.origin == origin)
            .collect()
    }

    /// Canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.list().into_iter().map(|d| d.name.as_str()).collect()
    }

    /// Get the total number of registered declarations.
    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    /// Reject a declaration whose name or aliases already belong to a
    /// different protocol.
    fn check_names(&self, decl: &ProtocolDecl) -> Result<(), RegistryError> {
        if let Some(owner) = self.aliases.get(&decl.name) {
            if *owner != decl.name {
                return Err(RegistryError::AliasTaken {
                    alias: decl.name.clone(),
                    owner: owner.clone(),
                });
            }
        }
        for alias in &decl.aliases {
            if *alias != decl.name && self.protocols.contains_key(alias) {
                return Err(RegistryError::AliasTaken {
                    alias: alias.clone(),
                    owner: alias.clone(),
                });
            }
            if let Some(owner) = self.aliases.get(alias) {
                if *owner != decl.name {
                    return Err(RegistryError::AliasTaken {
                        alias: alias.clone(),
                        owner: owner.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn insert(&mut self, decl: ProtocolDecl) {
        for alias in &decl.aliases {
            self.aliases.insert(alias.clone(), decl.name.clone());
        }
        self.protocols.insert(decl.name.clone(), decl);
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml")
}

/// Wrapper for YAML list of declarations
#[derive(Debug, Deserialize)]
struct ProtocolListWrapper {
    protocols: Vec<ProtocolDecl>,
}
