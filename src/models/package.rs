//! Package model data structures
//!
//! A [`Package`] is the merged view of one logical Go package at one
//! directory: the declared name plus the ordered type, function, and value
//! declarations collected from every file assigned to it. Models are built
//! fresh per directory and discarded after processing.

/// A single package-level declaration.
///
/// Only the name and its derived visibility are modeled; signatures, fields,
/// and bodies are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier
    pub name: String,
    /// True if the identifier is exported
    pub public: bool,
}

impl Declaration {
    /// Create a declaration, deriving visibility from the given predicate
    pub fn new(name: impl Into<String>, visibility: fn(&str) -> bool) -> Self {
        let name = name.into();
        let public = visibility(&name);
        Self { name, public }
    }
}

/// The merged declarations of one logical package.
///
/// Declaration order within each collection is file-then-in-file source
/// order. Redeclarations are preserved as separate entries; the model never
/// deduplicates by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Declared package name
    pub name: String,
    /// Type declarations (`type` specs and aliases)
    pub types: Vec<Declaration>,
    /// Function and method declarations
    pub funcs: Vec<Declaration>,
    /// Package-level `var` and `const` declarations
    pub values: Vec<Declaration>,
}

impl Package {
    /// True if the package holds no declarations at all
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.funcs.is_empty() && self.values.is_empty()
    }

    /// Names of all exported type declarations, in declaration order
    pub fn public_type_names(&self) -> Vec<&str> {
        self.types
            .iter()
            .filter(|d| d.public)
            .map(|d| d.name.as_str())
            .collect()
    }
}

/// Go's export rule: an identifier is public iff its first character is
/// uppercase.
pub fn go_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
