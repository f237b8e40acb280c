//! Declaration ancestry model.
//!
//! This module describes where a target declaration sits: the chain of
//! enclosing type declarations (innermost first) and the enclosing
//! namespace path. It also recovers that ancestry from an ancestor stream
//! supplied by an external syntax walker, so the wrapping logic stays
//! decoupled from any particular host parser or symbol model.

use std::fmt;

use crate::names;

/// Declaration keyword of an enclosing type.
///
/// Only constructs that can lexically nest other type declarations
/// participate; interfaces and modules never appear in an ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    /// Reference type declaration.
    Class,
    /// Value type declaration.
    Struct,
    /// Record declaration.
    Record,
}

impl TypeKeyword {
    /// Returns the keyword text as it appears in a declaration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One enclosing type declaration in an ancestry chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingType {
    /// Declaration keyword.
    pub keyword: TypeKeyword,
    /// Type name without generic parameters.
    pub name: String,
    /// Generic parameter list verbatim, including angle brackets
    /// (for example `<T, U>`); empty for non-generic types.
    pub type_parameters: String,
    /// Constraint clauses verbatim (for example `where T : struct`);
    /// empty when the declaration has none.
    pub constraints: String,
}

impl EnclosingType {
    /// Creates a non-generic enclosing type entry.
    #[must_use]
    pub fn new(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            name: name.into(),
            type_parameters: String::new(),
            constraints: String::new(),
        }
    }

    /// Creates a generic enclosing type entry with verbatim parameter and
    /// constraint text.
    #[must_use]
    pub fn generic(
        keyword: TypeKeyword,
        name: impl Into<String>,
        type_parameters: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self {
        Self {
            keyword,
            name: name.into(),
            type_parameters: type_parameters.into(),
            constraints: constraints.into(),
        }
    }
}

/// One lexical ancestor reported by a syntax walker, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeAncestor {
    /// An enclosing class, struct, or record declaration.
    Type(EnclosingType),
    /// An enclosing namespace declaration. The name may be dotted
    /// (`A.B`) when the host declares several segments at once.
    Namespace(String),
    /// Any other ancestor (file root, module, interface). Ends the walk.
    Boundary,
}

/// Full enclosing scope of a target declaration.
///
/// `enclosing` is ordered innermost first: entry *i+1* lexically contains
/// entry *i*. `namespace` is ordered outermost first, ready for joining.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationAncestry {
    /// Namespace segments, outermost first; empty means no namespace.
    pub namespace: Vec<String>,
    /// Enclosing type declarations, innermost first.
    pub enclosing: Vec<EnclosingType>,
}

impl DeclarationAncestry {
    /// Creates an empty ancestry (top-level declaration, no namespace).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recovers an ancestry from a walker's ancestor stream.
    ///
    /// Ancestors arrive innermost first, exactly as a climb up parent
    /// links yields them. Type entries accumulate until the first
    /// non-type ancestor; namespace entries then accumulate until the
    /// first non-namespace ancestor. Nested namespace names concatenate
    /// outermost first, each dotted name contributing its segments in
    /// declaration order.
    #[must_use]
    pub fn from_walk<I>(ancestors: I) -> Self
    where
        I: IntoIterator<Item = ScopeAncestor>,
    {
        let mut enclosing = Vec::new();
        let mut walked_namespaces: Vec<String> = Vec::new();

        for ancestor in ancestors {
            match ancestor {
                ScopeAncestor::Type(ty) => {
                    if !walked_namespaces.is_empty() {
                        break;
                    }
                    enclosing.push(ty);
                }
                ScopeAncestor::Namespace(name) => walked_namespaces.push(name),
                ScopeAncestor::Boundary => break,
            }
        }

        let namespace = walked_namespaces
            .iter()
            .rev()
            .flat_map(|name| name.split(names::NAMESPACE_SEPARATOR))
            .map(str::to_string)
            .collect();

        Self {
            namespace,
            enclosing,
        }
    }

    /// Returns true if there is neither a namespace nor any enclosing type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() && self.enclosing.is_empty()
    }

    /// Returns the number of enclosing type declarations.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.enclosing.len()
    }

    /// Returns the joined namespace path, empty for no namespace.
    #[must_use]
    pub fn namespace_path(&self) -> String {
        names::join_segments(self.namespace.iter().map(String::as_str))
    }
}

impl fmt::Display for DeclarationAncestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.namespace.is_empty() {
            f.write_str(&self.namespace_path())?;
            first = false;
        }
        for ty in self.enclosing.iter().rev() {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(&ty.name)?;
            first = false;
        }
        Ok(())
    }
}
