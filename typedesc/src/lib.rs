//! # TypeDesc
//!
//! Code-generation core for serialization bindings.
//!
//! TypeDesc turns a host language's static type expressions into canonical
//! descriptor expressions for a runtime type system, and re-emits generated
//! members so they attach to declarations nested arbitrarily deep inside
//! namespaces and enclosing types.
//!
//! ## Features
//!
//! - **Descriptor mapping** - Recursive translation of structural type
//!   descriptions into descriptor-constructor expressions
//! - **Scope reconstruction** - Ancestry recovery and `partial` declaration
//!   wrapping so generated text composes with the original construct
//! - **Allow-list rejection** - Unrecognized host types fail loudly by name
//!   instead of being serialized incorrectly
//! - **Pure and parallel** - Stateless generators over immutable value
//!   models, safe to fan out across declarations
//!
//! ## Quick Start
//!
//! ```
//! use typedesc::prelude::*;
//!
//! let ty = TypeDescription::optional(TypeDescription::list(
//!     TypeDescription::Primitive(PrimitiveKind::U32),
//! ));
//! assert_eq!(map_type(&ty).unwrap(), "option(list(u32))");
//!
//! let ancestry = DeclarationAncestry {
//!     namespace: vec!["App".to_string()],
//!     enclosing: vec![EnclosingType::new(TypeKeyword::Class, "Order")],
//! };
//! let wrapped = wrap_fragment(&ancestry, "public int Generated() => 42;");
//! assert!(wrapped.starts_with("namespace App {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Type descriptions, declaration ancestry, name formatting
//! - [`emit`] - Descriptor mapper, scope wrapper, options, errors

pub mod prelude;

/// Structural models consumed by the generators.
pub mod model {
    pub use typedesc_model::*;
}

/// Code generators and emission errors.
pub mod emit {
    pub use typedesc_emit::*;
}

// Re-export commonly used items at the crate root
pub use typedesc_emit::{
    DescriptorMapper, EmitError, MapperOptions, NestedOptionalPolicy, ScopeWrapper, map_type,
    wrap_fragment,
};
pub use typedesc_model::{
    ContainerKind, DeclarationAncestry, EnclosingType, PrimitiveKind, ScopeAncestor,
    TypeDescription, TypeKeyword,
};
