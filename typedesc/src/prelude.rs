//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use typedesc::prelude::*;
//! ```

// Model types
pub use typedesc_model::names;
pub use typedesc_model::scope::{DeclarationAncestry, EnclosingType, ScopeAncestor, TypeKeyword};
pub use typedesc_model::types::{ContainerKind, PrimitiveKind, TypeDescription};

// Generators
pub use typedesc_emit::descriptor::DescriptorMapper;
pub use typedesc_emit::error::{EmitError, Result as EmitResult};
pub use typedesc_emit::options::{MapperOptions, NestedOptionalPolicy};
pub use typedesc_emit::scope::ScopeWrapper;
pub use typedesc_emit::{map_type, wrap_fragment};
