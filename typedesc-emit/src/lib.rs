//! # TypeDesc Emit
//!
//! Code generators over the TypeDesc structural models.
//!
//! This crate provides:
//! - Descriptor expression generation from type descriptions
//! - Partial-declaration wrapping from declaration ancestry
//! - Mapper configuration and emission error types
//!
//! The two generators are independent and never call each other; both are
//! pure functions over immutable inputs and safe to invoke concurrently.

pub mod descriptor;
pub mod error;
pub mod options;
pub mod scope;

pub use descriptor::DescriptorMapper;
pub use error::{EmitError, Result};
pub use options::{MapperOptions, NestedOptionalPolicy};
pub use scope::ScopeWrapper;

use typedesc_model::scope::DeclarationAncestry;
use typedesc_model::types::TypeDescription;

/// Maps a type description to its descriptor expression with default
/// options.
///
/// # Arguments
/// * `ty` - Structural description of the type occurrence
///
/// # Returns
/// The descriptor expression, ready to splice into generated source text.
///
/// # Errors
/// Returns `EmitError` if the type has no descriptor mapping.
pub fn map_type(ty: &TypeDescription) -> Result<String> {
    DescriptorMapper::new().map(ty)
}

/// Wraps generated content in the declarations matching its ancestry.
///
/// # Arguments
/// * `ancestry` - Enclosing namespace and type chain of the target
/// * `content` - Generated member text, embedded verbatim
///
/// # Returns
/// The wrapped source text; the driver decides where it is persisted.
#[must_use]
pub fn wrap_fragment(ancestry: &DeclarationAncestry, content: &str) -> String {
    ScopeWrapper::new(ancestry).wrap(content)
}
