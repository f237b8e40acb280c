//! Type description model.
//!
//! This module contains the data structures describing a single host type
//! occurrence as seen by the descriptor mapper: scalar kinds, nullable and
//! sequence wrappers, built-in generic containers, generic parameters, and
//! references to user-defined types.

use std::fmt;

/// Scalar kinds recognized by the descriptor mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Signed 128-bit integer.
    I128,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Unsigned 128-bit integer.
    U128,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Text string.
    Str,
}

impl PrimitiveKind {
    /// Every scalar kind, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Bool,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::F32,
        Self::F64,
        Self::Str,
    ];

    /// Returns the canonical descriptor name for this kind.
    ///
    /// The table is exhaustive over the enumeration; adding a kind without
    /// an entry is a compile error, never a runtime condition.
    #[must_use]
    pub const fn descriptor_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Str => "string",
        }
    }

    /// Returns true if this is a signed integer kind.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128)
    }

    /// Returns true if this is an unsigned integer kind.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128)
    }

    /// Returns true if this is a floating point kind.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor_name())
    }
}

/// Built-in generic container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Homogeneous list; exactly one type argument.
    List,
    /// Key/value map; exactly two type arguments.
    Map,
}

impl ContainerKind {
    /// Returns the descriptor constructor name for this container.
    #[must_use]
    pub const fn descriptor_name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
        }
    }

    /// Returns the number of type arguments this container carries.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::List => 1,
            Self::Map => 2,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor_name())
    }
}

/// Structural description of one host type occurrence.
///
/// Exactly one variant applies per node. `Optional` never wraps another
/// `Optional`; the [`TypeDescription::optional`] constructor normalizes
/// nested nullability away, and the mapper re-applies the same
/// normalization when handed a hand-built nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescription {
    /// A recognized scalar kind.
    Primitive(PrimitiveKind),
    /// Nullable wrapper over an inner type.
    Optional(Box<TypeDescription>),
    /// Contiguous sequence of 8-bit unsigned values. A first-class kind in
    /// the target type system, distinct from `Array(Primitive(U8))`.
    ByteArray,
    /// Homogeneous sequence of a non-byte element type.
    Array(Box<TypeDescription>),
    /// Built-in generic container with its ordered type arguments.
    GenericContainer {
        /// Container kind.
        kind: ContainerKind,
        /// Ordered type arguments; length must equal the kind's arity.
        args: Vec<TypeDescription>,
    },
    /// Unresolved generic parameter of the enclosing declaration.
    TypeParameter(String),
    /// Named user-defined type expected to expose its own descriptor
    /// capability.
    UserDefined {
        /// Fully-qualified type name.
        qualified_name: String,
        /// Ordered type arguments, empty for non-generic types.
        type_arguments: Vec<TypeDescription>,
    },
    /// A host standard-library type outside the recognized scalar set
    /// (for example a date/time or URI type). The mapper always rejects
    /// these by name rather than guessing a wire representation.
    HostType {
        /// Fully-qualified host type name.
        name: String,
    },
}

impl TypeDescription {
    /// Creates a nullable wrapper, flattening nested nullability.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        match inner {
            Self::Optional(_) => inner,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// Creates an array of the given element type.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates a list container.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::GenericContainer {
            kind: ContainerKind::List,
            args: vec![element],
        }
    }

    /// Creates a map container.
    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::GenericContainer {
            kind: ContainerKind::Map,
            args: vec![key, value],
        }
    }

    /// Creates a generic-parameter reference.
    #[must_use]
    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::TypeParameter(name.into())
    }

    /// Creates a user-defined type reference.
    #[must_use]
    pub fn user_defined(
        qualified_name: impl Into<String>,
        type_arguments: Vec<Self>,
    ) -> Self {
        Self::UserDefined {
            qualified_name: qualified_name.into(),
            type_arguments,
        }
    }

    /// Creates an unrecognized host type reference.
    #[must_use]
    pub fn host_type(name: impl Into<String>) -> Self {
        Self::HostType { name: name.into() }
    }

    /// Returns true if this is a nullable wrapper.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns true if this is a recognized scalar.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true if this is a user-defined type reference.
    #[must_use]
    pub const fn is_user_defined(&self) -> bool {
        matches!(self, Self::UserDefined { .. })
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.descriptor_name()),
            Self::Optional(inner) => write!(f, "option<{inner}>"),
            Self::ByteArray => f.write_str("bytes"),
            Self::Array(element) => write!(f, "array<{element}>"),
            Self::GenericContainer { kind, args } => {
                write!(f, "{}<", kind.descriptor_name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::TypeParameter(name) => f.write_str(name),
            Self::UserDefined {
                qualified_name,
                type_arguments,
            } => {
                f.write_str(qualified_name)?;
                if !type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in type_arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::HostType { name } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_names_are_distinct() {
        for (i, a) in PrimitiveKind::ALL.iter().enumerate() {
            for b in &PrimitiveKind::ALL[i + 1..] {
                assert_ne!(a.descriptor_name(), b.descriptor_name());
            }
        }
    }

    #[test]
    fn test_primitive_kind_classification() {
        assert!(PrimitiveKind::I128.is_signed());
        assert!(!PrimitiveKind::I128.is_unsigned());
        assert!(PrimitiveKind::U8.is_unsigned());
        assert!(PrimitiveKind::F64.is_float());
        assert!(!PrimitiveKind::Bool.is_signed());
        assert!(!PrimitiveKind::Str.is_float());
    }

    #[test]
    fn test_container_arity() {
        assert_eq!(ContainerKind::List.arity(), 1);
        assert_eq!(ContainerKind::Map.arity(), 2);
    }

    #[test]
    fn test_optional_flattens_nested() {
        let inner = TypeDescription::Primitive(PrimitiveKind::I32);
        let once = TypeDescription::optional(inner.clone());
        let twice = TypeDescription::optional(once.clone());
        assert_eq!(once, twice);
        assert_eq!(
            twice,
            TypeDescription::Optional(Box::new(inner))
        );
    }

    #[test]
    fn test_map_constructor_arg_order() {
        let m = TypeDescription::map(
            TypeDescription::Primitive(PrimitiveKind::Str),
            TypeDescription::Primitive(PrimitiveKind::U64),
        );
        let TypeDescription::GenericContainer { kind, args } = m else {
            panic!("expected a container");
        };
        assert_eq!(kind, ContainerKind::Map);
        assert_eq!(args[0], TypeDescription::Primitive(PrimitiveKind::Str));
        assert_eq!(args[1], TypeDescription::Primitive(PrimitiveKind::U64));
    }

    #[test]
    fn test_display_renders_nested_types() {
        let ty = TypeDescription::optional(TypeDescription::map(
            TypeDescription::Primitive(PrimitiveKind::Str),
            TypeDescription::user_defined(
                "Orders.Order",
                vec![TypeDescription::type_parameter("T")],
            ),
        ));
        assert_eq!(ty.to_string(), "option<map<string, Orders.Order<T>>>");
    }

    #[test]
    fn test_display_host_type() {
        let ty = TypeDescription::host_type("System.DateTime");
        assert_eq!(ty.to_string(), "System.DateTime");
    }

    #[test]
    fn test_predicates() {
        assert!(TypeDescription::optional(TypeDescription::ByteArray).is_optional());
        assert!(TypeDescription::Primitive(PrimitiveKind::Bool).is_primitive());
        assert!(TypeDescription::user_defined("A.B", vec![]).is_user_defined());
        assert!(!TypeDescription::ByteArray.is_optional());
    }
}
