//! Descriptor expression generation.
//!
//! Converts a [`TypeDescription`] into the descriptor expression the target
//! runtime type system consumes: a call to a named constructor with
//! recursively mapped arguments.

use typedesc_model::names;
use typedesc_model::types::{ContainerKind, TypeDescription};

use crate::error::{EmitError, Result};
use crate::options::{MapperOptions, NestedOptionalPolicy};

/// Member every user-defined type is expected to expose for producing its
/// own descriptor.
const DESCRIPTOR_MEMBER: &str = "GetDescriptor";

/// Generator for descriptor expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorMapper {
    options: MapperOptions,
}

impl DescriptorMapper {
    /// Creates a mapper with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper with the given options.
    #[must_use]
    pub fn with_options(options: MapperOptions) -> Self {
        Self { options }
    }

    /// Maps a type description to its descriptor expression.
    ///
    /// Pure and side-effect-free; repeated invocation with the same input
    /// yields the same output. Nullable wrappers are handled before every
    /// other case so each downstream case is written once for its
    /// non-nullable shape.
    ///
    /// # Errors
    /// Returns [`EmitError::UnsupportedType`] for host types outside the
    /// recognized set, and [`EmitError::NestedOptional`] for doubly
    /// nullable input under the `Reject` policy.
    ///
    /// # Panics
    /// Panics if a built-in container carries the wrong number of type
    /// arguments or a user-defined reference has an empty name. These are
    /// contract violations by the producing driver, not runtime
    /// conditions.
    pub fn map(&self, ty: &TypeDescription) -> Result<String> {
        tracing::trace!(ty = %ty, "mapping type description");
        match ty {
            TypeDescription::Optional(inner) => {
                if inner.is_optional() {
                    match self.options.nested_optional {
                        NestedOptionalPolicy::Flatten => return self.map(inner),
                        NestedOptionalPolicy::Reject => {
                            return Err(EmitError::NestedOptional {
                                type_name: ty.to_string(),
                            });
                        }
                    }
                }
                Ok(format!("option({})", self.map(inner)?))
            }
            TypeDescription::TypeParameter(name) => Ok(format!("{name}TypeInfo")),
            TypeDescription::Primitive(kind) => Ok(kind.descriptor_name().to_string()),
            TypeDescription::ByteArray => Ok("bytes".to_string()),
            TypeDescription::Array(element) => Ok(format!("array({})", self.map(element)?)),
            TypeDescription::GenericContainer { kind, args } => self.map_container(*kind, args),
            TypeDescription::UserDefined {
                qualified_name,
                type_arguments,
            } => self.map_user_defined(qualified_name, type_arguments),
            TypeDescription::HostType { name } => {
                tracing::warn!(type_name = %name, "rejecting host type with no descriptor mapping");
                Err(EmitError::UnsupportedType {
                    type_name: name.clone(),
                })
            }
        }
    }

    fn map_container(&self, kind: ContainerKind, args: &[TypeDescription]) -> Result<String> {
        assert_eq!(
            args.len(),
            kind.arity(),
            "container '{kind}' expects {} type argument(s), got {}",
            kind.arity(),
            args.len(),
        );
        match kind {
            ContainerKind::List => Ok(format!("list({})", self.map(&args[0])?)),
            ContainerKind::Map => Ok(format!(
                "map({}, {})",
                self.map(&args[0])?,
                self.map(&args[1])?
            )),
        }
    }

    /// Defers to the named type's own descriptor capability, passing
    /// already-mapped type arguments positionally. User-defined structure
    /// is never inlined.
    fn map_user_defined(
        &self,
        qualified_name: &str,
        type_arguments: &[TypeDescription],
    ) -> Result<String> {
        assert!(
            !qualified_name.is_empty(),
            "user-defined type reference with an empty name"
        );
        let mapped = type_arguments
            .iter()
            .map(|arg| self.map(arg))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!(
            "{}({})",
            names::member_access(qualified_name, DESCRIPTOR_MEMBER),
            mapped.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedesc_model::types::PrimitiveKind;

    fn map(ty: &TypeDescription) -> Result<String> {
        DescriptorMapper::new().map(ty)
    }

    #[test]
    fn test_every_primitive_kind_has_a_fixed_name() {
        let expected = [
            (PrimitiveKind::Bool, "bool"),
            (PrimitiveKind::I8, "i8"),
            (PrimitiveKind::I16, "i16"),
            (PrimitiveKind::I32, "i32"),
            (PrimitiveKind::I64, "i64"),
            (PrimitiveKind::I128, "i128"),
            (PrimitiveKind::U8, "u8"),
            (PrimitiveKind::U16, "u16"),
            (PrimitiveKind::U32, "u32"),
            (PrimitiveKind::U64, "u64"),
            (PrimitiveKind::U128, "u128"),
            (PrimitiveKind::F32, "f32"),
            (PrimitiveKind::F64, "f64"),
            (PrimitiveKind::Str, "string"),
        ];
        assert_eq!(expected.len(), PrimitiveKind::ALL.len());
        for (kind, name) in expected {
            assert_eq!(map(&TypeDescription::Primitive(kind)).unwrap(), name);
        }
    }

    #[test]
    fn test_no_two_primitive_kinds_share_a_name() {
        let names: Vec<String> = PrimitiveKind::ALL
            .iter()
            .map(|&kind| map(&TypeDescription::Primitive(kind)).unwrap())
            .collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_optional_wraps_any_supported_type() {
        let samples = [
            TypeDescription::Primitive(PrimitiveKind::I64),
            TypeDescription::ByteArray,
            TypeDescription::array(TypeDescription::Primitive(PrimitiveKind::F32)),
            TypeDescription::list(TypeDescription::Primitive(PrimitiveKind::Str)),
            TypeDescription::map(
                TypeDescription::Primitive(PrimitiveKind::Str),
                TypeDescription::Primitive(PrimitiveKind::U32),
            ),
            TypeDescription::type_parameter("T"),
            TypeDescription::user_defined("App.Point", vec![]),
        ];
        for ty in samples {
            let plain = map(&ty).unwrap();
            let optional = map(&TypeDescription::optional(ty)).unwrap();
            assert_eq!(optional, format!("option({plain})"));
        }
    }

    #[test]
    fn test_bytes_distinct_from_array_of_u8() {
        let bytes = map(&TypeDescription::ByteArray).unwrap();
        let array = map(&TypeDescription::array(TypeDescription::Primitive(
            PrimitiveKind::U8,
        )))
        .unwrap();
        assert_eq!(bytes, "bytes");
        assert_eq!(array, "array(u8)");
        assert_ne!(bytes, array);
    }

    #[test]
    fn test_type_parameter_defers_to_generic_context() {
        assert_eq!(map(&TypeDescription::type_parameter("T")).unwrap(), "TTypeInfo");
        assert_eq!(
            map(&TypeDescription::type_parameter("TKey")).unwrap(),
            "TKeyTypeInfo"
        );
    }

    #[test]
    fn test_map_preserves_key_value_order() {
        let ty = TypeDescription::map(
            TypeDescription::Primitive(PrimitiveKind::Str),
            TypeDescription::Primitive(PrimitiveKind::U64),
        );
        assert_eq!(map(&ty).unwrap(), "map(string, u64)");
    }

    #[test]
    fn test_nested_containers_map_recursively() {
        let ty = TypeDescription::list(TypeDescription::map(
            TypeDescription::Primitive(PrimitiveKind::I32),
            TypeDescription::array(TypeDescription::Primitive(PrimitiveKind::Bool)),
        ));
        assert_eq!(map(&ty).unwrap(), "list(map(i32, array(bool)))");
    }

    #[test]
    fn test_user_defined_defers_to_descriptor_capability() {
        let ty = TypeDescription::user_defined(
            "Foo.Bar",
            vec![
                TypeDescription::Primitive(PrimitiveKind::I32),
                TypeDescription::Primitive(PrimitiveKind::Str),
            ],
        );
        assert_eq!(map(&ty).unwrap(), "Foo.Bar.GetDescriptor(i32, string)");
    }

    #[test]
    fn test_user_defined_without_arguments() {
        let ty = TypeDescription::user_defined("App.Point", vec![]);
        assert_eq!(map(&ty).unwrap(), "App.Point.GetDescriptor()");
    }

    #[test]
    fn test_user_defined_argument_order_is_positional() {
        let ty = TypeDescription::user_defined(
            "App.Pair",
            vec![
                TypeDescription::type_parameter("T"),
                TypeDescription::Primitive(PrimitiveKind::U8),
            ],
        );
        assert_eq!(map(&ty).unwrap(), "App.Pair.GetDescriptor(TTypeInfo, u8)");
    }

    #[test]
    fn test_unsupported_host_types_fail_by_name() {
        for name in [
            "System.DateTime",
            "System.TimeSpan",
            "System.Uri",
            "System.Decimal",
        ] {
            let err = map(&TypeDescription::host_type(name)).unwrap_err();
            match err {
                EmitError::UnsupportedType { type_name } => assert_eq!(type_name, name),
                other => panic!("expected UnsupportedType, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nested_optional_flattens_by_default() {
        let inner = TypeDescription::Primitive(PrimitiveKind::I32);
        let nested = TypeDescription::Optional(Box::new(TypeDescription::Optional(Box::new(
            inner.clone(),
        ))));
        assert_eq!(map(&nested).unwrap(), "option(i32)");
        assert_eq!(
            map(&nested).unwrap(),
            map(&TypeDescription::optional(inner)).unwrap()
        );
    }

    #[test]
    fn test_nested_optional_rejected_under_policy() {
        let nested = TypeDescription::Optional(Box::new(TypeDescription::Optional(Box::new(
            TypeDescription::Primitive(PrimitiveKind::I32),
        ))));
        let mapper = DescriptorMapper::with_options(
            MapperOptions::new().nested_optional(NestedOptionalPolicy::Reject),
        );
        assert!(matches!(
            mapper.map(&nested),
            Err(EmitError::NestedOptional { .. })
        ));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let ty = TypeDescription::optional(TypeDescription::map(
            TypeDescription::Primitive(PrimitiveKind::Str),
            TypeDescription::user_defined("A.B", vec![TypeDescription::ByteArray]),
        ));
        let first = map(&ty).unwrap();
        let second = map(&ty).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "option(map(string, A.B.GetDescriptor(bytes)))");
    }

    #[test]
    #[should_panic(expected = "expects 2 type argument(s), got 1")]
    fn test_map_with_wrong_arity_is_a_defect() {
        let ty = TypeDescription::GenericContainer {
            kind: ContainerKind::Map,
            args: vec![TypeDescription::Primitive(PrimitiveKind::I32)],
        };
        let _ = map(&ty);
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn test_empty_user_defined_name_is_a_defect() {
        let ty = TypeDescription::user_defined("", vec![]);
        let _ = map(&ty);
    }
}
