//! Benchmark fixture builders.

use typedesc_model::scope::{DeclarationAncestry, EnclosingType, TypeKeyword};
use typedesc_model::types::{PrimitiveKind, TypeDescription};

/// Builds a type description nested `depth` containers deep.
#[must_use]
pub fn deep_type(depth: usize) -> TypeDescription {
    let mut ty = TypeDescription::Primitive(PrimitiveKind::U64);
    for i in 0..depth {
        ty = if i % 2 == 0 {
            TypeDescription::list(ty)
        } else {
            TypeDescription::map(TypeDescription::Primitive(PrimitiveKind::Str), ty)
        };
    }
    ty
}

/// Builds a user-defined reference with `width` primitive type arguments.
#[must_use]
pub fn wide_user_defined(width: usize) -> TypeDescription {
    let args = (0..width)
        .map(|i| TypeDescription::Primitive(PrimitiveKind::ALL[i % PrimitiveKind::ALL.len()]))
        .collect();
    TypeDescription::user_defined("App.Generated.Record", args)
}

/// Builds an ancestry `depth` enclosing types deep under a namespace.
#[must_use]
pub fn deep_ancestry(depth: usize) -> DeclarationAncestry {
    let enclosing = (0..depth)
        .map(|i| {
            EnclosingType::generic(
                TypeKeyword::Class,
                format!("Level{i}"),
                "<T>",
                "where T : struct",
            )
        })
        .collect();
    DeclarationAncestry {
        namespace: vec!["App".to_string(), "Generated".to_string()],
        enclosing,
    }
}
