//! Example scope wrapping for a nested target declaration.
//!
//! Run with: `cargo run --example wrap`

use typedesc::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // Ancestry as a syntax walker would report it, innermost first.
    let ancestry = DeclarationAncestry::from_walk([
        ScopeAncestor::Type(EnclosingType::generic(
            TypeKeyword::Class,
            "Container",
            "<T>",
            "where T : struct",
        )),
        ScopeAncestor::Type(EnclosingType::new(TypeKeyword::Class, "Root")),
        ScopeAncestor::Namespace("App.Data".to_string()),
        ScopeAncestor::Boundary,
    ]);

    let content = "\
public static TypeInfo GetDescriptor(TypeInfo TTypeInfo) =>\n\
    registry.Resolve(typeof(Container<>), TTypeInfo);\n";

    println!("{}", wrap_fragment(&ancestry, content));
}
