//! Example descriptor mapping for a handful of field types.
//!
//! Run with: `cargo run --example descriptor`

use typedesc::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let fields = [
        ("id", TypeDescription::Primitive(PrimitiveKind::U64)),
        ("name", TypeDescription::Primitive(PrimitiveKind::Str)),
        (
            "payload",
            TypeDescription::optional(TypeDescription::ByteArray),
        ),
        (
            "tags",
            TypeDescription::list(TypeDescription::Primitive(PrimitiveKind::Str)),
        ),
        (
            "balances",
            TypeDescription::map(
                TypeDescription::Primitive(PrimitiveKind::Str),
                TypeDescription::Primitive(PrimitiveKind::I128),
            ),
        ),
        (
            "owner",
            TypeDescription::user_defined(
                "App.Accounts.Account",
                vec![TypeDescription::type_parameter("T")],
            ),
        ),
    ];

    let mapper = DescriptorMapper::new();
    for (field, ty) in &fields {
        match mapper.map(ty) {
            Ok(descriptor) => println!("{field}: {ty} => {descriptor}"),
            Err(e) => eprintln!("{field}: {e}"),
        }
    }

    // An unrecognized host type is rejected by name rather than guessed at.
    let rejected = TypeDescription::host_type("System.DateTime");
    if let Err(e) = mapper.map(&rejected) {
        println!("rejected: {e}");
    }
}
