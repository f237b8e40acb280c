//! Scope reconstruction and code wrapping.
//!
//! Wraps generated member text in the namespace and `partial` declaration
//! chain of its target declaration, so the output composes with the
//! original construct wherever it was declared.

use typedesc_model::scope::{DeclarationAncestry, EnclosingType};

/// Generator for wrapped declaration text.
pub struct ScopeWrapper<'a> {
    ancestry: &'a DeclarationAncestry,
}

impl<'a> ScopeWrapper<'a> {
    /// Creates a wrapper for the given ancestry.
    #[must_use]
    pub fn new(ancestry: &'a DeclarationAncestry) -> Self {
        Self { ancestry }
    }

    /// Wraps the given content in matching namespace and type declarations.
    ///
    /// The enclosing-type chain is stored innermost first and emitted
    /// outermost first, each declared `partial`; one closing brace per
    /// entry closes inward-out, with the namespace closed last. Opens and
    /// closes stay balanced by construction. Content is emitted verbatim,
    /// never re-indented; an empty ancestry returns it unchanged.
    #[must_use]
    pub fn wrap(&self, content: &str) -> String {
        if self.ancestry.is_empty() {
            return content.to_string();
        }
        tracing::debug!(
            depth = self.ancestry.depth(),
            namespace = %self.ancestry.namespace_path(),
            "wrapping generated fragment"
        );

        let mut output = String::new();
        if !self.ancestry.namespace.is_empty() {
            output.push_str("namespace ");
            output.push_str(&self.ancestry.namespace_path());
            output.push_str(" {\n");
        }
        for ty in self.ancestry.enclosing.iter().rev() {
            output.push_str(&Self::open_declaration(ty));
        }

        output.push_str(content);
        if !content.ends_with('\n') {
            output.push('\n');
        }

        for _ in &self.ancestry.enclosing {
            output.push_str("}\n");
        }
        if !self.ancestry.namespace.is_empty() {
            output.push_str("}\n");
        }
        output
    }

    /// Renders one opening declaration line: keyword, name with generic
    /// parameter list verbatim, and constraint clause verbatim.
    fn open_declaration(ty: &EnclosingType) -> String {
        let mut line = format!("partial {} {}{}", ty.keyword, ty.name, ty.type_parameters);
        if !ty.constraints.is_empty() {
            line.push(' ');
            line.push_str(&ty.constraints);
        }
        line.push_str(" {\n");
        line
    }
}
