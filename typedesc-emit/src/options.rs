//! Mapper configuration.

/// How the mapper treats a nullable wrapper around an already-nullable type.
///
/// Both choices are deterministic; the default flattens so a nullable form
/// of any type is encoded by exactly one `option` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NestedOptionalPolicy {
    /// Collapse nested nullability into a single `option`.
    #[default]
    Flatten,
    /// Fail with [`EmitError::NestedOptional`](crate::error::EmitError),
    /// for drivers that treat nested nullability as a model defect.
    Reject,
}

/// Configuration for the descriptor mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapperOptions {
    /// Nested-nullability handling.
    pub nested_optional: NestedOptionalPolicy,
}

impl MapperOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nested-nullability policy.
    #[must_use]
    pub fn nested_optional(mut self, policy: NestedOptionalPolicy) -> Self {
        self.nested_optional = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_flattens() {
        assert_eq!(
            MapperOptions::default().nested_optional,
            NestedOptionalPolicy::Flatten
        );
    }

    #[test]
    fn test_builder_sets_policy() {
        let options = MapperOptions::new().nested_optional(NestedOptionalPolicy::Reject);
        assert_eq!(options.nested_optional, NestedOptionalPolicy::Reject);
    }
}
