//! Name formatting helpers.
//!
//! Both generators render identifiers through these helpers so generated
//! text stays deterministic regardless of how the input models were built.

/// Separator between namespace segments and between a type and its members.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Joins qualified-name segments with the namespace separator.
#[must_use]
pub fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() {
            out.push(NAMESPACE_SEPARATOR);
        }
        out.push_str(segment);
    }
    out
}

/// Renders a member access on a (possibly qualified) owner name.
#[must_use]
pub fn member_access(owner: &str, member: &str) -> String {
    format!("{owner}{NAMESPACE_SEPARATOR}{member}")
}
