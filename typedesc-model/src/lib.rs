//! # TypeDesc Model
//!
//! Structural models consumed by the TypeDesc code generators.
//!
//! This crate provides:
//! - Type descriptions for serialization descriptor mapping
//! - Declaration ancestry for scope reconstruction
//! - Ancestry recovery from a syntax-walker ancestor stream
//! - Name formatting helpers for deterministic generated text
//!
//! All models are immutable value objects built fresh per generation
//! request; nothing persists across requests.

pub mod names;
pub mod scope;
pub mod types;

pub use scope::{DeclarationAncestry, EnclosingType, ScopeAncestor, TypeKeyword};
pub use types::{ContainerKind, PrimitiveKind, TypeDescription};
