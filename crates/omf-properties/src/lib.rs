//! # omf-properties — Validated Asset-Property Value Types
//!
//! Value types for asset metadata: a [`Classification`] names a category an
//! asset has been assigned to, an [`AdditionalProperties`] bag carries
//! arbitrary extra key/value detail, and an [`AssetDescriptor`] identifies
//! the owning asset for diagnostics.
//!
//! ## Key Design Principles
//!
//! 1. **Fallible constructors, never partial values.** `Classification`
//!    validates its name at construction; the result is either a fully valid
//!    value or a [`PropertyError`] carrying structured diagnostic context.
//!    There are no setters.
//!
//! 2. **Copy-on-read for nested state.** Accessors that would otherwise hand
//!    out a mutable-looking container return a freshly built copy instead.
//!    Internal state cannot be mutated through anything a read returns.
//!
//! 3. **Context by composition.** The owning asset's identity is a plain
//!    value ([`AssetDescriptor`]) held by each property type and passed
//!    explicitly to collaborators, not an inheritance relationship.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and serialize with `serde`;
//!   validated types reject invalid payloads at deserialization time.

pub mod asset;
pub mod classification;
pub mod error;
pub mod properties;

// Re-export primary types for ergonomic imports.
pub use asset::{AssetDescriptor, UNKNOWN_ASSET};
pub use classification::Classification;
pub use error::PropertyError;
pub use properties::AdditionalProperties;
