//! # Asset Descriptor — Parent-Asset Context
//!
//! Every asset-property value is attached to some owning asset. The property
//! types never validate or own the asset itself; they carry an
//! [`AssetDescriptor`] purely so that diagnostics and error reports can name
//! the asset the offending value belonged to.
//!
//! The descriptor replaces a base-class inheritance relationship in earlier
//! designs with plain composition: each property value holds the descriptor
//! and passes it explicitly to any collaborator that needs it.

use serde::{Deserialize, Serialize};

/// Placeholder rendered when the owning asset's name or type is not known.
pub const UNKNOWN_ASSET: &str = "<Unknown>";

/// Identity of the asset a property value is attached to.
///
/// Either field may be unknown; accessors fall back to [`UNKNOWN_ASSET`] so
/// error messages stay readable without `Option` plumbing at every call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    asset_name: Option<String>,
    asset_type_name: Option<String>,
}

impl AssetDescriptor {
    /// Create a descriptor with a known asset name and type name.
    pub fn new(asset_name: impl Into<String>, asset_type_name: impl Into<String>) -> Self {
        Self {
            asset_name: Some(asset_name.into()),
            asset_type_name: Some(asset_type_name.into()),
        }
    }

    /// Create a descriptor for an asset whose identity is not known.
    ///
    /// Used when property values are built before the owning asset has been
    /// resolved; accessors report [`UNKNOWN_ASSET`] for both fields.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Display name of the owning asset, or [`UNKNOWN_ASSET`].
    pub fn asset_name(&self) -> &str {
        self.asset_name.as_deref().unwrap_or(UNKNOWN_ASSET)
    }

    /// Type name of the owning asset, or [`UNKNOWN_ASSET`].
    pub fn asset_type_name(&self) -> &str {
        self.asset_type_name.as_deref().unwrap_or(UNKNOWN_ASSET)
    }
}

impl std::fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.asset_name(), self.asset_type_name())
    }
}
