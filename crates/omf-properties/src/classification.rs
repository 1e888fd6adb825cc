//! # Classification — Validated Named Property
//!
//! A classification records that an asset has been assigned to some named
//! category ("Confidential", "PII", ...), optionally with extra key/value
//! detail. It is a pure value object: validated at construction, immutable
//! afterwards.
//!
//! ## Invariants
//!
//! - The name is non-empty for the lifetime of the value. Both construction
//!   paths route through one validation routine; copy construction
//!   re-validates the template's name rather than trusting it.
//! - The stored properties bag is never reachable for mutation from outside.
//!   [`Classification::properties`] hands out a freshly built copy on every
//!   call, so no returned handle aliases internal state.

use serde::{Deserialize, Serialize};

use crate::asset::AssetDescriptor;
use crate::error::PropertyError;
use crate::properties::AdditionalProperties;

/// A named classification assigned to an asset, with optional extra
/// properties.
///
/// Construct with [`Classification::new`] or copy an existing one with
/// [`Classification::from_template`]; both fail with a [`PropertyError`]
/// rather than producing a partially initialized value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    parent_asset: AssetDescriptor,
    name: String,
    properties: Option<AdditionalProperties>,
}

impl Classification {
    /// Create a classification from repository-supplied data.
    ///
    /// The name is `Option` because upstream payloads can omit it; an absent
    /// or empty name is rejected before any state is stored. Whitespace-only
    /// names are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NullClassificationName`] when `name` is
    /// `None` or `""`.
    pub fn new(
        parent_asset: AssetDescriptor,
        name: Option<String>,
        properties: Option<AdditionalProperties>,
    ) -> Result<Self, PropertyError> {
        let name = Self::validate_name(&parent_asset, name, "new")?;
        Ok(Self {
            parent_asset,
            name,
            properties,
        })
    }

    /// Copy-construct a classification from a template, attaching the copy
    /// to the given parent asset.
    ///
    /// The template's name is re-validated through the same routine as
    /// direct construction. A template could have been produced by
    /// deserialization paths outside this crate's control, so validation is
    /// unconditional rather than a cached check. The template's properties
    /// are copied through its own read accessor, so the new value never
    /// aliases the template's storage.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NullTemplate`] when `template` is `None`,
    /// or [`PropertyError::NullClassificationName`] when the template's
    /// name fails re-validation.
    pub fn from_template(
        parent_asset: AssetDescriptor,
        template: Option<&Classification>,
    ) -> Result<Self, PropertyError> {
        let template = template.ok_or_else(|| PropertyError::NullTemplate {
            parent_asset_name: parent_asset.asset_name().to_string(),
            parent_asset_type_name: parent_asset.asset_type_name().to_string(),
            reporting_class: "Classification",
            reporting_method: "from_template",
        })?;

        let name = Self::validate_name(
            &parent_asset,
            Some(template.name.clone()),
            "from_template",
        )?;
        let properties = template.properties();
        Ok(Self {
            parent_asset,
            name,
            properties,
        })
    }

    /// Shared validation routine for both construction paths.
    ///
    /// Rejects absence and the empty string only. Whitespace-only names pass
    /// deliberately: the check is for true emptiness, not blankness.
    fn validate_name(
        parent_asset: &AssetDescriptor,
        name: Option<String>,
        reporting_method: &'static str,
    ) -> Result<String, PropertyError> {
        match name {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(PropertyError::NullClassificationName {
                parent_asset_name: parent_asset.asset_name().to_string(),
                parent_asset_type_name: parent_asset.asset_type_name().to_string(),
                reporting_class: "Classification",
                reporting_method,
            }),
        }
    }

    /// The classification's name, exactly as stored.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The additional properties, or `None` when the classification carries
    /// none.
    ///
    /// When properties are present the result is a newly built copy,
    /// parameterized by this classification's parent asset. Mutating the
    /// returned bag never affects this value or any other copy.
    pub fn properties(&self) -> Option<AdditionalProperties> {
        self.properties
            .as_ref()
            .map(|props| AdditionalProperties::from_template(self.parent_asset.clone(), props))
    }

    /// Identity of the asset this classification is attached to.
    pub fn parent_asset(&self) -> &AssetDescriptor {
        &self.parent_asset
    }
}

/// Diagnostic rendering of the stored state. This reads the stored bag
/// directly (no copy); it is a textual path, not a handle.
impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Classification{{name=\"{}\", properties=", self.name)?;
        match &self.properties {
            Some(props) => write!(f, "{props}")?,
            None => f.write_str("<none>")?,
        }
        f.write_str("}")
    }
}

/// Shape of a serialized classification. Deserialization routes through
/// [`Classification::new`] so invalid payloads are rejected instead of
/// silently accepted.
#[derive(Deserialize)]
struct ClassificationPayload {
    #[serde(default)]
    parent_asset: AssetDescriptor,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: Option<AdditionalProperties>,
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = ClassificationPayload::deserialize(deserializer)?;
        Classification::new(raw.parent_asset, raw.name, raw.properties)
            .map_err(serde::de::Error::custom)
    }
}
