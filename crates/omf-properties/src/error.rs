//! # Error Types — Structured Construction Failures
//!
//! Errors raised by the asset-property value types, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Construction failures here are data-integrity bugs upstream (typically in
//! whatever repository connector produced the classification payload), not
//! transient conditions. Each variant therefore carries enough structured
//! context for automated diagnostics: the parent asset's identity, the
//! reporting type and method, and catalog metadata (a stable message id, an
//! HTTP-style status, and system/user remediation text).

use thiserror::Error;

/// Errors raised when constructing asset-property values.
///
/// Both variants are synchronous constructor failures: the value either
/// exists fully valid or does not exist at all. No partially initialized
/// state is ever observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// A classification was supplied with an absent or empty name.
    #[error(
        "OMF-PROPERTIES-400-001 no name provided for a classification attached to asset \
         \"{parent_asset_name}\" of type \"{parent_asset_type_name}\" \
         (reported by {reporting_class}::{reporting_method})"
    )]
    NullClassificationName {
        /// Display name of the asset the classification is attached to.
        parent_asset_name: String,
        /// Type name of the asset the classification is attached to.
        parent_asset_type_name: String,
        /// The type that detected the failure.
        reporting_class: &'static str,
        /// The constructor or routine that detected the failure.
        reporting_method: &'static str,
    },

    /// Copy construction was attempted from an absent template.
    #[error(
        "OMF-PROPERTIES-400-002 no template classification supplied when copying a \
         classification for asset \"{parent_asset_name}\" of type \"{parent_asset_type_name}\" \
         (reported by {reporting_class}::{reporting_method})"
    )]
    NullTemplate {
        /// Display name of the asset the new classification was for.
        parent_asset_name: String,
        /// Type name of the asset the new classification was for.
        parent_asset_type_name: String,
        /// The type that detected the failure.
        reporting_class: &'static str,
        /// The constructor that detected the failure.
        reporting_method: &'static str,
    },
}

impl PropertyError {
    /// Stable catalog identifier for this error kind.
    pub fn message_id(&self) -> &'static str {
        match self {
            PropertyError::NullClassificationName { .. } => "OMF-PROPERTIES-400-001",
            PropertyError::NullTemplate { .. } => "OMF-PROPERTIES-400-002",
        }
    }

    /// HTTP-style status code associated with this error kind.
    ///
    /// Both kinds are caller errors in the upstream data, so both map to 400.
    pub fn http_status(&self) -> u16 {
        match self {
            PropertyError::NullClassificationName { .. } => 400,
            PropertyError::NullTemplate { .. } => 400,
        }
    }

    /// What the system did in response to the error condition.
    pub fn system_action(&self) -> &'static str {
        match self {
            PropertyError::NullClassificationName { .. } => {
                "The system rejected the classification; no value was created."
            }
            PropertyError::NullTemplate { .. } => {
                "The system rejected the copy request; no value was created."
            }
        }
    }

    /// Recommended remediation for the caller.
    pub fn user_action(&self) -> &'static str {
        match self {
            PropertyError::NullClassificationName { .. } => {
                "Correct the metadata source so every classification carries a name, \
                 then retrieve the asset's properties again."
            }
            PropertyError::NullTemplate { .. } => {
                "Supply a template classification when copying, or use direct \
                 construction with an explicit name."
            }
        }
    }
}
