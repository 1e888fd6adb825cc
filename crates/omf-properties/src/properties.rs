//! # Additional Properties — Key/Value Bag
//!
//! An ordered bag of arbitrary key/value metadata attached to an asset
//! property. Values are [`serde_json::Value`] so the bag can carry whatever
//! a metadata repository supplies; keys are kept in a `BTreeMap` so iteration
//! and serialization order are deterministic.
//!
//! The bag itself is an ordinary mutable collection. Aliasing discipline is
//! the responsibility of the types that *hold* a bag: they keep their stored
//! bag private and hand out copies built with [`AdditionalProperties::from_template`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset::AssetDescriptor;

/// Additional key/value properties attached to an asset property value.
///
/// Carries the parent-asset context alongside the map so that copies made
/// for a different owner can be re-parented for diagnostics.
///
/// Equality compares property contents only. The parent-asset context is
/// diagnostic metadata, so a copy made for a different owner is still equal
/// to its template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalProperties {
    parent_asset: AssetDescriptor,
    properties: BTreeMap<String, Value>,
}

impl PartialEq for AdditionalProperties {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
    }
}

impl AdditionalProperties {
    /// Create a bag from a parent-asset context and a property map.
    pub fn new(parent_asset: AssetDescriptor, properties: BTreeMap<String, Value>) -> Self {
        Self {
            parent_asset,
            properties,
        }
    }

    /// Create an empty bag for the given parent asset.
    pub fn empty(parent_asset: AssetDescriptor) -> Self {
        Self::new(parent_asset, BTreeMap::new())
    }

    /// Copy-construct a bag from a template, parameterized by the parent
    /// asset the copy belongs to.
    ///
    /// This is the clone operation holders use to satisfy their copy-on-read
    /// contract: the result shares no storage with the template.
    pub fn from_template(parent_asset: AssetDescriptor, template: &AdditionalProperties) -> Self {
        Self {
            parent_asset,
            properties: template.properties.clone(),
        }
    }

    /// Parent-asset context this bag was built for.
    pub fn parent_asset(&self) -> &AssetDescriptor {
        &self.parent_asset
    }

    /// Look up a property value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Insert or replace a property value, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(name.into(), value)
    }

    /// Iterate over property names in lexicographic order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Iterate over name/value pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties in the bag.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the bag holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl std::fmt::Display for AdditionalProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdditionalProperties{{count={}}}", self.properties.len())
    }
}
