//! Loosely-typed property documents
//!
//! The resource loader hands the decoder a generic hierarchical tree of
//! named properties rather than typed records. This module provides that
//! document type plus the small typed-access surface the decoder needs:
//! named sub-collections, named arrays, named scalars, and 3-element
//! numeric arrays read as vectors.
//!
//! Trees serialize through serde, so they can be loaded from RON files in
//! tools and tests.

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced by typed access into a property tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A required named property is absent.
    #[error("missing field {0:?}")]
    MissingField(String),
    /// A named property exists but holds the wrong kind of value.
    #[error("field {0:?} is not a {1}")]
    TypeMismatch(String, &'static str),
    /// A value could not be read as a 3-element numeric array.
    #[error("expected a 3-element numeric array, got {0}")]
    BadVector(String),
}

/// One node in a property document.
///
/// Deserialization is untagged, so plain RON/JSON-style data maps onto it
/// directly. `Int` is tried before `Float` to keep integer scalars exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Ordered sequence of values
    Array(Vec<PropertyValue>),
    /// Nested named-property collection
    Tree(PropertyTree),
}

impl PropertyValue {
    /// Wrap a 3D vector as a 3-element float array.
    #[must_use]
    pub fn vector3(v: Vec3) -> Self {
        Self::Array(vec![
            Self::Float(f64::from(v.x)),
            Self::Float(f64::from(v.y)),
            Self::Float(f64::from(v.z)),
        ])
    }

    /// Borrow this value as a sub-collection, if it is one.
    #[must_use]
    pub fn as_tree(&self) -> Option<&PropertyTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Borrow this value as an array, if it is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Numeric value widened to `f64`; integers convert.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Integer value, if this is an integer scalar.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Interpret a 3-element numeric array as a 3D vector.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::BadVector`] if the value is not an array, has
    /// an element count other than 3, or contains a non-numeric element.
    pub fn to_vector3(&self) -> Result<Vec3, TreeError> {
        let elements = self
            .as_array()
            .ok_or_else(|| TreeError::BadVector("a non-array value".to_owned()))?;
        if elements.len() != 3 {
            return Err(TreeError::BadVector(format!("{} elements", elements.len())));
        }
        let mut xyz = [0.0_f32; 3];
        for (slot, value) in xyz.iter_mut().zip(elements) {
            *slot = value
                .as_f64()
                .ok_or_else(|| TreeError::BadVector("a non-numeric element".to_owned()))?
                as f32;
        }
        Ok(Vec3::new(xyz[0], xyz[1], xyz[2]))
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(values: Vec<PropertyValue>) -> Self {
        Self::Array(values)
    }
}

impl From<PropertyTree> for PropertyValue {
    fn from(tree: PropertyTree) -> Self {
        Self::Tree(tree)
    }
}

/// Named-property collection: an ordered map from property name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTree(BTreeMap<String, PropertyValue>);

impl PropertyTree {
    /// Empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a named property.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Raw lookup of a named property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Named sub-collection, or `None` when absent or not a collection.
    #[must_use]
    pub fn sub_collection(&self, name: &str) -> Option<&Self> {
        self.get(name).and_then(PropertyValue::as_tree)
    }

    /// Named array, or `None` when absent or not an array.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&[PropertyValue]> {
        self.get(name).and_then(PropertyValue::as_array)
    }

    /// Required float scalar; integer values are widened.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingField`] when absent, [`TreeError::TypeMismatch`]
    /// when the value is not numeric.
    pub fn float(&self, name: &str) -> Result<f32, TreeError> {
        let value = self
            .get(name)
            .ok_or_else(|| TreeError::MissingField(name.to_owned()))?;
        value
            .as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| TreeError::TypeMismatch(name.to_owned(), "number"))
    }

    /// Required integer scalar.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingField`] when absent, [`TreeError::TypeMismatch`]
    /// when the value is not an integer.
    pub fn integer(&self, name: &str) -> Result<i64, TreeError> {
        let value = self
            .get(name)
            .ok_or_else(|| TreeError::MissingField(name.to_owned()))?;
        value
            .as_i64()
            .ok_or_else(|| TreeError::TypeMismatch(name.to_owned(), "integer"))
    }

    /// Number of properties in this collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the collection has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_array_is_none_not_error() {
        let tree = PropertyTree::new();
        assert!(tree.array("m_spheres").is_none());
        assert!(tree.sub_collection("m_rnShape").is_none());
    }

    #[test]
    fn test_float_accepts_integer_scalars() {
        let tree = PropertyTree::new().with("m_flRadius", 3_i64);
        assert_eq!(tree.float("m_flRadius"), Ok(3.0));
    }

    #[test]
    fn test_integer_rejects_float_scalars() {
        let tree = PropertyTree::new().with("m_nOrigin", 1.5);
        assert_eq!(
            tree.integer("m_nOrigin"),
            Err(TreeError::TypeMismatch("m_nOrigin".to_owned(), "integer"))
        );
    }

    #[test]
    fn test_missing_scalar_reports_field_name() {
        let tree = PropertyTree::new();
        assert_eq!(
            tree.float("m_flRadius"),
            Err(TreeError::MissingField("m_flRadius".to_owned()))
        );
    }

    #[test]
    fn test_to_vector3_round_trip() {
        let value = PropertyValue::vector3(Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(value.to_vector3(), Ok(Vec3::new(1.0, -2.0, 0.5)));
    }

    #[test]
    fn test_to_vector3_wrong_arity() {
        let value = PropertyValue::Array(vec![PropertyValue::Float(1.0)]);
        assert_eq!(
            value.to_vector3(),
            Err(TreeError::BadVector("1 elements".to_owned()))
        );
    }

    #[test]
    fn test_tree_loads_from_ron() {
        let source = r#"{
            "m_flRadius": 2.5,
            "m_vCenter": [1.0, 2.0, 3.0],
            "m_nOrigin": 4,
        }"#;
        let tree: PropertyTree = ron::from_str(source).expect("valid tree");
        assert_eq!(tree.float("m_flRadius"), Ok(2.5));
        assert_eq!(tree.integer("m_nOrigin"), Ok(4));
        assert_eq!(
            tree.get("m_vCenter").unwrap().to_vector3(),
            Ok(Vec3::new(1.0, 2.0, 3.0))
        );
    }
}
