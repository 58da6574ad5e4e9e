//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and the field value shapes used by the record API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Application id (the platform sends these as strings)
pub type AppId = String;

/// Record id
pub type RecordId = String;

/// Record revision number
pub type Revision = String;

/// An untyped record: field code to field value
pub type Record = HashMap<String, FieldValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// Value wrapper every field carries on the wire: `{"value": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Raw field value
    pub value: JsonValue,
}

impl FieldValue {
    /// Wrap any serializable value
    pub fn new(value: impl Into<JsonValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The value as a string slice, when it is one
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Unique-field key used to address a record instead of its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateKey {
    /// Field code of a unique field
    pub field: String,
    /// Value identifying the record
    pub value: String,
}

impl UpdateKey {
    /// Create a new update key
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A user reference as the platform returns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login code
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
