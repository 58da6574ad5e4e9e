//! App API types

use crate::types::{AppId, JsonValue, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum apps returned by one `apps` call
pub const MAX_APPS_PER_REQUEST: u32 = 100;

/// Basic information about an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// App id
    pub app_id: AppId,
    /// App code (may be empty)
    #[serde(default)]
    pub code: String,
    /// Display name
    pub name: String,
    /// Description (HTML)
    #[serde(default)]
    pub description: String,
    /// Space the app belongs to
    #[serde(default)]
    pub space_id: Option<String>,
    /// Thread of that space
    #[serde(default)]
    pub thread_id: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Creator
    pub creator: User,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
    /// Last modifier
    pub modifier: User,
}

/// Filters for listing apps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppsParams {
    /// App ids
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<AppId>,
    /// App codes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
    /// Partial name match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Space ids
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_ids: Vec<String>,
    /// Apps to return (maximum 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Apps to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppsEnvelope {
    pub apps: Vec<App>,
}

/// Choice of a drop-down, radio button or checkbox field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Option label
    pub label: String,
    /// Display position
    pub index: String,
}

/// Settings of one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProperty {
    /// Field type, e.g. `SINGLE_LINE_TEXT`
    #[serde(rename = "type")]
    pub field_type: String,
    /// Field code
    pub code: String,
    /// Field label
    #[serde(default)]
    pub label: String,
    /// Hide the label
    #[serde(default)]
    pub no_label: bool,
    /// Value is required
    #[serde(default)]
    pub required: bool,
    /// Value must be unique
    #[serde(default)]
    pub unique: bool,
    /// Upper bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    /// Lower bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    /// Maximum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    /// Minimum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<String>,
    /// Initial value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<JsonValue>,
    /// Choices keyed by option name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, FieldOption>,
}

/// Form field settings of an app
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormFields {
    /// Field settings keyed by field code
    pub properties: HashMap<String, FieldProperty>,
    /// App settings revision
    pub revision: String,
}

/// One view (list, calendar or custom) of an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// View id
    pub id: String,
    /// `LIST`, `CALENDAR` or `CUSTOM`
    #[serde(rename = "type")]
    pub view_type: String,
    /// View name
    pub name: String,
    /// Set for built-in views such as `ASSIGNEE`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub builtin_type: String,
    /// Field codes shown in a list view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Filter condition in query syntax
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter_cond: String,
    /// Sort clause
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sort: String,
    /// Display position
    pub index: String,
    /// Markup of a custom view
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
    /// Custom view shows the record pager
    #[serde(default)]
    pub pager: bool,
    /// `ANY`, `DESKTOP` or `MOBILE`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device: String,
}

/// Views of an app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Views {
    /// Views keyed by name
    pub views: HashMap<String, View>,
    /// App settings revision
    pub revision: String,
}
