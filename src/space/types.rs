//! Space API types

use crate::types::User;
use serde::{Deserialize, Serialize};

/// Settings and counters of a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Space id
    pub id: String,
    /// Space name
    pub name: String,
    /// Thread id shown first
    #[serde(default)]
    pub default_thread: String,
    /// Only members can see the space
    #[serde(default)]
    pub is_private: bool,
    /// Creator
    pub creator: User,
    /// Last modifier
    pub modifier: User,
    /// Number of members
    #[serde(default)]
    pub member_count: u32,
    /// `BUILTIN` or `FILE`
    #[serde(default)]
    pub cover_type: String,
    /// Cover image key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_key: Option<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Space portal body (HTML)
    #[serde(default)]
    pub body: String,
    /// Threads are enabled
    #[serde(default)]
    pub use_multi_thread: bool,
    /// Space lives in the guest area
    #[serde(default)]
    pub is_guest: bool,
    /// Members cannot leave
    #[serde(default)]
    pub fixed_member: bool,
    /// Portal shows the announcement
    #[serde(default)]
    pub show_announcement: bool,
    /// Portal shows the thread list
    #[serde(default)]
    pub show_thread_list: bool,
    /// Portal shows the app list
    #[serde(default)]
    pub show_app_list: bool,
    /// Portal shows the member list
    #[serde(default)]
    pub show_member_list: bool,
    /// Portal shows related links
    #[serde(default)]
    pub show_related_link_list: bool,
}

/// Kind of a member entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// A single user
    User,
    /// A group (role)
    Group,
    /// A department
    Organization,
}

/// User, group or department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Entity code
    pub code: String,
}

/// One member of a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMember {
    /// Who the member is
    pub entity: Entity,
    /// Space administrator
    #[serde(default)]
    pub is_admin: bool,
    /// Departments include their child departments
    #[serde(default)]
    pub include_subs: bool,
    /// Member only through a group or department
    #[serde(default)]
    pub is_implicit: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MembersEnvelope {
    pub members: Vec<SpaceMember>,
}

/// Settings to change on a space; unset fields stay as they are
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpaceParams {
    /// Space id
    pub id: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New portal body (HTML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Make the space private or public
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Enable or disable threads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_multi_thread: Option<bool>,
    /// Keep members from leaving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_member: Option<bool>,
    /// Portal shows the announcement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,
    /// Portal shows the thread list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_thread_list: Option<bool>,
    /// Portal shows the app list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_app_list: Option<bool>,
    /// Portal shows the member list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_member_list: Option<bool>,
    /// Portal shows related links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_related_link_list: Option<bool>,
}

/// Id of a new thread
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddThreadResult {
    /// Thread id
    pub id: String,
}
