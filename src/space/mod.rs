//! Space module
//!
//! Space settings, members and threads.

mod client;
mod types;

pub use client::SpaceClient;
pub use types::{AddThreadResult, Entity, EntityType, Space, SpaceMember, UpdateSpaceParams};
