//! Space API client

use super::types::{AddThreadResult, MembersEnvelope, Space, SpaceMember, UpdateSpaceParams};
use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Client for spaces and their threads
#[derive(Clone)]
pub struct SpaceClient {
    transport: Arc<dyn Transport>,
}

impl SpaceClient {
    /// Create a space client over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Value,
    ) -> Result<R> {
        let bytes = self.transport.send(method, endpoint, Some(body)).await?;
        decode_json(&bytes)
    }

    /// Fetch a space
    pub async fn get_space(&self, id: &str) -> Result<Space> {
        ensure_present("space id", id)?;
        self.call(Method::GET, "space", json!({ "id": id })).await
    }

    /// List the members of a space
    pub async fn get_space_members(&self, id: &str) -> Result<Vec<SpaceMember>> {
        ensure_present("space id", id)?;
        let envelope: MembersEnvelope = self
            .call(Method::GET, "space/members", json!({ "id": id }))
            .await?;
        Ok(envelope.members)
    }

    /// Change space settings
    pub async fn update_space(&self, params: &UpdateSpaceParams) -> Result<()> {
        ensure_present("space id", &params.id)?;
        debug!(space = %params.id, "updating space");
        let _: Value = self
            .call(Method::PUT, "space", serde_json::to_value(params)?)
            .await?;
        Ok(())
    }

    /// Add a thread to a multi-thread space
    pub async fn add_thread(&self, space: &str, name: &str) -> Result<AddThreadResult> {
        ensure_present("space id", space)?;
        ensure_present("thread name", name)?;
        self.call(Method::POST, "space/thread", json!({ "space": space, "name": name }))
            .await
    }
}

fn ensure_present(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{what} is required")));
    }
    Ok(())
}

impl std::fmt::Debug for SpaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceClient").finish_non_exhaustive()
    }
}
