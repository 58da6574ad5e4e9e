//! App API client

use super::types::{App, AppsEnvelope, FormFields, GetAppsParams, Views, MAX_APPS_PER_REQUEST};
use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::record::ensure_app;
use crate::types::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Client for app settings
#[derive(Clone)]
pub struct AppClient {
    transport: Arc<dyn Transport>,
}

impl AppClient {
    /// Create an app client over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<R> {
        let bytes = self.transport.send(Method::GET, endpoint, Some(body)).await?;
        decode_json(&bytes)
    }

    /// Fetch one app
    pub async fn get_app(&self, app: &str) -> Result<App> {
        ensure_app(app)?;
        self.call("app", json!({ "id": app })).await
    }

    /// List apps matching the filters
    pub async fn get_apps(&self, params: &GetAppsParams) -> Result<Vec<App>> {
        if let Some(limit) = params.limit {
            if limit == 0 || limit > MAX_APPS_PER_REQUEST {
                return Err(Error::validation(format!(
                    "apps limit must be between 1 and {MAX_APPS_PER_REQUEST}, got {limit}"
                )));
            }
        }
        debug!(limit = ?params.limit, offset = ?params.offset, "listing apps");
        let envelope: AppsEnvelope = self.call("apps", serde_json::to_value(params)?).await?;
        Ok(envelope.apps)
    }

    /// Fetch form field settings, with labels in `lang` when given
    pub async fn get_form_fields(&self, app: &str, lang: Option<&str>) -> Result<FormFields> {
        self.call("app/form/fields", localized(app, lang)?).await
    }

    /// Fetch the view settings, with names in `lang` when given
    pub async fn get_views(&self, app: &str, lang: Option<&str>) -> Result<Views> {
        self.call("app/views", localized(app, lang)?).await
    }
}

fn localized(app: &str, lang: Option<&str>) -> Result<Value> {
    ensure_app(app)?;
    let mut body = json!({ "app": app });
    if let Some(lang) = lang {
        body["lang"] = json!(lang);
    }
    Ok(body)
}

impl std::fmt::Debug for AppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppClient").finish_non_exhaustive()
    }
}
