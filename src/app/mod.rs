//! App settings module

mod client;
mod types;

pub use client::AppClient;
pub use types::{
    App, FieldOption, FieldProperty, FormFields, GetAppsParams, View, Views, MAX_APPS_PER_REQUEST,
};
