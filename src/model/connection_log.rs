use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// One gateway request, as listed in the console's log screens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionLog {
    pub request_id: String,
    pub api_id: String,
    pub application_id: String,
    pub plan_id: Option<String>,
    pub client_identifier: Option<String>,
    pub transaction_id: String,
    pub method: HttpMethod,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
    pub request_ended: bool,
}

impl ConnectionLog {
    pub fn new(request_id: impl Into<String>, api_id: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            api_id: api_id.into(),
            application_id: application_id.into(),
            status: 200,
            request_ended: true,
            ..Default::default()
        }
    }
}

impl Entity for ConnectionLog {
    type Key = String;
    const KIND: &'static str = "ConnectionLog";

    fn key(&self) -> String {
        self.request_id.clone()
    }
}
