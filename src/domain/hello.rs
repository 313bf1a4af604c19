//! Demo payload returned by the hello-world endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting bean with creation and update timestamps
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldBean {
    #[schema(example = "Hello World")]
    pub message: String,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl HelloWorldBean {
    /// Bean stamped with the current time for both dates
    pub fn now(message: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            message: message.into(),
            create_date: now,
            update_date: now,
        }
    }
}
