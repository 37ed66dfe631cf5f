// src/service/mock.rs

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::{FieldService, SaveOutcome};
use crate::config::AppConfig;
use crate::error::Result;
use crate::field::{FieldDefinition, SaveRequest};
use crate::{log_debug, log_error, log_info, log_warn};

/// The fixed definition handed out by [`MockFieldService::get_field`].
pub fn default_definition() -> FieldDefinition {
    FieldDefinition {
        label: "Sales region".to_string(),
        required: false,
        choices: vec![
            "Asia".to_string(),
            "Australia".to_string(),
            "Western Europe".to_string(),
            "North America".to_string(),
            "Eastern Europe".to_string(),
            "Latin America".to_string(),
            "Middle East and Africa".to_string(),
        ],
        display_alpha: true,
        default: "North America".to_string(),
    }
}

/// Serves a fixed definition and POSTs saves to a mock echo endpoint.
#[derive(Debug, Clone)]
pub struct MockFieldService {
    endpoint: String,
    client: reqwest::Client,
}

impl MockFieldService {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: endpoint.into(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FieldService for MockFieldService {
    fn get_field(&self, id: Option<&str>) -> FieldDefinition {
        log_debug!("get_field called with id {:?}", id);
        default_definition()
    }

    async fn save(&self, request: &SaveRequest) -> SaveOutcome {
        log_info!("Saving field '{}' to {}", request.label, self.endpoint);
        log_debug!(
            "Posted data: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = match self.client.post(&self.endpoint).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                log_error!("Error posting data: {}", e);
                return SaveOutcome::Failed { reason: e.to_string() };
            }
        };

        let status = response.status();
        if !status.is_success() {
            log_error!("Server responded with status: {}", status.as_u16());
            return SaveOutcome::Rejected { status: status.as_u16() };
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                log_error!("Error reading server response: {}", e);
                return SaveOutcome::Failed { reason: e.to_string() };
            }
        };

        let response = match serde_json::from_slice::<Value>(&body) {
            Ok(value) => value,
            Err(e) => {
                log_warn!("Server response was not JSON: {}", e);
                Value::Null
            }
        };

        log_info!("Server response: {}", response);
        SaveOutcome::Saved { response }
    }
}
