use async_trait::async_trait;
use log::debug;
use ag_core::{CoreError, FormInput, GenerateAdsResponse};
use crate::config::AppConfig;
use crate::error::{AppError, BackendError};

/// The ad generator, as seen by the effect runner
#[async_trait]
pub trait AdsApi: Send + Sync {
    async fn generate_ads(&self, input: &FormInput) -> Result<GenerateAdsResponse, BackendError>;
}

pub struct AdBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl AdBackend {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }
}

#[async_trait]
impl AdsApi for AdBackend {
    /// One POST, no timeout and no retry. A truthy `error` in the body wins
    /// regardless of the HTTP status.
    async fn generate_ads(&self, input: &FormInput) -> Result<GenerateAdsResponse, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        debug!("POST {} -> {} ({} bytes)", self.endpoint, status, body.len());

        match GenerateAdsResponse::from_slice(&body) {
            Ok(failure @ GenerateAdsResponse::Failure(_)) => Ok(failure),
            Ok(success) if status.is_success() => Ok(success),
            Ok(_) => Err(BackendError::Status(status.as_u16())),
            Err(e) if status.is_success() => Err(invalid_body(e)),
            Err(_) => Err(BackendError::Status(status.as_u16())),
        }
    }
}

fn invalid_body(e: CoreError) -> BackendError {
    BackendError::InvalidBody(e.to_string())
}
