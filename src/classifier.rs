//! Disease risk model seam.
//!
//! The model runs elsewhere; this crate only knows the `Classifier` capability.
//! `RemoteClassifier` talks to it over HTTP, `UnavailableClassifier` stands in when
//! no endpoint is configured.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::weather::{Prediction, WeatherFeatures};

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no disease classifier is configured")]
    Unavailable,

    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classifier answered with HTTP status {0}")]
    Status(u16),

    #[error("classifier returned an unusable prediction: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, features: &WeatherFeatures) -> Result<Prediction, ClassifierError>;
}

pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, features: &WeatherFeatures) -> Result<Prediction, ClassifierError> {
        let response = self.client.post(&self.endpoint).json(features).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }
        let prediction: Prediction = response
            .json()
            .await
            .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;
        if prediction.label.is_empty() {
            return Err(ClassifierError::MalformedResponse("empty label".into()));
        }
        Ok(prediction)
    }
}

pub struct UnavailableClassifier;

#[async_trait]
impl Classifier for UnavailableClassifier {
    async fn classify(&self, _features: &WeatherFeatures) -> Result<Prediction, ClassifierError> {
        Err(ClassifierError::Unavailable)
    }
}
