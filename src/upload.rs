// SPDX-License-Identifier: GPL-3.0-only

//! Object storage client used to share the finished photo
//!
//! The workflow only depends on the [`ObjectStorage`] trait; the shipped
//! implementation posts the encoded image to an HTTP endpoint as one
//! multipart request. No chunking, no resume, no retry.

use crate::constants::UPLOAD_FIELD_NAME;
use crate::errors::StorageError;
use tracing::{error, info};

/// Object storage collaborator: one create-and-upload call per photo
#[allow(async_fn_in_trait)]
pub trait ObjectStorage {
    async fn upload_image(&self, data: Vec<u8>, name: &str) -> Result<(), StorageError>;
}

/// Uploads images to an HTTP endpoint with a multipart POST
#[derive(Debug, Clone)]
pub struct HttpObjectStorage {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpObjectStorage {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ObjectStorage for HttpObjectStorage {
    async fn upload_image(&self, data: Vec<u8>, name: &str) -> Result<(), StorageError> {
        info!(
            endpoint = %self.endpoint,
            name = %name,
            bytes = data.len(),
            "Uploading image"
        );

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(name.to_string())
            .mime_str("image/jpeg")
            .map_err(|e| StorageError::RequestFailed(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(%status, name = %name, "Upload accepted");
            Ok(())
        } else {
            error!(%status, name = %name, "Upload rejected");
            Err(StorageError::Rejected(status.as_u16()))
        }
    }
}
