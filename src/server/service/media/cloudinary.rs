//! Cloudinary REST client.
//!
//! Uploads and deletions are signed requests: the signed parameters are sorted by name,
//! joined as `key=value` pairs with `&`, suffixed with the API secret, and hashed with
//! SHA-256. Usage queries use HTTP basic auth with the API key and secret.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::{de::DeserializeOwned, Deserialize};
use sha2::{Digest, Sha256};

use crate::server::{
    config::CloudinaryConfig,
    error::media::MediaError,
    model::media::{ImageUpload, MediaUsage, UploadPreset, UploadedImage},
    service::media::MediaStore,
};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
/// Sent unsigned alongside every signature so the host checks it with SHA-256.
const SIGNATURE_ALGORITHM: &str = "sha256";

pub struct CloudinaryStore {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    format: Option<String>,
    bytes: Option<u64>,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Deserialize)]
struct UsageResponse {
    plan: String,
    storage: UsageFigure,
    bandwidth: UsageFigure,
}

#[derive(Deserialize)]
struct UsageFigure {
    #[serde(default)]
    usage: f64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryStore {
    pub fn new(http: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/{}", API_BASE, self.config.cloud_name, action)
    }

    /// Sends a request and decodes a JSON body, mapping non-2xx answers to `MediaError::Api`.
    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, MediaError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            return Err(MediaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(
        &self,
        image: ImageUpload,
        preset: UploadPreset,
    ) -> Result<UploadedImage, MediaError> {
        let timestamp = Utc::now().timestamp().to_string();
        let allowed_formats = preset.allowed_formats.join(",");
        let signature = sign(
            &[
                ("allowed_formats", allowed_formats.as_str()),
                ("folder", preset.folder),
                ("timestamp", timestamp.as_str()),
                ("transformation", preset.transformation),
            ],
            &self.config.api_secret,
        );

        let size = image.size();
        let original_name = image.file_name.clone();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", preset.folder)
            .text("allowed_formats", allowed_formats)
            .text("transformation", preset.transformation)
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM);

        let uploaded: UploadResponse =
            Self::send(self.http.post(self.endpoint("image/upload")).multipart(form)).await?;

        tracing::debug!("Uploaded image {} to {}", uploaded.public_id, preset.folder);

        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
            original_name,
            size: uploaded.bytes.unwrap_or(size),
            format: uploaded.format,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<bool, MediaError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );

        let params = [
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", SIGNATURE_ALGORITHM),
        ];

        let destroyed: DestroyResponse =
            Self::send(self.http.post(self.endpoint("image/destroy")).form(&params)).await?;

        Ok(destroyed.result == "ok")
    }

    async fn usage(&self) -> Result<MediaUsage, MediaError> {
        let usage: UsageResponse = Self::send(
            self.http
                .get(self.endpoint("usage"))
                .basic_auth(&self.config.api_key, Some(&self.config.api_secret)),
        )
        .await?;

        Ok(MediaUsage {
            plan: usage.plan,
            storage_bytes: usage.storage.usage,
            bandwidth_bytes: usage.bandwidth.usage,
        })
    }

    fn cloud_name(&self) -> &str {
        &self.config.cloud_name
    }
}

/// Computes a request signature over `params` with `secret`.
///
/// Parameters with empty values are left out, matching how the host validates signatures.
pub fn sign(params: &[(&str, &str)], secret: &str) -> String {
    let mut params: Vec<&(&str, &str)> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    params.sort_by(|a, b| a.0.cmp(b.0));

    let joined = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
