//! In-memory media store for handler tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::server::{
    error::media::MediaError,
    model::media::{ImageUpload, MediaUsage, UploadPreset, UploadedImage},
    service::media::MediaStore,
};

/// Records uploads in memory and hands out predictable public ids.
#[derive(Default)]
pub struct FakeMediaStore {
    stored: RwLock<Vec<String>>,
}

impl FakeMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stored_ids(&self) -> Vec<String> {
        self.stored.read().await.clone()
    }
}

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn upload(
        &self,
        image: ImageUpload,
        preset: UploadPreset,
    ) -> Result<UploadedImage, MediaError> {
        let mut stored = self.stored.write().await;
        let public_id = format!("{}/image_{}", preset.folder, stored.len() + 1);
        stored.push(public_id.clone());

        Ok(UploadedImage {
            url: format!("https://media.test/{}.png", public_id),
            public_id,
            original_name: image.file_name.clone(),
            size: image.size(),
            format: Some("png".to_string()),
        })
    }

    async fn delete(&self, public_id: &str) -> Result<bool, MediaError> {
        let mut stored = self.stored.write().await;
        let before = stored.len();
        stored.retain(|id| id != public_id);
        Ok(stored.len() < before)
    }

    async fn usage(&self) -> Result<MediaUsage, MediaError> {
        Ok(MediaUsage {
            plan: "Test".to_string(),
            storage_bytes: 0.0,
            bandwidth_bytes: 0.0,
        })
    }

    fn cloud_name(&self) -> &str {
        "test-cloud"
    }
}
