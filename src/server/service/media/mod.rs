//! Hosted image storage.
//!
//! `MediaStore` abstracts the image host so handlers can be exercised without network
//! access. `CloudinaryStore` is the production implementation.

pub mod cloudinary;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::server::{
    error::media::MediaError,
    model::media::{ImageUpload, MediaUsage, UploadPreset, UploadedImage},
};

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores an image under the preset's folder with its transformation applied.
    async fn upload(
        &self,
        image: ImageUpload,
        preset: UploadPreset,
    ) -> Result<UploadedImage, MediaError>;

    /// Deletes an image by public id.
    ///
    /// Returns `false` when the host reports no such image.
    async fn delete(&self, public_id: &str) -> Result<bool, MediaError>;

    /// Reports the account plan and current usage.
    async fn usage(&self) -> Result<MediaUsage, MediaError>;

    /// Account identifier shown by the connection check.
    fn cloud_name(&self) -> &str;
}
