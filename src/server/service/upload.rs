//! Image upload orchestration over a `MediaStore`.

use crate::server::{
    error::AppError,
    model::media::{ImageUpload, MediaUsage, UploadPreset, UploadedImage, MAX_MULTIPLE_FILES},
    service::media::MediaStore,
};

pub struct UploadService<'a> {
    media: &'a dyn MediaStore,
}

impl<'a> UploadService<'a> {
    pub fn new(media: &'a dyn MediaStore) -> Self {
        Self { media }
    }

    /// Validates and stores a single image.
    ///
    /// # Returns
    /// - `Ok(UploadedImage)` - Stored image details
    /// - `Err(AppError::BadRequest)` - Not an image or too large for `preset`
    /// - `Err(AppError::MediaErr)` - The media host rejected or failed the upload
    pub async fn upload_one(
        &self,
        image: ImageUpload,
        preset: UploadPreset,
    ) -> Result<UploadedImage, AppError> {
        image.validate(&preset)?;

        let uploaded = self.media.upload(image, preset).await?;

        tracing::info!("Stored image {} ({} bytes)", uploaded.public_id, uploaded.size);

        Ok(uploaded)
    }

    /// Validates every image before storing any, then stores them in order.
    pub async fn upload_many(
        &self,
        images: Vec<ImageUpload>,
        preset: UploadPreset,
    ) -> Result<Vec<UploadedImage>, AppError> {
        if images.len() > MAX_MULTIPLE_FILES {
            return Err(AppError::BadRequest(format!(
                "Too many files. Maximum is {}",
                MAX_MULTIPLE_FILES
            )));
        }
        for image in &images {
            image.validate(&preset)?;
        }

        let mut uploaded = Vec::with_capacity(images.len());
        for image in images {
            uploaded.push(self.media.upload(image, preset).await?);
        }

        tracing::info!("Stored {} images in {}", uploaded.len(), preset.folder);

        Ok(uploaded)
    }

    /// Deletes a stored image.
    ///
    /// # Returns
    /// - `Ok(())` - Image deleted
    /// - `Err(AppError::NotFound)` - The host has no image with that public id
    pub async fn delete(&self, public_id: &str) -> Result<(), AppError> {
        if !self.media.delete(public_id).await? {
            return Err(AppError::NotFound("Image not found".to_string()));
        }

        tracing::info!("Deleted image {}", public_id);

        Ok(())
    }

    /// Queries the media host and returns its account name and usage.
    pub async fn status(&self) -> Result<(String, MediaUsage), AppError> {
        let usage = self.media.usage().await?;

        Ok((self.media.cloud_name().to_string(), usage))
    }
}
