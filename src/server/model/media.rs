//! Image upload models and per-route upload presets.

use crate::{
    model::upload::{MediaStatusDto, MediaUsageFiguresDto, UploadedImageDto},
    server::error::AppError,
};

/// Maximum number of files accepted by the multiple-image route.
pub const MAX_MULTIPLE_FILES: usize = 5;

const MEGABYTE: u64 = 1024 * 1024;

/// Raster formats accepted on every upload route. SVG is excluded since it can carry script.
pub const IMAGE_FORMATS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Destination folder, server-side transformation, size cap, and accepted formats for one
/// upload route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadPreset {
    pub folder: &'static str,
    pub transformation: &'static str,
    pub max_bytes: u64,
    /// Also sent to the media host, which rejects files decoding to any other format.
    pub allowed_formats: &'static [&'static str],
}

impl UploadPreset {
    pub const GAME_IMAGE: UploadPreset = UploadPreset {
        folder: "gamestore/games",
        transformation: "c_limit,w_800,h_1000/q_auto/f_auto",
        max_bytes: 10 * MEGABYTE,
        allowed_formats: IMAGE_FORMATS,
    };

    pub const PROFILE_IMAGE: UploadPreset = UploadPreset {
        folder: "gamestore/profiles",
        transformation: "c_fill,g_face,w_500,h_500/q_auto/f_auto",
        max_bytes: 5 * MEGABYTE,
        allowed_formats: IMAGE_FORMATS,
    };
}

/// Image file read from a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Image subtype of the declared content type, e.g. `png` for `image/png; q=1`.
    fn image_format(&self) -> Option<String> {
        let essence = self.content_type.split(';').next()?.trim().to_ascii_lowercase();
        essence.strip_prefix("image/").map(str::to_string)
    }

    /// Checks the file is an image in one of the preset's formats and within its size cap.
    pub fn validate(&self, preset: &UploadPreset) -> Result<(), AppError> {
        let Some(format) = self.image_format() else {
            return Err(AppError::BadRequest(
                "Not an image! Please upload an image file.".to_string(),
            ));
        };
        if !preset.allowed_formats.contains(&format.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Image format {} is not allowed. Allowed formats: {}",
                format,
                preset.allowed_formats.join(", ")
            )));
        }
        if self.size() > preset.max_bytes {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} MB",
                preset.max_bytes / MEGABYTE
            )));
        }
        Ok(())
    }
}

/// Image stored by the media host.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
    pub original_name: String,
    pub size: u64,
    pub format: Option<String>,
}

impl UploadedImage {
    pub fn into_dto(self) -> UploadedImageDto {
        UploadedImageDto {
            url: self.url,
            public_id: self.public_id,
            original_name: self.original_name,
            size: self.size,
            format: self.format,
        }
    }
}

/// Account plan and usage figures reported by the media host, in bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUsage {
    pub plan: String,
    pub storage_bytes: f64,
    pub bandwidth_bytes: f64,
}

impl MediaUsage {
    pub fn into_dto(self, cloud_name: String) -> MediaStatusDto {
        MediaStatusDto {
            cloud_name,
            plan: self.plan,
            usage: MediaUsageFiguresDto {
                storage: format_megabytes(self.storage_bytes),
                bandwidth: format_megabytes(self.bandwidth_bytes),
            },
        }
    }
}

fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / MEGABYTE as f64)
}
