use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        upload::{MediaStatusDto, UploadedImageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::media::{ImageUpload, UploadPreset, UploadedImage},
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field carrying the file on single-image routes.
const SINGLE_FIELD: &str = "image";
/// Multipart field carrying the files on the multiple-image route.
const MULTIPLE_FIELD: &str = "images";

/// Reads every file sent under `field`, skipping other parts.
async fn read_images(multipart: &mut Multipart, field: &str) -> Result<Vec<ImageUpload>, AppError> {
    let mut images = Vec::new();

    while let Some(part) = multipart.next_field().await? {
        if part.name() != Some(field) {
            continue;
        }

        let file_name = part.file_name().unwrap_or("upload").to_string();
        let content_type = part
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = part.bytes().await?;

        if bytes.is_empty() {
            continue;
        }

        images.push(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Ok(images)
}

async fn read_single_image(multipart: &mut Multipart) -> Result<ImageUpload, AppError> {
    read_images(multipart, SINGLE_FIELD)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))
}

/// Upload a game cover image.
///
/// Stored under `gamestore/games`, limited to 800x1000, at most 10 MB.
///
/// # Access Control
/// - `Admin` - Only admins can upload game images
#[utoipa::path(
    post,
    path = "/api/upload/game-image",
    tag = UPLOAD_TAG,
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Image file in the `image` field"),
    responses(
        (status = 200, description = "Image uploaded successfully", body = UploadedImageDto),
        (status = 400, description = "No file, not an image, or too large", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Media host error", body = ErrorDto)
    ),
)]
pub async fn upload_game_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let image = read_single_image(&mut multipart).await?;
    let uploaded = UploadService::new(state.media.as_ref())
        .upload_one(image, UploadPreset::GAME_IMAGE)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(uploaded.into_dto()).with_message("Image uploaded successfully")),
    ))
}

/// Upload a profile picture for the signed-in user.
///
/// Stored under `gamestore/profiles`, cropped to 500x500 around a face, at most 5 MB.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/upload/profile-image",
    tag = UPLOAD_TAG,
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Image file in the `image` field"),
    responses(
        (status = 200, description = "Profile image uploaded successfully", body = UploadedImageDto),
        (status = 400, description = "No file, not an image, or too large", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Media host error", body = ErrorDto)
    ),
)]
pub async fn upload_profile_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let image = read_single_image(&mut multipart).await?;
    let uploaded = UploadService::new(state.media.as_ref())
        .upload_one(image, UploadPreset::PROFILE_IMAGE)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(uploaded.into_dto())
                .with_message("Profile image uploaded successfully"),
        ),
    ))
}

/// Upload up to five game images at once.
///
/// Every file is validated before any is stored.
///
/// # Access Control
/// - `Admin` - Only admins can upload game images
#[utoipa::path(
    post,
    path = "/api/upload/multiple",
    tag = UPLOAD_TAG,
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Up to five image files in the `images` field"),
    responses(
        (status = 200, description = "Images uploaded successfully", body = Vec<UploadedImageDto>),
        (status = 400, description = "No files, too many files, not an image, or too large", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Media host error", body = ErrorDto)
    ),
)]
pub async fn upload_multiple_images(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let images = read_images(&mut multipart, MULTIPLE_FIELD).await?;
    if images.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    let uploaded = UploadService::new(state.media.as_ref())
        .upload_many(images, UploadPreset::GAME_IMAGE)
        .await?;

    let message = format!("{} images uploaded successfully", uploaded.len());
    let dtos: Vec<_> = uploaded.into_iter().map(UploadedImage::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(dtos).with_message(message)),
    ))
}

/// Delete a stored image by public id.
///
/// Public ids contain slashes, so clients send them percent-encoded as one path segment.
///
/// # Access Control
/// - `Admin` - Only admins can delete images
#[utoipa::path(
    delete,
    path = "/api/upload/{public_id}",
    tag = UPLOAD_TAG,
    security(("bearer_auth" = [])),
    params(("public_id" = String, Path, description = "Percent-encoded public id")),
    responses(
        (status = 200, description = "Image deleted successfully", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Media host error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(public_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UploadService::new(state.media.as_ref())
        .delete(&public_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Image deleted successfully"))))
}

/// Check connectivity to the media host.
///
/// Reports the account plan with storage and bandwidth usage in megabytes.
#[utoipa::path(
    get,
    path = "/api/upload/test",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Cloudinary connection successful", body = MediaStatusDto),
        (status = 500, description = "Media host unreachable or misconfigured", body = ErrorDto)
    ),
)]
pub async fn test_connection(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (cloud_name, usage) = UploadService::new(state.media.as_ref()).status().await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(usage.into_dto(cloud_name))
                .with_message("Cloudinary connection successful"),
        ),
    ))
}
